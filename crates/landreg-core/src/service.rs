//! Land-details aggregation service
//!
//! Stitches a land-details record together with its owners (through the link
//! table), parcels and witnesses, and takes such an aggregate apart again on
//! save. All persistence goes through a [`Registry`]; the service holds no
//! state of its own beyond the registry and its options.
//!
//! Writes run inside [`Transactional::in_transaction`], so a failure part-way
//! through a save leaves no land-details record without its children.

use std::time::Instant;

use landreg_core_types::Sensitive;
use serde::Deserialize;

use crate::dto::CompleteLandDetailsDto;
use crate::errors::{RegistryError, Result};
use crate::gateway::{Gateway, LandDetailsScoped, Registry, Transactional};
use crate::mapping;
use crate::model::{
    EntityId, LandDetails, LandDetailsLandOwner, LandOwner, PropertyDetails, Witness,
};
use crate::{log_op_end, log_op_error, log_op_start};

/// Behaviour switches; the defaults match the historical behaviour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceOptions {
    /// Also attach parcels and witnesses in `find_by_id` (owners are always attached)
    pub hydrate_children_on_find_by_id: bool,
    /// Remove link rows, parcels and witnesses together with the record in `delete`
    pub cascade_delete: bool,
}

/// Aggregation service over a [`Registry`]
pub struct LandDetailsService<R> {
    registry: R,
    options: ServiceOptions,
}

impl<R: Registry> LandDetailsService<R> {
    /// Create a service with default options
    pub fn new(registry: R) -> Self {
        Self::with_options(registry, ServiceOptions::default())
    }

    pub fn with_options(registry: R, options: ServiceOptions) -> Self {
        Self { registry, options }
    }

    pub fn options(&self) -> ServiceOptions {
        self.options
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    pub fn into_registry(self) -> R {
        self.registry
    }

    /// Every record, fully hydrated, in registry order
    ///
    /// # Errors
    ///
    /// Returns the first gateway fault encountered.
    pub fn find_all(&self) -> Result<Vec<CompleteLandDetailsDto>> {
        let started = Instant::now();
        log_op_start!("find_all");

        let result = self.find_all_inner();
        finish("find_all", started, &result);
        result
    }

    fn find_all_inner(&self) -> Result<Vec<CompleteLandDetailsDto>> {
        let records = Gateway::<LandDetails>::find_all(&self.registry)?;
        tracing::debug!(count = records.len(), "loaded land details records");

        let mut aggregates = Vec::with_capacity(records.len());
        for record in records {
            let land_details_id = identity_of(&record)?;
            let mut dto = mapping::to_transfer(&record);
            dto.land_owners = Some(resolve_owners(&self.registry, land_details_id)?);
            attach_children(&self.registry, land_details_id, &mut dto)?;
            aggregates.push(dto);
        }

        Ok(aggregates)
    }

    /// One record with its owners attached, or `None` when it does not exist
    ///
    /// Parcels and witnesses stay unset unless
    /// [`ServiceOptions::hydrate_children_on_find_by_id`] is on.
    ///
    /// # Errors
    ///
    /// Returns the first gateway fault encountered.
    pub fn find_by_id(&self, id: EntityId) -> Result<Option<CompleteLandDetailsDto>> {
        let started = Instant::now();
        log_op_start!("find_by_id", land_details_id = id);

        let result = self.find_by_id_inner(id);
        finish("find_by_id", started, &result);
        result
    }

    fn find_by_id_inner(&self, id: EntityId) -> Result<Option<CompleteLandDetailsDto>> {
        let Some(record) = Gateway::<LandDetails>::find_by_id(&self.registry, id)? else {
            tracing::warn!(land_details_id = id, "land details not found");
            return Ok(None);
        };

        let mut dto = mapping::to_transfer(&record);
        dto.land_owners = Some(resolve_owners(&self.registry, id)?);
        if self.options.hydrate_children_on_find_by_id {
            attach_children(&self.registry, id, &mut dto)?;
        }

        Ok(Some(dto))
    }

    /// Persist an aggregate and return what was stored
    ///
    /// The record is saved first, then every owner followed by its link row,
    /// then parcels and witnesses with the record's id stamped in. The
    /// response carries the saved entities, identities included. Unset input
    /// sequences count as empty.
    ///
    /// # Errors
    ///
    /// Any gateway fault aborts the save and rolls back everything it wrote.
    pub fn save(&mut self, dto: CompleteLandDetailsDto) -> Result<CompleteLandDetailsDto> {
        let started = Instant::now();
        log_op_start!(
            "save",
            owner_count = dto.land_owners().len(),
            parcel_count = dto.property_details().len(),
            witness_count = dto.witnesses().len()
        );

        let result = self
            .registry
            .in_transaction(|registry| save_aggregate(registry, dto));
        finish("save", started, &result);
        result
    }

    /// Overwrite the scalar fields of an existing record
    ///
    /// Every scalar is replaced, absent incoming values included. Owners,
    /// parcels and witnesses are left alone. Returns `None` without writing
    /// anything when `id` does not exist.
    ///
    /// # Errors
    ///
    /// Returns the gateway fault if the lookup or the save fails.
    pub fn update(&mut self, id: EntityId, updated: &LandDetails) -> Result<Option<LandDetails>> {
        let started = Instant::now();
        log_op_start!("update", land_details_id = id);

        let result = self.registry.in_transaction(|registry| {
            let Some(mut existing) = Gateway::<LandDetails>::find_by_id(registry, id)? else {
                tracing::warn!(land_details_id = id, "land details not found");
                return Ok(None);
            };
            existing.overwrite_scalars(updated);
            Gateway::<LandDetails>::save(registry, existing).map(Some)
        });
        finish("update", started, &result);
        result
    }

    /// Delete a record; `false` when it did not exist
    ///
    /// Without [`ServiceOptions::cascade_delete`] the record's link rows,
    /// parcels and witnesses are left in place.
    ///
    /// # Errors
    ///
    /// Returns the gateway fault if any lookup or delete fails; a cascading
    /// delete is rolled back as a whole.
    pub fn delete(&mut self, id: EntityId) -> Result<bool> {
        let started = Instant::now();
        log_op_start!("delete", land_details_id = id);

        let cascade = self.options.cascade_delete;
        let result = self.registry.in_transaction(|registry| {
            if !Gateway::<LandDetails>::exists_by_id(registry, id)? {
                tracing::warn!(land_details_id = id, "land details not found");
                return Ok(false);
            }
            if cascade {
                delete_children(registry, id)?;
            }
            Gateway::<LandDetails>::delete_by_id(registry, id)?;
            Ok(true)
        });
        finish("delete", started, &result);
        result
    }
}

fn finish<T>(op: &'static str, started: Instant, result: &Result<T>) {
    let duration_ms = started.elapsed().as_millis() as u64;
    match result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(err) => {
            log_op_error!(op, err, duration_ms = duration_ms);
        }
    }
}

fn identity_of(record: &LandDetails) -> Result<EntityId> {
    record
        .id
        .ok_or_else(|| RegistryError::MissingIdentity { entity: "LandDetails" }.into())
}

/// Owners linked to `land_details_id`, in link order
///
/// Links whose owner no longer resolves are skipped.
fn resolve_owners<R: Registry>(registry: &R, land_details_id: EntityId) -> Result<Vec<LandOwner>> {
    let links =
        LandDetailsScoped::<LandDetailsLandOwner>::find_by_land_details_id(registry, land_details_id)?;

    let mut owners = Vec::with_capacity(links.len());
    for link in links {
        match Gateway::<LandOwner>::find_by_id(registry, link.land_owner_id)? {
            Some(owner) => owners.push(owner),
            None => tracing::warn!(
                land_details_id,
                land_owner_id = link.land_owner_id,
                "skipping link to missing land owner"
            ),
        }
    }
    Ok(owners)
}

fn attach_children<R: Registry>(
    registry: &R,
    land_details_id: EntityId,
    dto: &mut CompleteLandDetailsDto,
) -> Result<()> {
    dto.property_details = Some(LandDetailsScoped::<PropertyDetails>::find_by_land_details_id(
        registry,
        land_details_id,
    )?);
    dto.witnesses = Some(LandDetailsScoped::<Witness>::find_by_land_details_id(
        registry,
        land_details_id,
    )?);
    Ok(())
}

fn save_aggregate<R: Registry>(
    registry: &mut R,
    dto: CompleteLandDetailsDto,
) -> Result<CompleteLandDetailsDto> {
    let saved = Gateway::<LandDetails>::save(registry, mapping::to_domain(&dto))?;
    let land_details_id = identity_of(&saved)?;
    tracing::debug!(
        land_details_id,
        account_number = %Sensitive::new(saved.account_number.as_deref()),
        "saved land details"
    );

    let CompleteLandDetailsDto {
        land_owners,
        property_details,
        witnesses,
        ..
    } = dto;

    let mut saved_owners = Vec::new();
    for owner in land_owners.unwrap_or_default() {
        let owner = Gateway::<LandOwner>::save(registry, owner)?;
        let land_owner_id = owner
            .id
            .ok_or(RegistryError::MissingIdentity { entity: "LandOwner" })?;
        Gateway::<LandDetailsLandOwner>::save(
            registry,
            LandDetailsLandOwner::new(land_details_id, land_owner_id),
        )?;
        tracing::debug!(land_details_id, land_owner_id, "linked land owner");
        saved_owners.push(owner);
    }

    let mut saved_parcels = Vec::new();
    for mut parcel in property_details.unwrap_or_default() {
        parcel.land_details_id = Some(land_details_id);
        saved_parcels.push(Gateway::<PropertyDetails>::save(registry, parcel)?);
    }

    let mut saved_witnesses = Vec::new();
    for mut witness in witnesses.unwrap_or_default() {
        witness.land_details_id = Some(land_details_id);
        saved_witnesses.push(Gateway::<Witness>::save(registry, witness)?);
    }

    tracing::info!(
        land_details_id,
        owner_count = saved_owners.len(),
        parcel_count = saved_parcels.len(),
        witness_count = saved_witnesses.len(),
        "saved land details aggregate"
    );

    let mut response = mapping::to_transfer(&saved);
    response.land_owners = Some(saved_owners);
    response.property_details = Some(saved_parcels);
    response.witnesses = Some(saved_witnesses);
    Ok(response)
}

fn delete_children<R: Registry>(registry: &mut R, land_details_id: EntityId) -> Result<()> {
    let links =
        LandDetailsScoped::<LandDetailsLandOwner>::find_by_land_details_id(registry, land_details_id)?;
    for id in links.into_iter().filter_map(|link| link.id) {
        Gateway::<LandDetailsLandOwner>::delete_by_id(registry, id)?;
    }

    let parcels = LandDetailsScoped::<PropertyDetails>::find_by_land_details_id(registry, land_details_id)?;
    for id in parcels.into_iter().filter_map(|parcel| parcel.id) {
        Gateway::<PropertyDetails>::delete_by_id(registry, id)?;
    }

    let witnesses = LandDetailsScoped::<Witness>::find_by_land_details_id(registry, land_details_id)?;
    for id in witnesses.into_iter().filter_map(|witness| witness.id) {
        Gateway::<Witness>::delete_by_id(registry, id)?;
    }

    tracing::debug!(land_details_id, "removed dependent rows");
    Ok(())
}
