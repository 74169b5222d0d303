#![allow(dead_code)]

use chrono::NaiveDate;
use landreg_core::errors::{ExError, ExErrorKind, Result};
use landreg_core::gateway::{Gateway, LandDetailsScoped, Transactional};
use landreg_core::model::EntityId;
use landreg_core::{
    CompleteLandDetailsDto, LandDetails, LandDetailsLandOwner, LandOwner, LandDetailsService,
    MemoryRegistry, PropertyDetails, ServiceOptions, Witness,
};

/// Service over an empty in-memory registry
pub fn new_service() -> LandDetailsService<MemoryRegistry> {
    LandDetailsService::new(MemoryRegistry::new())
}

pub fn new_service_with(options: ServiceOptions) -> LandDetailsService<MemoryRegistry> {
    LandDetailsService::with_options(MemoryRegistry::new(), options)
}

/// Scalar fields of a typical registration
pub fn sample_details() -> CompleteLandDetailsDto {
    CompleteLandDetailsDto {
        account_number: Some("31224455667".to_string()),
        account_holder: Some("Lakshmi Narayanan".to_string()),
        date_created: NaiveDate::from_ymd_opt(2024, 6, 1),
        ifsc_code: Some("SBIN0001234".to_string()),
        swift_code: Some("SBININBB".to_string()),
        bank: Some("State Bank of India".to_string()),
        branch: Some("Thanjavur Main".to_string()),
        membership_number: Some("AKS-1187".to_string()),
        ..Default::default()
    }
}

/// A registration with `owners` owners, `parcels` parcels and `witnesses` witnesses
pub fn aggregate(owners: usize, parcels: usize, witnesses: usize) -> CompleteLandDetailsDto {
    CompleteLandDetailsDto {
        land_owners: Some(
            (0..owners)
                .map(|i| LandOwner::named(format!("Owner {}", i)))
                .collect(),
        ),
        property_details: Some(
            (0..parcels)
                .map(|i| PropertyDetails {
                    area_sq_m: Some(400.0 + i as f64),
                    ..PropertyDetails::with_survey_number(format!("SY-{}", i))
                })
                .collect(),
        ),
        witnesses: Some(
            (0..witnesses)
                .map(|i| Witness::named(format!("Witness {}", i)))
                .collect(),
        ),
        ..sample_details()
    }
}

/// Which gateway write (or commit) should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Nothing,
    OwnerLinkSave,
    WitnessSave,
    WitnessDelete,
    Commit,
}

/// Wraps a [`MemoryRegistry`] and fails one kind of write on demand
pub struct FaultyRegistry {
    pub inner: MemoryRegistry,
    pub fail_on: FailOn,
}

impl FaultyRegistry {
    pub fn new(fail_on: FailOn) -> Self {
        Self {
            inner: MemoryRegistry::new(),
            fail_on,
        }
    }

    fn injected(&self, point: FailOn, op: &str) -> Result<()> {
        if self.fail_on == point {
            return Err(ExError::new(ExErrorKind::Persistence)
                .with_op(op.to_string())
                .with_message("injected failure"));
        }
        Ok(())
    }
}

macro_rules! delegate_gateway {
    ($entity:ty, save: $save_fault:expr, delete: $delete_fault:expr) => {
        impl Gateway<$entity> for FaultyRegistry {
            fn save(&mut self, entity: $entity) -> Result<$entity> {
                self.injected($save_fault, "save")?;
                Gateway::<$entity>::save(&mut self.inner, entity)
            }

            fn find_by_id(&self, id: EntityId) -> Result<Option<$entity>> {
                Gateway::<$entity>::find_by_id(&self.inner, id)
            }

            fn find_all(&self) -> Result<Vec<$entity>> {
                Gateway::<$entity>::find_all(&self.inner)
            }

            fn exists_by_id(&self, id: EntityId) -> Result<bool> {
                Gateway::<$entity>::exists_by_id(&self.inner, id)
            }

            fn delete_by_id(&mut self, id: EntityId) -> Result<()> {
                self.injected($delete_fault, "delete_by_id")?;
                Gateway::<$entity>::delete_by_id(&mut self.inner, id)
            }
        }
    };
}

macro_rules! delegate_scoped {
    ($entity:ty) => {
        impl LandDetailsScoped<$entity> for FaultyRegistry {
            fn find_by_land_details_id(&self, land_details_id: EntityId) -> Result<Vec<$entity>> {
                LandDetailsScoped::<$entity>::find_by_land_details_id(&self.inner, land_details_id)
            }
        }
    };
}

delegate_gateway!(LandDetails, save: FailOn::Nothing, delete: FailOn::Nothing);
delegate_gateway!(LandOwner, save: FailOn::Nothing, delete: FailOn::Nothing);
delegate_gateway!(LandDetailsLandOwner, save: FailOn::OwnerLinkSave, delete: FailOn::Nothing);
delegate_gateway!(PropertyDetails, save: FailOn::Nothing, delete: FailOn::Nothing);
delegate_gateway!(Witness, save: FailOn::WitnessSave, delete: FailOn::WitnessDelete);
delegate_scoped!(LandDetailsLandOwner);
delegate_scoped!(PropertyDetails);
delegate_scoped!(Witness);

impl Transactional for FaultyRegistry {
    fn begin(&mut self) -> Result<()> {
        self.inner.begin()
    }

    fn commit(&mut self) -> Result<()> {
        self.injected(FailOn::Commit, "commit")?;
        self.inner.commit()
    }

    fn rollback(&mut self) -> Result<()> {
        self.inner.rollback()
    }
}
