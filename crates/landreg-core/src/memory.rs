//! In-memory registry
//!
//! A BTreeMap-backed implementation of every gateway, used by tests and by
//! hosts that do not need durability. Not thread-safe; designed for the same
//! single-threaded, per-request use as the service itself.
//!
//! Identities come from a per-table counter that never goes backwards, so a
//! deleted record's id is not handed out again.

use std::collections::BTreeMap;

use crate::errors::{RegistryError, Result};
use crate::gateway::{Gateway, LandDetailsScoped, Transactional};
use crate::model::{
    EntityId, Identified, LandDetails, LandDetailsChild, LandDetailsLandOwner, LandOwner,
    PropertyDetails, Witness,
};

#[derive(Debug, Clone)]
struct Table<E> {
    rows: BTreeMap<EntityId, E>,
    last_id: EntityId,
}

impl<E> Default for Table<E> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<E: Identified + Clone> Table<E> {
    fn save(&mut self, mut entity: E) -> Result<E> {
        let id = match entity.id() {
            Some(id) => id,
            None => self
                .last_id
                .checked_add(1)
                .ok_or(RegistryError::IdentityExhausted)?,
        };
        self.last_id = self.last_id.max(id);
        entity.set_id(id);
        self.rows.insert(id, entity.clone());
        Ok(entity)
    }

    fn find_by_id(&self, id: EntityId) -> Option<E> {
        self.rows.get(&id).cloned()
    }

    fn find_all(&self) -> Vec<E> {
        self.rows.values().cloned().collect()
    }

    fn contains(&self, id: EntityId) -> bool {
        self.rows.contains_key(&id)
    }

    fn remove(&mut self, id: EntityId) {
        self.rows.remove(&id);
    }
}

impl<E: Identified + LandDetailsChild + Clone> Table<E> {
    fn find_by_land_details_id(&self, land_details_id: EntityId) -> Vec<E> {
        self.rows
            .values()
            .filter(|row| row.land_details_id() == Some(land_details_id))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
struct Tables {
    land_details: Table<LandDetails>,
    land_owners: Table<LandOwner>,
    owner_links: Table<LandDetailsLandOwner>,
    property_details: Table<PropertyDetails>,
    witnesses: Table<Witness>,
}

/// In-memory store for every land registry entity
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    tables: Tables,
    /// Copy of `tables` taken at `begin`, restored on `rollback`
    snapshot: Option<Tables>,
}

impl MemoryRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a transaction is open
    pub fn in_transaction_scope(&self) -> bool {
        self.snapshot.is_some()
    }
}

macro_rules! memory_gateway {
    ($entity:ty, $table:ident) => {
        impl Gateway<$entity> for MemoryRegistry {
            fn save(&mut self, entity: $entity) -> Result<$entity> {
                self.tables.$table.save(entity)
            }

            fn find_by_id(&self, id: EntityId) -> Result<Option<$entity>> {
                Ok(self.tables.$table.find_by_id(id))
            }

            fn find_all(&self) -> Result<Vec<$entity>> {
                Ok(self.tables.$table.find_all())
            }

            fn exists_by_id(&self, id: EntityId) -> Result<bool> {
                Ok(self.tables.$table.contains(id))
            }

            fn delete_by_id(&mut self, id: EntityId) -> Result<()> {
                self.tables.$table.remove(id);
                Ok(())
            }
        }
    };
    ($entity:ty, $table:ident, scoped) => {
        memory_gateway!($entity, $table);

        impl LandDetailsScoped<$entity> for MemoryRegistry {
            fn find_by_land_details_id(&self, land_details_id: EntityId) -> Result<Vec<$entity>> {
                Ok(self.tables.$table.find_by_land_details_id(land_details_id))
            }
        }
    };
}

memory_gateway!(LandDetails, land_details);
memory_gateway!(LandOwner, land_owners);
memory_gateway!(LandDetailsLandOwner, owner_links, scoped);
memory_gateway!(PropertyDetails, property_details, scoped);
memory_gateway!(Witness, witnesses, scoped);

impl Transactional for MemoryRegistry {
    fn begin(&mut self) -> Result<()> {
        if self.snapshot.is_some() {
            return Err(RegistryError::TransactionAlreadyActive.into());
        }
        self.snapshot = Some(self.tables.clone());
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.snapshot
            .take()
            .map(|_| ())
            .ok_or_else(|| RegistryError::NoActiveTransaction.into())
    }

    fn rollback(&mut self) -> Result<()> {
        let snapshot = self
            .snapshot
            .take()
            .ok_or(RegistryError::NoActiveTransaction)?;
        self.tables = snapshot;
        Ok(())
    }
}
