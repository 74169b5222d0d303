//! Persistence gateway contracts consumed by the aggregation service
//!
//! One [`Gateway`] per entity, plus [`LandDetailsScoped`] for the three stores
//! that are looked up by owning land-details id. A single backing type (the
//! in-memory registry, the SQLite registry) implements all of them, so the
//! service calls are written with the entity type spelled out:
//!
//! ```ignore
//! let owner = Gateway::<LandOwner>::find_by_id(&registry, 4)?;
//! ```

use crate::errors::{ExError, Result};
use crate::model::{
    EntityId, LandDetails, LandDetailsLandOwner, LandOwner, PropertyDetails, Witness,
};

/// Per-entity persistence contract
pub trait Gateway<E> {
    /// Insert when the entity has no identity, otherwise update by identity
    ///
    /// Returns the stored entity with its identity populated.
    fn save(&mut self, entity: E) -> Result<E>;

    fn find_by_id(&self, id: EntityId) -> Result<Option<E>>;

    /// All stored entities, ordered by identity
    fn find_all(&self) -> Result<Vec<E>>;

    fn exists_by_id(&self, id: EntityId) -> Result<bool>;

    /// Delete by identity; deleting a missing identity is not an error
    fn delete_by_id(&mut self, id: EntityId) -> Result<()>;
}

/// Lookup by owning land-details id
pub trait LandDetailsScoped<E>: Gateway<E> {
    /// Rows referencing `land_details_id`, ordered by their own identity
    fn find_by_land_details_id(&self, land_details_id: EntityId) -> Result<Vec<E>>;
}

/// Explicit transaction boundary over a set of gateways
pub trait Transactional {
    fn begin(&mut self) -> Result<()>;

    fn commit(&mut self) -> Result<()>;

    fn rollback(&mut self) -> Result<()>;

    /// Run `f` inside a transaction
    ///
    /// Commits when `f` succeeds. When `f` or the commit fails the
    /// transaction is rolled back and that error is returned; a failing
    /// rollback is attached as its source.
    fn in_transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.begin()?;
        let err = match f(self) {
            Ok(value) => match self.commit() {
                Ok(()) => return Ok(value),
                Err(commit_err) => commit_err,
            },
            Err(err) => err,
        };
        match self.rollback() {
            Ok(()) => Err(err),
            Err(rollback_err) => Err(attach_rollback_failure(err, rollback_err)),
        }
    }
}

fn attach_rollback_failure(err: ExError, rollback_err: ExError) -> ExError {
    tracing::error!(
        component = module_path!(),
        op = "rollback",
        err_code = rollback_err.code(),
        "rollback failed after aborted transaction"
    );
    err.with_source(rollback_err)
}

/// Everything the aggregation service needs from persistence
pub trait Registry:
    Gateway<LandDetails>
    + Gateway<LandOwner>
    + LandDetailsScoped<LandDetailsLandOwner>
    + LandDetailsScoped<PropertyDetails>
    + LandDetailsScoped<Witness>
    + Transactional
{
}

impl<T> Registry for T where
    T: Gateway<LandDetails>
        + Gateway<LandOwner>
        + LandDetailsScoped<LandDetailsLandOwner>
        + LandDetailsScoped<PropertyDetails>
        + LandDetailsScoped<Witness>
        + Transactional
{
}
