//! Boundary-facing transfer object
//!
//! `CompleteLandDetailsDto` flattens the scalar fields of [`LandDetails`] and
//! carries the three related sequences. It is assembled by the aggregation
//! service on reads and taken apart by it on writes; nothing persists it as is.
//!
//! [`LandDetails`]: crate::model::LandDetails

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{EntityId, LandOwner, PropertyDetails, Witness};

/// A land-details record together with its owners, parcels and witnesses
///
/// The sequences are `Option` so an unset sequence (`null` on the wire) stays
/// distinguishable from an empty one. Readers that only care about contents
/// should use the slice accessors, which treat unset as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteLandDetailsDto {
    pub id: Option<EntityId>,
    pub account_number: Option<String>,
    pub account_holder: Option<String>,
    pub date_created: Option<NaiveDate>,
    pub ifsc_code: Option<String>,
    pub swift_code: Option<String>,
    pub bank: Option<String>,
    pub branch: Option<String>,
    pub membership_number: Option<String>,
    pub land_owners: Option<Vec<LandOwner>>,
    pub property_details: Option<Vec<PropertyDetails>>,
    pub witnesses: Option<Vec<Witness>>,
}

impl CompleteLandDetailsDto {
    pub fn land_owners(&self) -> &[LandOwner] {
        self.land_owners.as_deref().unwrap_or(&[])
    }

    pub fn property_details(&self) -> &[PropertyDetails] {
        self.property_details.as_deref().unwrap_or(&[])
    }

    pub fn witnesses(&self) -> &[Witness] {
        self.witnesses.as_deref().unwrap_or(&[])
    }
}
