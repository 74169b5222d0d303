use serde::{Deserialize, Serialize};

use super::EntityId;

/// One membership edge between a land-details record and an owner
///
/// Rows are only ever created during a land-details save, after the owner
/// they point at has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandDetailsLandOwner {
    pub id: Option<EntityId>,
    pub land_details_id: EntityId,
    pub land_owner_id: EntityId,
}

impl LandDetailsLandOwner {
    /// Create an unsaved link row
    pub fn new(land_details_id: EntityId, land_owner_id: EntityId) -> Self {
        Self {
            id: None,
            land_details_id,
            land_owner_id,
        }
    }
}
