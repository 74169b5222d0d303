use serde::{Deserialize, Serialize};

use super::EntityId;

/// A witness to a land-details registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Witness {
    pub id: Option<EntityId>,
    /// Owning land-details id; stamped by the aggregation service before save
    pub land_details_id: Option<EntityId>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

impl Witness {
    /// Create an unsaved witness with just a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}
