use serde::{Deserialize, Serialize};

use super::EntityId;

/// An owner, persisted independently and linked to land details through
/// [`LandDetailsLandOwner`](super::LandDetailsLandOwner) rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandOwner {
    pub id: Option<EntityId>,
    pub name: Option<String>,
    pub guardian_name: Option<String>,
    pub phone_number: Option<String>,
    pub id_document_number: Option<String>,
    pub address: Option<String>,
}

impl LandOwner {
    /// Create an unsaved owner with just a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}
