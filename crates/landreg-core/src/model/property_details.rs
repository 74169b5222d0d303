use serde::{Deserialize, Serialize};

use super::EntityId;

/// A land parcel belonging to exactly one land-details record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetails {
    pub id: Option<EntityId>,
    /// Owning land-details id; stamped by the aggregation service before save
    pub land_details_id: Option<EntityId>,
    pub survey_number: Option<String>,
    pub village: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub area_sq_m: Option<f64>,
}

impl PropertyDetails {
    /// Create an unsaved parcel identified by its survey number
    pub fn with_survey_number(survey_number: impl Into<String>) -> Self {
        Self {
            survey_number: Some(survey_number.into()),
            ..Default::default()
        }
    }
}
