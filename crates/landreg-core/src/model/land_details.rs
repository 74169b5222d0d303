use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EntityId;

/// LandDetails - one land-transaction registration
///
/// Carries the bank account the registration is settled against and the
/// holder's society membership number. Owners, parcels and witnesses live in
/// their own stores and reference this record by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandDetails {
    /// Identity assigned on first save; `None` until persisted
    pub id: Option<EntityId>,
    pub account_number: Option<String>,
    pub account_holder: Option<String>,
    pub date_created: Option<NaiveDate>,
    pub ifsc_code: Option<String>,
    pub swift_code: Option<String>,
    pub bank: Option<String>,
    pub branch: Option<String>,
    pub membership_number: Option<String>,
}

impl LandDetails {
    /// Overwrite every scalar field with the incoming values, keeping identity
    ///
    /// Absent incoming values clear the field; there is no merge.
    pub fn overwrite_scalars(&mut self, incoming: &LandDetails) {
        self.account_number = incoming.account_number.clone();
        self.account_holder = incoming.account_holder.clone();
        self.date_created = incoming.date_created;
        self.ifsc_code = incoming.ifsc_code.clone();
        self.swift_code = incoming.swift_code.clone();
        self.bank = incoming.bank.clone();
        self.branch = incoming.branch.clone();
        self.membership_number = incoming.membership_number.clone();
    }
}
