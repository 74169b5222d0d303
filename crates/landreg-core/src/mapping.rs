//! Scalar mapping between [`LandDetails`] and [`CompleteLandDetailsDto`]
//!
//! Only the nine scalar fields cross over. The nested sequences are the
//! aggregation service's business; `to_transfer` leaves them unset and
//! `to_domain` ignores them.

use crate::dto::CompleteLandDetailsDto;
use crate::model::LandDetails;

/// Map a persisted record to a transfer object with unset sequences
pub fn to_transfer(details: &LandDetails) -> CompleteLandDetailsDto {
    CompleteLandDetailsDto {
        id: details.id,
        account_number: details.account_number.clone(),
        account_holder: details.account_holder.clone(),
        date_created: details.date_created,
        ifsc_code: details.ifsc_code.clone(),
        swift_code: details.swift_code.clone(),
        bank: details.bank.clone(),
        branch: details.branch.clone(),
        membership_number: details.membership_number.clone(),
        land_owners: None,
        property_details: None,
        witnesses: None,
    }
}

/// Map the scalar fields of a transfer object to a record
pub fn to_domain(dto: &CompleteLandDetailsDto) -> LandDetails {
    LandDetails {
        id: dto.id,
        account_number: dto.account_number.clone(),
        account_holder: dto.account_holder.clone(),
        date_created: dto.date_created,
        ifsc_code: dto.ifsc_code.clone(),
        swift_code: dto.swift_code.clone(),
        bank: dto.bank.clone(),
        branch: dto.branch.clone(),
        membership_number: dto.membership_number.clone(),
    }
}
