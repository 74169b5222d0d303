mod common;

use common::{aggregate, new_service, new_service_with, sample_details, FailOn, FaultyRegistry};
use landreg_core::gateway::{Gateway, LandDetailsScoped};
use landreg_core::mapping;
use landreg_core::{
    LandDetails, LandDetailsLandOwner, LandDetailsService, LandOwner, PropertyDetails,
    ServiceOptions, Witness,
};

fn cascading() -> ServiceOptions {
    ServiceOptions {
        cascade_delete: true,
        ..ServiceOptions::default()
    }
}

// ===== UPDATE =====

#[test]
fn test_update_missing_record_returns_none_and_writes_nothing() {
    let mut service = new_service();
    service.save(sample_details()).unwrap();
    let before = Gateway::<LandDetails>::find_all(service.registry()).unwrap();

    let result = service
        .update(999_999, &mapping::to_domain(&sample_details()))
        .unwrap();

    assert!(result.is_none());
    assert_eq!(Gateway::<LandDetails>::find_all(service.registry()).unwrap(), before);
}

#[test]
fn test_update_overwrites_every_scalar() {
    let mut service = new_service();
    let saved = service.save(sample_details()).unwrap();
    let id = saved.id.unwrap();
    let incoming = LandDetails {
        bank: Some("Indian Bank".to_string()),
        ..LandDetails::default()
    };

    let updated = service.update(id, &incoming).unwrap().unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.bank.as_deref(), Some("Indian Bank"));
    assert_eq!(updated.account_number, None);
    assert_eq!(updated.membership_number, None);
    assert_eq!(
        Gateway::<LandDetails>::find_by_id(service.registry(), id).unwrap(),
        Some(updated)
    );
}

#[test]
fn test_update_ignores_incoming_identity() {
    let mut service = new_service();
    let first = service.save(sample_details()).unwrap();
    let second = service.save(sample_details()).unwrap();
    let incoming = LandDetails {
        id: second.id,
        branch: Some("Madurai".to_string()),
        ..LandDetails::default()
    };

    service.update(first.id.unwrap(), &incoming).unwrap();

    let untouched = Gateway::<LandDetails>::find_by_id(service.registry(), second.id.unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(untouched.branch.as_deref(), Some("Thanjavur Main"));
}

#[test]
fn test_update_leaves_children_alone() {
    let mut service = new_service_with(ServiceOptions {
        hydrate_children_on_find_by_id: true,
        ..ServiceOptions::default()
    });
    let saved = service.save(aggregate(2, 1, 1)).unwrap();
    let id = saved.id.unwrap();

    service.update(id, &LandDetails::default()).unwrap();

    let found = service.find_by_id(id).unwrap().unwrap();
    assert_eq!(found.land_owners(), saved.land_owners());
    assert_eq!(found.property_details(), saved.property_details());
    assert_eq!(found.witnesses(), saved.witnesses());
}

// ===== DELETE =====

#[test]
fn test_delete_existing_record() {
    let mut service = new_service();
    let id = service.save(sample_details()).unwrap().id.unwrap();

    assert!(service.delete(id).unwrap());
    assert!(!Gateway::<LandDetails>::exists_by_id(service.registry(), id).unwrap());
    assert!(service.find_by_id(id).unwrap().is_none());
}

#[test]
fn test_delete_missing_record_returns_false() {
    let mut service = new_service();
    let id = service.save(sample_details()).unwrap().id.unwrap();

    assert!(!service.delete(id + 1).unwrap());
    assert!(Gateway::<LandDetails>::exists_by_id(service.registry(), id).unwrap());
}

#[test]
fn test_delete_twice_reports_false_the_second_time() {
    let mut service = new_service();
    let id = service.save(sample_details()).unwrap().id.unwrap();

    assert!(service.delete(id).unwrap());
    assert!(!service.delete(id).unwrap());
}

#[test]
fn test_delete_without_cascade_leaves_dependent_rows() {
    let mut service = new_service();
    let id = service.save(aggregate(2, 1, 1)).unwrap().id.unwrap();

    service.delete(id).unwrap();

    let registry = service.registry();
    assert_eq!(
        LandDetailsScoped::<LandDetailsLandOwner>::find_by_land_details_id(registry, id)
            .unwrap()
            .len(),
        2
    );
    assert_eq!(
        LandDetailsScoped::<PropertyDetails>::find_by_land_details_id(registry, id)
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        LandDetailsScoped::<Witness>::find_by_land_details_id(registry, id)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_new_record_does_not_inherit_orphaned_rows() {
    let mut service = new_service();
    let id = service.save(aggregate(1, 1, 1)).unwrap().id.unwrap();
    service.delete(id).unwrap();

    let next = service.save(sample_details()).unwrap();

    assert_ne!(next.id, Some(id));
    let found = service.find_all().unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].land_owners().is_empty());
    assert!(found[0].property_details().is_empty());
}

#[test]
fn test_cascade_delete_removes_dependent_rows_but_keeps_owners() {
    let mut service = new_service_with(cascading());
    let id = service.save(aggregate(2, 2, 1)).unwrap().id.unwrap();
    let kept = service.save(aggregate(1, 1, 1)).unwrap();

    assert!(service.delete(id).unwrap());

    let registry = service.registry();
    assert!(
        LandDetailsScoped::<LandDetailsLandOwner>::find_by_land_details_id(registry, id)
            .unwrap()
            .is_empty()
    );
    assert!(
        LandDetailsScoped::<PropertyDetails>::find_by_land_details_id(registry, id)
            .unwrap()
            .is_empty()
    );
    assert!(LandDetailsScoped::<Witness>::find_by_land_details_id(registry, id)
        .unwrap()
        .is_empty());
    assert_eq!(Gateway::<LandOwner>::find_all(registry).unwrap().len(), 3);

    let remaining = service.find_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].land_owners(), kept.land_owners());
}

#[test]
fn test_failed_cascade_delete_is_rolled_back() {
    let mut service =
        LandDetailsService::with_options(FaultyRegistry::new(FailOn::Nothing), cascading());
    let id = service.save(aggregate(1, 1, 1)).unwrap().id.unwrap();

    service.registry_mut().fail_on = FailOn::WitnessDelete;
    assert!(service.delete(id).is_err());

    let registry = &service.registry().inner;
    assert!(Gateway::<LandDetails>::exists_by_id(registry, id).unwrap());
    assert_eq!(
        LandDetailsScoped::<LandDetailsLandOwner>::find_by_land_details_id(registry, id)
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        LandDetailsScoped::<PropertyDetails>::find_by_land_details_id(registry, id)
            .unwrap()
            .len(),
        1
    );
}
