// The aggregation service running over SQLite

use landreg_core::gateway::{Gateway, LandDetailsScoped};
use landreg_core::{
    CompleteLandDetailsDto, LandDetails, LandDetailsService, LandOwner, PropertyDetails,
    ServiceOptions, Witness,
};
use landreg_store::SqliteRegistry;
use rusqlite::Connection;
use std::time::Duration;

fn service_with(options: ServiceOptions) -> LandDetailsService<SqliteRegistry> {
    LandDetailsService::with_options(SqliteRegistry::open_in_memory().unwrap(), options)
}

fn aggregate() -> CompleteLandDetailsDto {
    CompleteLandDetailsDto {
        account_number: Some("31224455667".to_string()),
        account_holder: Some("Lakshmi Narayanan".to_string()),
        bank: Some("State Bank of India".to_string()),
        land_owners: Some(vec![
            LandOwner::named("Gopal Krishnan"),
            LandOwner::named("Meena Gopal"),
        ]),
        property_details: Some(vec![PropertyDetails::with_survey_number("SY-118/2")]),
        witnesses: Some(vec![Witness::named("S. Ramesh")]),
        ..CompleteLandDetailsDto::default()
    }
}

#[test]
fn test_save_then_find_all_over_sqlite() {
    let mut service = service_with(ServiceOptions::default());

    let saved = service.save(aggregate()).unwrap();
    let all = service.find_all().unwrap();

    assert_eq!(all.len(), 1);
    assert_eq!(all[0], saved);
    assert_eq!(all[0].land_owners().len(), 2);
    assert_eq!(all[0].property_details()[0].land_details_id, saved.id);
}

#[test]
fn test_find_by_id_over_sqlite_attaches_owners_only() {
    let mut service = service_with(ServiceOptions::default());
    let id = service.save(aggregate()).unwrap().id.unwrap();

    let found = service.find_by_id(id).unwrap().unwrap();

    assert_eq!(found.land_owners().len(), 2);
    assert!(found.property_details.is_none());
    assert!(found.witnesses.is_none());
}

#[test]
fn test_failed_save_rolls_back_sqlite_writes() {
    let mut service = service_with(ServiceOptions::default());
    service
        .registry()
        .connection()
        .execute_batch("DROP TABLE witnesses")
        .unwrap();

    assert!(service.save(aggregate()).is_err());

    let registry = service.registry();
    assert!(!registry.in_transaction_scope());
    assert!(Gateway::<LandDetails>::find_all(registry).unwrap().is_empty());
    assert!(Gateway::<LandOwner>::find_all(registry).unwrap().is_empty());
}

#[test]
fn test_update_and_cascade_delete_over_sqlite() {
    let mut service = service_with(ServiceOptions {
        cascade_delete: true,
        ..ServiceOptions::default()
    });
    let id = service.save(aggregate()).unwrap().id.unwrap();

    let updated = service
        .update(
            id,
            &LandDetails {
                branch: Some("Srirangam".to_string()),
                ..LandDetails::default()
            },
        )
        .unwrap()
        .unwrap();
    assert_eq!(updated.branch.as_deref(), Some("Srirangam"));
    assert_eq!(updated.account_number, None);

    assert!(service.delete(id).unwrap());
    assert!(!service.delete(id).unwrap());

    let registry = service.registry();
    assert!(LandDetailsScoped::<Witness>::find_by_land_details_id(registry, id)
        .unwrap()
        .is_empty());
    assert_eq!(Gateway::<LandOwner>::find_all(registry).unwrap().len(), 2);
}

#[test]
fn test_update_missing_id_over_sqlite() {
    let mut service = service_with(ServiceOptions::default());
    assert!(service
        .update(999_999, &LandDetails::default())
        .unwrap()
        .is_none());
}

#[test]
fn test_failed_commit_rolls_back_and_registry_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.db");

    // Rollback journal (no WAL) and no busy wait, so a reader blocks COMMIT
    let conn = Connection::open(&path).unwrap();
    conn.busy_timeout(Duration::ZERO).unwrap();
    let mut service = LandDetailsService::new(SqliteRegistry::from_connection(conn).unwrap());

    let reader = Connection::open(&path).unwrap();
    reader.execute_batch("BEGIN").unwrap();
    let _: i64 = reader
        .query_row("SELECT COUNT(*) FROM land_details", [], |row| row.get(0))
        .unwrap();

    let err = service.save(aggregate()).unwrap_err();
    assert_eq!(err.code(), "ERR_PERSISTENCE");
    assert!(!service.registry().in_transaction_scope());
    assert!(Gateway::<LandDetails>::find_all(service.registry())
        .unwrap()
        .is_empty());

    reader.execute_batch("COMMIT").unwrap();

    let saved = service.save(aggregate()).unwrap();
    assert_eq!(service.find_all().unwrap(), vec![saved]);
}
