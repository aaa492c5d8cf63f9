// Integration tests for the license lookup: write-once keys, exact-match
// reads, and independence from the command queue.

use courier_store::{db, migrations, CommandRepo, LicenseRepo};
use rusqlite::Connection;

fn setup_store() -> Connection {
    let mut conn = db::open_in_memory().expect("open in-memory store");
    migrations::apply_migrations(&mut conn).expect("apply migrations");
    conn
}

#[test]
fn test_add_and_lookup_license() {
    let conn = setup_store();

    let id = LicenseRepo::add(&conn, "5f0c3a1e", "LIC-2024-0001").unwrap();
    assert!(id > 0);

    let license = LicenseRepo::get_by_uuid(&conn, "5f0c3a1e").unwrap().unwrap();
    assert_eq!(license.id, id);
    assert_eq!(license.license_number, "LIC-2024-0001");
}

#[test]
fn test_unknown_uuid_is_none_not_error() {
    let conn = setup_store();

    let license = LicenseRepo::get_by_uuid(&conn, "missing").unwrap();
    assert!(license.is_none());
}

#[test]
fn test_duplicate_uuid_is_rejected_and_original_unchanged() {
    let conn = setup_store();

    LicenseRepo::add(&conn, "5f0c3a1e", "LIC-2024-0001").unwrap();

    let err = LicenseRepo::add(&conn, "5f0c3a1e", "LIC-2024-0002").unwrap_err();
    assert_eq!(err.code(), "ERR_DUPLICATE_LICENSE");

    // The first record is untouched
    let license = LicenseRepo::get_by_uuid(&conn, "5f0c3a1e").unwrap().unwrap();
    assert_eq!(license.license_number, "LIC-2024-0001");
    assert_eq!(LicenseRepo::list_all(&conn).unwrap().len(), 1);
}

#[test]
fn test_add_validates_inputs() {
    let conn = setup_store();

    let err = LicenseRepo::add(&conn, "", "LIC-2024-0001").unwrap_err();
    assert_eq!(err.code(), "ERR_INVALID_LICENSE_UUID");

    let err = LicenseRepo::add(&conn, "5f0c3a1e", "  ").unwrap_err();
    assert_eq!(err.code(), "ERR_INVALID_LICENSE_NUMBER");

    assert!(LicenseRepo::list_all(&conn).unwrap().is_empty());
}

#[test]
fn test_list_all_is_newest_first() {
    let conn = setup_store();

    let first = LicenseRepo::add(&conn, "uuid-a", "LIC-A").unwrap();
    let second = LicenseRepo::add(&conn, "uuid-b", "LIC-B").unwrap();

    let licenses = LicenseRepo::list_all(&conn).unwrap();
    let ids: Vec<i64> = licenses.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn test_licenses_do_not_interact_with_the_queue() {
    let mut conn = setup_store();

    LicenseRepo::add(&conn, "5f0c3a1e", "LIC-2024-0001").unwrap();

    // The queue is still empty; the license row is invisible to it
    assert!(CommandRepo::claim_next(&mut conn, "device-001").unwrap().is_none());
    assert!(CommandRepo::list_all(&conn).unwrap().is_empty());
}
