//! CLI seed integration tests
//!
//! Runs the built binary against a temp store and verifies the seeded rows
//! through the store crate.

use std::process::Command;
use tempfile::TempDir;

#[test]
fn test_seed_populates_store() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("store.db");

    let cli_bin = env!("CARGO_BIN_EXE_courier");
    let output = Command::new(cli_bin)
        .args(["seed", "--db"])
        .arg(&db_path)
        .output()
        .expect("run courier seed");

    assert!(
        output.status.success(),
        "seed failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let conn = courier_store::db::open(&db_path).unwrap();
    let commands = courier_store::CommandRepo::list_all(&conn).unwrap();
    assert_eq!(commands.len(), 7);
    assert!(commands.iter().all(|c| c.is_pending()));

    let licenses = courier_store::LicenseRepo::list_all(&conn).unwrap();
    assert_eq!(licenses.len(), 1);
    assert_eq!(licenses[0].license_number, "LIC-2024-0001");
}

#[test]
fn test_seed_is_repeatable() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("store.db");
    let cli_bin = env!("CARGO_BIN_EXE_courier");

    for _ in 0..2 {
        let output = Command::new(cli_bin)
            .args(["seed", "--db"])
            .arg(&db_path)
            .output()
            .expect("run courier seed");
        assert!(output.status.success());
    }

    // Commands accumulate (no deduplication); each run stores a fresh license
    let conn = courier_store::db::open(&db_path).unwrap();
    assert_eq!(courier_store::CommandRepo::list_all(&conn).unwrap().len(), 14);
    assert_eq!(courier_store::LicenseRepo::list_all(&conn).unwrap().len(), 2);
}
