//! Seed command
//!
//! Usage: courier seed [--db <PATH>]
//!
//! Populates a store with a demo command set and one sample license, for
//! poking at the API by hand.

use clap::Args;
use std::path::PathBuf;

use courier_store::{db, migrations, CommandRepo, LicenseRepo};

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Path to the SQLite store (created if missing)
    #[arg(long, default_value = "courier.db")]
    pub db: PathBuf,
}

const DEMO_COMMANDS: &[(&str, &str)] = &[
    ("device-001", "reboot"),
    ("device-001", "update_firmware"),
    ("device-002", "restart_service"),
    ("device-003", "clear_cache"),
    ("device-002", "backup_config"),
    ("device-001", "check_status"),
    ("device-004", "sync_data"),
];

/// Execute seed command
pub fn execute(args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = db::open(&args.db)?;
    migrations::apply_migrations(&mut conn)?;

    for (device_id, payload) in DEMO_COMMANDS {
        let id = CommandRepo::enqueue(&conn, device_id, payload)?;
        println!("✓ Queued '{}' for {} (id: {})", payload, device_id, id);
    }

    let license_uuid = uuid::Uuid::new_v4().to_string();
    let license_id = LicenseRepo::add(&conn, &license_uuid, "LIC-2024-0001")?;
    println!("✓ Stored demo license (id: {}, uuid: {})", license_id, license_uuid);

    println!("Seeded store at {}", args.db.display());
    Ok(())
}
