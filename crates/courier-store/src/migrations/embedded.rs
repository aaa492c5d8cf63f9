//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str! and applied
//! in the order listed here.

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// Get all embedded migrations in order
pub fn get_migrations() -> Vec<Migration> {
    vec![
        Migration {
            id: "001_command_queue",
            sql: include_str!("../../migrations/001_command_queue.sql"),
        },
        Migration {
            id: "002_licenses",
            sql: include_str!("../../migrations/002_licenses.sql"),
        },
    ]
}
