//! Schema migrations
//!
//! SQL is embedded at compile time and applied through a checksummed ledger
//! table, so every store (file-backed or in-memory) converges on the same
//! schema idempotently.

pub mod embedded;
pub mod runner;

pub use runner::apply_migrations;
