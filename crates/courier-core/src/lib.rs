//! Courier Core - domain model for the command dispatch queue
//!
//! This crate provides the storage-agnostic foundation for Courier:
//! - Command and License models with delivery-state semantics
//! - The canonical error taxonomy with stable error codes
//! - Input validation rules shared by every boundary
//! - The logging facility (single tracing initialization point)
//!
//! Persistence lives in `courier-store`; HTTP and CLI surfaces consume both.

pub mod errors;
pub mod logging;
pub mod model;
pub mod validate;

// Re-export commonly used types
pub use errors::{CourierError, Result};
pub use model::{ClaimedCommand, Command, CommandState, License};
