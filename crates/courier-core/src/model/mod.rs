pub mod command;
pub mod license;

pub use command::{ClaimedCommand, Command, CommandState};
pub use license::License;
