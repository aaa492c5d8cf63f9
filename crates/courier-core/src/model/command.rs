use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery state of a command
///
/// A command is created PENDING and becomes EXECUTED exactly once, when a
/// device claims it. EXECUTED is terminal: there is no failure state and no
/// re-queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandState {
    Pending,
    Executed,
}

impl CommandState {
    /// Stable string form used in the `commands.state` column
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandState::Pending => "pending",
            CommandState::Executed => "executed",
        }
    }

    /// Parse the stored string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(CommandState::Pending),
            "executed" => Some(CommandState::Executed),
            _ => None,
        }
    }
}

impl std::fmt::Display for CommandState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command - a unit of work queued for a device
///
/// Commands form a per-device FIFO keyed on `(created_at, id)`. The store is
/// the sole writer: `created_at` and `executed_at` are assigned at commit
/// time, never by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Unique identifier, monotonically assigned at creation; never reused
    pub id: i64,

    /// Opaque target device identifier; not validated against any registry
    pub device_id: String,

    /// Opaque command payload; no schema enforced
    pub payload: String,

    /// Current delivery state
    pub state: CommandState,

    /// Timestamp assigned by the store at insertion - the FIFO ordering key
    pub created_at: DateTime<Utc>,

    /// Timestamp of the successful claim; set exactly once
    pub executed_at: Option<DateTime<Utc>>,
}

impl Command {
    pub fn is_pending(&self) -> bool {
        self.state == CommandState::Pending
    }

    pub fn is_executed(&self) -> bool {
        self.state == CommandState::Executed
    }
}

/// Pre-transition snapshot returned by a successful claim
///
/// The claiming device receives the command as it was while still PENDING;
/// the state flip and `executed_at` assignment happen in the same atomic
/// step but are not part of the device-facing result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimedCommand {
    pub id: i64,
    pub payload: String,
    pub created_at: DateTime<Utc>,
}
