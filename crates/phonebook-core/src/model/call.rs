use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single call log entry
///
/// Immutable once created. The log is append-only and entries carry no key;
/// insertion order is chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallEntry {
    pub caller: String,
    pub recipient: String,
    /// Opaque duration value, carried verbatim and never validated as numeric
    pub duration: String,
    /// Timestamp when the call was logged
    pub timestamp: DateTime<Utc>,
}

impl CallEntry {
    /// Create a new entry stamped with the current time
    pub fn new(caller: String, recipient: String, duration: String) -> Self {
        Self {
            caller,
            recipient,
            duration,
            timestamp: Utc::now(),
        }
    }
}
