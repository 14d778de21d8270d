use thiserror::Error;

/// Result type alias using PhonebookError
pub type Result<T> = std::result::Result<T, PhonebookError>;

/// Error taxonomy for the phonebook core
///
/// Only structural failures are errors: a command envelope that cannot be
/// decoded into a typed command, or a view that cannot be serialized into a
/// notice. Logical non-outcomes (contact not found, member already in group,
/// invalid group reference) are reported as success notices by `apply()` and
/// never appear here.
#[derive(Debug, Error)]
pub enum PhonebookError {
    /// Command envelope is unparseable or missing a required field
    #[error("malformed command payload: {reason}")]
    MalformedPayload { reason: String },

    /// A store view could not be rendered as JSON for a notice
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PhonebookError {
    /// Get the stable error code for this error
    ///
    /// Codes are part of the host-facing contract and must not change once
    /// published.
    pub fn code(&self) -> &'static str {
        match self {
            PhonebookError::MalformedPayload { .. } => "ERR_MALFORMED_PAYLOAD",
            PhonebookError::Serialization(_) => "ERR_SERIALIZATION",
        }
    }
}
