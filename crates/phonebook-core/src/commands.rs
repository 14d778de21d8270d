//! Command types for every mutating phonebook operation
//!
//! This module defines the command inventory plus the decoding boundary that
//! turns raw `{"command": ..., "data": {...}}` envelopes into typed commands.
//! Required-field checks happen here, before any store access, so `apply()`
//! never sees a structurally invalid command.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{PhonebookError, Result};
use crate::model::ContactFields;

/// Command enum representing all mutating operations
///
/// Commands are processed by the `apply()` function against the current
/// store contents. An unrecognized command kind decodes to `Unrecognized`
/// rather than failing: the source system answers it with an
/// "Invalid command" notice, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert or silently overwrite a contact (last-write-wins)
    AddContact {
        name: String,
        fields: ContactFields,
    },

    /// Merge non-empty fields into an existing contact
    UpdateContact {
        name: String,
        patch: ContactFields,
    },

    /// Delete a contact and cascade it out of every group
    DeleteContact { name: String },

    /// Render one contact into the notice stream
    GetContact { name: String },

    /// Render every contact into the notice stream
    ListContacts,

    /// Create or overwrite a group from candidate member names
    CreateGroup {
        group_name: String,
        members: Vec<String>,
    },

    /// Append one member to a group
    AddToGroup { group_name: String, member: String },

    /// Remove one member from a group
    RemoveFromGroup { group_name: String, member: String },

    /// Append an immutable call log entry
    LogCall {
        caller: String,
        recipient: String,
        duration: String,
    },

    /// Unknown command kind, answered with the "Invalid command" notice
    Unrecognized { kind: String },
}

#[derive(Debug, Deserialize)]
struct Envelope {
    /// Absent or unknown kinds both land on `Unrecognized`, answered with
    /// the "Invalid command" notice rather than a structural error
    #[serde(default)]
    command: String,
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Deserialize)]
struct AddContactPayload {
    name: String,
    phone: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    birthday: String,
}

#[derive(Debug, Deserialize)]
struct UpdateContactPayload {
    name: String,
    #[serde(flatten)]
    patch: ContactFields,
}

#[derive(Debug, Deserialize)]
struct NamePayload {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CreateGroupPayload {
    group_name: String,
    members: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct MemberPayload {
    group_name: String,
    member: String,
}

#[derive(Debug, Deserialize)]
struct LogCallPayload {
    caller: String,
    recipient: String,
    duration: String,
}

fn payload<T: DeserializeOwned>(data: Value) -> Result<T> {
    serde_json::from_value(data).map_err(|e| PhonebookError::MalformedPayload {
        reason: e.to_string(),
    })
}

impl Command {
    /// Decode a raw command envelope into a typed command
    ///
    /// # Errors
    ///
    /// Returns `MalformedPayload` when the envelope is not valid JSON, a
    /// required field is missing or mistyped, or an `ADD_CONTACT` name is
    /// empty. Unknown command kinds are not errors.
    pub fn from_json(raw: &str) -> Result<Command> {
        let envelope: Envelope =
            serde_json::from_str(raw).map_err(|e| PhonebookError::MalformedPayload {
                reason: e.to_string(),
            })?;
        Self::from_envelope(&envelope.command, envelope.data)
    }

    fn from_envelope(kind: &str, data: Value) -> Result<Command> {
        match kind {
            "ADD_CONTACT" => {
                let p: AddContactPayload = payload(data)?;
                if p.name.trim().is_empty() {
                    return Err(PhonebookError::MalformedPayload {
                        reason: "contact name cannot be empty".to_string(),
                    });
                }
                Ok(Command::AddContact {
                    name: p.name,
                    fields: ContactFields {
                        phone: p.phone,
                        email: p.email,
                        address: p.address,
                        birthday: p.birthday,
                    },
                })
            }
            "UPDATE_CONTACT" => {
                let p: UpdateContactPayload = payload(data)?;
                Ok(Command::UpdateContact {
                    name: p.name,
                    patch: p.patch,
                })
            }
            "DELETE_CONTACT" => {
                let p: NamePayload = payload(data)?;
                Ok(Command::DeleteContact { name: p.name })
            }
            "GET_CONTACT" => {
                let p: NamePayload = payload(data)?;
                Ok(Command::GetContact { name: p.name })
            }
            "LIST_CONTACTS" => Ok(Command::ListContacts),
            "CREATE_GROUP" => {
                let p: CreateGroupPayload = payload(data)?;
                Ok(Command::CreateGroup {
                    group_name: p.group_name,
                    members: p.members,
                })
            }
            "ADD_TO_GROUP" => {
                let p: MemberPayload = payload(data)?;
                Ok(Command::AddToGroup {
                    group_name: p.group_name,
                    member: p.member,
                })
            }
            "REMOVE_FROM_GROUP" => {
                let p: MemberPayload = payload(data)?;
                Ok(Command::RemoveFromGroup {
                    group_name: p.group_name,
                    member: p.member,
                })
            }
            "LOG_CALL" => {
                let p: LogCallPayload = payload(data)?;
                Ok(Command::LogCall {
                    caller: p.caller,
                    recipient: p.recipient,
                    duration: p.duration,
                })
            }
            other => Ok(Command::Unrecognized {
                kind: other.to_string(),
            }),
        }
    }

    /// Stable kind name of this command, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Command::AddContact { .. } => "ADD_CONTACT",
            Command::UpdateContact { .. } => "UPDATE_CONTACT",
            Command::DeleteContact { .. } => "DELETE_CONTACT",
            Command::GetContact { .. } => "GET_CONTACT",
            Command::ListContacts => "LIST_CONTACTS",
            Command::CreateGroup { .. } => "CREATE_GROUP",
            Command::AddToGroup { .. } => "ADD_TO_GROUP",
            Command::RemoveFromGroup { .. } => "REMOVE_FROM_GROUP",
            Command::LogCall { .. } => "LOG_CALL",
            Command::Unrecognized { .. } => "UNRECOGNIZED",
        }
    }
}
