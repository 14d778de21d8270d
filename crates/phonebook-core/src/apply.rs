//! Command processor entry points
//!
//! `apply()` is the single state-transition function of the system: it
//! dispatches one typed command against the store and returns the notice the
//! host should emit. `process()` composes the decoding boundary with
//! `apply()` for hosts that hand over raw envelopes.
//!
//! ## Outcome contract
//!
//! - **All-or-nothing**: decoding happens before any store access, so a
//!   structurally invalid command never partially applies.
//! - **Logical non-outcomes are notices**: not-found, already-in-group, and
//!   invalid group/member references all return `Ok` with an explanatory
//!   notice and leave the store untouched beyond the command's legitimate
//!   effect.
//! - **Deterministic**: same store contents plus same command always yields
//!   the same notice (timestamps aside).

use tracing::debug;

use crate::commands::Command;
use crate::errors::Result;
use crate::ops::{call_ops, contact_ops, group_ops, MemberAdd, MemberRemove, Store};

/// Decode a raw command envelope and apply it to the store
///
/// This is the host-facing mutating surface: `Err` if and only if the
/// payload is structurally invalid, in which case the store is untouched.
///
/// # Errors
///
/// Returns `MalformedPayload` for unparseable envelopes or missing required
/// fields, and `Serialization` if a view cannot be rendered into a notice.
pub fn process(store: &mut Store, raw: &str) -> Result<String> {
    let cmd = Command::from_json(raw)?;
    apply(store, cmd)
}

/// Apply a typed command to the store, returning the notice to emit
///
/// # Errors
///
/// Returns `Serialization` if a contact or member list cannot be rendered
/// into the notice JSON; every other outcome is a success notice.
pub fn apply(store: &mut Store, cmd: Command) -> Result<String> {
    debug!(command = cmd.kind(), "apply command");
    match cmd {
        Command::AddContact { name, fields } => {
            contact_ops::upsert_contact(store, name.clone(), fields);
            Ok(format!("Added contact: {name}"))
        }

        Command::UpdateContact { name, patch } => {
            if contact_ops::merge_contact(store, &name, patch) {
                Ok(format!("Updated contact: {name}"))
            } else {
                Ok(format!("Contact not found: {name}"))
            }
        }

        Command::DeleteContact { name } => {
            if contact_ops::remove_contact(store, &name) {
                Ok(format!("Deleted contact: {name}"))
            } else {
                Ok(format!("Contact not found: {name}"))
            }
        }

        Command::GetContact { name } => match store.contact(&name) {
            Some(contact) => {
                let json = serde_json::to_string(contact)?;
                Ok(format!("Contact {name}: {json}"))
            }
            None => Ok(format!("Contact not found: {name}")),
        },

        Command::ListContacts => {
            let json = serde_json::to_string(&contact_ops::list_contacts(store))?;
            Ok(format!("All contacts: {json}"))
        }

        Command::CreateGroup {
            group_name,
            members,
        } => {
            let kept = group_ops::create_group(store, group_name.clone(), members);
            let json = serde_json::to_string(&kept)?;
            Ok(format!("Created group: {group_name} with members: {json}"))
        }

        Command::AddToGroup { group_name, member } => {
            match group_ops::add_member(store, &group_name, &member) {
                MemberAdd::Added => Ok(format!("Added {member} to group: {group_name}")),
                MemberAdd::AlreadyPresent => {
                    Ok(format!("{member} is already in group: {group_name}"))
                }
                MemberAdd::Invalid => Ok("Invalid group name or member".to_string()),
            }
        }

        Command::RemoveFromGroup { group_name, member } => {
            match group_ops::remove_member(store, &group_name, &member) {
                MemberRemove::Removed => Ok(format!("Removed {member} from group: {group_name}")),
                MemberRemove::Invalid => Ok("Invalid group name or member not in group".to_string()),
            }
        }

        Command::LogCall {
            caller,
            recipient,
            duration,
        } => {
            call_ops::append_call(store, caller.clone(), recipient.clone(), duration.clone());
            Ok(format!(
                "Logged call: {caller} to {recipient}, duration: {duration}"
            ))
        }

        Command::Unrecognized { .. } => Ok("Invalid command".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactFields;

    fn add_alice(store: &mut Store) {
        contact_ops::upsert_contact(
            store,
            "Alice".to_string(),
            ContactFields {
                phone: "555-0100".to_string(),
                ..Default::default()
            },
        );
    }

    #[test]
    fn test_apply_add_contact_notice() {
        let mut store = Store::new();
        let notice = apply(
            &mut store,
            Command::AddContact {
                name: "Alice".to_string(),
                fields: ContactFields {
                    phone: "555-0100".to_string(),
                    ..Default::default()
                },
            },
        )
        .unwrap();

        assert_eq!(notice, "Added contact: Alice");
        assert!(store.contact_exists("Alice"));
    }

    #[test]
    fn test_apply_update_not_found_is_success() {
        let mut store = Store::new();
        let notice = apply(
            &mut store,
            Command::UpdateContact {
                name: "Ghost".to_string(),
                patch: ContactFields::default(),
            },
        )
        .unwrap();

        assert_eq!(notice, "Contact not found: Ghost");
    }

    #[test]
    fn test_apply_get_contact_renders_json() {
        let mut store = Store::new();
        add_alice(&mut store);

        let notice = apply(
            &mut store,
            Command::GetContact {
                name: "Alice".to_string(),
            },
        )
        .unwrap();

        let json = notice.strip_prefix("Contact Alice: ").unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["phone"], "555-0100");
        assert!(value.get("created_at").is_some());
    }

    #[test]
    fn test_apply_create_group_notice_lists_kept_members() {
        let mut store = Store::new();
        add_alice(&mut store);

        let notice = apply(
            &mut store,
            Command::CreateGroup {
                group_name: "Friends".to_string(),
                members: vec!["Alice".to_string(), "Ghost".to_string()],
            },
        )
        .unwrap();

        assert_eq!(notice, r#"Created group: Friends with members: ["Alice"]"#);
    }

    #[test]
    fn test_apply_unrecognized_command() {
        let mut store = Store::new();
        let notice = apply(
            &mut store,
            Command::Unrecognized {
                kind: "EXPLODE".to_string(),
            },
        )
        .unwrap();

        assert_eq!(notice, "Invalid command");
    }

    #[test]
    fn test_process_malformed_leaves_store_untouched() {
        let mut store = Store::new();
        add_alice(&mut store);

        let result = process(&mut store, r#"{"command": "DELETE_CONTACT", "data": {}}"#);

        assert!(result.is_err());
        assert!(store.contact_exists("Alice"));
    }
}
