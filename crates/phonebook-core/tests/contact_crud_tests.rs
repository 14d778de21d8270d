/// Contact CRUD behavior
///
/// Covers the add/get round trip, merge semantics, and delete outcomes
/// through the public command surface.
use chrono::Utc;
use phonebook_core::commands::Command;
use phonebook_core::model::ContactFields;
use phonebook_core::ops::{contact_ops, Store};
use phonebook_core::{apply, queries};

fn add_contact_cmd(name: &str, phone: &str, birthday: &str) -> Command {
    Command::AddContact {
        name: name.to_string(),
        fields: ContactFields {
            phone: phone.to_string(),
            birthday: birthday.to_string(),
            ..Default::default()
        },
    }
}

#[test]
fn test_add_then_get_round_trips_fields() {
    // GIVEN an empty store
    let mut store = Store::new();
    let before = Utc::now();

    // WHEN adding a contact and fetching it back
    apply(
        &mut store,
        Command::AddContact {
            name: "Alice".to_string(),
            fields: ContactFields {
                phone: "555-0100".to_string(),
                email: "alice@example.com".to_string(),
                address: "1 Main St".to_string(),
                birthday: "1985-03-10".to_string(),
            },
        },
    )
    .expect("Should add contact");

    // THEN the fields just written come back, and created_at is set
    let view = queries::contact_get(&store, "Alice").expect("Contact should exist");
    assert_eq!(view.contact.phone, "555-0100");
    assert_eq!(view.contact.email, "alice@example.com");
    assert_eq!(view.contact.address, "1 Main St");
    assert_eq!(view.contact.birthday, "1985-03-10");
    assert!(view.contact.created_at >= before);
    assert!(view.contact.updated_at.is_none());
}

#[test]
fn test_duplicate_add_is_last_write_wins() {
    // GIVEN a stored contact that is also a group member
    let mut store = Store::new();
    apply(&mut store, add_contact_cmd("Alice", "555-0100", "")).unwrap();
    apply(
        &mut store,
        Command::CreateGroup {
            group_name: "Friends".to_string(),
            members: vec!["Alice".to_string()],
        },
    )
    .unwrap();

    // WHEN adding the same name again
    let notice = apply(&mut store, add_contact_cmd("Alice", "555-0199", "")).unwrap();

    // THEN the add succeeds silently, overwrites, and memberships survive
    assert_eq!(notice, "Added contact: Alice");
    assert_eq!(store.contact("Alice").unwrap().phone, "555-0199");
    assert_eq!(store.group("Friends").unwrap(), ["Alice".to_string()]);
}

#[test]
fn test_merge_with_only_phone_preserves_other_fields() {
    // GIVEN a fully populated contact
    let mut store = Store::new();
    contact_ops::upsert_contact(
        &mut store,
        "Alice".to_string(),
        ContactFields {
            phone: "555-0100".to_string(),
            email: "alice@example.com".to_string(),
            address: "1 Main St".to_string(),
            birthday: "1985-03-10".to_string(),
        },
    );

    // WHEN updating with only a phone supplied
    let notice = apply(
        &mut store,
        Command::UpdateContact {
            name: "Alice".to_string(),
            patch: ContactFields {
                phone: "555-0199".to_string(),
                ..Default::default()
            },
        },
    )
    .unwrap();

    // THEN only the phone changed and updated_at is stamped
    assert_eq!(notice, "Updated contact: Alice");
    let contact = store.contact("Alice").unwrap();
    assert_eq!(contact.phone, "555-0199");
    assert_eq!(contact.email, "alice@example.com");
    assert_eq!(contact.address, "1 Main St");
    assert_eq!(contact.birthday, "1985-03-10");
    assert!(contact.updated_at.is_some());
}

#[test]
fn test_delete_missing_contact_reports_not_found() {
    let mut store = Store::new();
    let notice = apply(
        &mut store,
        Command::DeleteContact {
            name: "Ghost".to_string(),
        },
    )
    .unwrap();

    assert_eq!(notice, "Contact not found: Ghost");
}

#[test]
fn test_get_notice_serializes_stored_fields() {
    // Round trip: the notice JSON carries the supplied field values
    let mut store = Store::new();
    apply(&mut store, add_contact_cmd("Alice", "555-0100", "12-25")).unwrap();

    let notice = apply(
        &mut store,
        Command::GetContact {
            name: "Alice".to_string(),
        },
    )
    .unwrap();

    let json = notice
        .strip_prefix("Contact Alice: ")
        .expect("Notice should carry the JSON record");
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(value["phone"], "555-0100");
    assert_eq!(value["birthday"], "12-25");
    assert_eq!(value["email"], "");
    assert!(value.get("created_at").is_some());
}
