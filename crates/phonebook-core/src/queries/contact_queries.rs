//! Contact query operations
//!
//! Read-only lookups over the contact collection: exact fetch, full listing,
//! substring search, and birthday reminders.

use serde::Serialize;

use crate::model::ContactView;
use crate::ops::{contact_ops, Store};

/// Birthday reminder result: the contact name and its stored birthday
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReminderView {
    pub name: String,
    pub birthday: String,
}

/// Get a contact by exact name, key merged into the record
pub fn contact_get(store: &Store, name: &str) -> Option<ContactView> {
    contact_ops::get_contact(store, name)
}

/// List every contact in key order
pub fn contact_list(store: &Store) -> Vec<ContactView> {
    contact_ops::list_contacts(store)
}

/// Case-insensitive substring search over name, phone, email, and address
///
/// A contact matches when the lowercased query is a substring of the
/// lowercased name, email, or address, or a literal substring of the phone
/// (phones are typically non-alphabetic, so they are not case-folded). An
/// empty query matches everything.
pub fn contact_search(store: &Store, query: &str) -> Vec<ContactView> {
    let needle = query.to_lowercase();
    store
        .contacts
        .iter()
        .filter(|(name, contact)| {
            name.to_lowercase().contains(&needle)
                || contact.phone.contains(&needle)
                || contact.email.to_lowercase().contains(&needle)
                || contact.address.to_lowercase().contains(&needle)
        })
        .map(|(name, contact)| ContactView {
            name: name.clone(),
            contact: contact.clone(),
        })
        .collect()
}

/// Contacts whose birthday falls on `today`, given as `MM-DD`
///
/// A stored birthday matches when it ends with the `MM-DD` suffix, which
/// tolerates birthdays stored with a leading year (`1990-05-21`). Contacts
/// with an empty birthday never match.
pub fn birthday_reminders(store: &Store, today: &str) -> Vec<ReminderView> {
    store
        .contacts
        .iter()
        .filter(|(_, contact)| !contact.birthday.is_empty() && contact.birthday.ends_with(today))
        .map(|(name, contact)| ReminderView {
            name: name.clone(),
            birthday: contact.birthday.clone(),
        })
        .collect()
}
