use tracing::debug;

use super::store::Store;
use crate::model::{Contact, ContactFields, ContactView};

/// Insert or fully re-create the contact keyed by `name`
///
/// Overwrites any prior contact of the same name (last-write-wins, no
/// duplicate detection) with a fresh `created_at`. Existing group
/// memberships under that name are unaffected.
pub fn upsert_contact(store: &mut Store, name: String, fields: ContactFields) {
    debug!(contact = %name, "upsert contact");
    store.contacts.insert(name, Contact::new(fields));
}

/// Merge non-empty patch fields into an existing contact
///
/// Returns whether the contact was found. The name itself is immutable; no
/// mutation occurs when the contact is absent.
pub fn merge_contact(store: &mut Store, name: &str, patch: ContactFields) -> bool {
    match store.contacts.get_mut(name) {
        Some(contact) => {
            contact.merge(patch);
            debug!(contact = %name, "merged contact fields");
            true
        }
        None => false,
    }
}

/// Delete a contact and cascade-remove its name from every group
///
/// Returns whether the contact was found. The cascade is part of the same
/// operation, so "group membership implies existing contact" holds before
/// and after every call.
pub fn remove_contact(store: &mut Store, name: &str) -> bool {
    if store.contacts.remove(name).is_none() {
        return false;
    }
    for members in store.groups.values_mut() {
        members.retain(|m| m != name);
    }
    debug!(contact = %name, "removed contact and cascaded group memberships");
    true
}

/// Read a contact by name as a renderable view
pub fn get_contact(store: &Store, name: &str) -> Option<ContactView> {
    store.contacts.get(name).map(|contact| ContactView {
        name: name.to_string(),
        contact: contact.clone(),
    })
}

/// List every contact as a renderable view, in key order
pub fn list_contacts(store: &Store) -> Vec<ContactView> {
    store
        .contacts
        .iter()
        .map(|(name, contact)| ContactView {
            name: name.clone(),
            contact: contact.clone(),
        })
        .collect()
}
