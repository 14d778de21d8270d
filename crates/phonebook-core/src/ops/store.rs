use std::collections::BTreeMap;

use crate::model::{CallEntry, Contact};

/// In-memory store for contacts, groups, and the call log
///
/// Simple BTreeMap-based storage. Not thread-safe (no Arc/RwLock) - the host
/// runtime applies operations one at a time on a single logical thread. All
/// storage access is encapsulated here; there are no ambient globals - the
/// host constructs one Store at startup and passes it by reference into the
/// command processor and the query engine.
///
/// Iteration order over contacts and groups is lexicographic by key, which
/// keeps list and search output deterministic across runs and across
/// execution nodes. The call log is a plain append-only Vec in insertion
/// order; no eviction policy exists, resource limits belong to the host
/// runtime.
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Map of contact name to Contact
    pub(crate) contacts: BTreeMap<String, Contact>,
    /// Map of group name to ordered, duplicate-free member names
    pub(crate) groups: BTreeMap<String, Vec<String>>,
    /// Append-only call log, insertion order = chronological order
    pub(crate) call_log: Vec<CallEntry>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self {
            contacts: BTreeMap::new(),
            groups: BTreeMap::new(),
            call_log: Vec::new(),
        }
    }

    /// Check if a contact exists under the given name
    pub fn contact_exists(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    /// Get a contact by name
    pub fn contact(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    /// Check if a group exists under the given name
    pub fn group_exists(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Get a group's member list by group name
    pub fn group(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Number of stored contacts
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// Number of call log entries
    pub fn call_count(&self) -> usize {
        self.call_log.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactFields;

    #[test]
    fn test_new_store() {
        let store = Store::new();
        assert_eq!(store.contact_count(), 0);
        assert_eq!(store.call_count(), 0);
        assert!(!store.group_exists("Friends"));
    }

    #[test]
    fn test_contact_lookup() {
        let mut store = Store::new();
        store.contacts.insert(
            "Alice".to_string(),
            Contact::new(ContactFields {
                phone: "555-0100".to_string(),
                ..Default::default()
            }),
        );

        assert!(store.contact_exists("Alice"));
        assert!(!store.contact_exists("Bob"));
        assert_eq!(store.contact("Alice").unwrap().phone, "555-0100");
    }

    #[test]
    fn test_contacts_iterate_in_key_order() {
        let mut store = Store::new();
        for name in ["Carol", "Alice", "Bob"] {
            store
                .contacts
                .insert(name.to_string(), Contact::new(ContactFields::default()));
        }

        let names: Vec<&str> = store.contacts.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }
}
