use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact - the fundamental record of the phonebook
///
/// Contacts are keyed by name in the store; the name itself is not stored on
/// the record. Group member lists refer to contacts by name (a logical
/// foreign key, not an object reference).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Phone number (required at creation, never validated as numeric)
    pub phone: String,

    /// Email address (optional, empty when unset)
    pub email: String,

    /// Postal address (optional, empty when unset)
    pub address: String,

    /// Birthday, conventionally `YYYY-MM-DD` or `MM-DD` (optional)
    pub birthday: String,

    /// Timestamp when this contact was created, set once
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last field merge; absent until the first update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Contact field bundle carried by `ADD_CONTACT` and `UPDATE_CONTACT` payloads
///
/// Every field defaults to empty; an empty field means "not supplied" for
/// merge purposes, matching the wire format where absent keys and empty
/// strings are equivalent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub birthday: String,
}

/// Renderable contact with its key merged into the record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactView {
    pub name: String,
    #[serde(flatten)]
    pub contact: Contact,
}

impl Contact {
    /// Create a new Contact from the supplied fields with a fresh `created_at`
    pub fn new(fields: ContactFields) -> Self {
        Self {
            phone: fields.phone,
            email: fields.email,
            address: fields.address,
            birthday: fields.birthday,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Merge non-empty fields of `patch` into this contact
    ///
    /// Empty fields are left untouched. Stamps `updated_at` unconditionally,
    /// even when every patch field is empty.
    pub fn merge(&mut self, patch: ContactFields) {
        if !patch.phone.is_empty() {
            self.phone = patch.phone;
        }
        if !patch.email.is_empty() {
            self.email = patch.email;
        }
        if !patch.address.is_empty() {
            self.address = patch.address;
        }
        if !patch.birthday.is_empty() {
            self.birthday = patch.birthday;
        }
        self.updated_at = Some(Utc::now());
    }
}
