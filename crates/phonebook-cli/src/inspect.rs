//! Inspect route dispatch
//!
//! Maps the read-only URL surface onto the query engine and renders each
//! result as a single line of JSON. Not-found results become error-shaped
//! records (`{"error": ...}`) rather than failures, so every route always
//! answers.

use chrono::Utc;
use serde_json::json;

use phonebook_core::errors::Result;
use phonebook_core::queries;
use phonebook_core::Store;

/// Answer one inspect path against the store
///
/// Routes: `/contact/:name`, `/contacts`, `/search/:query`, `/group/:name`,
/// `/groups`, `/call_log`, `/birthday_reminders`.
///
/// # Errors
///
/// Returns `Serialization` if a view cannot be rendered as JSON.
pub fn route(store: &Store, path: &str) -> Result<String> {
    let segments: Vec<&str> = path.trim_start_matches('/').splitn(2, '/').collect();

    let value = match segments.as_slice() {
        ["contact", name] => match queries::contact_get(store, name) {
            Some(view) => serde_json::to_value(view)?,
            None => json!({"error": "Contact not found"}),
        },
        ["contacts"] => serde_json::to_value(queries::contact_list(store))?,
        ["search", query] => serde_json::to_value(queries::contact_search(store, query))?,
        ["group", name] => match queries::group_get(store, name) {
            Some(view) => serde_json::to_value(view)?,
            None => json!({"error": "Group not found"}),
        },
        ["groups"] => serde_json::to_value(queries::group_list(store))?,
        ["call_log"] => serde_json::to_value(queries::call_log(store))?,
        ["birthday_reminders"] => {
            let today = Utc::now().format("%m-%d").to_string();
            serde_json::to_value(queries::birthday_reminders(store, &today))?
        }
        _ => json!({"error": "Unknown route"}),
    };

    Ok(value.to_string())
}
