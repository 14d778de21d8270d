use tracing::debug;

use super::store::Store;
use crate::model::CallEntry;

/// Append a call log entry stamped with the current time
///
/// Always succeeds. Entries are never edited or removed.
pub fn append_call(store: &mut Store, caller: String, recipient: String, duration: String) {
    debug!(caller = %caller, recipient = %recipient, "logged call");
    store
        .call_log
        .push(CallEntry::new(caller, recipient, duration));
}

/// Read the full call log in insertion order
pub fn list_call_log(store: &Store) -> Vec<CallEntry> {
    store.call_log.clone()
}
