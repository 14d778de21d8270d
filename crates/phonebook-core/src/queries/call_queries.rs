//! Call log query operations

use crate::model::CallEntry;
use crate::ops::{call_ops, Store};

/// Full ordered call log, no filtering
pub fn call_log(store: &Store) -> Vec<CallEntry> {
    call_ops::list_call_log(store)
}
