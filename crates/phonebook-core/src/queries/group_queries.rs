//! Group query operations

use crate::model::GroupView;
use crate::ops::{group_ops, Store};

/// Get a group by exact name, key merged into the record
pub fn group_get(store: &Store, group_name: &str) -> Option<GroupView> {
    group_ops::get_group(store, group_name)
}

/// List every group in key order
pub fn group_list(store: &Store) -> Vec<GroupView> {
    group_ops::list_groups(store)
}
