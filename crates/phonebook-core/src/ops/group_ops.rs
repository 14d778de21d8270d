use tracing::debug;

use super::store::Store;
use crate::model::GroupView;

/// Outcome of an `add_member` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberAdd {
    /// Member appended to the group
    Added,
    /// Member was already in the group; list unchanged
    AlreadyPresent,
    /// Group does not exist or member is not a known contact
    Invalid,
}

/// Outcome of a `remove_member` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRemove {
    /// Member removed from the group
    Removed,
    /// Group does not exist or member not currently in it
    Invalid,
}

/// Create (or unconditionally overwrite) a group
///
/// Candidate members that are not currently known contact names are silently
/// dropped; the survivors keep their input order, first occurrence wins on
/// duplicates. Returns the member list actually stored, for the notice.
pub fn create_group(store: &mut Store, group_name: String, candidates: Vec<String>) -> Vec<String> {
    let mut members: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if store.contacts.contains_key(&candidate) && !members.contains(&candidate) {
            members.push(candidate);
        }
    }
    debug!(group = %group_name, member_count = members.len(), "created group");
    store.groups.insert(group_name, members.clone());
    members
}

/// Append a member to a group
pub fn add_member(store: &mut Store, group_name: &str, member: &str) -> MemberAdd {
    if !store.contacts.contains_key(member) {
        return MemberAdd::Invalid;
    }
    match store.groups.get_mut(group_name) {
        None => MemberAdd::Invalid,
        Some(members) if members.iter().any(|m| m == member) => MemberAdd::AlreadyPresent,
        Some(members) => {
            members.push(member.to_string());
            debug!(group = %group_name, member = %member, "added group member");
            MemberAdd::Added
        }
    }
}

/// Remove a member from a group
pub fn remove_member(store: &mut Store, group_name: &str, member: &str) -> MemberRemove {
    match store.groups.get_mut(group_name) {
        Some(members) => {
            let before = members.len();
            members.retain(|m| m != member);
            if members.len() < before {
                debug!(group = %group_name, member = %member, "removed group member");
                MemberRemove::Removed
            } else {
                MemberRemove::Invalid
            }
        }
        None => MemberRemove::Invalid,
    }
}

/// Read a group by name as a renderable view
pub fn get_group(store: &Store, group_name: &str) -> Option<GroupView> {
    store.groups.get(group_name).map(|members| GroupView {
        group_name: group_name.to_string(),
        members: members.clone(),
    })
}

/// List every group as a renderable view, in key order
pub fn list_groups(store: &Store) -> Vec<GroupView> {
    store
        .groups
        .iter()
        .map(|(group_name, members)| GroupView {
            group_name: group_name.clone(),
            members: members.clone(),
        })
        .collect()
}
