use serde::Serialize;

/// Renderable group with its key merged into the record
///
/// Groups are stored as plain member-name lists keyed by group name; this
/// view is the only group-shaped record the core exposes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupView {
    pub group_name: String,
    /// Member names in insertion order, duplicate-free
    pub members: Vec<String>,
}
