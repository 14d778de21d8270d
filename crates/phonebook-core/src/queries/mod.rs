//! Query module for read-only operations
//!
//! Pure, side-effect-free lookups against current store contents. Queries
//! return owned view types and never mutate state or produce notices.
//!
//! Key principles:
//! - All queries are read-only (no mutations)
//! - Results are deterministically ordered (lexicographic by key)
//! - Not-found is `None` at this layer; the host adapter decides how to
//!   render it

pub mod call_queries;
pub mod contact_queries;
pub mod group_queries;

pub use call_queries::call_log;
pub use contact_queries::{
    birthday_reminders, contact_get, contact_list, contact_search, ReminderView,
};
pub use group_queries::{group_get, group_list};
