//! Phonebook Core - deterministic in-memory contact-management state machine
//!
//! This crate provides the command processor and query engine for a small
//! relational dataset of contacts, group memberships, and a call log:
//! - Contact, group, and call log models with full mutation semantics
//! - A typed `Command` inventory with a payload decoding boundary
//! - The `apply()` state-transition function producing human-readable notices
//! - Referential-integrity maintenance (contact deletion cascades through
//!   group member lists)
//! - Read-only queries: lookup, listing, substring search, birthday reminders
//!
//! The transport/runtime that delivers commands and persists state lives
//! outside this crate; the core receives already-decoded command envelopes
//! and query arguments, and never touches the network or file system.

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;

// Re-export commonly used types
pub use apply::{apply, process};
pub use commands::Command;
pub use errors::{PhonebookError, Result};
pub use model::{CallEntry, Contact, ContactFields, ContactView, GroupView};
pub use ops::Store;
