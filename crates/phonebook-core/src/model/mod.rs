pub mod call;
pub mod contact;
pub mod group;

pub use call::CallEntry;
pub use contact::{Contact, ContactFields, ContactView};
pub use group::GroupView;
