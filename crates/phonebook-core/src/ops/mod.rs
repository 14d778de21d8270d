pub mod call_ops;
pub mod contact_ops;
pub mod group_ops;
pub mod store;

pub use group_ops::{MemberAdd, MemberRemove};
pub use store::Store;
