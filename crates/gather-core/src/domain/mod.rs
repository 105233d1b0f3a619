//! # Gather Core - Domain Module
//! 
//! Domain entities for the groups service.

pub mod current_user;
pub mod group;
pub mod group_member;
pub mod meeting;

// Re-export all entities
pub use current_user::CurrentUser;
pub use group::{Group, GroupChanges, NewGroup};
pub use group_member::GroupMember;
pub use meeting::Meeting;
