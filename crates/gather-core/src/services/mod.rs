//! Domain services (business logic)

pub mod group_service;

pub use group_service::{GroupDetails, GroupEditForm, GroupService};
