//! Group repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{Group, GroupMember};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Group>, DomainError>;

    /// Groups the user has a membership row in, oldest first.
    async fn find_by_member(&self, user_id: &Uuid) -> Result<Vec<Group>, DomainError>;

    /// Insert the group and its first member in one unit.
    async fn create_with_leader(&self, group: &Group, leader: &GroupMember) -> Result<Group, DomainError>;

    /// Persist attribute changes and set `leader = true` on every existing
    /// membership of this group whose user is listed, in one unit.
    async fn update(&self, group: &Group, leader_ids: &[Uuid]) -> Result<Group, DomainError>;

    /// Delete the group with its members and meetings. Returns whether a
    /// group was removed.
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError>;
}
