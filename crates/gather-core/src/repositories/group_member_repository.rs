//! Group member repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::GroupMember;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupMemberRepository: Send + Sync {
    async fn find_by_group(&self, group_id: &Uuid) -> Result<Vec<GroupMember>, DomainError>;
    async fn find_membership(&self, group_id: &Uuid, user_id: &Uuid) -> Result<Option<GroupMember>, DomainError>;
    async fn add(&self, member: &GroupMember) -> Result<GroupMember, DomainError>;
}
