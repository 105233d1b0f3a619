//! Meeting repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Meeting;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Meetings whose `group_id` matches, by start time.
    async fn find_by_group(&self, group_id: &Uuid) -> Result<Vec<Meeting>, DomainError>;
    async fn create(&self, meeting: &Meeting) -> Result<Meeting, DomainError>;
}
