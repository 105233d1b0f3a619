//! Repository bundle handed to the group service.

use std::sync::Arc;

use sqlx::PgPool;

use gather_core::repositories::{GroupMemberRepository, GroupRepository, MeetingRepository};
use gather_core::services::GroupService;

use crate::database::{PgGroupMemberRepository, PgGroupRepository, PgMeetingRepository};
use crate::memory::MemoryStore;

#[derive(Clone)]
pub struct Repositories {
    pub groups: Arc<dyn GroupRepository>,
    pub members: Arc<dyn GroupMemberRepository>,
    pub meetings: Arc<dyn MeetingRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            groups: Arc::new(PgGroupRepository::new(pool.clone())),
            members: Arc::new(PgGroupMemberRepository::new(pool.clone())),
            meetings: Arc::new(PgMeetingRepository::new(pool)),
        }
    }

    pub fn memory(store: &MemoryStore) -> Self {
        Self {
            groups: Arc::new(store.clone()),
            members: Arc::new(store.clone()),
            meetings: Arc::new(store.clone()),
        }
    }

    pub fn group_service(&self) -> GroupService {
        GroupService::new(self.groups.clone(), self.members.clone(), self.meetings.clone())
    }
}
