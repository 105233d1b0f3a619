// ============================================================================
// Gather Core - Group Service
// File: crates/gather-core/src/services/group_service.rs
// ============================================================================
//! Group operations: list, show, edit, update, create, destroy.
//!
//! Every operation takes the signed-in user explicitly. Authentication
//! itself happens before the service is reached.

use std::sync::Arc;
use serde::Serialize;
use uuid::Uuid;
use tracing::{info, warn};

use crate::domain::{CurrentUser, Group, GroupChanges, GroupMember, Meeting, NewGroup};
use crate::error::DomainError;
use crate::repositories::{GroupMemberRepository, GroupRepository, MeetingRepository};

/// Service for the groups resource
pub struct GroupService {
    groups: Arc<dyn GroupRepository>,
    members: Arc<dyn GroupMemberRepository>,
    meetings: Arc<dyn MeetingRepository>,
    require_leader_for_mutations: bool,
}

/// What `show` exposes. Members see the roster and meetings; everyone
/// else sees the group only.
#[derive(Debug, Clone, Serialize)]
pub struct GroupDetails {
    pub group: Group,
    pub membership: Option<GroupMember>,
    pub members: Option<Vec<GroupMember>>,
    pub meetings: Option<Vec<Meeting>>,
}

/// Form model for `edit`, including the members that can be promoted.
#[derive(Debug, Clone, Serialize)]
pub struct GroupEditForm {
    pub group: Group,
    pub members: Vec<GroupMember>,
}

impl GroupService {
    pub fn new(
        groups: Arc<dyn GroupRepository>,
        members: Arc<dyn GroupMemberRepository>,
        meetings: Arc<dyn MeetingRepository>,
    ) -> Self {
        Self {
            groups,
            members,
            meetings,
            require_leader_for_mutations: false,
        }
    }

    /// Limit update and destroy to group leaders.
    pub fn with_leader_guard(mut self, required: bool) -> Self {
        self.require_leader_for_mutations = required;
        self
    }

    /// Groups the user belongs to
    pub async fn list(&self, user: &CurrentUser) -> Result<Vec<Group>, DomainError> {
        self.groups.find_by_member(&user.id).await
    }

    pub async fn show(&self, user: &CurrentUser, id: &Uuid) -> Result<GroupDetails, DomainError> {
        let group = self.find(id).await?;
        let membership = self.members.find_membership(&group.id, &user.id).await?;

        let (members, meetings) = match membership {
            Some(_) => (
                Some(self.members.find_by_group(&group.id).await?),
                Some(self.meetings.find_by_group(&group.id).await?),
            ),
            None => (None, None),
        };

        Ok(GroupDetails {
            group,
            membership,
            members,
            meetings,
        })
    }

    pub async fn edit(&self, user: &CurrentUser, id: &Uuid) -> Result<GroupEditForm, DomainError> {
        let group = self.find(id).await?;
        self.ensure_leader(user, &group.id).await?;
        let members = self.members.find_by_group(&group.id).await?;
        Ok(GroupEditForm { group, members })
    }

    pub async fn update(
        &self,
        user: &CurrentUser,
        id: &Uuid,
        changes: GroupChanges,
    ) -> Result<Group, DomainError> {
        let mut group = self.find(id).await?;
        if self.require_leader_for_mutations {
            self.ensure_leader(user, &group.id).await?;
        }
        if changes.is_empty() {
            return Ok(group);
        }

        group.apply(&changes)?;
        let updated = self.groups.update(&group, &changes.leader_ids).await?;

        info!(
            "Group {} updated by {} ({} leader ids submitted)",
            updated.id,
            user.id,
            changes.leader_ids.len()
        );
        Ok(updated)
    }

    /// Create a group led by its creator
    pub async fn create(&self, user: &CurrentUser, input: NewGroup) -> Result<Group, DomainError> {
        let group = Group::new(input)?;
        let leader = GroupMember::founding_leader(group.id, user.id);
        let created = self.groups.create_with_leader(&group, &leader).await?;

        info!("Group {} created by {}", created.id, user.id);
        Ok(created)
    }

    /// Returns whether a group was removed.
    pub async fn destroy(&self, user: &CurrentUser, id: &Uuid) -> Result<bool, DomainError> {
        if self.require_leader_for_mutations {
            let group = self.find(id).await?;
            self.ensure_leader(user, &group.id).await?;
        }

        let removed = self.groups.delete(id).await?;
        if removed {
            info!("Group {} destroyed by {}", id, user.id);
        }
        Ok(removed)
    }

    async fn find(&self, id: &Uuid) -> Result<Group, DomainError> {
        self.groups
            .find_by_id(id)
            .await?
            .ok_or(DomainError::GroupNotFound(*id))
    }

    async fn ensure_leader(&self, user: &CurrentUser, group_id: &Uuid) -> Result<(), DomainError> {
        match self.members.find_membership(group_id, &user.id).await? {
            Some(member) if member.leader => Ok(()),
            _ => {
                warn!("User {} is not a leader of group {}", user.id, group_id);
                Err(DomainError::NotGroupLeader {
                    group_id: *group_id,
                    user_id: user.id,
                })
            }
        }
    }
}
