// ============================================================================
// Gather Core - Group Member Entity
// File: crates/gather-core/src/domain/group_member.rs
// Description: User-Group membership with leader flag
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Group Member entity (User-Group join row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMember {
    pub id: Uuid,
    pub group_id: Uuid,
    pub user_id: Uuid,
    pub leader: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl GroupMember {
    pub fn new(group_id: Uuid, user_id: Uuid, leader: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            group_id,
            user_id,
            leader,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    /// The membership a group's creator receives.
    pub fn founding_leader(group_id: Uuid, user_id: Uuid) -> Self {
        Self::new(group_id, user_id, true)
    }

    /// Grant leadership. Returns false when already a leader.
    pub fn promote(&mut self) -> bool {
        if self.leader {
            return false;
        }
        self.leader = true;
        self.modified_at = Some(Utc::now());
        true
    }
}
