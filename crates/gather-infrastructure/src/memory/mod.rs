//! In-process store implementing every repository port.
//!
//! Rows live in insertion order, which is the retrieval order of the list
//! queries. Deleting a group removes its members and meetings, matching
//! the `ON DELETE CASCADE` schema.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use gather_core::domain::{Group, GroupMember, Meeting};
use gather_core::error::DomainError;
use gather_core::repositories::{GroupMemberRepository, GroupRepository, MeetingRepository};

#[derive(Debug, Default)]
struct Tables {
    groups: Vec<Group>,
    members: Vec<GroupMember>,
    meetings: Vec<Meeting>,
}

impl Tables {
    fn has_group(&self, id: &Uuid) -> bool {
        self.groups.iter().any(|g| g.id == *id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently created group.
    pub async fn last_group(&self) -> Option<Group> {
        self.tables.read().await.groups.last().cloned()
    }

    pub async fn group_count(&self) -> usize {
        self.tables.read().await.groups.len()
    }
}

#[async_trait]
impl GroupRepository for MemoryStore {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Group>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.groups.iter().find(|g| g.id == *id).cloned())
    }

    async fn find_by_member(&self, user_id: &Uuid) -> Result<Vec<Group>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .groups
            .iter()
            .filter(|g| {
                tables
                    .members
                    .iter()
                    .any(|m| m.group_id == g.id && m.user_id == *user_id)
            })
            .cloned()
            .collect())
    }

    async fn create_with_leader(&self, group: &Group, leader: &GroupMember) -> Result<Group, DomainError> {
        let mut tables = self.tables.write().await;
        if tables.has_group(&group.id) {
            return Err(DomainError::DatabaseError(format!("duplicate group id {}", group.id)));
        }
        tables.groups.push(group.clone());
        tables.members.push(leader.clone());
        Ok(group.clone())
    }

    async fn update(&self, group: &Group, leader_ids: &[Uuid]) -> Result<Group, DomainError> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .groups
            .iter_mut()
            .find(|g| g.id == group.id)
            .ok_or(DomainError::GroupNotFound(group.id))?;
        stored.name = group.name.clone();
        stored.description = group.description.clone();
        stored.modified_at = group.modified_at;
        let updated = stored.clone();

        for member in tables
            .members
            .iter_mut()
            .filter(|m| m.group_id == group.id && leader_ids.contains(&m.user_id))
        {
            member.promote();
        }

        Ok(updated)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        let before = tables.groups.len();
        tables.groups.retain(|g| g.id != *id);
        if tables.groups.len() == before {
            return Ok(false);
        }
        tables.members.retain(|m| m.group_id != *id);
        tables.meetings.retain(|m| m.group_id != *id);
        Ok(true)
    }
}

#[async_trait]
impl GroupMemberRepository for MemoryStore {
    async fn find_by_group(&self, group_id: &Uuid) -> Result<Vec<GroupMember>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .members
            .iter()
            .filter(|m| m.group_id == *group_id)
            .cloned()
            .collect())
    }

    async fn find_membership(&self, group_id: &Uuid, user_id: &Uuid) -> Result<Option<GroupMember>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .members
            .iter()
            .find(|m| m.group_id == *group_id && m.user_id == *user_id)
            .cloned())
    }

    async fn add(&self, member: &GroupMember) -> Result<GroupMember, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.has_group(&member.group_id) {
            return Err(DomainError::GroupNotFound(member.group_id));
        }
        if tables
            .members
            .iter()
            .any(|m| m.group_id == member.group_id && m.user_id == member.user_id)
        {
            return Err(DomainError::AlreadyMember {
                group_id: member.group_id,
                user_id: member.user_id,
            });
        }
        tables.members.push(member.clone());
        Ok(member.clone())
    }
}

#[async_trait]
impl MeetingRepository for MemoryStore {
    async fn find_by_group(&self, group_id: &Uuid) -> Result<Vec<Meeting>, DomainError> {
        let tables = self.tables.read().await;
        let mut meetings: Vec<Meeting> = tables
            .meetings
            .iter()
            .filter(|m| m.group_id == *group_id)
            .cloned()
            .collect();
        meetings.sort_by_key(|m| m.starts_at);
        Ok(meetings)
    }

    async fn create(&self, meeting: &Meeting) -> Result<Meeting, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.has_group(&meeting.group_id) {
            return Err(DomainError::GroupNotFound(meeting.group_id));
        }
        tables.meetings.push(meeting.clone());
        Ok(meeting.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use gather_core::domain::NewGroup;

    fn group(name: &str) -> Group {
        Group::new(NewGroup {
            name: name.to_string(),
            description: format!("{} description", name),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_find_by_member_only_returns_joined_groups() {
        let store = MemoryStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let mine = group("Chess");
        let theirs = group("Go");
        store
            .create_with_leader(&mine, &GroupMember::founding_leader(mine.id, alice))
            .await
            .unwrap();
        store
            .create_with_leader(&theirs, &GroupMember::founding_leader(theirs.id, bob))
            .await
            .unwrap();

        assert_eq!(store.find_by_member(&alice).await.unwrap(), vec![mine]);
    }

    #[tokio::test]
    async fn test_update_promotes_only_listed_members() {
        let store = MemoryStore::new();
        let g = group("Choir");
        let founder = Uuid::new_v4();
        store
            .create_with_leader(&g, &GroupMember::founding_leader(g.id, founder))
            .await
            .unwrap();

        let tenor = Uuid::new_v4();
        let bass = Uuid::new_v4();
        store.add(&GroupMember::new(g.id, tenor, false)).await.unwrap();
        store.add(&GroupMember::new(g.id, bass, false)).await.unwrap();

        store.update(&g, &[tenor, Uuid::new_v4()]).await.unwrap();

        let tenor_row = store.find_membership(&g.id, &tenor).await.unwrap().unwrap();
        let bass_row = store.find_membership(&g.id, &bass).await.unwrap().unwrap();
        assert!(tenor_row.leader);
        assert!(!bass_row.leader);
        assert_eq!(GroupMemberRepository::find_by_group(&store, &g.id).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_add_rejects_duplicate_membership() {
        let store = MemoryStore::new();
        let g = group("Book Club");
        let user = Uuid::new_v4();
        store
            .create_with_leader(&g, &GroupMember::founding_leader(g.id, user))
            .await
            .unwrap();

        let result = store.add(&GroupMember::new(g.id, user, false)).await;
        assert!(matches!(result, Err(DomainError::AlreadyMember { .. })));
    }

    #[tokio::test]
    async fn test_delete_cascades() {
        let store = MemoryStore::new();
        let g = group("Running");
        let user = Uuid::new_v4();
        store
            .create_with_leader(&g, &GroupMember::founding_leader(g.id, user))
            .await
            .unwrap();
        let meeting = Meeting::new(g.id, "5k".to_string(), None, Utc::now()).unwrap();
        MeetingRepository::create(&store, &meeting).await.unwrap();

        assert!(store.delete(&g.id).await.unwrap());
        assert!(store.find_by_id(&g.id).await.unwrap().is_none());
        assert!(GroupMemberRepository::find_by_group(&store, &g.id).await.unwrap().is_empty());
        assert!(MeetingRepository::find_by_group(&store, &g.id).await.unwrap().is_empty());
        assert!(!store.delete(&g.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_meetings_sorted_by_start() {
        let store = MemoryStore::new();
        let g = group("Film");
        store
            .create_with_leader(&g, &GroupMember::founding_leader(g.id, Uuid::new_v4()))
            .await
            .unwrap();

        let later = Meeting::new(g.id, "Sequel".to_string(), None, Utc::now() + Duration::days(7)).unwrap();
        let sooner = Meeting::new(g.id, "Premiere".to_string(), None, Utc::now()).unwrap();
        MeetingRepository::create(&store, &later).await.unwrap();
        MeetingRepository::create(&store, &sooner).await.unwrap();

        let titles: Vec<String> = MeetingRepository::find_by_group(&store, &g.id)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Premiere", "Sequel"]);
    }
}
