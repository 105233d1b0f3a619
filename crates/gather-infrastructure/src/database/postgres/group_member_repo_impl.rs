// ============================================================================
// Gather Infrastructure - PostgreSQL Group Member Repository
// File: crates/gather-infrastructure/src/database/postgres/group_member_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use uuid::Uuid;
use tracing::{info, error};
use chrono::{DateTime, Utc};

use gather_core::domain::GroupMember;
use gather_core::error::DomainError;
use gather_core::repositories::GroupMemberRepository;

pub struct PgGroupMemberRepository {
    pool: PgPool,
}

impl PgGroupMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct GroupMemberRow {
    pub id: Uuid,
    pub group_id: Uuid,
    pub user_id: Uuid,
    pub leader: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<GroupMemberRow> for GroupMember {
    fn from(row: GroupMemberRow) -> Self {
        GroupMember {
            id: row.id,
            group_id: row.group_id,
            user_id: row.user_id,
            leader: row.leader,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

#[async_trait]
impl GroupMemberRepository for PgGroupMemberRepository {
    async fn find_by_group(&self, group_id: &Uuid) -> Result<Vec<GroupMember>, DomainError> {
        let rows: Vec<GroupMemberRow> = sqlx::query_as(
            r#"
            SELECT id, group_id, user_id, leader, created_at, modified_at
            FROM group_members
            WHERE group_id = $1
            ORDER BY created_at, id
            "#
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing group members: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_membership(&self, group_id: &Uuid, user_id: &Uuid) -> Result<Option<GroupMember>, DomainError> {
        let row: Option<GroupMemberRow> = sqlx::query_as(
            r#"
            SELECT id, group_id, user_id, leader, created_at, modified_at
            FROM group_members
            WHERE group_id = $1 AND user_id = $2
            "#
        )
        .bind(group_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding membership: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn add(&self, member: &GroupMember) -> Result<GroupMember, DomainError> {
        let row: GroupMemberRow = sqlx::query_as(
            r#"
            INSERT INTO group_members (id, group_id, user_id, leader, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, group_id, user_id, leader, created_at, modified_at
            "#
        )
        .bind(member.id)
        .bind(member.group_id)
        .bind(member.user_id)
        .bind(member.leader)
        .bind(member.created_at)
        .bind(member.modified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error adding group member: {}", e);
            match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::AlreadyMember {
                    group_id: member.group_id,
                    user_id: member.user_id,
                },
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    DomainError::GroupNotFound(member.group_id)
                }
                _ => DomainError::DatabaseError(e.to_string()),
            }
        })?;

        info!("User {} joined group {}", row.user_id, row.group_id);
        Ok(row.into())
    }
}
