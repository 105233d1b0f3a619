// ============================================================================
// Gather Infrastructure - PostgreSQL Group Repository
// File: crates/gather-infrastructure/src/database/postgres/group_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use uuid::Uuid;
use tracing::{info, error};
use chrono::{DateTime, Utc};

use gather_core::domain::{Group, GroupMember};
use gather_core::error::DomainError;
use gather_core::repositories::GroupRepository;

pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct GroupRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<GroupRow> for Group {
    fn from(row: GroupRow) -> Self {
        Group {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

fn database_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e: sqlx::Error| {
        error!("Database error {}: {}", context, e);
        DomainError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Group>, DomainError> {
        let row: Option<GroupRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, created_at, modified_at
            FROM groups
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("finding group by id"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_member(&self, user_id: &Uuid) -> Result<Vec<Group>, DomainError> {
        let rows: Vec<GroupRow> = sqlx::query_as(
            r#"
            SELECT g.id, g.name, g.description, g.created_at, g.modified_at
            FROM groups g
            INNER JOIN group_members m ON m.group_id = g.id
            WHERE m.user_id = $1
            ORDER BY g.created_at, g.id
            "#
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("listing groups for member"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_with_leader(&self, group: &Group, leader: &GroupMember) -> Result<Group, DomainError> {
        info!("Creating group: {}", group.name);

        let mut tx = self.pool.begin().await.map_err(database_error("opening transaction"))?;

        let row: GroupRow = sqlx::query_as(
            r#"
            INSERT INTO groups (id, name, description, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, created_at, modified_at
            "#
        )
        .bind(group.id)
        .bind(&group.name)
        .bind(&group.description)
        .bind(group.created_at)
        .bind(group.modified_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(database_error("creating group"))?;

        sqlx::query(
            r#"
            INSERT INTO group_members (id, group_id, user_id, leader, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#
        )
        .bind(leader.id)
        .bind(leader.group_id)
        .bind(leader.user_id)
        .bind(leader.leader)
        .bind(leader.created_at)
        .bind(leader.modified_at)
        .execute(&mut *tx)
        .await
        .map_err(database_error("creating group leader"))?;

        tx.commit().await.map_err(database_error("committing group creation"))?;

        info!("Group created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, group: &Group, leader_ids: &[Uuid]) -> Result<Group, DomainError> {
        let mut tx = self.pool.begin().await.map_err(database_error("opening transaction"))?;

        let row: Option<GroupRow> = sqlx::query_as(
            r#"
            UPDATE groups
            SET
                name = $2,
                description = $3,
                modified_at = $4
            WHERE id = $1
            RETURNING id, name, description, created_at, modified_at
            "#
        )
        .bind(group.id)
        .bind(&group.name)
        .bind(&group.description)
        .bind(group.modified_at)
        .fetch_optional(&mut *tx)
        .await
        .map_err(database_error("updating group"))?;

        let row = row.ok_or(DomainError::GroupNotFound(group.id))?;

        if !leader_ids.is_empty() {
            let promoted = sqlx::query(
                r#"
                UPDATE group_members
                SET leader = TRUE, modified_at = NOW()
                WHERE group_id = $1 AND user_id = ANY($2) AND leader = FALSE
                "#
            )
            .bind(group.id)
            .bind(leader_ids)
            .execute(&mut *tx)
            .await
            .map_err(database_error("promoting group leaders"))?
            .rows_affected();

            info!("Promoted {} member(s) of group {} to leader", promoted, group.id);
        }

        tx.commit().await.map_err(database_error("committing group update"))?;

        Ok(row.into())
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        // group_members and meetings cascade
        let result = sqlx::query(
            r#"
            DELETE FROM groups
            WHERE id = $1
            "#
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(database_error("deleting group"))?;

        Ok(result.rows_affected() > 0)
    }
}
