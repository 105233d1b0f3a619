// ============================================================================
// Gather Infrastructure - PostgreSQL Meeting Repository
// File: crates/gather-infrastructure/src/database/postgres/meeting_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use uuid::Uuid;
use tracing::error;
use chrono::{DateTime, Utc};

use gather_core::domain::Meeting;
use gather_core::error::DomainError;
use gather_core::repositories::MeetingRepository;

pub struct PgMeetingRepository {
    pool: PgPool,
}

impl PgMeetingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MeetingRow {
    pub id: Uuid,
    pub group_id: Uuid,
    pub title: String,
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<MeetingRow> for Meeting {
    fn from(row: MeetingRow) -> Self {
        Meeting {
            id: row.id,
            group_id: row.group_id,
            title: row.title,
            location: row.location,
            starts_at: row.starts_at,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl MeetingRepository for PgMeetingRepository {
    async fn find_by_group(&self, group_id: &Uuid) -> Result<Vec<Meeting>, DomainError> {
        let rows: Vec<MeetingRow> = sqlx::query_as(
            r#"
            SELECT id, group_id, title, location, starts_at, created_at
            FROM meetings
            WHERE group_id = $1
            ORDER BY starts_at, id
            "#
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing meetings: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, meeting: &Meeting) -> Result<Meeting, DomainError> {
        let row: MeetingRow = sqlx::query_as(
            r#"
            INSERT INTO meetings (id, group_id, title, location, starts_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, group_id, title, location, starts_at, created_at
            "#
        )
        .bind(meeting.id)
        .bind(meeting.group_id)
        .bind(&meeting.title)
        .bind(&meeting.location)
        .bind(meeting.starts_at)
        .bind(meeting.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating meeting: {}", e);
            match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    DomainError::GroupNotFound(meeting.group_id)
                }
                _ => DomainError::DatabaseError(e.to_string()),
            }
        })?;

        Ok(row.into())
    }
}
