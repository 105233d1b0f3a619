//! Meeting entity, scoped to a group

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::validation::{not_blank, FieldErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Meeting {
    pub id: Uuid,
    pub group_id: Uuid,

    #[validate(custom(function = "not_blank"))]
    pub title: String,

    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Meeting {
    pub fn new(
        group_id: Uuid,
        title: String,
        location: Option<String>,
        starts_at: DateTime<Utc>,
    ) -> Result<Self, FieldErrors> {
        let meeting = Self {
            id: Uuid::new_v4(),
            group_id,
            title: title.trim().to_string(),
            location,
            starts_at,
            created_at: Utc::now(),
        };

        meeting
            .validate()
            .map_err(|e| FieldErrors::from_validation(&e, &["title"]))?;
        Ok(meeting)
    }
}
