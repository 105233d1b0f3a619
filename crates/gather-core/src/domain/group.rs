// ============================================================================
// Gather Core - Group Entity
// File: crates/gather-core/src/domain/group.rs
// Description: Group with required name and description
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::validation::{not_blank, FieldErrors};

/// Group entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Group {
    pub id: Uuid,

    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(custom(function = "not_blank"))]
    pub description: String,

    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Attributes submitted on create. Missing values are blank.
#[derive(Debug, Clone, Default)]
pub struct NewGroup {
    pub name: String,
    pub description: String,
}

/// Partial update. `None` leaves the attribute alone; `Some` assigns it,
/// and a blank assignment fails validation.
#[derive(Debug, Clone, Default)]
pub struct GroupChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub leader_ids: Vec<Uuid>,
}

impl Group {
    /// Validation error order.
    pub const FIELDS: &'static [&'static str] = &["name", "description"];

    pub fn new(input: NewGroup) -> Result<Self, FieldErrors> {
        let group = Self {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            description: input.description.trim().to_string(),
            created_at: Utc::now(),
            modified_at: None,
        };

        group.check()?;
        Ok(group)
    }

    /// Apply name/description changes and re-validate. On failure `self`
    /// is left untouched.
    pub fn apply(&mut self, changes: &GroupChanges) -> Result<(), FieldErrors> {
        let mut updated = self.clone();
        if let Some(name) = &changes.name {
            updated.name = name.trim().to_string();
        }
        if let Some(description) = &changes.description {
            updated.description = description.trim().to_string();
        }
        updated.check()?;

        if changes.name.is_some() || changes.description.is_some() {
            updated.modified_at = Some(Utc::now());
        }
        *self = updated;
        Ok(())
    }

    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate()
            .map_err(|e| FieldErrors::from_validation(&e, Self::FIELDS))
    }
}

impl GroupChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.leader_ids.is_empty()
    }
}
