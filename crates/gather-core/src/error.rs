//! Domain errors

use thiserror::Error;
use uuid::Uuid;

use crate::validation::FieldErrors;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Group not found: {0}")]
    GroupNotFound(Uuid),

    #[error("User {user_id} is not a leader of group {group_id}")]
    NotGroupLeader { group_id: Uuid, user_id: Uuid },

    #[error("User {user_id} is already a member of group {group_id}")]
    AlreadyMember { group_id: Uuid, user_id: Uuid },

    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<FieldErrors> for DomainError {
    fn from(errors: FieldErrors) -> Self {
        DomainError::Validation(errors)
    }
}
