//! Authenticated principal

use uuid::Uuid;

/// The signed-in user, resolved by the HTTP layer and handed to every
/// service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrentUser {
    pub id: Uuid,
}

impl CurrentUser {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}
