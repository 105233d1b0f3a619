//! Common types

use uuid::Uuid;

/// Parse a path segment into an entity id. Anything that is not a UUID
/// cannot name a stored record.
pub fn parse_entity_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
