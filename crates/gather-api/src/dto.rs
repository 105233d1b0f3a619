//! Request and view payloads

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use gather_core::{Group, GroupChanges, NewGroup};

/// `{ "group": { ... } }`
#[derive(Debug, Default, Deserialize)]
pub struct GroupParams {
    #[serde(default)]
    pub group: GroupAttributes,
}

#[derive(Debug, Default, Deserialize)]
pub struct GroupAttributes {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<String>,
    #[serde(default)]
    pub leader: Option<Vec<Uuid>>,
}

/// A key that is present, even as `null`, assigns the attribute. Only an
/// absent key leaves it alone.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Some(Option::<String>::deserialize(deserializer)?.unwrap_or_default()))
}

impl GroupAttributes {
    pub fn into_new_group(self) -> NewGroup {
        NewGroup {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        }
    }

    pub fn into_changes(self) -> GroupChanges {
        GroupChanges {
            name: self.name,
            description: self.description,
            leader_ids: self.leader.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IndexView {
    pub groups: Vec<Group>,
}

#[derive(Debug, Default, Serialize)]
pub struct GroupForm {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct NewView {
    pub group: GroupForm,
}
