// Item is the concrete entity stored by the repository.
//
// Purpose
// - A named record with an identity that is assigned on first save.
//
// Notes
// - The name is free-form. Empty names are stored as given.

use crate::core::entity::Entity;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for ItemId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    id: Option<ItemId>,
    name: String,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn id(&self) -> Option<ItemId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn change_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Option<ItemId> {
        self.id
    }

    fn assign_id(&mut self, id: ItemId) {
        self.id = Some(id);
    }
}
