// Shared test fixture for detached items.
// Compiled only for tests, exposed under `crate::test_support`.

use crate::core::item::Item;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDto {
    pub name: String,
}

pub struct ItemBuilder {
    inner: Item,
}

impl Default for ItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/test_support/fixtures/items/json/item.json").unwrap();
        let dto: ItemDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: Item::new(dto.name),
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.change_name(v);
        self
    }

    pub fn build(self) -> Item {
        self.inner
    }
}
