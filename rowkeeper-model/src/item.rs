use crate::ids::ItemId;

/// Label used when the dataset is generated without an explicit prefix.
pub const DEFAULT_LABEL_PREFIX: &str = "Item";

/// A single immutable row of the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub value: String,
}

impl Item {
    pub fn new(id: i64, value: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            value: value.into(),
        }
    }

    /// Build the item the dataset generator creates for `id`:
    /// its value is `"<prefix> <id>"`.
    pub fn labeled(id: i64, prefix: &str) -> Self {
        let id = ItemId(id);
        Self {
            id,
            value: format!("{prefix} {id}"),
        }
    }
}
