//! In-memory backing state for the list service.

use rayon::prelude::*;
use rowkeeper_model::{Item, ItemId};
use tracing::info;

use crate::error::{CoreError, Result};

/// Largest collection [`Store::generate`] will build.
pub const MAX_DATASET_SIZE: u64 = 50_000_000;

/// Item collection plus the global selection and custom order.
///
/// Items are created once and never mutated; selection and order are only
/// ever replaced wholesale.
#[derive(Debug, Clone, Default)]
pub struct Store {
    items: Vec<Item>,
    selection: Vec<ItemId>,
    order: Vec<ItemId>,
}

impl Store {
    /// Build `size` sequential items with ids `1..=size` and values
    /// `"<prefix> <id>"`.
    pub fn generate(size: u64, prefix: &str) -> Result<Self> {
        if size > MAX_DATASET_SIZE {
            return Err(CoreError::DatasetTooLarge {
                requested: size,
                max: MAX_DATASET_SIZE,
            });
        }

        // Bounded by MAX_DATASET_SIZE, so the cast cannot truncate.
        let items: Vec<Item> = (1..=size as usize)
            .into_par_iter()
            .map(|id| Item::labeled(id as i64, prefix))
            .collect();

        info!(items = items.len(), prefix, "generated in-memory dataset");
        Ok(Self::from_items(items))
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            items,
            selection: Vec::new(),
            order: Vec::new(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selection(&self) -> &[ItemId] {
        &self.selection
    }

    pub fn order(&self) -> &[ItemId] {
        &self.order
    }

    pub fn replace_selection(&mut self, ids: Vec<ItemId>) -> &[ItemId] {
        self.selection = ids;
        &self.selection
    }

    pub fn replace_order(&mut self, ids: Vec<ItemId>) -> &[ItemId] {
        self.order = ids;
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_numbers_items_from_one() {
        let store = Store::generate(3, "Row").unwrap();
        assert_eq!(
            store.items(),
            &[
                Item::new(1, "Row 1"),
                Item::new(2, "Row 2"),
                Item::new(3, "Row 3"),
            ]
        );
        assert!(store.selection().is_empty());
        assert!(store.order().is_empty());
    }

    #[test]
    fn generate_empty_dataset() {
        let store = Store::generate(0, "Item").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn generate_rejects_oversized_dataset() {
        let err = Store::generate(MAX_DATASET_SIZE + 1, "Item").unwrap_err();
        assert!(matches!(err, CoreError::DatasetTooLarge { .. }));
    }

    #[test]
    fn replacements_are_wholesale() {
        let mut store = Store::generate(5, "Item").unwrap();
        store.replace_order(vec![ItemId(3), ItemId(1)]);
        store.replace_order(vec![ItemId(2)]);
        assert_eq!(store.order(), &[ItemId(2)]);

        store.replace_selection(vec![ItemId(99), ItemId(4)]);
        assert_eq!(store.selection(), &[ItemId(99), ItemId(4)]);
        store.replace_selection(Vec::new());
        assert!(store.selection().is_empty());
    }
}
