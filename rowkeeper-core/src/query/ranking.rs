//! Custom order applied as a stable sort key.

use std::collections::HashMap;

use rayon::prelude::*;
use rowkeeper_model::{Item, ItemId};

/// Position lookup for a custom order. An id's rank is the index of its
/// first occurrence; ids that never occur rank after every ranked id.
#[derive(Debug, Clone, Default)]
pub struct OrderRank {
    positions: HashMap<ItemId, usize>,
}

impl OrderRank {
    pub fn new(order: &[ItemId]) -> Self {
        let mut positions = HashMap::with_capacity(order.len());
        for (index, id) in order.iter().enumerate() {
            positions.entry(*id).or_insert(index);
        }
        Self { positions }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn rank(&self, id: ItemId) -> usize {
        self.positions.get(&id).copied().unwrap_or(usize::MAX)
    }

    /// Stable-sort `items` by rank. Unranked items keep their relative order.
    pub fn apply(&self, items: &mut [&Item]) {
        if self.is_empty() {
            return;
        }
        items.par_sort_by_key(|item| self.rank(item.id));
    }
}
