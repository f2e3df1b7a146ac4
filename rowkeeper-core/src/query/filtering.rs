//! Search filtering over the item collection.
//!
//! An item matches when its value contains the search term ignoring case, or
//! when its id rendered in decimal contains the term verbatim. An empty term
//! matches everything.

use rayon::prelude::*;
use rowkeeper_model::Item;

/// Compiled search term, lowercased once per request.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    raw: String,
    folded: String,
}

impl SearchFilter {
    pub fn new(term: &str) -> Self {
        Self {
            raw: term.to_string(),
            folded: term.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn matches(&self, item: &Item) -> bool {
        if self.is_empty() {
            return true;
        }
        item.value.to_lowercase().contains(&self.folded)
            || item.id.to_string().contains(&self.raw)
    }
}

/// Items matching `term`, in collection order.
pub fn filter_items<'a>(items: &'a [Item], term: &str) -> Vec<&'a Item> {
    let filter = SearchFilter::new(term);
    if filter.is_empty() {
        return items.iter().collect();
    }
    items.par_iter().filter(|item| filter.matches(item)).collect()
}
