//! List view messages and effects

use rowkeeper_model::{ItemId, PageRequest, PageResult};

use super::drag::RowBounds;
use super::scroll::ScrollMetrics;
use super::sort::SortColumn;

/// List view messages
#[derive(Clone, Debug)]
pub enum ViewMessage {
    // User actions
    /// View became visible; load the first page
    Mounted,
    /// Search box text changed
    SearchChanged(String),
    /// Scroll container moved
    Scrolled(ScrollMetrics),
    /// Column header clicked
    SortClicked(SortColumn),
    /// Row checkbox toggled
    SelectionToggled(ItemId),
    /// Pointer picked up the row at this displayed index
    DragStarted { index: usize },
    /// Dragged row is over another row
    DragHovered {
        index: usize,
        bounds: RowBounds,
        pointer_y: f32,
    },
    /// Dragged row was dropped
    DragEnded,

    // Internal events
    /// A page request completed
    PageLoaded(PageResult),
    /// A page request failed
    FetchFailed(String),
}

/// Work the view asks its controller to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Fetch(PageRequest),
    PersistSelection(Vec<ItemId>),
    PersistOrder(Vec<ItemId>),
}
