//! List view: state, messages and the reducer that drives them.
//!
//! The view never performs I/O. [`update`] mutates [`ListView`] and returns
//! the [`Effect`]s a controller must run.

pub mod drag;
pub mod messages;
pub mod scroll;
pub mod sort;
pub mod types;
pub mod update;

pub use drag::RowBounds;
pub use messages::{Effect, ViewMessage};
pub use scroll::ScrollMetrics;
pub use sort::{SortColumn, SortDirection, SortState};
pub use types::{ListView, PAGE_LIMIT, ViewPhase};
pub use update::update;
