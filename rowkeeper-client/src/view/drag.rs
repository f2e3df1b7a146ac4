//! Drag-to-reorder geometry.

use rowkeeper_model::Item;

/// Vertical extent of a rendered row, in the same coordinate space as the
/// pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowBounds {
    pub top: f32,
    pub bottom: f32,
}

impl RowBounds {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// Bounds of row `index` in a list of fixed-height rows.
    pub fn for_row(index: usize, row_height: f32) -> Self {
        let top = index as f32 * row_height;
        Self::new(top, top + row_height)
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// An in-progress drag. `index` tracks where the dragged row currently sits
/// in the displayed list and follows it as rows move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub index: usize,
}

/// Midpoint rule: a row dragged downwards only swaps once the pointer passes
/// the hovered row's middle, and a row dragged upwards only once it is
/// above it.
pub fn should_move(
    drag_index: usize,
    hover_index: usize,
    bounds: RowBounds,
    pointer_y: f32,
) -> bool {
    if drag_index == hover_index {
        return false;
    }

    let hover_middle = bounds.height() / 2.0;
    let hover_offset = pointer_y - bounds.top;

    if drag_index < hover_index && hover_offset < hover_middle {
        return false;
    }
    if drag_index > hover_index && hover_offset > hover_middle {
        return false;
    }
    true
}

/// Remove the row at `from` and reinsert it at `to`. Out-of-range indices
/// leave `rows` untouched.
pub fn move_row(rows: &mut Vec<Item>, from: usize, to: usize) -> bool {
    if from >= rows.len() || to >= rows.len() || from == to {
        return false;
    }
    let row = rows.remove(from);
    rows.insert(to, row);
    true
}
