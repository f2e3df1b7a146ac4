//! List view update logic

use log::{debug, error, warn};
use rowkeeper_model::{ItemId, PageResult};

use super::drag::{self, DragState, RowBounds};
use super::messages::{Effect, ViewMessage};
use super::scroll::ScrollMetrics;
use super::sort::{SortColumn, SortState};
use super::types::ListView;

pub fn update(view: &mut ListView, message: ViewMessage) -> Vec<Effect> {
    match message {
        ViewMessage::Mounted => {
            view.mounted = true;
            restart(view)
        }

        ViewMessage::SearchChanged(search) => {
            view.search = search;
            restart(view)
        }

        ViewMessage::Scrolled(metrics) => handle_scroll(view, metrics),

        ViewMessage::PageLoaded(result) => {
            apply_page(view, result);
            Vec::new()
        }

        ViewMessage::FetchFailed(reason) => {
            error!("Failed to load items: {}", reason);
            view.loading = false;
            view.loading_more = false;
            Vec::new()
        }

        ViewMessage::SortClicked(column) => {
            handle_sort(view, column);
            Vec::new()
        }

        ViewMessage::SelectionToggled(id) => handle_toggle(view, id),

        ViewMessage::DragStarted { index } => {
            if index < view.items.len() {
                view.drag = Some(DragState { index });
            } else {
                warn!("Drag started on missing row {}", index);
            }
            Vec::new()
        }

        ViewMessage::DragHovered {
            index,
            bounds,
            pointer_y,
        } => {
            handle_hover(view, index, bounds, pointer_y);
            Vec::new()
        }

        ViewMessage::DragEnded => handle_drag_end(view),
    }
}

/// Back to page 1 with an empty buffer. While a drag is active the buffer
/// is kept for the drop and the request waits for the drag to finish.
fn restart(view: &mut ListView) -> Vec<Effect> {
    view.page = 1;
    view.loading_more = false;

    if view.is_dragging() {
        debug!("Deferring first-page fetch until drag ends");
        view.deferred_fetch = true;
        return Vec::new();
    }

    vec![fetch_first_page(view)]
}

fn fetch_first_page(view: &mut ListView) -> Effect {
    view.items.clear();
    view.loading = true;
    Effect::Fetch(view.page_request())
}

fn handle_scroll(view: &mut ListView, metrics: ScrollMetrics) -> Vec<Effect> {
    if view.loading || view.is_dragging() || view.loading_more {
        return Vec::new();
    }
    if !metrics.past_threshold() {
        return Vec::new();
    }
    if view.page >= view.total_pages
        || view.items.len() as u64 >= view.total_items
    {
        return Vec::new();
    }

    view.loading_more = true;
    view.loading = true;
    view.page += 1;
    debug!("Loading page {} of {}", view.page, view.total_pages);
    vec![Effect::Fetch(view.page_request())]
}

/// Responses are applied in arrival order without checking whether they
/// still match the current search or page.
fn apply_page(view: &mut ListView, result: PageResult) {
    let PageResult {
        items,
        total_items,
        total_pages,
        current_page,
        selected_ids,
    } = result;

    if current_page <= 1 {
        view.items = items;
    } else {
        view.items.extend(items);
    }

    view.total_items = total_items;
    view.total_pages = total_pages;

    if current_page <= 1 && !selected_ids.is_empty() {
        view.selected = selected_ids;
    }

    view.loading = false;
    view.loading_more = false;
}

fn handle_sort(view: &mut ListView, column: SortColumn) {
    view.sort = Some(SortState::next(view.sort, column));
}

fn handle_toggle(view: &mut ListView, id: ItemId) -> Vec<Effect> {
    if let Some(position) = view.selected.iter().position(|s| *s == id) {
        view.selected.remove(position);
    } else {
        view.selected.push(id);
    }
    vec![Effect::PersistSelection(view.selected.clone())]
}

fn handle_hover(
    view: &mut ListView,
    hover_index: usize,
    bounds: RowBounds,
    pointer_y: f32,
) {
    let Some(state) = view.drag else {
        return;
    };
    if !drag::should_move(state.index, hover_index, bounds, pointer_y) {
        return;
    }

    // Reordering a sorted view commits the sorted order as the new buffer.
    let mut rows = view.rows().into_owned();
    if !drag::move_row(&mut rows, state.index, hover_index) {
        return;
    }

    view.sort = None;
    view.items = rows;
    view.drag = Some(DragState { index: hover_index });
}

fn handle_drag_end(view: &mut ListView) -> Vec<Effect> {
    if view.drag.take().is_none() {
        return Vec::new();
    }

    let mut effects = vec![Effect::PersistOrder(view.buffered_ids())];

    if std::mem::take(&mut view.deferred_fetch) {
        effects.push(fetch_first_page(view));
    }

    effects
}
