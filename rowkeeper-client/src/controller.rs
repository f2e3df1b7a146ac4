//! Drives a [`ListView`] against an [`ApiService`].
//!
//! Messages are applied synchronously; the resulting effects run as
//! independent tokio tasks. Fetch outcomes come back through the mailbox
//! and are applied on the next [`ListController::pump`] or
//! [`ListController::settle`]. Persistence is fire-and-forget: failures are
//! logged and never retried.

use std::fmt;
use std::sync::Arc;

use log::{debug, error, info};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::infra::services::ApiService;
use crate::view::{Effect, ListView, ViewMessage, update};

pub struct ListController {
    view: ListView,
    api: Arc<dyn ApiService>,
    tasks: JoinSet<()>,
    mailbox_tx: mpsc::UnboundedSender<ViewMessage>,
    mailbox_rx: mpsc::UnboundedReceiver<ViewMessage>,
}

impl fmt::Debug for ListController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListController")
            .field("view", &self.view)
            .field("api", &self.api)
            .field("outstanding_tasks", &self.tasks.len())
            .finish_non_exhaustive()
    }
}

impl ListController {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self::with_view(api, ListView::new())
    }

    /// Start from a prepared view, e.g. one with a search term already set.
    pub fn with_view(api: Arc<dyn ApiService>, view: ListView) -> Self {
        let (mailbox_tx, mailbox_rx) = mpsc::unbounded_channel();
        Self {
            view,
            api,
            tasks: JoinSet::new(),
            mailbox_tx,
            mailbox_rx,
        }
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    /// Number of spawned fetch and persist tasks not yet joined.
    pub fn outstanding(&self) -> usize {
        self.tasks.len()
    }

    /// Apply `message` and start every effect it produces. Must be called
    /// from within a tokio runtime.
    pub fn dispatch(&mut self, message: ViewMessage) {
        for effect in update(&mut self.view, message) {
            self.run(effect);
        }
    }

    /// Apply whatever results have already arrived, without waiting.
    /// Returns how many messages were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.mailbox_rx.try_recv() {
            self.dispatch(message);
            applied += 1;
        }
        applied
    }

    /// Wait for every outstanding task, apply their results, and repeat
    /// until nothing is left in flight.
    pub async fn settle(&mut self) {
        loop {
            while let Some(joined) = self.tasks.join_next().await {
                if let Err(err) = joined {
                    error!("List task did not complete: {}", err);
                }
            }
            if self.pump() == 0 && self.tasks.is_empty() {
                break;
            }
        }
    }

    fn run(&mut self, effect: Effect) {
        let api = Arc::clone(&self.api);
        match effect {
            Effect::Fetch(request) => {
                debug!(
                    "Fetching page {} (limit {}, search {:?})",
                    request.page, request.limit, request.search
                );
                let mailbox = self.mailbox_tx.clone();
                self.tasks.spawn(async move {
                    let message = match api.fetch_page(&request).await {
                        Ok(page) => ViewMessage::PageLoaded(page),
                        Err(err) => ViewMessage::FetchFailed(err.to_string()),
                    };
                    // The receiver is owned by the controller; a send only
                    // fails once the controller is gone.
                    let _ = mailbox.send(message);
                });
            }
            Effect::PersistSelection(ids) => {
                self.tasks.spawn(async move {
                    match api.save_selection(&ids).await {
                        Ok(ack) => info!(
                            "Saved selection of {} items",
                            ack.selected_ids.len()
                        ),
                        Err(err) => error!("Failed to save selection: {}", err),
                    }
                });
            }
            Effect::PersistOrder(ids) => {
                self.tasks.spawn(async move {
                    match api.save_order(&ids).await {
                        Ok(ack) => {
                            info!("Saved order of {} items", ack.order.len())
                        }
                        Err(err) => error!("Failed to save order: {}", err),
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::testing::TestApiService;
    use crate::view::{RowBounds, ScrollMetrics, ViewPhase};
    use rowkeeper_model::ItemId;

    fn controller(api: &TestApiService) -> ListController {
        ListController::new(Arc::new(api.clone()))
    }

    fn ids(controller: &ListController) -> Vec<i64> {
        controller
            .view()
            .rows()
            .iter()
            .map(|item| item.id.get())
            .collect()
    }

    fn bottom() -> ViewMessage {
        ViewMessage::Scrolled(ScrollMetrics::at_bottom(400.0, 1000.0))
    }

    #[tokio::test]
    async fn mount_loads_first_page() {
        let api = TestApiService::with_items(95);
        let mut controller = controller(&api);

        controller.dispatch(ViewMessage::Mounted);
        assert_eq!(controller.outstanding(), 1);
        controller.settle().await;

        assert_eq!(ids(&controller), (1..=20).collect::<Vec<_>>());
        assert_eq!(controller.view().total_items(), 95);
        assert_eq!(controller.view().total_pages(), 5);
        assert_eq!(controller.view().phase(), ViewPhase::Loaded);
        assert_eq!(api.fetches().len(), 1);
    }

    #[tokio::test]
    async fn scrolling_appends_until_exhausted() {
        let api = TestApiService::with_items(45);
        let mut controller = controller(&api);
        controller.dispatch(ViewMessage::Mounted);
        controller.settle().await;

        for _ in 0..5 {
            controller.dispatch(bottom());
            controller.settle().await;
        }

        assert_eq!(ids(&controller), (1..=45).collect::<Vec<_>>());
        let pages: Vec<u64> = api.fetches().iter().map(|r| r.page).collect();
        assert_eq!(pages, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn search_narrows_the_buffer() {
        let api = TestApiService::with_items(200);
        let mut controller = controller(&api);
        controller.dispatch(ViewMessage::Mounted);
        controller.settle().await;

        controller.dispatch(ViewMessage::SearchChanged("17".into()));
        controller.settle().await;

        assert_eq!(ids(&controller)[..3], [17, 117, 170]);
        assert_eq!(controller.view().total_items(), 12);
    }

    #[tokio::test]
    async fn drag_persists_order_for_later_reads() {
        let api = TestApiService::with_items(5);
        let mut controller = controller(&api);
        controller.dispatch(ViewMessage::Mounted);
        controller.settle().await;

        controller.dispatch(ViewMessage::DragStarted { index: 2 });
        controller.dispatch(ViewMessage::DragHovered {
            index: 0,
            bounds: RowBounds::for_row(0, 40.0),
            pointer_y: 5.0,
        });
        controller.dispatch(ViewMessage::DragEnded);
        controller.settle().await;

        let expected: Vec<ItemId> = [3, 1, 2, 4, 5].into_iter().map(ItemId).collect();
        assert_eq!(api.order_writes(), vec![expected.clone()]);
        assert_eq!(api.stored_order(), expected);

        // A fresh view sees the persisted order.
        let mut reloaded = ListController::new(Arc::new(api.clone()));
        reloaded.dispatch(ViewMessage::Mounted);
        reloaded.settle().await;
        assert_eq!(ids(&reloaded), vec![3, 1, 2, 4, 5]);
    }

    #[tokio::test]
    async fn selection_round_trips_through_the_server() {
        let api = TestApiService::with_items(30);
        let mut controller = controller(&api);
        controller.dispatch(ViewMessage::Mounted);
        controller.settle().await;

        controller.dispatch(ViewMessage::SelectionToggled(ItemId(4)));
        controller.dispatch(ViewMessage::SelectionToggled(ItemId(12)));
        controller.settle().await;
        assert_eq!(api.stored_selection(), vec![ItemId(4), ItemId(12)]);

        let mut reloaded = ListController::new(Arc::new(api.clone()));
        reloaded.dispatch(ViewMessage::Mounted);
        reloaded.settle().await;
        assert_eq!(reloaded.view().selected(), &[ItemId(4), ItemId(12)]);
    }

    #[tokio::test]
    async fn mount_adopts_selection_written_elsewhere() {
        let api = TestApiService::with_items(30);
        api.seed_selection(vec![ItemId(7), ItemId(2)]);
        let mut controller = controller(&api);

        controller.dispatch(ViewMessage::Mounted);
        controller.settle().await;

        assert_eq!(controller.view().selected(), &[ItemId(7), ItemId(2)]);
        assert!(controller.view().is_selected(ItemId(7)));
        assert!(api.selection_writes().is_empty());
    }

    #[tokio::test]
    async fn mount_follows_order_written_elsewhere() {
        let api = TestApiService::with_items(30);
        api.seed_order(vec![ItemId(25), ItemId(9)]);
        let mut controller = controller(&api);

        controller.dispatch(ViewMessage::Mounted);
        controller.settle().await;

        assert_eq!(ids(&controller)[..4], [25, 9, 1, 2]);
        assert!(api.order_writes().is_empty());
    }

    #[tokio::test]
    async fn failed_writes_keep_local_state() {
        let api = TestApiService::with_items(10);
        api.set_fail_writes(true);
        let mut controller = controller(&api);
        controller.dispatch(ViewMessage::Mounted);
        controller.settle().await;

        controller.dispatch(ViewMessage::SelectionToggled(ItemId(2)));
        controller.settle().await;

        assert_eq!(controller.view().selected(), &[ItemId(2)]);
        assert_eq!(api.selection_writes().len(), 1);
        assert!(api.stored_selection().is_empty());
    }

    #[tokio::test]
    async fn failed_fetch_resets_loading() {
        let api = TestApiService::with_items(10);
        api.set_fail_fetches(true);
        let mut controller = controller(&api);

        controller.dispatch(ViewMessage::Mounted);
        controller.settle().await;

        assert!(!controller.view().is_loading());
        assert!(controller.view().shows_placeholder());
        assert_eq!(api.fetches().len(), 1);
    }

    #[tokio::test]
    async fn search_during_drag_fetches_after_drop() {
        let api = TestApiService::with_items(30);
        let mut controller = controller(&api);
        controller.dispatch(ViewMessage::Mounted);
        controller.settle().await;

        controller.dispatch(ViewMessage::DragStarted { index: 0 });
        controller.dispatch(ViewMessage::SearchChanged("2".into()));
        controller.settle().await;
        assert_eq!(api.fetches().len(), 1);

        controller.dispatch(ViewMessage::DragEnded);
        controller.settle().await;

        let last = api.fetches().pop().unwrap();
        assert_eq!(last.search, "2");
        assert_eq!(ids(&controller)[..3], [2, 12, 20]);
    }

    #[tokio::test]
    async fn pump_applies_without_waiting() {
        let api = TestApiService::with_items(10);
        let mut controller = controller(&api);
        controller.dispatch(ViewMessage::Mounted);

        while controller.pump() == 0 {
            tokio::task::yield_now().await;
        }
        assert_eq!(controller.view().items().len(), 10);
    }
}
