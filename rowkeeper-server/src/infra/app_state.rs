use std::{fmt, sync::Arc};

use parking_lot::RwLock;
use rowkeeper_config::Config;
use rowkeeper_core::ListService;

/// Shared handler state: the list service behind a read/write lock plus the
/// resolved configuration.
#[derive(Clone)]
pub struct AppState {
    pub list: Arc<RwLock<ListService>>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("items", &self.list.read().store().len())
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(list: ListService, config: Config) -> Self {
        Self {
            list: Arc::new(RwLock::new(list)),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn default_page_limit(&self) -> u64 {
        self.config.paging.default_limit
    }
}
