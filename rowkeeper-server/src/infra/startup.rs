use rowkeeper_config::Config;
use rowkeeper_core::{CoreError, ListService, Store};
use tracing::info;

use crate::infra::app_state::AppState;

/// Generate the dataset described by `config` and wrap it in handler state.
pub fn build_app_state(config: Config) -> Result<AppState, CoreError> {
    let store =
        Store::generate(config.dataset.size, &config.dataset.label_prefix)?;
    info!(
        items = store.len(),
        default_limit = config.paging.default_limit,
        "list service ready"
    );
    Ok(AppState::new(ListService::new(store), config))
}
