use axum_test::TestServer;
use rowkeeper_config::Config;
use rowkeeper_server::{AppState, create_app, infra::startup::build_app_state};

// Code is used by test modules, but not in this scope
#[allow(unused)]
pub fn test_config(size: u64) -> Config {
    let mut config = Config::default();
    config.dataset.size = size;
    config
}

#[allow(unused)]
pub fn build_test_server(size: u64) -> (TestServer, AppState) {
    build_test_server_with(test_config(size))
}

#[allow(unused)]
pub fn build_test_server_with(config: Config) -> (TestServer, AppState) {
    let state = build_app_state(config).expect("test dataset builds");
    let server = TestServer::builder()
        .build(create_app(state.clone()))
        .expect("test server starts");
    (server, state)
}
