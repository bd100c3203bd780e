use axum_test::TestServer;

use crate::api::{AppState, config::Config};


fn server(config: Config) -> TestServer {
  TestServer::try_new(crate::api::router(AppState::new(config, None))).unwrap()
}

fn without_demo() -> Config {
  Config {
    demo_fallback: false,
    ..Default::default()
  }
}
