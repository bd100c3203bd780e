use std::sync::Arc;

use axum::{
  Router, middleware,
  routing::{get, post},
};
use librozgar::{prelude::*, synthetic};
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::sync::RwLock;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{api::config::Config, trace::build_prometheus};

pub mod config;
pub mod dto;
pub mod errors;

pub mod handlers;
mod middlewares;

#[derive(Clone)]
pub struct AppState {
  pub config: Config,
  pub prometheus: Option<PrometheusHandle>,
  /// Postings submitted through the API, in submission order.
  pub pool: Arc<RwLock<Vec<CompanyPosting>>>,
  /// Generated postings matched against while the pool is empty.
  pub demo: Arc<[CompanyPosting]>,
}

impl AppState {
  pub fn new(config: Config, prometheus: Option<PrometheusHandle>) -> AppState {
    let demo = match config.demo_fallback {
      true => synthetic::postings(&mut synthetic::rng(config.demo_seed), config.demo_postings),
      false => Vec::new(),
    };

    tracing::debug!(postings = demo.len(), "generated demo postings");

    AppState {
      config,
      prometheus,
      pool: Arc::default(),
      demo: demo.into(),
    }
  }
}

pub async fn routes(config: &Config) -> anyhow::Result<Router> {
  let prometheus = match config.enable_prometheus {
    true => Some(build_prometheus()?),
    false => None,
  };

  Ok(router(AppState::new(config.clone(), prometheus)))
}

pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/match", post(handlers::match_candidates))
    .route("/postings", get(handlers::list_postings).post(handlers::submit_posting))
    .fallback(handlers::not_found)
    .layer(middleware::from_fn(middlewares::metrics))
    .layer(TimeoutLayer::new(state.config.request_timeout))
    .layer(TraceLayer::new_for_http().make_span_with(middlewares::create_request_span))
    // The routes below will not go through the observability middlewares above
    .route("/healthz", get(handlers::healthz))
    .route("/metrics", get(handlers::prometheus))
    .layer(middleware::from_fn(middlewares::logging::api_logger))
    .layer(middleware::from_fn(middlewares::request_id))
    .with_state(state)
}
