use std::net::SocketAddr;

use axum::{
  body::{Body, HttpBody},
  extract::ConnectInfo,
  http::{Request, StatusCode},
  middleware::Next,
  response::Response,
};
use jiff::Timestamp;
use metrics::histogram;
use tokio::time::Instant;

use super::RequestId;

/// Access log, one line per request including health and metrics probes.
pub async fn api_logger(request: Request<Body>, next: Next) -> Result<Response, StatusCode> {
  let started_at = Timestamp::now();
  let method = request.method().clone();
  let uri = request.uri().clone();
  let remote = request.extensions().get::<ConnectInfo<SocketAddr>>().map_or_else(|| "-".to_string(), |ConnectInfo(addr)| addr.ip().to_string());
  let request_id = request.extensions().get::<RequestId>().map(|id| id.0.to_string()).unwrap_or_default();

  let clock = Instant::now();
  let response = next.run(request).await;
  let elapsed = clock.elapsed();
  let status = response.status();

  histogram!("rozgar_request_latency_seconds", "class" => status_class(status)).record(elapsed.as_secs_f64());

  tracing::info!(
    time = %started_at.strftime("%Y-%m-%dT%H:%M:%S%z"),
    remote = remote,
    method = %method,
    path = uri.path(),
    status = status.as_u16(),
    latency = elapsed.as_millis(),
    size = response.size_hint().exact().unwrap_or(0),
    request_id = request_id,
    "{method} {uri}",
  );

  Ok(response)
}

fn status_class(status: StatusCode) -> &'static str {
  match status.as_u16() {
    100..200 => "1xx",
    200..300 => "2xx",
    300..400 => "3xx",
    400..500 => "4xx",
    _ => "5xx",
  }
}
