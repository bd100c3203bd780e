use axum::{
  body::Body,
  extract::MatchedPath,
  http::{HeaderName, HeaderValue, Request, StatusCode},
  middleware::Next,
  response::Response,
};
use metrics::counter;
use opentelemetry::global;
use opentelemetry_http::HeaderExtractor;
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use uuid::Uuid;

pub(crate) mod json_rejection;
pub(crate) mod logging;

pub(crate) const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

#[derive(Clone, Copy, Debug)]
pub(crate) struct RequestId(pub Uuid);

impl RequestId {
  /// Reuse the caller's id when it is a valid UUID, so logs can be joined across services.
  fn from_request(request: &Request<Body>) -> RequestId {
    let inbound = request.headers().get(&REQUEST_ID_HEADER).and_then(|value| value.to_str().ok()).and_then(|value| Uuid::parse_str(value).ok());

    RequestId(inbound.unwrap_or_else(Uuid::new_v4))
  }
}

pub(crate) async fn request_id(mut request: Request<Body>, next: Next) -> Result<Response, StatusCode> {
  let id = RequestId::from_request(&request);

  request.extensions_mut().insert(id);

  let mut response = next.run(request).await;

  if let Ok(value) = HeaderValue::from_str(&id.0.to_string()) {
    response.headers_mut().insert(REQUEST_ID_HEADER, value);
  }

  response.extensions_mut().insert(id);

  Ok(response)
}

/// Route template of a request, unmatched requests share one label.
fn route(request: &Request<Body>) -> String {
  request.extensions().get::<MatchedPath>().map(|path| path.as_str().to_string()).unwrap_or_else(|| "unmatched".to_string())
}

pub(super) async fn metrics(request: Request<Body>, next: Next) -> Result<Response, StatusCode> {
  let route = route(&request);
  let response = next.run(request).await;

  counter!("rozgar_http_requests_total", "route" => route, "status" => response.status().as_u16().to_string()).increment(1);

  Ok(response)
}

pub(crate) fn create_request_span(request: &Request<Body>) -> Span {
  let request_id = request.extensions().get::<RequestId>().map_or_else(Uuid::new_v4, |id| id.0);
  let span = tracing::info_span!("request", %request_id, method = %request.method(), route = route(request));

  // Continue the caller's trace when a traceparent header is present.
  let parent = global::get_text_map_propagator(|propagator| propagator.extract(&HeaderExtractor(request.headers())));
  let _ = span.set_parent(parent);

  span
}
