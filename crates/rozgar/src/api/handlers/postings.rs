use axum::{Json, extract::State, http::StatusCode};
use librozgar::prelude::*;
use tracing::instrument;

use crate::api::{
  AppState,
  dto::{PostingCreated, PostingForm, Postings},
  errors::AppError,
  middlewares::json_rejection::TypedJson,
};

#[instrument(skip_all)]
pub async fn submit_posting(State(state): State<AppState>, TypedJson(form): TypedJson<PostingForm>) -> Result<(StatusCode, Json<PostingCreated>), AppError> {
  let posting = CompanyPosting::from(form);

  tracing::info!(role = posting.role.as_str(), location = posting.location.as_str(), sector = posting.sector.as_str(), slots = posting.slots, "received posting");

  let mut pool = state.pool.write().await;

  pool.push(posting);

  Ok((
    StatusCode::CREATED,
    Json(PostingCreated {
      index: pool.len() - 1,
      pool_size: pool.len(),
    }),
  ))
}

#[instrument(skip_all)]
pub async fn list_postings(State(state): State<AppState>) -> Json<Postings> {
  let postings = state.pool.read().await.clone();

  Json(Postings { total: postings.len(), postings })
}
