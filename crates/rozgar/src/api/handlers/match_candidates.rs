use std::{collections::HashMap, sync::Arc};

use ahash::RandomState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::{Query, WithRejection};
use librozgar::prelude::*;
use metrics::histogram;
use tracing::{Span, instrument};

use crate::api::{
  AppState,
  config::MatchQuery,
  dto::{MatchResponse, MatchResults, Payload, PoolSource},
  errors::AppError,
  middlewares::json_rejection::TypedJson,
};

#[instrument(skip_all)]
pub async fn match_candidates(
  State(state): State<AppState>,
  WithRejection(Query(query), _): WithRejection<Query<MatchQuery>, AppError>,
  TypedJson(body): TypedJson<Payload>,
) -> Result<(StatusCode, impl IntoResponse), AppError> {
  let params = state.config.match_params(&query);

  params.ensure_valid()?;

  let (postings, source) = snapshot(&state).await;
  let (ids, candidates): (Vec<String>, Vec<Candidate>) = body.queries.into_iter().map(|(id, form)| (id, Candidate::from(form))).unzip();

  tracing::debug!(queries = ids.len(), postings = postings.len(), ?source, "matching candidates");

  let results = tokio::task::spawn_blocking({
    let span = Span::current();
    let params = params.clone();

    move || span.in_scope(|| match_many(&postings, &candidates, &params))
  })
  .await
  .map_err(|_| AppError::ServerError)?;

  let responses = ids.into_iter().zip(results.into_iter().map(into_results)).collect::<HashMap<_, _, RandomState>>();

  let response = MatchResponse {
    responses,
    top_n: params.top_n,
    source,
  };

  Ok((StatusCode::OK, Json(response)))
}

// Payloads and parameters are validated before matching, a failed run is a server error.
fn into_results(result: Result<MatchResult, RozgarError>) -> MatchResults {
  match result {
    Ok(result) => {
      histogram!("rozgar_matches_returned_total").record(result.matches.len() as f64);

      MatchResults {
        status: 200,
        total: Some(result.matches.len()),
        candidate_name: Some(result.candidate_name),
        matches: result.matches,
      }
    }

    Err(err) => {
      tracing::error!(error = ?err, "match run returned an error");

      MatchResults { status: 500, ..Default::default() }
    }
  }
}

/// Read-only copy of the postings a request is matched against.
///
/// The lock is released before matching starts, postings submitted meanwhile
/// are only seen by later requests.
async fn snapshot(state: &AppState) -> (Arc<[CompanyPosting]>, PoolSource) {
  let pool = state.pool.read().await;

  match pool.is_empty() && state.config.demo_fallback {
    true => (Arc::clone(&state.demo), PoolSource::Demo),
    false => (pool.as_slice().into(), PoolSource::Pool),
  }
}
