use std::time::Instant;

use metrics::{counter, histogram};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{Span, instrument};
use validator::Validate;

use crate::{
  error::{RozgarError, describe},
  matching::{
    Constraint, MatchParams, Preference,
    constraints::LocationConstraint,
    is_eligible,
    preferences::SectorPreference,
    ranker::rank,
    run_preferences,
    similarity::cosine_similarity,
    vectorizer::{vectorize, vectorize_batch},
    vocabulary::Vocabulary,
  },
  model::{Candidate, CompanyPosting, MatchResult, RankedMatch},
};

/// Match one candidate against a pool of postings.
///
/// The run goes through the whole pipeline: a vocabulary is built from all
/// skills involved, every skill list is turned into a count vector, postings
/// are scored by cosine similarity, postings outside the candidate's location
/// are dropped, postings in the preferred sector are boosted by
/// `params.weight_factor`, and the survivors are ranked.
///
/// An empty pool, or a pool where no posting passes the location check, is
/// not an error and yields a result without matches. Malformed records and
/// invalid parameters fail the run before any scoring happens.
///
/// # Preconditions
///
/// Every text field of the candidate and of each posting must be non-empty,
/// and every posting must offer at least one slot. Records breaking this fail
/// with [`RozgarError::InvalidRecord`], even when an empty location would
/// otherwise equal another empty location.
#[instrument(name = "match_candidate", skip_all, fields(candidate = candidate.name.as_str(), postings = postings.len()))]
pub fn match_candidate(postings: &[CompanyPosting], candidate: &Candidate, params: &MatchParams) -> Result<MatchResult, RozgarError> {
  params.ensure_valid()?;
  candidate.validate()?;

  for (index, posting) in postings.iter().enumerate() {
    posting.validate().map_err(|errs| RozgarError::InvalidRecord(format!("posting #{index} has {}", describe(&errs))))?;
  }

  let then = Instant::now();

  let vocabulary = Vocabulary::build(&candidate.skills, postings.iter().map(|posting| &posting.skills));
  let candidate_vector = vectorize(&candidate.skills, &vocabulary, params.unknown_skills)?;
  let company_vectors = vectorize_batch(postings.iter().map(|posting| posting.skills.as_slice()), &vocabulary, params.unknown_skills)?;
  let similarities = cosine_similarity(candidate_vector.view(), company_vectors.view())?;

  let location = LocationConstraint;
  let sector = SectorPreference { weight: params.weight_factor };
  let constraints: [&dyn Constraint; 1] = [&location];
  let preferences: [&dyn Preference; 1] = [&sector];

  let scored = postings
    .iter()
    .zip(similarities.iter())
    .enumerate()
    .filter(|(_, (posting, _))| is_eligible(candidate, posting, &constraints))
    .map(|(index, (posting, similarity))| {
      let score = run_preferences(candidate, posting, *similarity, &preferences);

      tracing::debug!(index, role = posting.role.as_str(), similarity, score, "computed score");

      histogram!("rozgar_matching_scores").record(score);

      RankedMatch {
        index,
        role: posting.role.clone(),
        location: posting.location.clone(),
        sector: posting.sector.clone(),
        score,
      }
    })
    .collect::<Vec<_>>();

  let eligible = scored.len();
  let matches = rank(scored, params.top_n, params.min_score);

  histogram!("rozgar_matching_latency_seconds").record(then.elapsed().as_secs_f64());
  counter!("rozgar_matching_runs_total", "outcome" => if matches.is_empty() { "empty" } else { "matched" }).increment(1);

  tracing::debug!(vocabulary = vocabulary.len(), eligible, returned = matches.len(), "match run complete");

  Ok(MatchResult {
    candidate_name: candidate.name.clone(),
    matches,
  })
}

/// Run [`match_candidate`] for several candidates against the same pool.
///
/// Runs are independent and executed in parallel. Results are returned in the
/// order of `candidates`, each run failing or succeeding on its own.
#[instrument(name = "match_many", skip_all, fields(candidates = candidates.len(), postings = postings.len()))]
pub fn match_many(postings: &[CompanyPosting], candidates: &[Candidate], params: &MatchParams) -> Vec<Result<MatchResult, RozgarError>> {
  let span = Span::current();

  candidates
    .par_iter()
    .map(|candidate| {
      let _enter = span.enter();

      match_candidate(postings, candidate, params)
    })
    .collect()
}
