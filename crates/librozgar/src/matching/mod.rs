use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;

use crate::{
  error::RozgarError,
  model::{Candidate, CompanyPosting},
};

pub mod constraints;
pub mod preferences;
pub mod ranker;
pub mod similarity;
pub mod vectorizer;
pub mod vocabulary;

pub const DEFAULT_TOP_N: usize = 3;
pub const DEFAULT_WEIGHT_FACTOR: f64 = 1.2;

/// What the vectorizer does with a skill missing from the vocabulary.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownSkills {
  #[default]
  Ignore,
  Warn,
  Reject,
}

/// Tuning of a single match run.
///
/// `weight_factor` multiplies the similarity of postings in the candidate's
/// preferred sector and must be at least `1.0`, lower values would demote
/// preferred postings instead of boosting them.
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MatchParams {
  #[serde_inline_default(DEFAULT_TOP_N)]
  pub top_n: usize,
  #[serde_inline_default(DEFAULT_WEIGHT_FACTOR)]
  pub weight_factor: f64,
  #[serde(default)]
  pub min_score: Option<f64>,
  /// Only applies when vectorizing against a prebuilt vocabulary.
  ///
  /// [`match_candidate`](crate::engine::match_candidate) builds its vocabulary
  /// from the candidate and every posting of the run, so no skill is ever
  /// unknown there and `Warn` or `Reject` change nothing.
  #[serde(default)]
  pub unknown_skills: UnknownSkills,
}

impl Default for MatchParams {
  fn default() -> Self {
    MatchParams {
      top_n: DEFAULT_TOP_N,
      weight_factor: DEFAULT_WEIGHT_FACTOR,
      min_score: None,
      unknown_skills: UnknownSkills::default(),
    }
  }
}

impl MatchParams {
  pub fn ensure_valid(&self) -> Result<(), RozgarError> {
    if !self.weight_factor.is_finite() || self.weight_factor < 1.0 {
      return Err(RozgarError::InvalidParams(format!("weight factor must be a finite number of at least 1.0, got {}", self.weight_factor)));
    }

    if let Some(cutoff) = self.min_score
      && !cutoff.is_finite()
    {
      return Err(RozgarError::InvalidParams(format!("minimum score must be a finite number, got {cutoff}")));
    }

    Ok(())
  }
}

/// A hard requirement: postings failing it are never returned.
pub trait Constraint: Send + Sync {
  fn name(&self) -> &'static str;
  fn is_satisfied(&self, candidate: &Candidate, posting: &CompanyPosting) -> bool;
}

/// A soft signal: a multiplier applied to the similarity score.
pub trait Preference: Send + Sync {
  fn name(&self) -> &'static str;
  fn factor(&self, candidate: &Candidate, posting: &CompanyPosting) -> f64;
}

pub(crate) fn is_eligible(candidate: &Candidate, posting: &CompanyPosting, constraints: &[&dyn Constraint]) -> bool {
  constraints.iter().all(|constraint| {
    let satisfied = constraint.is_satisfied(candidate, posting);

    if !satisfied {
      tracing::trace!(constraint = constraint.name(), role = posting.role.as_str(), "posting excluded");
    }

    satisfied
  })
}

pub(crate) fn run_preferences(candidate: &Candidate, posting: &CompanyPosting, init: f64, preferences: &[&dyn Preference]) -> f64 {
  preferences.iter().fold(init, |score, preference| {
    let factor = preference.factor(candidate, posting);

    tracing::trace!(preference = preference.name(), factor, "applied preference");

    score * factor
  })
}
