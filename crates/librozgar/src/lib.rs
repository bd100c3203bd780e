//! Candidate to posting matching.
//!
//! A match run scores one [`Candidate`](model::Candidate) against a pool of
//! [`CompanyPosting`](model::CompanyPosting)s by skill similarity, keeps
//! postings in the candidate's location, boosts the preferred sector and
//! returns the best matches.

mod error;

pub mod engine;
pub mod matching;
pub mod model;
pub mod synthetic;

#[cfg(test)]
mod tests;

pub mod prelude {
  pub use crate::engine::{match_candidate, match_many};
  pub use crate::error::RozgarError;
  pub use crate::matching::{Constraint, DEFAULT_TOP_N, DEFAULT_WEIGHT_FACTOR, MatchParams, Preference, UnknownSkills};
  pub use crate::model::{Candidate, CompanyPosting, MatchResult, RankedMatch};
}
