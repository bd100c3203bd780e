use bon::bon;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A job or internship seeker, matched against a pool of postings.
///
/// Skills are kept as an ordered list: repeating a skill increases its weight
/// in the candidate's skill vector.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct Candidate {
  #[validate(length(min = 1, message = "candidate name cannot be empty"))]
  pub name: String,
  #[serde(default)]
  pub skills: Vec<String>,
  #[validate(length(min = 1, message = "candidate location cannot be empty"))]
  pub location: String,
  #[validate(length(min = 1, message = "preferred sector cannot be empty"))]
  pub preferred_sector: String,
}

#[bon]
impl Candidate {
  #[builder]
  pub fn builder(#[builder(start_fn)] name: &str, #[builder(default)] skills: &[&str], location: &str, preferred_sector: &str) -> Candidate {
    Candidate {
      name: name.to_string(),
      skills: skills.iter().map(|s| s.to_string()).collect(),
      location: location.to_string(),
      preferred_sector: preferred_sector.to_string(),
    }
  }
}

/// An employer's posting.
///
/// `slots` is informational: a match never consumes capacity.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct CompanyPosting {
  #[validate(length(min = 1, message = "posting role cannot be empty"))]
  pub role: String,
  #[serde(default)]
  pub skills: Vec<String>,
  #[validate(length(min = 1, message = "posting location cannot be empty"))]
  pub location: String,
  #[validate(length(min = 1, message = "posting sector cannot be empty"))]
  pub sector: String,
  #[validate(range(min = 1, message = "a posting must offer at least one slot"))]
  pub slots: u32,
}

#[bon]
impl CompanyPosting {
  #[builder]
  pub fn builder(#[builder(start_fn)] role: &str, #[builder(default)] skills: &[&str], location: &str, sector: &str, #[builder(default = 1)] slots: u32) -> CompanyPosting {
    CompanyPosting {
      role: role.to_string(),
      skills: skills.iter().map(|s| s.to_string()).collect(),
      location: location.to_string(),
      sector: sector.to_string(),
      slots,
    }
  }
}

/// One surviving posting in a match run.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RankedMatch {
  /// Position of the posting in the pool the run was given.
  pub index: usize,
  pub role: String,
  pub location: String,
  pub sector: String,
  pub score: f64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct MatchResult {
  pub candidate_name: String,
  pub matches: Vec<RankedMatch>,
}

impl MatchResult {
  pub fn is_empty(&self) -> bool {
    self.matches.is_empty()
  }
}
