use std::collections::HashMap;

use ahash::RandomState;
use librozgar::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Skills as submitted: either a JSON list or a single comma-separated string.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub(crate) enum Skills {
  List(Vec<String>),
  Csv(String),
}

impl Default for Skills {
  fn default() -> Self {
    Skills::List(Vec::new())
  }
}

impl Skills {
  /// Trimmed, non-blank tokens in submission order.
  pub(crate) fn into_tokens(self) -> Vec<String> {
    let tokens = match self {
      Skills::List(skills) => skills,
      Skills::Csv(skills) => skills.split(',').map(ToString::to_string).collect(),
    };

    tokens.into_iter().map(|skill| skill.trim().to_string()).filter(|skill| !skill.is_empty()).collect()
  }
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub(crate) struct CandidateForm {
  #[validate(length(min = 1, message = "name cannot be empty"))]
  pub name: String,
  #[serde(default)]
  pub skills: Skills,
  #[validate(length(min = 1, message = "location cannot be empty"))]
  pub location: String,
  #[validate(length(min = 1, message = "preferred sector cannot be empty"))]
  pub preferred_sector: String,
}

impl From<CandidateForm> for Candidate {
  fn from(form: CandidateForm) -> Self {
    Candidate {
      name: form.name,
      skills: form.skills.into_tokens(),
      location: form.location,
      preferred_sector: form.preferred_sector,
    }
  }
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub(crate) struct PostingForm {
  #[validate(length(min = 1, message = "role cannot be empty"))]
  pub role: String,
  #[serde(default)]
  pub skills: Skills,
  #[validate(length(min = 1, message = "location cannot be empty"))]
  pub location: String,
  #[validate(length(min = 1, message = "sector cannot be empty"))]
  pub sector: String,
  #[validate(range(min = 1, message = "at least one slot must be available"))]
  pub slots: u32,
}

impl From<PostingForm> for CompanyPosting {
  fn from(form: PostingForm) -> Self {
    CompanyPosting {
      role: form.role,
      skills: form.skills.into_tokens(),
      location: form.location,
      sector: form.sector,
      slots: form.slots,
    }
  }
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub(crate) struct Payload {
  #[validate(nested, length(min = 1, message = "at least one query must be provided"))]
  pub queries: HashMap<String, CandidateForm, RandomState>,
}

/// Where the postings of a match request came from.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum PoolSource {
  #[default]
  Pool,
  Demo,
}

#[derive(Default, Serialize)]
pub(crate) struct MatchResponse {
  pub responses: HashMap<String, MatchResults, RandomState>,
  pub top_n: usize,
  pub source: PoolSource,
}

#[derive(Default, Serialize)]
pub(crate) struct MatchResults {
  pub status: u16,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub candidate_name: Option<String>,
  pub matches: Vec<RankedMatch>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub total: Option<usize>,
}

#[derive(Serialize)]
pub(crate) struct PostingCreated {
  pub index: usize,
  pub pool_size: usize,
}

#[derive(Serialize)]
pub(crate) struct Postings {
  pub postings: Vec<CompanyPosting>,
  pub total: usize,
}

#[cfg(test)]
mod tests {
  use super::{PostingForm, Skills};

  #[test]
  fn skills_from_csv() {
    let skills = Skills::Csv(" Python, SQL ,,Data Analysis ".into());

    assert_eq!(skills.into_tokens(), ["Python", "SQL", "Data Analysis"]);
  }

  #[test]
  fn skills_from_list() {
    let skills = Skills::List(vec!["Java ".into(), "".into(), "Excel".into()]);

    assert_eq!(skills.into_tokens(), ["Java", "Excel"]);
  }

  #[test]
  fn posting_form_accepts_both_shapes() {
    let csv: PostingForm = serde_json::from_str(r#"{"role": "Developer", "skills": "Python, Java", "location": "Pune", "sector": "IT", "slots": 3}"#).unwrap();
    let list: PostingForm = serde_json::from_str(r#"{"role": "Developer", "skills": ["Python", "Java"], "location": "Pune", "sector": "IT", "slots": 3}"#).unwrap();

    assert_eq!(csv.skills.into_tokens(), list.skills.into_tokens());
  }
}
