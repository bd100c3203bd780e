use crate::{
  matching::Preference,
  model::{Candidate, CompanyPosting},
};

/// Boost postings in the candidate's preferred sector by `weight`.
#[derive(Clone, Copy, Debug)]
pub struct SectorPreference {
  pub weight: f64,
}

impl Preference for SectorPreference {
  fn name(&self) -> &'static str {
    "sector"
  }

  fn factor(&self, candidate: &Candidate, posting: &CompanyPosting) -> f64 {
    match candidate.preferred_sector == posting.sector {
      true => self.weight,
      false => 1.0,
    }
  }
}
