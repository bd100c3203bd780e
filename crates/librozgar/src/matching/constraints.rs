use crate::{
  matching::Constraint,
  model::{Candidate, CompanyPosting},
};

/// Only postings in the candidate's own location are eligible.
///
/// Locations are compared verbatim, there is no notion of distance or region.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationConstraint;

impl Constraint for LocationConstraint {
  fn name(&self) -> &'static str {
    "location"
  }

  fn is_satisfied(&self, candidate: &Candidate, posting: &CompanyPosting) -> bool {
    candidate.location == posting.location
  }
}

#[cfg(test)]
mod tests {
  use super::LocationConstraint;
  use crate::{
    matching::Constraint,
    model::{Candidate, CompanyPosting},
  };

  #[test]
  fn exact_location() {
    let candidate = Candidate::builder("Asha").location("Delhi").preferred_sector("IT").build();

    assert!(LocationConstraint.is_satisfied(&candidate, &CompanyPosting::builder("Developer").location("Delhi").sector("IT").build()));
    assert!(!LocationConstraint.is_satisfied(&candidate, &CompanyPosting::builder("Developer").location("Mumbai").sector("IT").build()));
    assert!(!LocationConstraint.is_satisfied(&candidate, &CompanyPosting::builder("Developer").location("delhi").sector("IT").build()));
  }
}
