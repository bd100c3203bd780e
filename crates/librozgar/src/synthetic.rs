//! Random candidates and postings for demos and benchmarks.
//!
//! Nothing in the matching pipeline draws from this module, runs stay
//! deterministic for a given input.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::model::{Candidate, CompanyPosting};

pub const SKILLS: [&str; 8] = ["Python", "SQL", "Java", "Excel", "Communication", "Marketing", "Data Analysis", "Web Development"];
pub const LOCATIONS: [&str; 8] = ["Delhi", "Mumbai", "Bangalore", "Chennai", "Kolkata", "Hyderabad", "Pune", "Ahmedabad"];
pub const SECTORS: [&str; 4] = ["IT", "Finance", "Manufacturing", "Healthcare"];
pub const ROLES: [&str; 4] = ["Data Analyst", "Software Developer", "Marketing Intern", "Finance Assistant"];

/// Random source for generation, reproducible when a seed is given.
pub fn rng(seed: Option<u64>) -> StdRng {
  match seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_os_rng(),
  }
}

pub fn candidates<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Candidate> {
  (0..count)
    .map(|i| Candidate {
      name: format!("Candidate_{}", i + 1),
      skills: skills(rng),
      location: pick(rng, &LOCATIONS),
      preferred_sector: pick(rng, &SECTORS),
    })
    .collect()
}

pub fn postings<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<CompanyPosting> {
  (0..count)
    .map(|_| CompanyPosting {
      role: pick(rng, &ROLES),
      skills: skills(rng),
      location: pick(rng, &LOCATIONS),
      sector: pick(rng, &SECTORS),
      slots: rng.random_range(1..=5),
    })
    .collect()
}

// Two to four distinct skills.
fn skills<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
  let count = rng.random_range(2..=4);

  SKILLS.choose_multiple(rng, count).map(|skill| skill.to_string()).collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, values: &[&str]) -> String {
  values[rng.random_range(0..values.len())].to_string()
}

#[cfg(test)]
mod tests {
  use itertools::Itertools;
  use validator::Validate;

  use super::{LOCATIONS, SECTORS, SKILLS, candidates, postings, rng};

  #[test]
  fn generated_records_are_valid() {
    let mut rng = rng(Some(42));

    for posting in postings(&mut rng, 50) {
      assert!(posting.validate().is_ok());
      assert!((1..=5).contains(&posting.slots));
      assert!((2..=4).contains(&posting.skills.len()));
      assert!(posting.skills.iter().all_unique());
      assert!(posting.skills.iter().all(|skill| SKILLS.contains(&skill.as_str())));
      assert!(LOCATIONS.contains(&posting.location.as_str()));
      assert!(SECTORS.contains(&posting.sector.as_str()));
    }

    let candidates = candidates(&mut rng, 10);

    assert_eq!(candidates.len(), 10);
    assert_eq!(candidates[0].name, "Candidate_1");
    assert_eq!(candidates[9].name, "Candidate_10");
    assert!(candidates.iter().all(|candidate| candidate.validate().is_ok()));
  }

  #[test]
  fn seeded_generation_is_reproducible() {
    let lhs = postings(&mut rng(Some(7)), 20);
    let rhs = postings(&mut rng(Some(7)), 20);

    assert_eq!(serde_json::to_value(&lhs).unwrap(), serde_json::to_value(&rhs).unwrap());
  }
}
