use librozgar::{prelude::*, synthetic};

#[test]
fn match_against_generated_pool() {
  let mut rng = synthetic::rng(Some(2024));
  let mut postings = synthetic::postings(&mut rng, 50);

  postings.push(CompanyPosting::builder("Data Analyst").skills(&["Python", "SQL"]).location("Delhi").sector("IT").slots(2).build());

  let candidate = Candidate::builder("Test Candidate").skills(&["Python", "SQL"]).location("Delhi").preferred_sector("IT").build();
  let result = match_candidate(&postings, &candidate, &MatchParams::default()).unwrap();

  assert_eq!(result.candidate_name, "Test Candidate");
  assert!(result.matches.len() <= DEFAULT_TOP_N);
  assert!(result.matches.iter().any(|hit| hit.index == 50));
  assert!(result.matches[0].score > 1.19);
  assert!(result.matches.iter().all(|hit| hit.location == "Delhi"));
}

#[test]
fn match_many_candidates() {
  let mut rng = synthetic::rng(Some(99));
  let postings = synthetic::postings(&mut rng, 100);
  let candidates = synthetic::candidates(&mut rng, 25);

  let results = match_many(&postings, &candidates, &MatchParams::default());

  assert_eq!(results.len(), candidates.len());

  for (candidate, result) in candidates.iter().zip(results) {
    let result = result.unwrap();

    assert_eq!(result.candidate_name, candidate.name);
    assert_eq!(result, match_candidate(&postings, candidate, &MatchParams::default()).unwrap());
  }
}
