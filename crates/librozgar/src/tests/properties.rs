use crate::{
  engine::match_candidate,
  matching::MatchParams,
  model::{Candidate, CompanyPosting},
  synthetic,
};

fn fixture(seed: u64) -> (Candidate, Vec<CompanyPosting>) {
  let mut rng = synthetic::rng(Some(seed));
  let candidate = synthetic::candidates(&mut rng, 1).remove(0);
  let postings = synthetic::postings(&mut rng, 200);

  (candidate, postings)
}

#[test]
fn results_respect_invariants() {
  for seed in 0..50 {
    let (candidate, postings) = fixture(seed);
    let params = MatchParams { top_n: 5, ..Default::default() };
    let eligible = postings.iter().filter(|posting| posting.location == candidate.location).count();

    let result = match_candidate(&postings, &candidate, &params).unwrap();

    assert!(result.matches.len() <= params.top_n);
    assert!(result.matches.len() <= eligible);
    assert_eq!(result.matches.len(), eligible.min(params.top_n));

    for hit in &result.matches {
      assert_eq!(hit.location, candidate.location);
      assert_eq!(postings[hit.index].role, hit.role);
      assert!(hit.score >= 0.0 && hit.score <= params.weight_factor);
    }

    assert!(result.matches.windows(2).all(|pair| pair[0].score >= pair[1].score));
  }
}

#[test]
fn runs_are_idempotent() {
  let (candidate, postings) = fixture(1234);
  let params = MatchParams { top_n: 10, ..Default::default() };

  let lhs = match_candidate(&postings, &candidate, &params).unwrap();
  let rhs = match_candidate(&postings, &candidate, &params).unwrap();

  assert_eq!(lhs, rhs);
}

#[test]
fn ties_follow_pool_order() {
  let candidate = Candidate::builder("Meera").skills(&["Excel", "Communication"]).location("Pune").preferred_sector("Finance").build();

  let postings = ["Clerk", "Assistant", "Associate", "Trainee"]
    .iter()
    .map(|role| CompanyPosting::builder(role).skills(&["Excel"]).location("Pune").sector("Finance").build())
    .collect::<Vec<_>>();

  let result = match_candidate(&postings, &candidate, &MatchParams { top_n: 4, ..Default::default() }).unwrap();

  assert_eq!(result.matches.iter().map(|hit| hit.role.as_str()).collect::<Vec<_>>(), ["Clerk", "Assistant", "Associate", "Trainee"]);
}

#[test]
fn repeated_skills_weigh_more() {
  let candidate = Candidate::builder("Kiran").skills(&["Python", "Python", "SQL"]).location("Delhi").preferred_sector("IT").build();
  let postings = vec![
    CompanyPosting::builder("Analyst").skills(&["SQL"]).location("Delhi").sector("IT").build(),
    CompanyPosting::builder("Developer").skills(&["Python"]).location("Delhi").sector("IT").build(),
  ];

  let result = match_candidate(&postings, &candidate, &MatchParams::default()).unwrap();

  assert_eq!(result.matches[0].role, "Developer");
  assert!(result.matches[0].score > result.matches[1].score);
}
