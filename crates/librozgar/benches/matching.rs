use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use librozgar::{prelude::*, synthetic};

fn single_candidate(c: &mut Criterion) {
  let mut rng = synthetic::rng(Some(1));
  let candidate = Candidate::builder("Test Candidate").skills(&["Python", "SQL"]).location("Delhi").preferred_sector("IT").build();

  for size in [50, 1_000, 10_000] {
    let postings = synthetic::postings(&mut rng, size);

    c.bench_function(&format!("match_candidate_{size}"), |b| b.iter(|| black_box(match_candidate(&postings, &candidate, &MatchParams::default()))));
  }
}

fn many_candidates(c: &mut Criterion) {
  let mut rng = synthetic::rng(Some(2));
  let postings = synthetic::postings(&mut rng, 1_000);
  let candidates = synthetic::candidates(&mut rng, 500);

  c.bench_function("match_many_500x1000", |b| b.iter(|| black_box(match_many(&postings, &candidates, &MatchParams::default()))));
}

criterion_group!(benches, single_candidate, many_candidates);
criterion_main!(benches);
