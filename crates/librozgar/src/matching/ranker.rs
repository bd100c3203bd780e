use itertools::Itertools;

use crate::model::RankedMatch;

/// Order scored postings by descending score and keep the best `top_n`.
///
/// The sort is stable: postings with equal scores keep the order they had in
/// the pool. When `min_score` is set, only postings scoring strictly above it
/// are kept.
pub fn rank(scored: Vec<RankedMatch>, top_n: usize, min_score: Option<f64>) -> Vec<RankedMatch> {
  scored
    .into_iter()
    .filter(|hit| min_score.is_none_or(|cutoff| hit.score > cutoff))
    .sorted_by(|lhs, rhs| lhs.score.total_cmp(&rhs.score).reverse())
    .take(top_n)
    .collect()
}
