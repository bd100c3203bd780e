use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

use crate::error::RozgarError;

/// Added to every denominator so all-zero vectors score `0.0` instead of `NaN`.
pub const EPSILON: f64 = 1e-8;

/// Cosine similarity of `candidate` (`D`) against every row of `companies` (`N×D`).
///
/// Computed as a single matrix-vector product:
///
/// ```text
/// score[i] = dot(candidate, company[i]) / (|candidate| * |company[i]| + EPSILON)
/// ```
///
/// For count vectors the result lies in `[0, 1]`, slightly below `1` for
/// identical vectors because of the epsilon term.
pub fn cosine_similarity(candidate: ArrayView1<f64>, companies: ArrayView2<f64>) -> Result<Array1<f64>, RozgarError> {
  if companies.ncols() != candidate.len() {
    return Err(RozgarError::ShapeMismatch {
      expected: candidate.len(),
      actual: companies.ncols(),
    });
  }

  let dots = companies.dot(&candidate);
  let candidate_norm = candidate.dot(&candidate).sqrt();
  let company_norms = companies.map_axis(Axis(1), |row| row.dot(&row).sqrt());

  Ok(dots / (company_norms * candidate_norm + EPSILON))
}
