use ndarray::{Array1, Array2, ArrayViewMut1};

use crate::{
  error::RozgarError,
  matching::{UnknownSkills, vocabulary::Vocabulary},
};

/// Count vector of `skills` over `vocabulary`.
///
/// Each position holds how many times the matching token appears in the
/// input. Blank tokens are skipped, tokens missing from the vocabulary are
/// handled according to `policy`.
pub fn vectorize(skills: &[String], vocabulary: &Vocabulary, policy: UnknownSkills) -> Result<Array1<f64>, RozgarError> {
  let mut vector = Array1::zeros(vocabulary.len());

  fill(vector.view_mut(), skills, vocabulary, policy)?;

  Ok(vector)
}

/// Stack the count vectors of several skill lists into a `N×D` matrix, one row per list.
pub fn vectorize_batch<'s, I>(lists: I, vocabulary: &Vocabulary, policy: UnknownSkills) -> Result<Array2<f64>, RozgarError>
where
  I: ExactSizeIterator<Item = &'s [String]>,
{
  let mut matrix = Array2::zeros((lists.len(), vocabulary.len()));

  for (row, skills) in matrix.rows_mut().into_iter().zip(lists) {
    fill(row, skills, vocabulary, policy)?;
  }

  Ok(matrix)
}

fn fill(mut row: ArrayViewMut1<f64>, skills: &[String], vocabulary: &Vocabulary, policy: UnknownSkills) -> Result<(), RozgarError> {
  for skill in skills {
    match vocabulary.position(skill) {
      Some(index) => row[index] += 1.0,

      None if skill.trim().is_empty() => {}

      None => match policy {
        UnknownSkills::Ignore => {}
        UnknownSkills::Warn => tracing::warn!(skill = skill.as_str(), "skill is not part of the vocabulary, ignoring"),
        UnknownSkills::Reject => return Err(RozgarError::UnknownSkill(skill.clone())),
      },
    }
  }

  Ok(())
}
