use std::collections::HashMap;

use ahash::RandomState;

/// Mapping from skill token to vector position for a single match run.
///
/// Tokens are trimmed but otherwise compared verbatim (`"sql"` and `"SQL"`
/// are two distinct skills). Positions are assigned in first-seen order, so
/// building the same inputs twice yields the same layout.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
  tokens: Vec<String>,
  positions: HashMap<String, usize, RandomState>,
}

impl Vocabulary {
  /// Build the vocabulary covering the candidate's skills and every posting's skills.
  pub fn build<'s, C, P, S>(candidate: C, postings: P) -> Vocabulary
  where
    C: IntoIterator<Item = &'s String>,
    P: IntoIterator<Item = S>,
    S: IntoIterator<Item = &'s String>,
  {
    let mut vocabulary = Vocabulary::default();

    for skill in candidate {
      vocabulary.insert(skill);
    }

    for skills in postings {
      for skill in skills {
        vocabulary.insert(skill);
      }
    }

    tracing::trace!(size = vocabulary.len(), "built skill vocabulary");

    vocabulary
  }

  fn insert(&mut self, skill: &str) {
    let Some(token) = normalize(skill) else {
      return;
    };

    if !self.positions.contains_key(token) {
      self.positions.insert(token.to_string(), self.tokens.len());
      self.tokens.push(token.to_string());
    }
  }

  /// Vector position of a skill, if it is part of the vocabulary.
  pub fn position(&self, skill: &str) -> Option<usize> {
    normalize(skill).and_then(|token| self.positions.get(token).copied())
  }

  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }

  pub fn tokens(&self) -> &[String] {
    &self.tokens
  }
}

/// Trimmed token, or `None` for blank input.
pub(crate) fn normalize(skill: &str) -> Option<&str> {
  match skill.trim() {
    "" => None,
    token => Some(token),
  }
}
