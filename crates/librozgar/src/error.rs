use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum RozgarError {
  #[error("invalid record: {0}")]
  InvalidRecord(String),
  #[error("invalid match parameters: {0}")]
  InvalidParams(String),
  #[error("skill is not part of the vocabulary: {0}")]
  UnknownSkill(String),
  #[error("vector dimensions do not match: expected {expected}, got {actual}")]
  ShapeMismatch { expected: usize, actual: usize },
  #[error(transparent)]
  OtherError(#[from] anyhow::Error),
}

impl From<ValidationErrors> for RozgarError {
  fn from(errs: ValidationErrors) -> Self {
    RozgarError::InvalidRecord(describe(&errs))
  }
}

pub(crate) fn describe(errs: &ValidationErrors) -> String {
  let mut fields = errs.field_errors().into_keys().map(|field| field.to_string()).collect::<Vec<_>>();

  fields.sort();

  format!("invalid fields: {}", fields.join(", "))
}
