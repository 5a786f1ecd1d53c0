//! Error types for input validation and configuration.

use thiserror::Error;

/// Errors raised while turning collaborator-supplied data into a
/// classifiable case, or while validating a dosage table.
///
/// Classification of an already-typed [`CaseInputs`](crate::case::CaseInputs)
/// never fails; every variant here belongs to the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// A field required by the active histology branch was not supplied.
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// A field carried a value outside its option set.
    #[error("unrecognized value '{value}' for field '{field}'")]
    UnknownValue { field: &'static str, value: String },

    /// A dosage table entry was blank.
    #[error("dosage table entry '{entry}' must not be empty")]
    InvalidDosageTable { entry: &'static str },
}

impl ClassifyError {
    /// Name of the offending field or table entry.
    pub fn field(&self) -> &'static str {
        match self {
            ClassifyError::MissingField { field } => field,
            ClassifyError::UnknownValue { field, .. } => field,
            ClassifyError::InvalidDosageTable { entry } => entry,
        }
    }
}
