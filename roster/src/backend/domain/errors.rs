use shared::StudentId;

/// Errors raised by roster operations.
///
/// Invalid field input is never reported here; it only shows up as an
/// invalid form (see `StudentFormController::errors`).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RosterError {
    #[error("Student not found: {0}")]
    NotFound(StudentId),
    #[error("Unsupported page size {0} (expected 5, 10 or 25)")]
    UnsupportedPageSize(usize),
    #[error("Student form is not open")]
    FormClosed,
    #[error("Student form cannot be submitted (valid: {valid}, dirty: {dirty})")]
    NotSubmittable { valid: bool, dirty: bool },
    #[error("Excluded student cannot be edited: {0}")]
    EditExcluded(StudentId),
}
