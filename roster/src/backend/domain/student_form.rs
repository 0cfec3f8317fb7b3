//! Add/edit student form.
//!
//! The form is a small state machine:
//!
//! ```text
//! Closed --open_create--> Open(Create, blank draft)
//! Closed --open_edit----> Open(Edit(id), draft seeded from the student)
//! Open   --set_*--------> Open (dirty = true)
//! Open   --submit-------> Closed   (only when valid && dirty)
//! Open   --cancel-------> Closed   (draft discarded)
//! ```
//!
//! Validity is derived from the draft each time it is asked for, with "today"
//! sampled from the clock on every call.

use std::sync::Arc;

use chrono::NaiveDate;
use log::{info, warn};
use shared::{FieldError, FormMode, FormView, Student};

use super::clock::Clock;
use super::commands::students::{CreateStudentCommand, UpdateStudentCommand};
use super::errors::RosterError;
use super::validation::{parse_birth_date, sanitize_identifier_input, ValidationRules};
use crate::backend::storage::traits::StudentStorage;

/// Unsaved form values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentDraft {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub idnp: String,
    pub dirty: bool,
}

impl StudentDraft {
    fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            birth_date: Some(student.birth_date),
            idnp: student.idnp.clone(),
            dirty: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum FormState {
    Closed,
    Open { mode: FormMode, draft: StudentDraft },
}

pub struct StudentFormController {
    state: FormState,
    rules: ValidationRules,
    clock: Arc<dyn Clock>,
}

impl StudentFormController {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_rules(clock, ValidationRules::default())
    }

    pub fn with_rules(clock: Arc<dyn Clock>, rules: ValidationRules) -> Self {
        Self {
            state: FormState::Closed,
            rules,
            clock,
        }
    }

    /// Open a blank form for a new student
    pub fn open_create(&mut self) {
        self.state = FormState::Open {
            mode: FormMode::Create,
            draft: StudentDraft::default(),
        };
    }

    /// Open the form seeded with the student's current values.
    /// Callers are responsible for not offering this on excluded students.
    pub fn open_edit(&mut self, student: &Student) {
        self.state = FormState::Open {
            mode: FormMode::Edit(student.id),
            draft: StudentDraft::from_student(student),
        };
    }

    /// Discard the draft
    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open { .. })
    }

    pub fn mode(&self) -> Option<FormMode> {
        match &self.state {
            FormState::Open { mode, .. } => Some(*mode),
            FormState::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&StudentDraft> {
        match &self.state {
            FormState::Open { draft, .. } => Some(draft),
            FormState::Closed => None,
        }
    }

    fn draft_mut(&mut self) -> Result<&mut StudentDraft, RosterError> {
        match &mut self.state {
            FormState::Open { draft, .. } => Ok(draft),
            FormState::Closed => Err(RosterError::FormClosed),
        }
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), RosterError> {
        let draft = self.draft_mut()?;
        draft.name = name.to_string();
        draft.dirty = true;
        Ok(())
    }

    pub fn set_birth_date(&mut self, birth_date: Option<NaiveDate>) -> Result<(), RosterError> {
        let draft = self.draft_mut()?;
        draft.birth_date = birth_date;
        draft.dirty = true;
        Ok(())
    }

    /// Set the birth date from ISO text; unparseable text clears the date
    pub fn set_birth_date_text(&mut self, text: &str) -> Result<(), RosterError> {
        self.set_birth_date(parse_birth_date(text))
    }

    /// Set the identifier, keeping digits only (at most 13)
    pub fn set_idnp(&mut self, idnp: &str) -> Result<(), RosterError> {
        let draft = self.draft_mut()?;
        draft.idnp = sanitize_identifier_input(idnp);
        draft.dirty = true;
        Ok(())
    }

    /// Field errors of the current draft; empty when closed
    pub fn errors(&self) -> Vec<FieldError> {
        match self.draft() {
            Some(draft) => self.draft_errors(draft, self.clock.today()),
            None => Vec::new(),
        }
    }

    fn draft_errors(&self, draft: &StudentDraft, today: NaiveDate) -> Vec<FieldError> {
        self.rules
            .field_errors(&draft.name, draft.birth_date, &draft.idnp, today)
    }

    pub fn is_valid(&self) -> bool {
        self.draft().is_some() && self.errors().is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.draft().map_or(false, |draft| draft.dirty)
    }

    /// Submit is enabled only for a valid draft that has been edited
    pub fn can_submit(&self) -> bool {
        self.is_valid() && self.is_dirty()
    }

    /// Save the draft to the store and close the form.
    ///
    /// A draft that is invalid or unchanged is rejected and the form stays
    /// open. An accepted draft closes the form even if the store no longer
    /// holds the edited student.
    pub fn submit(&mut self, store: &mut dyn StudentStorage) -> Result<Student, RosterError> {
        let today = self.clock.today();
        let (mode, draft) = match &self.state {
            FormState::Open { mode, draft } => (*mode, draft),
            FormState::Closed => return Err(RosterError::FormClosed),
        };

        let valid = self.draft_errors(draft, today).is_empty();
        let birth_date = match draft.birth_date {
            Some(date) if valid && draft.dirty => date,
            _ => {
                warn!("Rejected student form submit (valid: {}, dirty: {})", valid, draft.dirty);
                return Err(RosterError::NotSubmittable {
                    valid,
                    dirty: draft.dirty,
                });
            }
        };
        let name = draft.name.trim().to_string();
        let idnp = draft.idnp.clone();
        self.state = FormState::Closed;

        match mode {
            FormMode::Create => {
                info!("Submitting new student: {}", name);
                Ok(store.create(CreateStudentCommand {
                    name,
                    birth_date,
                    idnp,
                }))
            }
            FormMode::Edit(id) => {
                info!("Submitting changes to student: {}", id);
                store.update(
                    id,
                    UpdateStudentCommand {
                        name,
                        birth_date,
                        idnp,
                    },
                )
            }
        }
    }

    /// Snapshot of the open form
    pub fn view(&self) -> Option<FormView> {
        let (mode, draft) = match &self.state {
            FormState::Open { mode, draft } => (*mode, draft),
            FormState::Closed => return None,
        };
        let errors = self.draft_errors(draft, self.clock.today());
        let valid = errors.is_empty();

        Some(FormView {
            mode,
            name: draft.name.clone(),
            birth_date: draft.birth_date,
            idnp: draft.idnp.clone(),
            dirty: draft.dirty,
            valid,
            can_submit: valid && draft.dirty,
            errors,
        })
    }
}
