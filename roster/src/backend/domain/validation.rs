//! Validation rules for student input.
//!
//! These checks never fail loudly: they classify a candidate as valid or not,
//! and the form decides what to do with the answer. The only non-deterministic
//! input is "today", which callers pass in explicitly.

use chrono::NaiveDate;
use shared::FieldError;

/// Required length of a national identifier
pub const IDNP_LENGTH: usize = 13;

/// Earliest accepted birth date (1900-01-01)
pub fn earliest_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Bounds used when validating birth dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub earliest_birth_date: NaiveDate,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            earliest_birth_date: earliest_birth_date(),
        }
    }
}

impl ValidationRules {
    pub fn new(earliest_birth_date: NaiveDate) -> Self {
        Self { earliest_birth_date }
    }

    /// True iff the date lies within `[earliest_birth_date, today]`
    pub fn is_valid_birth_date(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= self.earliest_birth_date && date <= today
    }

    /// Validate an optional filter date range.
    ///
    /// Absent bounds are fine; present bounds must be valid birth dates, and
    /// when both are present the start must not come after the end.
    pub fn is_valid_date_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> bool {
        match (start, end) {
            (None, None) => true,
            (Some(date), None) | (None, Some(date)) => self.is_valid_birth_date(date, today),
            (Some(start), Some(end)) => {
                self.is_valid_birth_date(start, today)
                    && self.is_valid_birth_date(end, today)
                    && start <= end
            }
        }
    }

    /// Collect field errors for a candidate student
    pub fn field_errors(
        &self,
        name: &str,
        birth_date: Option<NaiveDate>,
        idnp: &str,
        today: NaiveDate,
    ) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if !is_valid_name(name) {
            errors.push(FieldError::EmptyName);
        }

        let birth_date_ok = birth_date
            .map(|date| self.is_valid_birth_date(date, today))
            .unwrap_or(false);
        if !birth_date_ok {
            errors.push(FieldError::InvalidBirthDate);
        }

        if !is_valid_identifier(idnp) {
            errors.push(FieldError::InvalidIdnp);
        }

        errors
    }
}

/// A name is valid when it has at least one non-whitespace character
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// True iff the candidate is exactly 13 ASCII digits
pub fn is_valid_identifier(candidate: &str) -> bool {
    candidate.len() == IDNP_LENGTH && candidate.bytes().all(|b| b.is_ascii_digit())
}

/// Check a birth date against the default bounds
pub fn is_valid_birth_date(date: NaiveDate, today: NaiveDate) -> bool {
    ValidationRules::default().is_valid_birth_date(date, today)
}

/// Check a filter date range against the default bounds
pub fn is_valid_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> bool {
    ValidationRules::default().is_valid_date_range(start, end, today)
}

/// Parse an ISO 8601 date (YYYY-MM-DD); anything else is `None`
pub fn parse_birth_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// Keep only ASCII digits, capped at the identifier length.
///
/// Mirrors the identifier input box, which drops anything that is not a digit.
pub fn sanitize_identifier_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(IDNP_LENGTH)
        .collect()
}
