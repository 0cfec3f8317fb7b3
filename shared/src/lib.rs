use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique, immutable identifier assigned to a student when it is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single student record held by the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Serialized as ISO 8601 (YYYY-MM-DD)
    pub birth_date: NaiveDate,
    /// National identifier, exactly 13 ASCII digits
    pub idnp: String,
    /// Soft-delete flag; excluded students stay in the roster
    pub excluded: bool,
}

/// Search criteria applied to the roster.
///
/// Empty strings and absent dates mean "no constraint" for that field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the student name
    #[serde(default)]
    pub name: String,
    /// Case-insensitive exact identifier
    #[serde(default)]
    pub idnp: String,
    /// Inclusive lower bound on the birth date
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the birth date
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn by_idnp(idnp: impl Into<String>) -> Self {
        Self {
            idnp: idnp.into(),
            ..Self::default()
        }
    }

    pub fn born_between(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
            ..Self::default()
        }
    }

    /// True when no field constrains the result
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.idnp.is_empty()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

/// Rows-per-page options offered by the roster table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Five,
    Ten,
    TwentyFive,
}

impl PageSize {
    /// Every selectable page size, smallest first
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::TwentyFive];

    pub fn rows(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Five
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PageSizeError;

    fn try_from(rows: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.rows() == rows)
            .ok_or(PageSizeError::Unsupported(rows))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.rows()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageSizeError {
    Unsupported(usize),
}

impl fmt::Display for PageSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSizeError::Unsupported(rows) => {
                write!(f, "Unsupported page size {} (expected 5, 10 or 25)", rows)
            }
        }
    }
}

impl std::error::Error for PageSizeError {}

/// UI language; affects label text and date display only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            _ => Err(LocaleError::Unknown(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocaleError {
    Unknown(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::Unknown(code) => write!(f, "Unknown locale: {}", code),
        }
    }
}

impl std::error::Error for LocaleError {}

/// Action offered by the per-row exclusion toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleAction {
    Exclude,
    Restore,
}

/// A student formatted for the roster table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRow {
    pub id: StudentId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub formatted_birth_date: String,
    pub idnp: String,
    pub excluded: bool,
    /// Excluded students cannot be opened in the edit form
    pub can_edit: bool,
    pub toggle_action: ToggleAction,
}

/// What the roster area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayState {
    /// The roster has no students at all
    StoreEmpty,
    /// An active search matched nothing
    NoResults,
    /// Rows are available for the current page
    Rows,
}

/// Everything the roster screen currently displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterView {
    pub display_state: DisplayState,
    pub rows: Vec<StudentRow>,
    /// Number of students matching the active filter (or all students)
    pub total: usize,
    pub page_index: usize,
    pub page_size: PageSize,
    pub page_count: usize,
    pub page_size_options: Vec<PageSize>,
    pub filter_active: bool,
    /// Reset is offered only while some filter field is set
    pub can_reset: bool,
    pub locale: Locale,
}

/// Whether the form creates a new student or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMode {
    Create,
    Edit(StudentId),
}

/// Field-level validation failures of the student form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    EmptyName,
    InvalidBirthDate,
    InvalidIdnp,
}

/// Snapshot of an open student form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormView {
    pub mode: FormMode,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub idnp: String,
    pub dirty: bool,
    pub valid: bool,
    pub can_submit: bool,
    pub errors: Vec<FieldError>,
}
