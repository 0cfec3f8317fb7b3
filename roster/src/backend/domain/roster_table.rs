//! Roster table display logic.
//!
//! Turns student records into rows ready for rendering: birth dates are
//! formatted for the active locale, and each row carries the actions it
//! offers (edit is withheld from excluded students).

use chrono::{Datelike, NaiveDate};
use shared::{Locale, Student, StudentRow, ToggleAction};

/// Date formatting options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    MonthDayYear, // "5/15/1995"
    DayMonthYear, // "15.05.1995"
}

impl DateFormat {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => DateFormat::MonthDayYear,
            Locale::Ru => DateFormat::DayMonthYear,
        }
    }
}

/// Roster table service that formats students for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterTableService {
    date_format: DateFormat,
}

impl Default for RosterTableService {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

impl RosterTableService {
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            date_format: DateFormat::for_locale(locale),
        }
    }

    pub fn date_format(&self) -> DateFormat {
        self.date_format
    }

    /// Format a list of students for table display
    pub fn format_rows(&self, students: &[Student]) -> Vec<StudentRow> {
        students.iter().map(|s| self.format_row(s)).collect()
    }

    /// Format a single student for display
    pub fn format_row(&self, student: &Student) -> StudentRow {
        StudentRow {
            id: student.id,
            name: student.name.clone(),
            birth_date: student.birth_date,
            formatted_birth_date: self.format_date(student.birth_date),
            idnp: student.idnp.clone(),
            excluded: student.excluded,
            can_edit: !student.excluded,
            toggle_action: toggle_action(student),
        }
    }

    /// Format a date for display based on configuration
    pub fn format_date(&self, date: NaiveDate) -> String {
        match self.date_format {
            DateFormat::MonthDayYear => {
                format!("{}/{}/{}", date.month(), date.day(), date.year())
            }
            DateFormat::DayMonthYear => {
                format!("{:02}.{:02}.{}", date.day(), date.month(), date.year())
            }
        }
    }
}

/// Excluded students can be restored; everyone else can be excluded
pub fn toggle_action(student: &Student) -> ToggleAction {
    if student.excluded {
        ToggleAction::Restore
    } else {
        ToggleAction::Exclude
    }
}
