//! Student search and ordering.
//!
//! Filtering and sorting are separate steps. `search` chains them and is what
//! the roster screen uses for both the unfiltered view and search results.
//!
//! ## Matching rules
//!
//! - **Name**: case-insensitive substring
//! - **Identifier**: case-insensitive exact match on the whole value
//! - **Birth date**: inclusive `[start_date, end_date]`, absent bounds are open
//!
//! A student must satisfy all three to be included. Empty criteria match all.

use std::cmp::Ordering;

use icu_collator::{CaseFirst, Collator, CollatorOptions, Strength};
use log::warn;
use shared::{FilterCriteria, Student};

/// True when the student satisfies every criterion
pub fn matches_criteria(student: &Student, criteria: &FilterCriteria) -> bool {
    matches_name(student, &criteria.name)
        && matches_idnp(student, &criteria.idnp)
        && matches_birth_date(student, criteria)
}

fn matches_name(student: &Student, name: &str) -> bool {
    name.is_empty() || student.name.to_lowercase().contains(&name.to_lowercase())
}

fn matches_idnp(student: &Student, idnp: &str) -> bool {
    idnp.is_empty() || student.idnp.to_lowercase() == idnp.to_lowercase()
}

fn matches_birth_date(student: &Student, criteria: &FilterCriteria) -> bool {
    let after_start = criteria
        .start_date
        .map_or(true, |start| student.birth_date >= start);
    let before_end = criteria
        .end_date
        .map_or(true, |end| student.birth_date <= end);
    after_start && before_end
}

/// Copies of the students matching the criteria, in their original order
pub fn filter_students(students: &[Student], criteria: &FilterCriteria) -> Vec<Student> {
    students
        .iter()
        .filter(|student| matches_criteria(student, criteria))
        .cloned()
        .collect()
}

thread_local! {
    static NAME_COLLATOR: Option<Collator> = name_collator();
}

/// Root (CLDR) collation at tertiary strength with lowercase first.
/// The root order already places accented Latin letters and Cyrillic `ё`
/// next to their base letters, so both locales share it.
fn name_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    options.case_first = Some(CaseFirst::LowerFirst);

    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!("Name collator unavailable, using plain ordering: {:?}", e);
            None
        }
    }
}

fn compare_with(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
    }
}

/// Compare two names with a Unicode collator.
///
/// Base letters decide first, then accents, then case (lowercase before
/// uppercase).
pub fn collate_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR.with(|collator| compare_with(collator.as_ref(), a, b))
}

/// Sort by name ascending; ties keep insertion order
pub fn sort_students_by_name(students: &mut [Student]) {
    NAME_COLLATOR.with(|collator| {
        students.sort_by(|a, b| compare_with(collator.as_ref(), &a.name, &b.name))
    });
}

/// Filter then sort
pub fn search(students: &[Student], criteria: &FilterCriteria) -> Vec<Student> {
    let mut matches = filter_students(students, criteria);
    sort_students_by_name(&mut matches);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::student::demo_students;
    use chrono::NaiveDate;
    use shared::StudentId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn student(id: u64, name: &str) -> Student {
        Student {
            id: StudentId(id),
            name: name.to_string(),
            birth_date: date(2000, 1, 1),
            idnp: format!("{:013}", id),
            excluded: false,
        }
    }

    fn names(students: &[Student]) -> Vec<&str> {
        students.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_returns_all_sorted() {
        let result = search(&demo_students(), &FilterCriteria::default());
        assert_eq!(
            names(&result),
            vec![
                "Alexander Brown",
                "Anna Taylor",
                "David Wilson",
                "Helen Davis",
                "John Smith",
                "Mary Johnson",
                "Olivia Anderson",
            ]
        );
    }

    #[test]
    fn test_name_match_is_case_insensitive_substring() {
        let result = search(&demo_students(), &FilterCriteria::by_name("mary"));
        assert_eq!(names(&result), vec!["Mary Johnson"]);

        let result = search(&demo_students(), &FilterCriteria::by_name("SON"));
        assert_eq!(
            names(&result),
            vec!["David Wilson", "Mary Johnson", "Olivia Anderson"]
        );
    }

    #[test]
    fn test_idnp_match_is_exact() {
        let students = demo_students();

        let result = search(&students, &FilterCriteria::by_idnp("123"));
        assert!(result.is_empty());

        let result = search(&students, &FilterCriteria::by_idnp("1234567890123"));
        assert_eq!(names(&result), vec!["John Smith"]);

        // A name substring still finds the same student
        let result = search(&students, &FilterCriteria::by_name("ohn sm"));
        assert_eq!(names(&result), vec!["John Smith"]);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let students = demo_students();

        // Mary Johnson 1990-02-03, Anna Taylor 1993-11-02
        let criteria = FilterCriteria::born_between(Some(date(1990, 2, 3)), Some(date(1993, 11, 2)));
        let result = search(&students, &criteria);
        assert_eq!(names(&result), vec!["Anna Taylor", "Mary Johnson"]);

        let criteria = FilterCriteria::born_between(Some(date(2000, 1, 1)), None);
        let result = search(&students, &criteria);
        assert_eq!(names(&result), vec!["Alexander Brown", "David Wilson"]);

        let criteria = FilterCriteria::born_between(None, Some(date(1986, 8, 13)));
        let result = search(&students, &criteria);
        assert_eq!(names(&result), vec!["Olivia Anderson"]);
    }

    #[test]
    fn test_criteria_are_combined() {
        let criteria = FilterCriteria {
            name: "a".to_string(),
            idnp: String::new(),
            start_date: Some(date(1990, 1, 1)),
            end_date: Some(date(1999, 12, 31)),
        };
        let result = search(&demo_students(), &criteria);
        assert_eq!(names(&result), vec!["Anna Taylor", "Mary Johnson"]);
    }

    #[test]
    fn test_reversed_date_range_matches_nothing() {
        let criteria = FilterCriteria::born_between(Some(date(2000, 1, 1)), Some(date(1990, 1, 1)));
        assert!(search(&demo_students(), &criteria).is_empty());
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut students = vec![student(1, "Sam"), student(2, "Alex"), student(3, "Sam")];
        sort_students_by_name(&mut students);

        let ids: Vec<u64> = students.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_collate_names() {
        assert_eq!(collate_names("anna", "Bob"), Ordering::Less);
        assert_eq!(collate_names("Bob", "anna"), Ordering::Greater);
        assert_eq!(collate_names("anna", "Anna"), Ordering::Less);
        assert_eq!(collate_names("Ann", "Anna"), Ordering::Less);
        assert_eq!(collate_names("Anna", "Anna"), Ordering::Equal);
    }

    #[test]
    fn test_collate_accented_latin_with_base_letter() {
        assert_eq!(collate_names("Émile", "Frank"), Ordering::Less);
        assert_eq!(collate_names("Zoe", "Élodie"), Ordering::Greater);
        // The accent only breaks ties between otherwise equal names
        assert_eq!(collate_names("Emile", "Émile"), Ordering::Less);
    }

    #[test]
    fn test_collate_cyrillic_yo_before_zhe() {
        assert_eq!(collate_names("Алёна", "Алжир"), Ordering::Less);
        assert_eq!(collate_names("Алёна", "Алена"), Ordering::Greater);
        assert_eq!(collate_names("Яна", "ёлка"), Ordering::Greater);
    }

    #[test]
    fn test_sort_mixed_scripts() {
        let mut students = vec![
            student(1, "Яна"),
            student(2, "Frank"),
            student(3, "Алёна"),
            student(4, "Émile"),
            student(5, "Алжир"),
        ];
        sort_students_by_name(&mut students);
        assert_eq!(names(&students), vec!["Émile", "Frank", "Алёна", "Алжир", "Яна"]);
    }

    #[test]
    fn test_filter_keeps_original_order() {
        let students = vec![student(1, "Zed"), student(2, "Amy")];
        let result = filter_students(&students, &FilterCriteria::default());
        assert_eq!(names(&result), vec!["Zed", "Amy"]);
    }
}
