//! Domain helpers for student records.
use chrono::NaiveDate;
use shared::{Student, StudentId};

/// The roster the application starts with: (id, name, birth date, idnp)
const DEMO_STUDENTS: [(u64, &str, (i32, u32, u32), &str); 7] = [
    (1, "John Smith", (1995, 5, 15), "1234567890123"),
    (2, "Mary Johnson", (1990, 2, 3), "2345678901234"),
    (3, "Alexander Brown", (2002, 4, 20), "3456789012345"),
    (4, "Helen Davis", (1988, 11, 25), "4567890123456"),
    (5, "David Wilson", (2000, 1, 1), "5678901234567"),
    (6, "Olivia Anderson", (1986, 8, 13), "6789012345678"),
    (7, "Anna Taylor", (1993, 11, 2), "7890123456789"),
];

/// Build the seven demo students, in insertion order
pub fn demo_students() -> Vec<Student> {
    DEMO_STUDENTS
        .iter()
        .filter_map(|&(id, name, (year, month, day), idnp)| {
            let birth_date = NaiveDate::from_ymd_opt(year, month, day)?;
            Some(Student {
                id: StudentId(id),
                name: name.to_string(),
                birth_date,
                idnp: idnp.to_string(),
                excluded: false,
            })
        })
        .collect()
}

/// Next unused id after the given students
pub fn next_student_id(students: &[Student]) -> StudentId {
    let max = students.iter().map(|s| s.id.0).max().unwrap_or(0);
    StudentId(max + 1)
}
