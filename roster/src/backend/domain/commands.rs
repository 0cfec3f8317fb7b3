//! Domain-level command types.
//! These structs are what the form hands to the student store. They carry
//! already-validated values; the store does not re-check them.

pub mod students {
    use chrono::NaiveDate;

    /// Input for creating a new student.
    #[derive(Debug, Clone, PartialEq)]
    pub struct CreateStudentCommand {
        pub name: String,
        pub birth_date: NaiveDate,
        pub idnp: String,
    }

    /// Replacement values for an existing student.
    /// Identity and exclusion status are never part of an update.
    #[derive(Debug, Clone, PartialEq)]
    pub struct UpdateStudentCommand {
        pub name: String,
        pub birth_date: NaiveDate,
        pub idnp: String,
    }
}
