//! # Storage Traits
//!
//! This module defines the storage abstraction the roster works against.
//! The store is the single source of truth for student records: every
//! consumer receives copies, never references into the collection.

use shared::{Student, StudentId};

use crate::backend::domain::commands::students::{CreateStudentCommand, UpdateStudentCommand};
use crate::backend::domain::errors::RosterError;

/// Trait defining the interface for student storage operations
///
/// The store trusts its caller: no validation happens here. Mutations are
/// serialized by `&mut self`, so a shared store must be wrapped in a lock by
/// whoever shares it.
pub trait StudentStorage {
    /// Append a new student with a fresh id and `excluded = false`
    fn create(&mut self, command: CreateStudentCommand) -> Student;

    /// Replace name, birth date and idnp of an existing student.
    /// Identity and exclusion status are preserved.
    /// An unknown id leaves the collection unchanged and yields `NotFound`.
    fn update(&mut self, id: StudentId, command: UpdateStudentCommand) -> Result<Student, RosterError>;

    /// Flip the exclusion flag of an existing student.
    /// An unknown id leaves the collection unchanged and yields `NotFound`.
    fn toggle_exclusion(&mut self, id: StudentId) -> Result<Student, RosterError>;

    /// Retrieve a copy of a specific student
    fn get(&self, id: StudentId) -> Option<Student>;

    /// Copies of all students, in insertion order
    fn list(&self) -> Vec<Student>;

    /// Number of stored students
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
