//! In-memory student store.
//!
//! Lives for the duration of the session; nothing is persisted.

use log::{info, warn};
use shared::{Student, StudentId};

use super::traits::StudentStorage;
use crate::backend::domain::commands::students::{CreateStudentCommand, UpdateStudentCommand};
use crate::backend::domain::errors::RosterError;
use crate::backend::domain::models::student::{demo_students, next_student_id};

#[derive(Debug, Clone)]
pub struct InMemoryStudentStore {
    students: Vec<Student>,
    next_id: u64,
}

impl Default for InMemoryStudentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStudentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding the given students.
    /// New ids continue after the highest existing one.
    pub fn with_students(students: Vec<Student>) -> Self {
        let next_id = next_student_id(&students).0;
        Self { students, next_id }
    }

    /// Create a store seeded with the demo roster
    pub fn with_demo_data() -> Self {
        Self::with_students(demo_students())
    }

    fn find_mut(&mut self, id: StudentId) -> Result<&mut Student, RosterError> {
        self.students
            .iter_mut()
            .find(|student| student.id == id)
            .ok_or(RosterError::NotFound(id))
    }
}

impl StudentStorage for InMemoryStudentStore {
    fn create(&mut self, command: CreateStudentCommand) -> Student {
        let student = Student {
            id: StudentId(self.next_id),
            name: command.name,
            birth_date: command.birth_date,
            idnp: command.idnp,
            excluded: false,
        };
        self.next_id += 1;
        self.students.push(student.clone());

        info!("Created student: {} with ID: {}", student.name, student.id);
        student
    }

    fn update(&mut self, id: StudentId, command: UpdateStudentCommand) -> Result<Student, RosterError> {
        let student = match self.find_mut(id) {
            Ok(student) => student,
            Err(e) => {
                warn!("Cannot update student: {}", e);
                return Err(e);
            }
        };

        student.name = command.name;
        student.birth_date = command.birth_date;
        student.idnp = command.idnp;

        info!("Updated student: {} with ID: {}", student.name, student.id);
        Ok(student.clone())
    }

    fn toggle_exclusion(&mut self, id: StudentId) -> Result<Student, RosterError> {
        let student = match self.find_mut(id) {
            Ok(student) => student,
            Err(e) => {
                warn!("Cannot toggle exclusion: {}", e);
                return Err(e);
            }
        };

        student.excluded = !student.excluded;

        info!(
            "Student {} is now {}",
            student.id,
            if student.excluded { "excluded" } else { "restored" }
        );
        Ok(student.clone())
    }

    fn get(&self, id: StudentId) -> Option<Student> {
        self.students.iter().find(|student| student.id == id).cloned()
    }

    fn list(&self) -> Vec<Student> {
        self.students.clone()
    }

    fn len(&self) -> usize {
        self.students.len()
    }
}
