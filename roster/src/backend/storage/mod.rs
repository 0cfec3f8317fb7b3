//! # Storage Module
//!
//! Holds the student records for the running session.
//!
//! The roster keeps no data beyond the session, so the only backend is an
//! in-memory store. Domain code depends on the `StudentStorage` trait rather
//! than on the concrete store, and each session owns exactly one store
//! instance; nothing here is process-global.

pub mod memory;
pub mod traits;

pub use memory::InMemoryStudentStore;
pub use traits::StudentStorage;
