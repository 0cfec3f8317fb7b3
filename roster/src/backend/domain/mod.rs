//! # Domain Module
//!
//! Contains all business logic for the student roster.
//!
//! This module encapsulates the rules by which students are created, edited,
//! excluded and restored, searched, sorted and paginated. It operates
//! independently of any specific UI framework; the store it mutates is reached
//! through the `StudentStorage` trait.
//!
//! ## Module Organization
//!
//! - **validation**: Name, identifier, birth date and date range rules
//! - **student_filter**: Search criteria matching and name ordering
//! - **pagination**: Page slicing and page position state
//! - **student_form**: The add/edit form state machine
//! - **roster_screen**: Orchestrates the above into what the screen shows
//! - **roster_table**: Row formatting and locale-aware date display
//! - **labels**: Bilingual UI label lookup
//!
//! ## Business Rules
//!
//! - Identifiers are exactly 13 digits; uniqueness is not enforced
//! - Birth dates lie between 1900-01-01 and today, inclusive
//! - Only a valid, edited form can be submitted
//! - Excluded students stay listed but cannot be edited
//! - The displayed list is always sorted by name, ties in insertion order

pub mod clock;
pub mod commands;
pub mod errors;
pub mod labels;
pub mod models;
pub mod pagination;
pub mod roster_screen;
pub mod roster_table;
pub mod student_filter;
pub mod student_form;
pub mod validation;

pub use clock::*;
pub use errors::RosterError;
pub use labels::*;
pub use pagination::*;
pub use roster_screen::*;
pub use roster_table::*;
pub use student_filter::*;
pub use student_form::*;
pub use validation::*;
