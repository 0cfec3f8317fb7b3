//! # Backend Module
//!
//! Contains all non-UI logic for the student roster.
//!
//! This module brings together:
//! - **Domain**: Validation, search, pagination and form rules
//! - **Storage**: The session's student store
//! - **Config**: Startup settings
//!
//! The backend is UI-agnostic. A UI calls `initialize_backend` once per
//! session and then drives the returned `AppState` with user intents, one at a
//! time, rendering `roster.view()` and `roster.form().view()` after each.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (rendering, date picker, language switch)
//!     ↓
//! RosterScreenController (intents)
//!     ↓
//! Domain services (filter, paginate, form, validation)
//!     ↓
//! StudentStorage (in-memory store)
//! ```

pub mod config;
pub mod domain;
pub mod storage;

use std::sync::Arc;

use log::info;

pub use config::RosterConfig;
pub use domain::*;
pub use storage::*;

/// Session state: one roster screen over one owned store
pub struct AppState {
    pub roster: RosterScreenController<InMemoryStudentStore>,
    pub labels: StaticLabels,
}

impl AppState {
    /// Label for `key` in the roster's current locale
    pub fn label<'a>(&self, key: &'a str) -> &'a str {
        self.labels.label(self.roster.locale(), key)
    }
}

/// Initialize the backend using the wall clock
pub fn initialize_backend(config: &RosterConfig) -> AppState {
    initialize_backend_with_clock(config, Arc::new(SystemClock))
}

/// Initialize the backend with an explicit clock
pub fn initialize_backend_with_clock(config: &RosterConfig, clock: Arc<dyn Clock>) -> AppState {
    info!("Setting up student store");
    let store = if config.seed_demo_data {
        InMemoryStudentStore::with_demo_data()
    } else {
        InMemoryStudentStore::new()
    };
    info!("Student store holds {} students", store.len());

    info!("Setting up roster screen");
    let roster = RosterScreenController::with_settings(
        store,
        clock,
        ValidationRules::new(config.min_birth_date),
        config.default_page_size,
        config.locale,
    );

    AppState {
        roster,
        labels: StaticLabels,
    }
}
