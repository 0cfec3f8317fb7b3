pub mod backend;

pub use backend::{initialize_backend, initialize_backend_with_clock, AppState, RosterConfig};
