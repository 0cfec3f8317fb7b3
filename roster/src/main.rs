use std::path::PathBuf;

use anyhow::Result;
use log::info;
use shared::FilterCriteria;
use student_roster::{initialize_backend, RosterConfig};

fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=info for intent tracing)
    env_logger::init();
    info!("Starting student roster");

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("roster.yaml"));
    let config = RosterConfig::load(&config_path)?;

    let mut app = initialize_backend(&config);
    println!("{}", app.label("appTitle"));
    println!("{}", serde_json::to_string_pretty(&app.roster.view())?);

    // Optional second argument: a name to search for
    if let Some(name) = std::env::args().nth(2) {
        app.roster.search(FilterCriteria::by_name(name));
        println!("{}", serde_json::to_string_pretty(&app.roster.view())?);
    }

    Ok(())
}
