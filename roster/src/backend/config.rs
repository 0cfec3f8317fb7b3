//! Roster configuration.
//!
//! Read from a YAML file; every field is optional and missing files fall back
//! to the defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use shared::{Locale, PageSize};

use crate::backend::domain::validation::earliest_birth_date;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Rows per page when the roster opens (5, 10 or 25)
    pub default_page_size: PageSize,
    pub locale: Locale,
    /// Start the session with the demo students
    pub seed_demo_data: bool,
    /// Earliest accepted birth date
    pub min_birth_date: NaiveDate,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            default_page_size: PageSize::Five,
            locale: Locale::En,
            seed_demo_data: true,
            min_birth_date: earliest_birth_date(),
        }
    }
}

impl RosterConfig {
    /// Load configuration from a YAML file, or defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&yaml_content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml_str(yaml_content: &str) -> Result<Self> {
        let config: RosterConfig = serde_yaml::from_str(yaml_content)?;
        Ok(config)
    }
}
