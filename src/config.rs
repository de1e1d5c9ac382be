use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level dashboard configuration.
///
/// Every field has a default, and a missing config file yields the full
/// default configuration, so the binary runs without any setup.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Clinic identity.
    #[serde(default)]
    pub clinic: ClinicToml,

    /// Patient listing settings.
    #[serde(default)]
    pub listing: ListingToml,

    /// Schedule widget settings.
    #[serde(default)]
    pub schedule: ScheduleToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClinicToml {
    #[serde(default = "default_clinic_name")]
    pub name: String,
}

impl Default for ClinicToml {
    fn default() -> Self {
        Self {
            name: default_clinic_name(),
        }
    }
}

fn default_clinic_name() -> String {
    "AudioSight Clinic".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListingToml {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

impl Default for ListingToml {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
        }
    }
}

fn default_items_per_page() -> usize {
    7
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleToml {
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
}

impl Default for ScheduleToml {
    fn default() -> Self {
        Self {
            upcoming_limit: default_upcoming_limit(),
        }
    }
}

fn default_upcoming_limit() -> usize {
    2
}

impl DashboardConfig {
    /// Loads configuration from a TOML file, or defaults if it is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}
