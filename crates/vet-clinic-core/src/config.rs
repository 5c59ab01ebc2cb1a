//! Clinic configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capacity given to veterinarians created without an explicit one.
pub const DEFAULT_MAX_DAILY_APPOINTMENTS: u32 = 3;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// How eligible candidates are ranked during allocation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CandidateOrdering {
    /// Fewest held appointments first; ties go to the earlier candidate
    #[default]
    LeastLoaded,
    /// First eligible candidate in the order given
    InputOrder,
}

/// Settings shared by the allocator and the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClinicConfig {
    pub default_max_daily_appointments: u32,
    pub candidate_ordering: CandidateOrdering,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            default_max_daily_appointments: DEFAULT_MAX_DAILY_APPOINTMENTS,
            candidate_ordering: CandidateOrdering::default(),
        }
    }
}

impl ClinicConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_max_daily_appointments == 0 {
            return Err(ConfigError::Invalid(
                "default_max_daily_appointments must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn with_ordering(mut self, ordering: CandidateOrdering) -> Self {
        self.candidate_ordering = ordering;
        self
    }
}
