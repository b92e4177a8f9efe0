//! Outage record domain model
//!
//! Records are produced by the storage layer; this crate only reads them.
//! All calendar bucketing in the crate uses the UTC day of `start`.

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Outage severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Origin of the outage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutageType {
    Internal,
    External,
}

/// One planned maintenance window or incident entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutageRecord {
    /// Start of the outage window
    pub start: DateTime<Utc>,
    /// End of the outage window, always after `start`
    pub end: DateTime<Utc>,
    /// Affected environment names
    pub environments: Vec<String>,
    /// Outage severity
    pub severity: Severity,
    /// Outage origin; legacy rows may not carry one
    pub outage_type: Option<OutageType>,
}

impl OutageRecord {
    /// Create a new outage record, validating that the window is non-empty
    pub fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        environments: Vec<String>,
        severity: Severity,
        outage_type: Option<OutageType>,
    ) -> Result<Self> {
        if end <= start {
            return Err(ForecastError::ValidationError(
                "Outage end must be after its start".to_string(),
            ));
        }

        Ok(Self {
            start,
            end,
            environments,
            severity,
            outage_type,
        })
    }

    /// Duration of the outage window
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Duration in fractional hours
    pub fn duration_hours(&self) -> f64 {
        self.duration().num_seconds() as f64 / 3600.0
    }

    /// Whether the outage starts on a Saturday or Sunday (UTC)
    pub fn starts_on_weekend(&self) -> bool {
        matches!(self.start.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Whether any affected environment looks like production
    pub fn affects_production(&self) -> bool {
        self.environments
            .iter()
            .any(|env| env.to_lowercase().contains("prod"))
    }
}
