//! Risk factor attribution over the full outage history
//!
//! Five fixed factors, each scored as the share of records matching its
//! predicate. Confidence weights are fixed constants per factor, not
//! computed.

use crate::records::{OutageRecord, OutageType, Severity};
use serde::{Deserialize, Serialize};

/// Duration above which an outage counts as long-running, in hours
pub const LONG_DURATION_HOURS: f64 = 4.0;

/// Impact above which a factor triggers a recommendation, in percent
pub const FACTOR_IMPACT_THRESHOLD: f64 = 30.0;

pub const HIGH_SEVERITY_FACTOR: &str = "High Severity Outages";
pub const PRODUCTION_FACTOR: &str = "Production Environment";
pub const WEEKEND_FACTOR: &str = "Weekend Deployments";
pub const EXTERNAL_FACTOR: &str = "External Dependencies";
pub const LONG_DURATION_FACTOR: &str = "Long Duration Outages";

/// One scored risk factor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Factor label
    pub factor: String,
    /// Share of records matching the factor's predicate, 0-100, one decimal
    pub impact: f64,
    /// Fixed confidence weight for the factor
    pub confidence: f64,
}

/// Compute the five fixed risk factors, in their fixed order.
///
/// An empty record set scores every factor at zero impact rather than
/// dividing by zero; the full-pipeline empty-input guard lives at the
/// forecaster entry point, not here.
pub fn analyze_risk_factors(records: &[OutageRecord]) -> Vec<RiskFactor> {
    let definitions: [(&str, f64, fn(&OutageRecord) -> bool); 5] = [
        (HIGH_SEVERITY_FACTOR, 0.9, |r| r.severity == Severity::High),
        (PRODUCTION_FACTOR, 0.85, |r| r.affects_production()),
        (WEEKEND_FACTOR, 0.7, |r| r.starts_on_weekend()),
        (EXTERNAL_FACTOR, 0.8, |r| {
            r.outage_type == Some(OutageType::External)
        }),
        (LONG_DURATION_FACTOR, 0.75, |r| {
            r.duration_hours() > LONG_DURATION_HOURS
        }),
    ];

    definitions
        .iter()
        .map(|&(label, confidence, predicate)| {
            let impact = if records.is_empty() {
                0.0
            } else {
                let matching = records.iter().filter(|&r| predicate(r)).count();
                round1(100.0 * matching as f64 / records.len() as f64)
            };

            RiskFactor {
                factor: label.to_string(),
                impact,
                confidence,
            }
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
