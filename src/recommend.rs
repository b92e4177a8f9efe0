//! Deterministic recommendation rule table

use crate::risk::{
    RiskFactor, EXTERNAL_FACTOR, FACTOR_IMPACT_THRESHOLD, HIGH_SEVERITY_FACTOR,
    LONG_DURATION_FACTOR, PRODUCTION_FACTOR, WEEKEND_FACTOR,
};
use crate::trend::{SeasonalityStrength, TrendAnalysis, TrendDirection};

/// Residual volatility above which the volatility recommendations fire
pub const VOLATILITY_RECOMMENDATION_THRESHOLD: f64 = 1.5;

const INCREASING_TREND_MESSAGES: [&str; 2] = [
    "Outage frequency is trending upward; review recent change and deployment practices",
    "Consider tightening change-review requirements until the trend flattens",
];

const STRONG_SEASONALITY_MESSAGES: [&str; 2] = [
    "Outages follow a strong weekly pattern; schedule maintenance outside peak weekdays",
    "Align on-call staffing with the observed weekly outage pattern",
];

const HIGH_VOLATILITY_MESSAGES: [&str; 2] = [
    "Outage counts are highly volatile; stabilize the release cadence",
    "Add pre-deployment verification to reduce unplanned variance",
];

const ALL_CLEAR_MESSAGES: [&str; 2] = [
    "Outage levels look stable; maintain current operational practices",
    "Continue monitoring for emerging outage patterns",
];

/// Map `(trend, seasonality, volatility, factors)` to an ordered list of
/// recommendations. No randomness; same inputs always yield the same list.
pub fn build_recommendations(analysis: &TrendAnalysis, factors: &[RiskFactor]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if analysis.trend == TrendDirection::Increasing {
        recommendations.extend(INCREASING_TREND_MESSAGES.iter().map(|m| m.to_string()));
    }

    if analysis.seasonality == SeasonalityStrength::Strong {
        recommendations.extend(STRONG_SEASONALITY_MESSAGES.iter().map(|m| m.to_string()));
    }

    if analysis.volatility > VOLATILITY_RECOMMENDATION_THRESHOLD {
        recommendations.extend(HIGH_VOLATILITY_MESSAGES.iter().map(|m| m.to_string()));
    }

    for factor in factors {
        if factor.impact > FACTOR_IMPACT_THRESHOLD {
            if let Some(message) = factor_message(&factor.factor) {
                recommendations.push(message.to_string());
            }
        }
    }

    if recommendations.is_empty() {
        recommendations.extend(ALL_CLEAR_MESSAGES.iter().map(|m| m.to_string()));
    }

    recommendations
}

fn factor_message(factor: &str) -> Option<&'static str> {
    match factor {
        HIGH_SEVERITY_FACTOR => {
            Some("High severity outages dominate; review incident response runbooks")
        }
        PRODUCTION_FACTOR => {
            Some("Most outages touch production; add extra approval gates for production changes")
        }
        WEEKEND_FACTOR => Some("Many outages start on weekends; avoid weekend deployments"),
        EXTERNAL_FACTOR => {
            Some("External dependencies drive outages; establish vendor fallback plans")
        }
        LONG_DURATION_FACTOR => {
            Some("Outages run long; break maintenance windows into smaller batches")
        }
        _ => None,
    }
}
