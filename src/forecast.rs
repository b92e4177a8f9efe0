//! Daily outage risk projection

use crate::error::{ForecastError, Result};
use crate::smoothing::Decomposition;
use crate::trend::{LinearTrend, SeasonalityStrength, TrendAnalysis, TrendDirection};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default number of days projected into the future
pub const DEFAULT_HORIZON: usize = 30;

/// Horizon over which confidence decays to zero before flooring, in days
const CONFIDENCE_DECAY_DAYS: f64 = 60.0;

/// Lower bound on per-day confidence
pub const CONFIDENCE_FLOOR: f64 = 0.3;

/// Residual volatility above which days are flagged as high-volatility
pub const HIGH_VOLATILITY_THRESHOLD: f64 = 1.0;

/// Predicted-value thresholds for risk classification
pub const CRITICAL_RISK_THRESHOLD: f64 = 5.0;
pub const HIGH_RISK_THRESHOLD: f64 = 3.0;
pub const MEDIUM_RISK_THRESHOLD: f64 = 1.5;

pub const WEEKDAY_PEAK_FACTOR: &str = "Monday/Tuesday peak";
pub const UPWARD_TREND_FACTOR: &str = "Upward trend";
pub const SEASONAL_PATTERN_FACTOR: &str = "Strong seasonal pattern";
pub const HIGH_VOLATILITY_FACTOR: &str = "High volatility period";

/// Discrete risk bucket for one forecast day, ordered from least to most
/// severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Classify a predicted daily outage count
    pub fn from_predicted(predicted: f64) -> Self {
        if predicted > CRITICAL_RISK_THRESHOLD {
            RiskLevel::Critical
        } else if predicted > HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if predicted > MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// One projected day of outage risk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionDay {
    /// Forecast calendar day
    pub date: NaiveDate,
    /// Projected outage count, never negative
    pub predicted_outages: f64,
    /// Model confidence in `[0, 1]`, decaying with horizon
    pub confidence: f64,
    /// Discrete risk bucket for the projected count
    pub risk_level: RiskLevel,
    /// Short labels naming what drives the projection
    pub factors: Vec<String>,
}

/// Projects future daily outage counts from the smoothed level, the fitted
/// trend, and the weekly seasonal component
#[derive(Debug, Clone)]
pub struct ForecastGenerator {
    /// Number of days to project
    horizon: usize,
}

impl ForecastGenerator {
    /// Create a new generator for the given horizon
    pub fn new(horizon: usize) -> Result<Self> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "Forecast horizon must be positive".to_string(),
            ));
        }

        Ok(Self { horizon })
    }

    /// Generate one prediction per day for days 1..=horizon after `today`.
    ///
    /// The noise term is the single non-deterministic input; callers inject
    /// the random source so tests can seed it.
    pub fn generate<R: Rng>(
        &self,
        series_len: usize,
        last_smoothed: f64,
        trend: &LinearTrend,
        decomposition: &Decomposition,
        analysis: &TrendAnalysis,
        today: NaiveDate,
        rng: &mut R,
    ) -> Vec<PredictionDay> {
        let volatility = analysis.volatility;

        (1..=self.horizon)
            .map(|horizon_day| {
                let date = today + Duration::days(horizon_day as i64);

                let seasonal = seasonal_at(decomposition, series_len + horizon_day - 1);
                let noise = rng.gen_range(-0.5..0.5) * volatility;
                let predicted = (last_smoothed + trend.slope * horizon_day as f64
                    + seasonal
                    + noise)
                    .max(0.0);

                let decay = 1.0 - horizon_day as f64 / CONFIDENCE_DECAY_DAYS;
                let confidence = (trend.r_squared * decay).max(CONFIDENCE_FLOOR);

                let mut factors = Vec::new();
                if matches!(date.weekday(), Weekday::Mon | Weekday::Tue) {
                    factors.push(WEEKDAY_PEAK_FACTOR.to_string());
                }
                if analysis.trend == TrendDirection::Increasing {
                    factors.push(UPWARD_TREND_FACTOR.to_string());
                }
                if analysis.seasonality == SeasonalityStrength::Strong {
                    factors.push(SEASONAL_PATTERN_FACTOR.to_string());
                }
                if volatility > HIGH_VOLATILITY_THRESHOLD {
                    factors.push(HIGH_VOLATILITY_FACTOR.to_string());
                }

                PredictionDay {
                    date,
                    predicted_outages: predicted,
                    confidence,
                    risk_level: RiskLevel::from_predicted(predicted),
                    factors,
                }
            })
            .collect()
    }
}

fn seasonal_at(decomposition: &Decomposition, index: usize) -> f64 {
    if decomposition.seasonal.is_empty() {
        0.0
    } else {
        decomposition.seasonal[index % decomposition.seasonal.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_levels_are_monotone_in_predicted_value() {
        let samples = [0.0, 1.0, 1.6, 2.9, 3.1, 5.0, 5.1, 20.0];
        for pair in samples.windows(2) {
            assert!(RiskLevel::from_predicted(pair[0]) <= RiskLevel::from_predicted(pair[1]));
        }
    }

    #[test]
    fn classification_thresholds() {
        assert_eq!(RiskLevel::from_predicted(1.5), RiskLevel::Low);
        assert_eq!(RiskLevel::from_predicted(2.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_predicted(4.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_predicted(6.0), RiskLevel::Critical);
    }
}
