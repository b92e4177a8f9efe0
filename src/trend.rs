//! Linear trend estimation over the daily series

use serde::{Deserialize, Serialize};

/// Slope magnitude below which a trend counts as stable
pub const STABLE_SLOPE_THRESHOLD: f64 = 0.01;

/// Seasonal variance share thresholds for strength classification
pub const STRONG_SEASONALITY: f64 = 0.6;
pub const MODERATE_SEASONALITY: f64 = 0.3;
pub const WEAK_SEASONALITY: f64 = 0.1;

/// Direction of the fitted trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

/// Strength of the weekly seasonal pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonalityStrength {
    Strong,
    Moderate,
    Weak,
    None,
}

impl SeasonalityStrength {
    /// Classify a seasonal variance share in `[0, 1]`
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > STRONG_SEASONALITY {
            SeasonalityStrength::Strong
        } else if ratio > MODERATE_SEASONALITY {
            SeasonalityStrength::Moderate
        } else if ratio > WEAK_SEASONALITY {
            SeasonalityStrength::Weak
        } else {
            SeasonalityStrength::None
        }
    }
}

/// Ordinary least-squares fit of count against 0-based day index
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinearTrend {
    /// Fitted slope in outages per day
    pub slope: f64,
    /// Fitted intercept
    pub intercept: f64,
    /// Coefficient of determination in `[0, 1]`
    pub r_squared: f64,
}

impl LinearTrend {
    /// Fit a least-squares line to the series.
    ///
    /// A constant series has zero total variance, which leaves R²
    /// undefined; it is reported as 0 so downstream confidence scaling
    /// never sees NaN. Series shorter than two points fit a flat line.
    pub fn fit(data: &[f64]) -> Self {
        let n = data.len() as f64;
        if data.len() < 2 {
            return Self {
                slope: 0.0,
                intercept: data.first().copied().unwrap_or(0.0),
                r_squared: 0.0,
            };
        }

        let x_mean = (data.len() - 1) as f64 / 2.0;
        let y_mean = data.iter().sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (i, &y) in data.iter().enumerate() {
            let x = i as f64;
            numerator += (x - x_mean) * (y - y_mean);
            denominator += (x - x_mean) * (x - x_mean);
        }

        let slope = numerator / denominator;
        let intercept = y_mean - slope * x_mean;

        let ss_tot: f64 = data.iter().map(|&y| (y - y_mean).powi(2)).sum();
        let ss_res: f64 = data
            .iter()
            .enumerate()
            .map(|(i, &y)| {
                let predicted = slope * i as f64 + intercept;
                (y - predicted).powi(2)
            })
            .sum();

        let r_squared = if ss_tot == 0.0 {
            0.0
        } else {
            1.0 - ss_res / ss_tot
        };

        Self {
            slope,
            intercept,
            r_squared,
        }
    }

    /// Direction classification with a fixed stability threshold
    pub fn direction(&self) -> TrendDirection {
        if self.slope.abs() <= STABLE_SLOPE_THRESHOLD {
            TrendDirection::Stable
        } else if self.slope > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        }
    }
}

/// Aggregate trend description derived once per forecast run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Direction of the fitted linear trend
    pub trend: TrendDirection,
    /// Strength of the weekly pattern
    pub seasonality: SeasonalityStrength,
    /// Root-mean-square of the decomposition residuals
    pub volatility: f64,
    /// Whether a repeating weekly pattern is present (moderate or stronger)
    pub cyclical_pattern: bool,
}
