//! Aggregate forecast pipeline
//!
//! Wires the daily series, smoothing/decomposition, trend fit, risk
//! factors, and recommendations into the single `MlInsights` result
//! consumed by presentation code. Everything is rebuilt in full on every
//! call; nothing is cached across invocations.

use crate::error::{ForecastError, Result};
use crate::forecast::{ForecastGenerator, PredictionDay, DEFAULT_HORIZON};
use crate::records::OutageRecord;
use crate::recommend::build_recommendations;
use crate::risk::{analyze_risk_factors, RiskFactor};
use crate::series::{TimeSeriesBuilder, DEFAULT_WINDOW};
use crate::smoothing::{
    ExponentialSmoothing, SeasonalDecomposition, DEFAULT_ALPHA, DEFAULT_PERIOD,
};
use crate::trend::{LinearTrend, SeasonalityStrength, TrendAnalysis};
use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tunable parameters for the forecast pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Trailing history window in days
    pub window: usize,
    /// Forecast horizon in days
    pub horizon: usize,
    /// Exponential smoothing parameter
    pub alpha: f64,
    /// Seasonal cycle length in days
    pub period: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            horizon: DEFAULT_HORIZON,
            alpha: DEFAULT_ALPHA,
            period: DEFAULT_PERIOD,
        }
    }
}

/// Aggregate forecast result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlInsights {
    /// One prediction per horizon day, nearest first
    pub predictions: Vec<PredictionDay>,
    /// Trend, seasonality, and volatility summary
    pub trend_analysis: TrendAnalysis,
    /// The five fixed risk factors, in their fixed order
    pub risk_factors: Vec<RiskFactor>,
    /// Ordered recommendation messages
    pub recommendations: Vec<String>,
    /// Regression R² of the fitted trend
    pub model_accuracy: f64,
}

impl MlInsights {
    /// Serialize the insights to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Stateless forecast pipeline over a validated configuration
#[derive(Debug, Clone)]
pub struct Forecaster {
    series_builder: TimeSeriesBuilder,
    smoothing: ExponentialSmoothing,
    decomposition: SeasonalDecomposition,
    generator: ForecastGenerator,
}

impl Forecaster {
    /// Create a forecaster, validating every configured parameter
    pub fn new(config: ForecastConfig) -> Result<Self> {
        Ok(Self {
            series_builder: TimeSeriesBuilder::new(config.window)?,
            smoothing: ExponentialSmoothing::new(config.alpha)?,
            decomposition: SeasonalDecomposition::new(config.period)?,
            generator: ForecastGenerator::new(config.horizon)?,
        })
    }

    /// Run the full pipeline over the outage history.
    ///
    /// `today` anchors the trailing window and the forecast dates; the
    /// injected random source drives the single noise term. An empty
    /// history is a precondition violation surfaced as
    /// `InsufficientData` rather than a zero-filled result that would
    /// hide the missing history from whoever reads the forecast.
    pub fn generate<R: Rng>(
        &self,
        records: &[OutageRecord],
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<MlInsights> {
        if records.is_empty() {
            return Err(ForecastError::InsufficientData(
                "At least one outage record is required to forecast".to_string(),
            ));
        }

        let counts = self.series_builder.build_counts(records, today);

        let smoothed = self.smoothing.apply(&counts);
        let decomposition = self.decomposition.decompose(&counts)?;
        let trend = LinearTrend::fit(&counts);

        let volatility = decomposition.volatility();
        let seasonality = SeasonalityStrength::from_ratio(decomposition.seasonal_strength());
        let trend_analysis = TrendAnalysis {
            trend: trend.direction(),
            seasonality,
            volatility,
            cyclical_pattern: matches!(
                seasonality,
                SeasonalityStrength::Strong | SeasonalityStrength::Moderate
            ),
        };

        let last_smoothed = smoothed.last().copied().unwrap_or(0.0);
        let predictions = self.generator.generate(
            counts.len(),
            last_smoothed,
            &trend,
            &decomposition,
            &trend_analysis,
            today,
            rng,
        );

        let risk_factors = analyze_risk_factors(records);
        let recommendations = build_recommendations(&trend_analysis, &risk_factors);

        Ok(MlInsights {
            predictions,
            trend_analysis,
            risk_factors,
            recommendations,
            model_accuracy: trend.r_squared,
        })
    }
}

/// Run the default pipeline anchored at the current UTC day with an
/// entropy-seeded random source
pub fn generate_insights(records: &[OutageRecord]) -> Result<MlInsights> {
    let forecaster = Forecaster::new(ForecastConfig::default())?;
    forecaster.generate(records, Utc::now().date_naive(), &mut rand::thread_rng())
}
