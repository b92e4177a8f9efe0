//! Smoothing and seasonal decomposition for daily count series

use crate::error::{ForecastError, Result};

/// Default smoothing parameter for exponential smoothing
pub const DEFAULT_ALPHA: f64 = 0.3;

/// Default period for moving average and seasonal decomposition (one week)
pub const DEFAULT_PERIOD: usize = 7;

/// Trailing simple moving average
#[derive(Debug, Clone)]
pub struct MovingAverage {
    /// Window size
    period: usize,
}

impl MovingAverage {
    /// Create a new moving average with the given window size
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(ForecastError::InvalidParameter(
                "Moving average period must be positive".to_string(),
            ));
        }

        Ok(Self { period })
    }

    /// Apply the moving average to a series.
    ///
    /// The output has `len - period + 1` entries; a series shorter than the
    /// period yields an empty output rather than an error.
    pub fn apply(&self, data: &[f64]) -> Vec<f64> {
        if data.len() < self.period {
            return Vec::new();
        }

        data.windows(self.period)
            .map(|window| window.iter().sum::<f64>() / self.period as f64)
            .collect()
    }
}

/// Simple exponential smoothing
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    /// Smoothing parameter
    alpha: f64,
}

impl ExponentialSmoothing {
    /// Create a new exponential smoothing model
    pub fn new(alpha: f64) -> Result<Self> {
        if alpha <= 0.0 || alpha >= 1.0 {
            return Err(ForecastError::InvalidParameter(
                "Alpha must be between 0 and 1".to_string(),
            ));
        }

        Ok(Self { alpha })
    }

    /// Smooth a series; output has the same length as the input.
    ///
    /// `s[0] = x[0]`, `s[i] = alpha * x[i] + (1 - alpha) * s[i - 1]`.
    pub fn apply(&self, data: &[f64]) -> Vec<f64> {
        let mut smoothed = Vec::with_capacity(data.len());
        for (i, &value) in data.iter().enumerate() {
            if i == 0 {
                smoothed.push(value);
            } else {
                let level = self.alpha * value + (1.0 - self.alpha) * smoothed[i - 1];
                smoothed.push(level);
            }
        }

        smoothed
    }
}

/// Result of a naive additive seasonal decomposition
#[derive(Debug, Clone)]
pub struct Decomposition {
    /// Moving-average trend proxy, `len - period + 1` entries
    pub trend: Vec<f64>,
    /// One seasonal value per position in the cycle, `period` entries
    pub seasonal: Vec<f64>,
    /// Residual per original index
    pub residuals: Vec<f64>,
}

impl Decomposition {
    /// Root-mean-square of the residual component
    pub fn volatility(&self) -> f64 {
        if self.residuals.is_empty() {
            return 0.0;
        }

        let mean_sq = self.residuals.iter().map(|r| r * r).sum::<f64>()
            / self.residuals.len() as f64;
        mean_sq.sqrt()
    }

    /// Share of series variance carried by the seasonal component,
    /// `var(seasonal) / (var(seasonal) + var(residual))`, in `[0, 1]`
    pub fn seasonal_strength(&self) -> f64 {
        let seasonal_applied: Vec<f64> = self
            .residuals
            .iter()
            .enumerate()
            .map(|(i, _)| self.seasonal[i % self.seasonal.len()])
            .collect();

        let seasonal_var = variance(&seasonal_applied);
        let residual_var = variance(&self.residuals);
        let total = seasonal_var + residual_var;
        if total == 0.0 {
            0.0
        } else {
            seasonal_var / total
        }
    }
}

/// Naive additive seasonal decomposition with a moving-average trend proxy
#[derive(Debug, Clone)]
pub struct SeasonalDecomposition {
    /// Cycle length
    period: usize,
}

impl SeasonalDecomposition {
    /// Create a new decomposition with the given cycle length
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(ForecastError::InvalidParameter(
                "Decomposition period must be positive".to_string(),
            ));
        }

        Ok(Self { period })
    }

    /// Decompose a series into trend, seasonal, and residual components.
    ///
    /// The seasonal value for cycle position `j` is the mean of all
    /// observations at indices `i` with `i % period == j`, partial cycles
    /// included. Residuals subtract the trend value at `i - period / 2`,
    /// clamped into the trend array's bounds near either edge.
    pub fn decompose(&self, data: &[f64]) -> Result<Decomposition> {
        let trend = MovingAverage::new(self.period)?.apply(data);

        let mut sums = vec![0.0; self.period];
        let mut counts = vec![0usize; self.period];
        for (i, &value) in data.iter().enumerate() {
            sums[i % self.period] += value;
            counts[i % self.period] += 1;
        }
        let seasonal: Vec<f64> = sums
            .iter()
            .zip(counts.iter())
            .map(|(&sum, &count)| if count == 0 { 0.0 } else { sum / count as f64 })
            .collect();

        let half = self.period / 2;
        let residuals = if trend.is_empty() {
            Vec::new()
        } else {
            data.iter()
                .enumerate()
                .map(|(i, &value)| {
                    let trend_idx = i.saturating_sub(half).min(trend.len() - 1);
                    value - trend[trend_idx] - seasonal[i % self.period]
                })
                .collect()
        };

        Ok(Decomposition {
            trend,
            seasonal,
            residuals,
        })
    }
}

fn variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mean = data.iter().sum::<f64>() / data.len() as f64;
    data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / data.len() as f64
}
