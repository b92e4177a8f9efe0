//! Standalone statistical utilities
//!
//! These are usable independently of the forecasting pipeline: z-score
//! outlier detection over an arbitrary series, and normal-approximation
//! confidence bands for a set of scalar predictions.

/// Default z-score threshold for anomaly detection
pub const DEFAULT_ANOMALY_THRESHOLD: f64 = 2.0;

/// Default confidence level for interval calculation
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Find indices whose z-score magnitude exceeds `threshold`.
///
/// Indices come back in ascending order. A zero-variance series has no
/// well-defined z-scores and yields no anomalies rather than dividing by
/// zero. Deterministic for a fixed input.
pub fn detect_anomalies(data: &[f64], threshold: f64) -> Vec<usize> {
    if data.is_empty() {
        return Vec::new();
    }

    let mean = mean(data);
    let std_dev = std_dev(data, mean);
    if std_dev == 0.0 {
        return Vec::new();
    }

    data.iter()
        .enumerate()
        .filter(|(_, &value)| ((value - mean) / std_dev).abs() > threshold)
        .map(|(i, _)| i)
        .collect()
}

/// Normal-approximation confidence band per prediction.
///
/// One global standard deviation over the input set is applied to every
/// point: each band is `value ± z * stddev` with the lower bound floored
/// at 0. Confidence levels map to fixed z-scores (0.99 → 2.58, 0.95 →
/// 1.96, 0.90 → 1.64); any other level falls back to the 95% z-score.
/// Output has the same length and order as the input.
pub fn confidence_interval(predictions: &[f64], confidence: f64) -> Vec<(f64, f64)> {
    if predictions.is_empty() {
        return Vec::new();
    }

    let z_score = if confidence >= 0.99 {
        2.58
    } else if confidence >= 0.95 {
        1.96
    } else if confidence >= 0.90 {
        1.64
    } else {
        1.96
    };

    let mean = mean(predictions);
    let std_dev = std_dev(predictions, mean);
    let margin = z_score * std_dev;

    predictions
        .iter()
        .map(|&value| ((value - margin).max(0.0), value + margin))
        .collect()
}

fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

fn std_dev(data: &[f64], mean: f64) -> f64 {
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / data.len() as f64;
    variance.sqrt()
}
