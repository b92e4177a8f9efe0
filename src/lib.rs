//! # Outage Forecast
//!
//! A Rust library for projecting future infrastructure outage risk from a
//! history of planned maintenance windows and incidents.
//!
//! ## Features
//!
//! - Fixed-window daily count series built from outage records
//! - Smoothing (moving average, exponential smoothing) and naive additive
//!   seasonal decomposition
//! - Least-squares trend estimation with R² model-fit scoring
//! - A 30-day risk forecast with per-day confidence, risk levels, and
//!   contributing factors
//! - Risk factor attribution over the full outage history
//! - A deterministic recommendation rule table
//! - Standalone z-score anomaly detection and confidence band utilities
//!
//! ## Quick Start
//!
//! ```no_run
//! use outage_forecast::insights::{Forecaster, ForecastConfig};
//! use outage_forecast::records::OutageRecord;
//! use chrono::Utc;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> outage_forecast::error::Result<()> {
//! # let records: Vec<OutageRecord> = Vec::new();
//! let forecaster = Forecaster::new(ForecastConfig::default())?;
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let insights = forecaster.generate(&records, Utc::now().date_naive(), &mut rng)?;
//! for day in &insights.predictions {
//!     println!("{}: {:.2} ({:?})", day.date, day.predicted_outages, day.risk_level);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The forecast's only non-deterministic input is the injected random
//! source; seed it for reproducible output, or use
//! [`insights::generate_insights`] for the entropy-seeded default.

pub mod error;
pub mod forecast;
pub mod insights;
pub mod recommend;
pub mod records;
pub mod risk;
pub mod series;
pub mod smoothing;
pub mod trend;
pub mod utils;

// Re-export commonly used types
pub use crate::error::{ForecastError, Result};
pub use crate::forecast::{PredictionDay, RiskLevel};
pub use crate::insights::{generate_insights, ForecastConfig, Forecaster, MlInsights};
pub use crate::records::{OutageRecord, OutageType, Severity};
pub use crate::risk::RiskFactor;
pub use crate::trend::{SeasonalityStrength, TrendAnalysis, TrendDirection};
pub use crate::utils::{confidence_interval, detect_anomalies};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
