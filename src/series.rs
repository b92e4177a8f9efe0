//! Daily count series construction
//!
//! Converts a list of outage records into a fixed-length daily count series
//! covering a trailing window ending at a given day. Days are UTC calendar
//! days of each record's start timestamp.

use crate::error::{ForecastError, Result};
use crate::records::OutageRecord;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default trailing window length in days
pub const DEFAULT_WINDOW: usize = 90;

/// Number of outages that started on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    /// UTC calendar day
    pub date: NaiveDate,
    /// Outages starting on that day
    pub count: u32,
}

/// Builds fixed-length daily count series from outage records
#[derive(Debug, Clone)]
pub struct TimeSeriesBuilder {
    /// Window length in days
    window: usize,
}

impl TimeSeriesBuilder {
    /// Create a new builder with the given window length
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(ForecastError::InvalidParameter(
                "Window length must be positive".to_string(),
            ));
        }

        Ok(Self { window })
    }

    /// Window length in days
    pub fn window(&self) -> usize {
        self.window
    }

    /// Build the daily series ending at `today` (inclusive), oldest first.
    ///
    /// The output always has exactly `window` entries; days without any
    /// record are zero-filled. Records starting outside the window are
    /// silently excluded from the series.
    pub fn build(&self, records: &[OutageRecord], today: NaiveDate) -> Vec<DailyCount> {
        let mut per_day: HashMap<NaiveDate, u32> = HashMap::new();
        for record in records {
            *per_day.entry(record.start.date_naive()).or_insert(0) += 1;
        }

        let first_day = today - Duration::days(self.window as i64 - 1);
        (0..self.window)
            .map(|offset| {
                let date = first_day + Duration::days(offset as i64);
                DailyCount {
                    date,
                    count: per_day.get(&date).copied().unwrap_or(0),
                }
            })
            .collect()
    }

    /// Build the series and return the counts as f64 values for the
    /// statistical pipeline
    pub fn build_counts(&self, records: &[OutageRecord], today: NaiveDate) -> Vec<f64> {
        self.build(records, today)
            .into_iter()
            .map(|day| day.count as f64)
            .collect()
    }
}

impl Default for TimeSeriesBuilder {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}
