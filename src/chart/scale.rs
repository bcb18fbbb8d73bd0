//! Bar-width scaling.
//!
//! MAE maps linearly against a reference maximum. Training times span roughly
//! four orders of magnitude (single-digit seconds to tens of thousands), so a
//! linear scale would flatten the fast models to invisible slivers; time maps
//! logarithmically instead. Every fraction leaving this module is clamped to
//! [0, 1].

use crate::config::{ChartConfig, ScaleReference};
use crate::domain::{Benchmark, Metric, ModelResult};

/// Headroom applied when deriving reference maxima from the dataset, so the
/// worst row never fills the whole track.
const DATA_HEADROOM: f64 = 1.2;

#[derive(Debug, Clone, Copy)]
pub struct BarScale {
    accuracy_max: f64,
    time_max: f64,
}

impl BarScale {
    /// Explicit reference maxima. The time maximum must exceed one second so
    /// its logarithm is a positive denominator.
    pub fn fixed(accuracy_max: f64, time_max: f64) -> Result<Self, ScaleError> {
        if !accuracy_max.is_finite() || accuracy_max <= 0.0 {
            return Err(ScaleError::NonPositiveAccuracyMax(accuracy_max));
        }
        if !time_max.is_finite() || time_max <= 1.0 {
            return Err(ScaleError::TimeMaxTooSmall(time_max));
        }
        Ok(Self {
            accuracy_max,
            time_max,
        })
    }

    /// Resolve the scale from configuration, deriving maxima from the dataset
    /// when so configured. An empty dataset falls back to the configured
    /// literals; the chart it scales is empty anyway.
    pub fn from_config(cfg: &ChartConfig, benchmark: &Benchmark) -> Result<Self, ScaleError> {
        match cfg.scale_reference {
            ScaleReference::Fixed => Self::fixed(cfg.accuracy_scale_max, cfg.time_scale_max),
            ScaleReference::Data => {
                let accuracy_max = benchmark
                    .max_metric(Metric::Accuracy)
                    .map(|v| v * DATA_HEADROOM)
                    .unwrap_or(cfg.accuracy_scale_max);
                let time_max = benchmark
                    .max_metric(Metric::Time)
                    .map(|v| v * DATA_HEADROOM)
                    .unwrap_or(cfg.time_scale_max);
                Self::fixed(accuracy_max, time_max)
            }
        }
    }

    pub fn accuracy_max(&self) -> f64 {
        self.accuracy_max
    }

    pub fn time_max(&self) -> f64 {
        self.time_max
    }

    /// Bar width in [0, 1] for one row under the selected metric. Pure in
    /// (row, metric, reference maxima).
    pub fn fraction(&self, model: &ModelResult, metric: Metric) -> f64 {
        let raw = match metric {
            Metric::Accuracy => model.mae().as_kwh() / self.accuracy_max,
            // Sub-second times would go negative here; the clamp floors them.
            Metric::Time => model.training_time().as_seconds().ln() / self.time_max.ln(),
        };
        raw.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, thiserror::Error)]
pub enum ScaleError {
    #[error("accuracy scale maximum must be a finite positive number, got {0}")]
    NonPositiveAccuracyMax(f64),

    #[error("time scale maximum must be a finite number greater than 1 second, got {0}")]
    TimeMaxTooSmall(f64),
}
