//! Benchmark data model.
//!
//! The study's comparison table is fixed at five rows and never changes after
//! startup, so every integrity rule is enforced once, at construction.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::types::{Mae, Metric, ModelFamily, TrainingTime};

/// One forecasting model's benchmark outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ModelResult {
    name: String,
    mae: Mae,
    training_time: TrainingTime,
    family: ModelFamily,
}

impl ModelResult {
    /// Build a validated row. Non-finite or out-of-contract metrics are data
    /// integrity violations and are rejected here rather than surfacing later
    /// as a NaN bar width.
    pub fn new(
        name: impl Into<String>,
        mae_kwh: f64,
        training_seconds: f64,
        family: ModelFamily,
    ) -> Result<Self, ModelDataError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelDataError::EmptyName);
        }
        if !mae_kwh.is_finite() || mae_kwh < 0.0 {
            return Err(ModelDataError::NegativeError { name, mae_kwh });
        }
        if !training_seconds.is_finite() || training_seconds <= 0.0 {
            // A zero or negative duration has no logarithm to scale by.
            return Err(ModelDataError::NonPositiveTrainingTime {
                name,
                seconds: training_seconds,
            });
        }
        Ok(Self {
            name,
            mae: Mae::kwh(mae_kwh),
            training_time: TrainingTime::seconds(training_seconds),
            family,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mae(&self) -> Mae {
        self.mae
    }

    pub fn training_time(&self) -> TrainingTime {
        self.training_time
    }

    pub fn family(&self) -> ModelFamily {
        self.family
    }

    /// The raw value of the selected metric.
    pub fn metric_value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Accuracy => self.mae.as_kwh(),
            Metric::Time => self.training_time.as_seconds(),
        }
    }

    /// The selected metric formatted for display next to the bar.
    pub fn formatted_value(&self, metric: Metric) -> String {
        match metric {
            Metric::Accuracy => self.mae.to_string(),
            Metric::Time => self.training_time.to_string(),
        }
    }
}

/// The immutable benchmark table. Row order is the publication order and acts
/// as the tie-break for equal metrics.
#[derive(Debug, Clone, Serialize)]
pub struct Benchmark {
    models: Vec<ModelResult>,
}

impl Benchmark {
    pub fn new(models: Vec<ModelResult>) -> Result<Self, ModelDataError> {
        for (i, model) in models.iter().enumerate() {
            if models[..i].iter().any(|m| m.name == model.name) {
                return Err(ModelDataError::DuplicateModel(model.name.clone()));
            }
        }
        Ok(Self { models })
    }

    pub fn models(&self) -> &[ModelResult] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Largest observed value of a metric, if any rows exist.
    pub fn max_metric(&self, metric: Metric) -> Option<f64> {
        self.models
            .iter()
            .map(|m| m.metric_value(metric))
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }
}

/// Construction-time data violations. None of these can occur with the
/// published table; they guard future edits to it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelDataError {
    #[error("model name must not be empty")]
    EmptyName,

    #[error("{name}: MAE must be a finite non-negative number, got {mae_kwh}")]
    NegativeError { name: String, mae_kwh: f64 },

    #[error("{name}: training time must be a finite positive number of seconds, got {seconds}")]
    NonPositiveTrainingTime { name: String, seconds: f64 },

    #[error("duplicate model name: {0}")]
    DuplicateModel(String),
}

/// Table 1 of the paper: five models over the 4-year COFACTOR Drammen test
/// window.
static PUBLISHED: Lazy<Benchmark> = Lazy::new(|| {
    let rows = vec![
        ModelResult::new("Random Forest", 3.30, 115.8, ModelFamily::Tree),
        ModelResult::new("XGBoost", 3.42, 2.62, ModelFamily::Tree),
        ModelResult::new("LightGBM", 3.58, 3.27, ModelFamily::Tree),
        ModelResult::new("TFT (Transformer)", 5.11, 21831.0, ModelFamily::Deep),
        ModelResult::new("LSTM", 10.13, 13496.0, ModelFamily::Deep),
    ]
    .into_iter()
    .collect::<Result<Vec<_>, _>>()
    .expect("published rows are valid");
    Benchmark::new(rows).expect("published table has unique names")
});

/// The published benchmark table.
pub fn published() -> &'static Benchmark {
    &PUBLISHED
}
