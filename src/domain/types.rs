use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Metric Newtypes
// ============================================================================

/// Mean absolute error in kilowatt-hours (kWh). Lower is better.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Mae(pub f64);

impl Mae {
    pub fn kwh(value: f64) -> Self {
        Self(value)
    }

    pub fn as_kwh(&self) -> f64 {
        self.0
    }

    /// Total-order key for sorting model rows.
    pub fn sort_key(&self) -> OrderedFloat<f64> {
        OrderedFloat(self.0)
    }
}

impl fmt::Display for Mae {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kWh", self.0)
    }
}

/// Wall-clock training time in seconds. Lower is better.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct TrainingTime(pub f64);

impl TrainingTime {
    pub fn seconds(value: f64) -> Self {
        Self(value)
    }

    pub fn as_seconds(&self) -> f64 {
        self.0
    }

    pub fn sort_key(&self) -> OrderedFloat<f64> {
        OrderedFloat(self.0)
    }
}

impl fmt::Display for TrainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s", format_seconds(self.0))
    }
}

/// Seconds formatted the way the results page prints them: thousands grouping
/// above 1000, otherwise two decimals with trailing zeros trimmed.
fn format_seconds(secs: f64) -> String {
    if secs >= 1000.0 {
        group_thousands(secs.round() as u64)
    } else {
        let s = format!("{secs:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ============================================================================
// Model Family and Display Mode
// ============================================================================

/// Model family tag. Drives color encoding and the legend only; no behavioral
/// effect on ordering or scaling.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelFamily {
    Tree,
    Deep,
}

impl ModelFamily {
    /// Legend label as printed on the results page.
    pub fn legend_label(&self) -> &'static str {
        match self {
            Self::Tree => "Tree Ensembles",
            Self::Deep => "Deep Neural Nets",
        }
    }
}

/// Which metric the chart currently encodes. The two-valued display-mode
/// selector of the results component.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Metric {
    Accuracy,
    Time,
}

impl Metric {
    /// Toggle-control label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accuracy => "Accuracy (MAE)",
            Self::Time => "Training Time",
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
