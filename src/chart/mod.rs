//! Results Visualization Component
//!
//! Owns the fixed benchmark table and the two-valued display-mode selector,
//! and derives a render-ready chart from them: a total order over the rows and
//! a clamped bar fraction per row. Both derivations are pure; toggling the
//! mode only changes which one the next render uses.

pub mod scale;

pub use scale::{BarScale, ScaleError};

use itertools::Itertools;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::{Benchmark, Metric, ModelFamily, ModelResult};

const TITLE: &str = "Performance Comparison";
const SUBTITLE: &str = "Trees vs Deep Nets on Drammen Dataset";
const ACCURACY_CAPTION: &str = "Lower is better";
const LONG_RUN_NOTE: &str = "Hours of training...";
const SHORT_RUN_NOTE: &str = "Seconds!";

/// Training times above this get the long-run annotation, below
/// [`SHORT_RUN_MAX_SECONDS`] the short-run one.
const LONG_RUN_MIN_SECONDS: f64 = 1000.0;
const SHORT_RUN_MAX_SECONDS: f64 = 100.0;

/// One horizontal bar, best model first.
#[derive(Debug, Clone, Serialize)]
pub struct ChartRow {
    /// 1-based position after sorting.
    pub rank: usize,
    pub label: String,
    pub family: ModelFamily,
    /// Metric formatted for display, e.g. `"3.30 kWh"` or `"21,831 s"`.
    pub value: String,
    /// Bar width as a fraction of the track, always within [0, 1].
    pub fraction: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub family: ModelFamily,
    pub label: &'static str,
}

/// Everything the presentation layer needs to draw the chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub metric: Metric,
    pub metric_label: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub rows: Vec<ChartRow>,
    pub legend: Vec<LegendEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct ResultsChart {
    benchmark: Arc<Benchmark>,
    scale: BarScale,
    metric: Metric,
}

impl ResultsChart {
    /// A fresh component starts in accuracy mode, like the page.
    pub fn new(benchmark: Arc<Benchmark>, scale: BarScale) -> Self {
        Self {
            benchmark,
            scale,
            metric: Metric::Accuracy,
        }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The toggle boundary. Replaces the selected mode; order and widths
    /// follow on the next render.
    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }

    pub fn benchmark(&self) -> &Benchmark {
        &self.benchmark
    }

    /// Rows in ascending metric order. Both metrics read "lower is better",
    /// so the best model comes first. The sort is stable: ties keep table
    /// order. Returns a new sequence; the table itself is never reordered.
    pub fn ranked(&self, metric: Metric) -> Vec<&ModelResult> {
        self.benchmark
            .models()
            .iter()
            .sorted_by_key(|m| match metric {
                Metric::Accuracy => m.mae().sort_key(),
                Metric::Time => m.training_time().sort_key(),
            })
            .collect()
    }

    /// Bar width in [0, 1] for one row under the given metric.
    pub fn fraction(&self, model: &ModelResult, metric: Metric) -> f64 {
        self.scale.fraction(model, metric)
    }

    /// Render under the currently selected mode.
    pub fn render(&self) -> ChartView {
        self.render_for(self.metric)
    }

    /// Render under an explicit metric without touching the selected mode.
    pub fn render_for(&self, metric: Metric) -> ChartView {
        let rows = self
            .ranked(metric)
            .into_iter()
            .enumerate()
            .map(|(i, model)| ChartRow {
                rank: i + 1,
                label: model.name().to_string(),
                family: model.family(),
                value: model.formatted_value(metric),
                fraction: self.scale.fraction(model, metric),
                note: annotation(model, metric),
            })
            .collect();

        ChartView {
            metric,
            metric_label: metric.label(),
            title: TITLE,
            subtitle: SUBTITLE,
            rows,
            legend: legend(),
            caption: match metric {
                Metric::Accuracy => Some(ACCURACY_CAPTION),
                Metric::Time => None,
            },
        }
    }
}

/// In-bar annotation for the time encoding; accuracy bars carry none.
fn annotation(model: &ModelResult, metric: Metric) -> Option<&'static str> {
    if metric != Metric::Time {
        return None;
    }
    let secs = model.training_time().as_seconds();
    if secs > LONG_RUN_MIN_SECONDS {
        Some(LONG_RUN_NOTE)
    } else if secs < SHORT_RUN_MAX_SECONDS {
        Some(SHORT_RUN_NOTE)
    } else {
        None
    }
}

fn legend() -> Vec<LegendEntry> {
    [ModelFamily::Tree, ModelFamily::Deep]
        .into_iter()
        .map(|family| LegendEntry {
            family,
            label: family.legend_label(),
        })
        .collect()
}
