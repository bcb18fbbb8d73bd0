use anyhow::{Context, Result};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::chart::{BarScale, ResultsChart};
use crate::config::Config;
use crate::domain::{self, Benchmark, Metric};

/// Shared application state. The benchmark table is immutable; the display
/// mode is the single mutable cell, written only through the mode endpoint.
#[derive(Clone)]
pub struct AppState {
    pub benchmark: Arc<Benchmark>,
    pub scale: BarScale,
    pub mode: Arc<RwLock<Metric>>,
}

impl AppState {
    pub fn new(cfg: &Config) -> Result<Self> {
        let benchmark = Arc::new(domain::published().clone());
        let scale = BarScale::from_config(&cfg.chart, &benchmark)
            .context("invalid chart scale configuration")?;
        Ok(Self {
            benchmark,
            scale,
            mode: Arc::new(RwLock::new(Metric::Accuracy)),
        })
    }

    /// The results component under the currently selected mode.
    pub fn chart(&self) -> ResultsChart {
        let mut chart = ResultsChart::new(Arc::clone(&self.benchmark), self.scale);
        chart.set_metric(*self.mode.read());
        chart
    }

    pub fn selected_mode(&self) -> Metric {
        *self.mode.read()
    }

    pub fn set_mode(&self, metric: Metric) {
        *self.mode.write() = metric;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChartConfig, ScaleReference, ServerConfig};

    fn test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                enable_cors: false,
                request_timeout_secs: 5,
            },
            chart: ChartConfig {
                accuracy_scale_max: 12.0,
                time_scale_max: 25000.0,
                scale_reference: ScaleReference::Fixed,
            },
        }
    }

    #[test]
    fn test_state_starts_in_accuracy_mode() {
        let state = AppState::new(&test_config()).unwrap();
        assert_eq!(state.selected_mode(), Metric::Accuracy);
        assert_eq!(state.chart().metric(), Metric::Accuracy);
    }

    #[test]
    fn test_mode_write_is_visible_to_next_chart() {
        let state = AppState::new(&test_config()).unwrap();
        state.set_mode(Metric::Time);
        assert_eq!(state.chart().metric(), Metric::Time);
        // The table itself is untouched by mode writes.
        assert_eq!(state.benchmark.len(), 5);
    }

    #[test]
    fn test_invalid_scale_config_fails_startup() {
        let mut cfg = test_config();
        cfg.chart.time_scale_max = 0.5;
        assert!(AppState::new(&cfg).is_err());
    }
}
