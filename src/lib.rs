pub mod api;
pub mod chart;
pub mod config;
pub mod content;
pub mod domain;
pub mod state;
pub mod telemetry;
