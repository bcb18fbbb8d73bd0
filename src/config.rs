use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Bar-scale settings for the results chart.
///
/// The reference maxima are presentation tuning, not invariants: `fixed` uses the
/// configured literals, `data` derives each maximum from the benchmark table at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    pub accuracy_scale_max: f64,
    pub time_scale_max: f64,
    pub scale_reference: ScaleReference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleReference {
    Fixed,
    Data,
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("STBELF__").split("__"));
        Ok(figment.extract()?)
    }
}
