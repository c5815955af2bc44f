use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Listen address of the data server.
    pub bind_addr: SocketAddr,
    /// Where clients fetch the branch dataset from.
    pub data_url: String,
    /// Local dataset file. The data server serves it and the CLI reads it
    /// directly; when unset they fall back to the built-in sample and
    /// `data_url` respectively.
    pub data_path: Option<PathBuf>,
    pub static_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: u8,
    pub detail_zoom: u8,
    /// Result counts above this suppress map markers.
    pub marker_limit: usize,
    /// Fraction of the marker bounding box added on each side when fitting.
    pub bounds_padding: f64,
}
