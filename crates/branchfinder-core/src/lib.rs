pub mod app_config;
pub mod branch;
pub mod config;
pub mod display;
pub mod filter;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use branch::{Branch, BranchRef, LatLng};
pub use config::{load_app_config, load_app_config_from_env};
pub use display::{CardFields, DetailFields, Popup};
pub use filter::{distinct_categories, distinct_locations, filter_branches, FilterCriteria};

/// Which presentation of the filtered results is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    #[default]
    List,
    Map,
}

impl ViewState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ViewState::List => ViewState::Map,
            ViewState::Map => ViewState::List,
        }
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewState::List => write!(f, "list"),
            ViewState::Map => write!(f, "map"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
