//! Loads the branch dataset, once, from the locator feed or a local file.

pub mod client;
pub mod error;
pub mod payload;

use std::path::{Path, PathBuf};

use branchfinder_core::Branch;

pub use client::BranchClient;
pub use error::LoadError;
pub use payload::{canonical_payload, parse_branch_payload};

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read and parse a dataset file in either accepted payload shape.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or a parse error from
/// [`parse_branch_payload`].
pub async fn load_from_path(path: &Path) -> Result<Vec<Branch>, LoadError> {
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
    parse_branch_payload(&body)
}

/// Load the dataset from `source`. There is no retry: a failure is final for
/// this attempt.
///
/// # Errors
///
/// Returns any [`LoadError`] raised while fetching, reading, or parsing.
pub async fn load_dataset(
    source: &DataSource,
    timeout_secs: u64,
    user_agent: &str,
) -> Result<Vec<Branch>, LoadError> {
    let branches = match source {
        DataSource::Url(url) => {
            BranchClient::new(url, timeout_secs, user_agent)?
                .fetch_branches()
                .await?
        }
        DataSource::File(path) => load_from_path(path).await?,
    };
    tracing::info!(source = %source, count = branches.len(), "loaded branch dataset");
    Ok(branches)
}
