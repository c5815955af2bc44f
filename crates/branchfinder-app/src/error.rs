use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("no branch at position {index} (dataset has {total} branches)")]
    UnknownBranch { index: usize, total: usize },
}
