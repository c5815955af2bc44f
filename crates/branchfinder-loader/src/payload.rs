//! Payload shapes accepted from the data source.
//!
//! The locator feed wraps its records as `[{"data": [...]}]`; that nested
//! shape is canonical and is what the data server emits. A flat
//! `{"branches": [...]}` object is also accepted so older mock payloads still
//! load.

use branchfinder_core::Branch;
use serde_json::Value;

use crate::error::LoadError;

/// Parse a payload body into branch records.
///
/// # Errors
///
/// Returns [`LoadError::Deserialize`] when the body is not valid JSON or the
/// records do not deserialize, and [`LoadError::UnexpectedShape`] when the
/// JSON is neither accepted shape.
pub fn parse_branch_payload(body: &str) -> Result<Vec<Branch>, LoadError> {
    let value: Value = serde_json::from_str(body).map_err(|source| LoadError::Deserialize {
        context: "branch payload".to_string(),
        source,
    })?;

    let records = match value {
        Value::Array(items) => {
            let first = items.into_iter().next().ok_or_else(|| {
                LoadError::UnexpectedShape("top-level array is empty".to_string())
            })?;
            match first {
                Value::Object(mut envelope) => envelope.remove("data").ok_or_else(|| {
                    LoadError::UnexpectedShape(
                        "first array element has no `data` field".to_string(),
                    )
                })?,
                _ => {
                    return Err(LoadError::UnexpectedShape(
                        "first array element is not an object".to_string(),
                    ))
                }
            }
        }
        Value::Object(mut envelope) => envelope.remove("branches").ok_or_else(|| {
            LoadError::UnexpectedShape("object payload has no `branches` field".to_string())
        })?,
        _ => {
            return Err(LoadError::UnexpectedShape(
                "expected a JSON array or object".to_string(),
            ))
        }
    };

    serde_json::from_value(records).map_err(|source| LoadError::Deserialize {
        context: "branch records".to_string(),
        source,
    })
}

/// Wrap records in the canonical nested shape.
#[must_use]
pub fn canonical_payload(branches: &[Branch]) -> Value {
    serde_json::json!([{ "data": branches }])
}
