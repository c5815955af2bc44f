//! Branch/ATM records as served by the branch locator feed.
//!
//! Every attribute is optional. Blank strings are folded into `None` at
//! deserialization time so downstream code only has to handle absence once.
//! Scalar JSON values (numbers, booleans) are accepted wherever a string is
//! expected, since feeds disagree on whether coordinates and phone numbers are
//! quoted. Objects and arrays in an attribute slot read as absent.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// One physical branch or ATM location.
///
/// A record carries no id of its own; its identity is its position in the
/// loaded dataset (see [`BranchRef`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branch {
    #[serde(
        rename = "branchName",
        alias = "name",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        rename = "branchAddress",
        alias = "address",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<String>,
    /// Region code, e.g. `"NCR"`.
    #[serde(
        rename = "location",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    /// Sub-area within the region.
    #[serde(
        rename = "area1",
        alias = "area",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub area: Option<String>,
    /// Branch category, e.g. `"ATM"` or `"Branch"`.
    #[serde(
        rename = "subcategoryChild1",
        alias = "type",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(
        rename = "operatingHoursOne",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub operating_hours: Option<String>,
    #[serde(
        rename = "bankingDays1",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub banking_days: Option<String>,
    #[serde(
        rename = "contactNumber1",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact_primary: Option<String>,
    #[serde(
        rename = "contactNumber2",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact_secondary: Option<String>,
    #[serde(
        rename = "email1",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        rename = "serviceNote",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub service_note: Option<String>,
    /// Decimal degrees, kept as text exactly as the feed delivered it.
    #[serde(
        rename = "latitude",
        alias = "lat",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub latitude: Option<String>,
    #[serde(
        rename = "longitude",
        alias = "lng",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<String>,
}

impl Branch {
    /// Parsed coordinates, or `None` when the branch is not plottable.
    ///
    /// A branch is plottable only when both latitude and longitude are present
    /// and start with a finite number. Trailing text after the number, such as
    /// `"14.554730,"` or `"14.55 N"`, is ignored.
    #[must_use]
    pub fn coordinates(&self) -> Option<LatLng> {
        let lat = parse_degrees(self.latitude.as_deref()?)?;
        let lng = parse_degrees(self.longitude.as_deref()?)?;
        Some(LatLng { lat, lng })
    }

    #[must_use]
    pub fn is_plottable(&self) -> bool {
        self.coordinates().is_some()
    }
}

fn parse_degrees(raw: &str) -> Option<f64> {
    leading_number(raw.trim_start())
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Longest prefix of `text` shaped like a decimal number, or `""`.
fn leading_number(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    &text[..end]
}

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// A dataset entry together with its position, which is its identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchRef<'a> {
    pub index: usize,
    pub branch: &'a Branch,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Other(IgnoredAny),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    let text = match value {
        None => None,
        Some(Scalar::Text(s)) => Some(s),
        Some(Scalar::Int(n)) => Some(n.to_string()),
        Some(Scalar::Float(n)) => Some(n.to_string()),
        Some(Scalar::Bool(b)) => Some(b.to_string()),
        Some(Scalar::Other(IgnoredAny)) => None,
    };
    Ok(text.filter(|s| !s.trim().is_empty()))
}
