//! Listing records as read from the export and as reported.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One property listing from the input export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub street: String,
    pub locality: String,
    /// Two-letter state code.
    #[serde(rename = "administrativeAreaLevel1")]
    pub state: String,
    #[serde(deserialize_with = "string_or_number")]
    pub postal_code: String,
    pub price: f64,
    pub square_feet: f64,
    /// Whole number; integral floats such as `2.0` are accepted.
    #[serde(deserialize_with = "whole_number")]
    pub beds: u32,
    pub baths: f64,
}

/// A matching listing reshaped for the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedListing {
    pub id: String,
    pub address_line1: String,
    pub address_line2: String,
    #[serde(serialize_with = "compact_number")]
    pub price: f64,
    #[serde(serialize_with = "compact_number")]
    pub square_feet: f64,
    pub beds: u32,
    #[serde(serialize_with = "compact_number")]
    pub baths: f64,
}

impl From<&Listing> for ReportedListing {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            address_line1: listing.street.clone(),
            address_line2: format!(
                "{}, {} {}",
                listing.locality, listing.state, listing.postal_code
            ),
            price: listing.price,
            square_feet: listing.square_feet,
            beds: listing.beds,
            baths: listing.baths,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

/// Accept identifiers and postal codes exported either as strings or numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(value) => value,
        StringOrNumber::Number(value) => value.to_string(),
    })
}

/// Accept `2` and `2.0`; reject fractions, negatives and values past `u32`.
fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(D::Error::custom(format!(
            "expected a whole number, got {value}"
        )))
    }
}

/// Integers below this print as plain digits in JavaScript.
const PLAIN_INTEGER_LIMIT: f64 = 1e21;

/// Write integral values without a trailing `.0` (`100000`, not `100000.0`).
fn compact_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() != 0.0 || value.abs() >= PLAIN_INTEGER_LIMIT {
        serializer.serialize_f64(*value)
    } else if value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_i128(*value as i128)
    }
}
