//! Command-line argument validation.

use crate::core::listing::Listing;
use crate::error::ListingsError;

/// State codes accepted when no configuration overrides them.
pub const DEFAULT_STATES: [&str; 3] = ["CA", "FL", "NY"];

/// Validated filter criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    pub state: String,
    /// Inclusive lower bound on bathroom count.
    pub min_baths: f64,
}

impl Criteria {
    /// Returns true if `listing` is in the requested state with enough baths.
    ///
    /// A `NaN` baths value never matches.
    pub fn matches(&self, listing: &Listing) -> bool {
        listing.state == self.state && listing.baths >= self.min_baths
    }
}

/// Validate the raw state code and bath threshold.
///
/// The state is checked first; a missing argument is reported the same way
/// as an invalid one.
pub fn validate_args(
    state: Option<&str>,
    min_baths: Option<&str>,
    allowed_states: &[String],
) -> Result<Criteria, ListingsError> {
    let state = state
        .filter(|code| allowed_states.iter().any(|allowed| allowed == code))
        .ok_or_else(|| {
            ListingsError::invalid_argument(format!(
                "stateAbbreviation must be one of: {}",
                allowed_states.join(", ")
            ))
        })?;

    let min_baths = min_baths
        .and_then(parse_threshold)
        .ok_or_else(|| ListingsError::invalid_argument("minBaths must be a number"))?;

    Ok(Criteria {
        state: state.to_string(),
        min_baths,
    })
}

fn parse_threshold(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
