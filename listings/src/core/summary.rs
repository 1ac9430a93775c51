//! Averages, ordering and rendering of the final report.

use crate::core::accumulator::Accumulator;
use crate::core::currency::format_usd;
use crate::core::listing::ReportedListing;

/// Final report contents, listings sorted by square footage.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub listings: Vec<ReportedListing>,
    pub average_price: f64,
    /// `total_price / total_square_feet / count`.
    pub average_price_per_sqft: f64,
}

impl Summary {
    pub fn from_accumulator(acc: Accumulator) -> Self {
        let count = acc.count();
        let (average_price, average_price_per_sqft) = if count == 0 {
            (0.0, 0.0)
        } else {
            let count = count as f64;
            (
                acc.total_price / count,
                acc.total_price / acc.total_square_feet / count,
            )
        };

        let mut listings = acc.listings;
        // Stable: equal square footage keeps encounter order.
        listings.sort_by(|a, b| a.square_feet.total_cmp(&b.square_feet));

        Self {
            listings,
            average_price,
            average_price_per_sqft,
        }
    }
}

/// Render the human-readable report, ending with a newline.
pub fn render(summary: &Summary) -> Result<String, serde_json::Error> {
    let results = serde_json::to_string_pretty(&summary.listings)?;
    Ok(format!(
        "RESULTS:\n{results}\nAverage Price: {}\nAverage Price per sqft: {}\n",
        format_usd(summary.average_price),
        format_usd(summary.average_price_per_sqft)
    ))
}
