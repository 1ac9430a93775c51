//! Filtering and running totals over matching listings.

use crate::core::criteria::Criteria;
use crate::core::listing::{Listing, ReportedListing};

/// Running totals for one report. Threaded through the fold by value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulator {
    pub total_price: f64,
    pub total_square_feet: f64,
    /// Matching listings in encounter order.
    pub listings: Vec<ReportedListing>,
}

impl Accumulator {
    /// Fold one listing into the totals. Non-matching listings leave the
    /// accumulator unchanged.
    pub fn absorb(mut self, listing: &Listing, criteria: &Criteria) -> Self {
        if criteria.matches(listing) {
            self.total_price += listing.price;
            self.total_square_feet += listing.square_feet;
            self.listings.push(ReportedListing::from(listing));
        }
        self
    }

    pub fn count(&self) -> usize {
        self.listings.len()
    }
}

/// Fold every listing into a fresh accumulator.
pub fn accumulate<'a, I>(listings: I, criteria: &Criteria) -> Accumulator
where
    I: IntoIterator<Item = &'a Listing>,
{
    listings
        .into_iter()
        .fold(Accumulator::default(), |acc, listing| {
            acc.absorb(listing, criteria)
        })
}
