//! The `listings` command: validate, read, filter, summarize.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::core::accumulator::{Accumulator, accumulate};
use crate::core::criteria::{Criteria, validate_args};
use crate::core::listing::Listing;
use crate::core::summary::Summary;
use crate::error::ListingsError;
use crate::io::config::{Framing, InvalidRecordPolicy, ListingsConfig};
use crate::io::reader::{open_listings, read_document_file};

/// Raw command-line inputs for one report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRequest {
    pub state: Option<String>,
    pub min_baths: Option<String>,
    /// Overrides `ListingsConfig::input_path`.
    pub input: Option<PathBuf>,
    /// Forces `InvalidRecordPolicy::Skip`.
    pub skip_invalid: bool,
}

/// Validate arguments, then stream the export through the filter.
///
/// Arguments are validated before the input is opened.
pub fn run_report(config: &ListingsConfig, request: &ReportRequest) -> Result<Summary> {
    let criteria = validate_args(
        request.state.as_deref(),
        request.min_baths.as_deref(),
        &config.allowed_states,
    )?;

    let input = request
        .input
        .clone()
        .unwrap_or_else(|| config.input_path.clone());
    let policy = if request.skip_invalid {
        InvalidRecordPolicy::Skip
    } else {
        config.on_invalid_record
    };

    let acc = match config.framing {
        Framing::Lines => {
            let lines = open_listings(&input)?;
            fold_lines(lines, &criteria, policy)?
        }
        Framing::Array => {
            let listings = read_document_file(&input)?;
            accumulate(&listings, &criteria)
        }
    };

    info!(
        input = %input.display(),
        state = %criteria.state,
        min_baths = criteria.min_baths,
        matched = acc.count(),
        "listings filtered"
    );
    Ok(Summary::from_accumulator(acc))
}

fn fold_lines<I>(lines: I, criteria: &Criteria, policy: InvalidRecordPolicy) -> Result<Accumulator>
where
    I: IntoIterator<Item = Result<Listing, ListingsError>>,
{
    lines
        .into_iter()
        .try_fold(Accumulator::default(), |acc, next| -> Result<Accumulator> {
            match next {
                Ok(listing) => Ok(acc.absorb(&listing, criteria)),
                Err(ListingsError::Parse { line, source })
                    if policy == InvalidRecordPolicy::Skip =>
                {
                    warn!(line, error = %source, "skipping invalid listing");
                    Ok(acc)
                }
                Err(err) => Err(err).context("read listings"),
            }
        })
}
