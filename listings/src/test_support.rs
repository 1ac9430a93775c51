//! Test-only helpers for building listings and listing exports.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::listing::Listing;
use crate::io::config::DEFAULT_INPUT_FILE;

/// Create a deterministic listing with the fields the filter looks at.
pub fn listing(id: &str, state: &str, price: f64, square_feet: f64, baths: f64) -> Listing {
    Listing {
        id: id.to_string(),
        street: format!("{} street", id),
        locality: format!("{} city", id),
        state: state.to_string(),
        postal_code: "00000".to_string(),
        price,
        square_feet,
        beds: 1,
        baths,
    }
}

/// Serialize listings the way the export writes them: one array element per
/// line, `[` on the first line, `,` after every line but the last, `]` after
/// the last. No listings serializes as `[]`.
pub fn framed_lines(listings: &[Listing]) -> String {
    if listings.is_empty() {
        return "[]\n".to_string();
    }
    let last = listings.len() - 1;
    let mut out = String::new();
    for (idx, listing) in listings.iter().enumerate() {
        if idx == 0 {
            out.push('[');
        }
        out.push_str(&serde_json::to_string(listing).expect("serialize listing"));
        out.push(if idx == last { ']' } else { ',' });
        out.push('\n');
    }
    out
}

/// Temporary working directory holding a listing export.
pub struct ListingDir {
    temp: TempDir,
}

impl ListingDir {
    /// Write `listings` to `property_listings.json` in a fresh temp dir.
    pub fn with_listings(listings: &[Listing]) -> Result<Self> {
        Self::with_raw(&framed_lines(listings))
    }

    /// Write `contents` verbatim to `property_listings.json`.
    pub fn with_raw(contents: &str) -> Result<Self> {
        let temp = tempfile::tempdir().context("create temp dir")?;
        let dir = Self { temp };
        fs::write(dir.input_path(), contents)
            .with_context(|| format!("write {}", dir.input_path().display()))?;
        Ok(dir)
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn input_path(&self) -> PathBuf {
        self.temp.path().join(DEFAULT_INPUT_FILE)
    }

    /// Write `listings.toml` into the directory.
    pub fn write_config(&self, contents: &str) -> Result<PathBuf> {
        let path = self.temp.path().join("listings.toml");
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
