//! Reading the listing export.
//!
//! The export is a JSON array written one element per line:
//!
//! ```text
//! [{"id":"a",...},
//! {"id":"b",...},
//! {"id":"c",...}]
//! ```
//!
//! [`ListingLines`] strips that framing line by line and parses each element
//! on its own, so only one line is held in memory at a time.
//! [`read_document`] parses a conventional JSON array in one pass instead.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::listing::Listing;
use crate::error::ListingsError;

/// Lazy, single-pass sequence of listings, one per non-empty input line.
///
/// The underlying reader is dropped (and a file handle closed) together with
/// the iterator.
pub struct ListingLines<R> {
    lines: Lines<R>,
    origin: PathBuf,
    line: usize,
}

impl<R: BufRead> ListingLines<R> {
    /// `origin` names the input in error messages.
    pub fn new(reader: R, origin: impl Into<PathBuf>) -> Self {
        Self {
            lines: reader.lines(),
            origin: origin.into(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for ListingLines<R> {
    type Item = Result<Listing, ListingsError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match self.lines.next()? {
                Ok(raw) => raw,
                Err(source) => {
                    return Some(Err(ListingsError::Read {
                        path: self.origin.clone(),
                        line: self.line + 1,
                        source,
                    }));
                }
            };
            self.line += 1;

            let element = strip_framing(&raw);
            if element.is_empty() {
                debug!(line = self.line, "no listing on line");
                continue;
            }
            return Some(
                serde_json::from_str(element).map_err(|source| ListingsError::Parse {
                    line: self.line,
                    source,
                }),
            );
        }
    }
}

/// Open `path` for line-by-line reading.
pub fn open_listings(path: &Path) -> Result<ListingLines<BufReader<File>>, ListingsError> {
    let file = File::open(path).map_err(|source| ListingsError::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ListingLines::new(BufReader::new(file), path))
}

/// Remove array framing from one line: a leading `[` and one trailing `,`
/// or `]`, each only if present.
///
/// Lines holding only framing (`[`, `]`, `[]`) or whitespace come back empty.
pub fn strip_framing(line: &str) -> &str {
    let line = line.trim();
    let line = line.strip_prefix('[').unwrap_or(line);
    let line = line
        .strip_suffix(|c: char| c == ',' || c == ']')
        .unwrap_or(line);
    line.trim()
}

/// Parse the whole input as one JSON array of listings.
pub fn read_document<R: Read>(reader: R) -> Result<Vec<Listing>, ListingsError> {
    serde_json::from_reader(reader).map_err(|source| ListingsError::ParseDocument { source })
}

/// Open `path` and parse it as one JSON array of listings.
pub fn read_document_file(path: &Path) -> Result<Vec<Listing>, ListingsError> {
    let file = File::open(path).map_err(|source| ListingsError::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;
    read_document(BufReader::new(file))
}
