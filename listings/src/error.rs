//! Error taxonomy for the listing pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes;

#[derive(Debug, Error)]
pub enum ListingsError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("line {line}: invalid listing: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid listing array: {source}")]
    ParseDocument {
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot open {}: {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read {} line {line}: {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl ListingsError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Exit code reported by the CLI when this error ends the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => exit_codes::INVALID,
            Self::Parse { .. }
            | Self::ParseDocument { .. }
            | Self::MissingFile { .. }
            | Self::Read { .. } => exit_codes::INPUT,
        }
    }
}
