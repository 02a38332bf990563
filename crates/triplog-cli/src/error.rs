//! Fatal error taxonomy and exit-code mapping.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use triplog_core::{FoldError, ParseError};

/// Everything that aborts a run.
///
/// Each failure kind maps to its own process exit code so callers can
/// distinguish them without parsing stderr. No partial report is
/// written once any of these occurs.
#[derive(Debug, Error)]
pub enum AppError {
    /// No input path was supplied on the command line.
    #[error("no path provided")]
    MissingInputPath,

    /// The input file could not be read.
    #[error("unable to read file: {path}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration loading failed.
    #[error("failed to load configuration")]
    Config(#[source] Box<figment::Error>),

    /// Writing the report to the output stream failed.
    #[error("failed to write report")]
    Output(#[from] io::Error),

    /// Serializing the JSON report failed.
    #[error("failed to serialize report")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Fold(#[from] FoldError),
}

impl AppError {
    /// Process exit code for this failure.
    ///
    /// The numbering follows the tool's documented surface: 255 for a
    /// missing path, then one code per input-validation failure kind.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingInputPath => 255,
            Self::FileUnreadable { .. }
            | Self::Config(_)
            | Self::Output(_)
            | Self::Serialize(_) => 1,
            Self::Parse(ParseError::UnknownRecordKind { .. }) => 2,
            Self::Parse(ParseError::MalformedDriverRecord { .. }) => 3,
            Self::Fold(FoldError::DuplicateDriver { .. }) => 4,
            Self::Parse(ParseError::MalformedTripRecord { .. }) => 5,
        }
    }
}
