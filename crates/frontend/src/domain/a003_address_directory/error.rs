use crate::shared::excel_importer::ParseError;
use thiserror::Error;

/// Anything that goes wrong while reading the address dataset.
///
/// Never shown to the buyer: the caller swaps in the built-in directory.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DirectoryIngestError {
    #[error("dataset fetch failed: {0}")]
    Fetch(String),
    #[error("dataset parse failed: {0}")]
    Parse(String),
    #[error("unsupported dataset format: {0}")]
    UnsupportedFormat(String),
    #[error("dataset is empty")]
    Empty,
    #[error("none of the {total} dataset rows had a usable governorate/area pair")]
    NoUsableRows { total: usize },
}

impl From<ParseError> for DirectoryIngestError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Empty => Self::Empty,
            ParseError::Malformed(msg) => Self::Parse(msg),
        }
    }
}
