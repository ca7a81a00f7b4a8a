//! Error types for the docflat library.

use std::io;
use thiserror::Error;

/// Result type alias for docflat operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file bytes are not a legacy OLE compound document.
    #[error("Unknown file format: not a legacy .doc container")]
    UnknownFormat,

    /// The file extension is not supported.
    #[error("Unsupported file format: {0} (only .doc is supported)")]
    UnsupportedFormat(String),

    /// The uploaded file carries no name.
    #[error("File name must not be empty")]
    MissingFileName,

    /// A paragraph record violates a serializer precondition.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The external parser failed to decode the document.
    #[error("Document decode error: {0}")]
    Decode(String),

    /// Error while rendering a table cell.
    #[error("Cell rendering error: {0}")]
    CellRender(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingFileName;
        assert_eq!(err.to_string(), "File name must not be empty");

        let err = Error::UnsupportedFormat("pdf".into());
        assert_eq!(
            err.to_string(),
            "Unsupported file format: pdf (only .doc is supported)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
