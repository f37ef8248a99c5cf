use std::io;

/// Errors that can occur while reading a height field from a file.
///
/// A failed load never produces a partial or zero-filled height field: callers keep
/// whatever they were displaying before and may ask for another file.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("unable to read the height field file: {0}")]
    Io(#[from] io::Error),
    /// The file extension matches neither a text grid nor a supported raster format.
    #[error("unsupported height field format (extension: {extension:?})")]
    UnsupportedFormat {
        /// The lowercase extension of the file, without the leading dot, if any.
        extension: Option<String>,
    },
    /// The text grid is malformed.
    #[error("invalid text grid: {0}")]
    Parse(#[from] ParseError),
    /// The raster image could not be decoded.
    #[error("unable to decode the image: {0}")]
    Decode(#[source] image::ImageError),
}

impl From<image::ImageError> for LoadError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(err) => LoadError::Io(err),
            err => LoadError::Decode(err),
        }
    }
}

/// Indicates an inconsistency in the content of a text grid.
///
/// Line numbers are 1-based and count blank lines too, so they match what a text
/// editor displays.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A token is not an integer.
    #[error("line {line}: `{token}` is not an integer")]
    InvalidToken {
        /// The line containing the token.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A row does not have the same number of columns as the first row.
    #[error("line {line}: expected {expected} columns, found {found}")]
    RaggedRow {
        /// The line of the ragged row.
        line: usize,
        /// The number of columns of the first row.
        expected: usize,
        /// The number of columns of this row.
        found: usize,
    },
    /// The grid does not contain any non-blank line.
    #[error("the grid does not contain any row")]
    Empty,
}
