//! Error types used in the library.
//!
//! - Format errors are raised when a line of a proof is not of the expected shape.
//!   These are raised by [canonicalize_line](crate::procedures::canonicalize::canonicalize_line), and identify the line by content.
//!   When canonicalising a proof a format error is wrapped in an [ErrorKind] alongside the number of the line.
//! - IO errors are raised when reading or writing a proof.
//!
//! Deletion steps are not errors.
//! Rather, they are an expected instance of a line with no canonical form.
//
//  As with the error enums of a context, err::{self} is used to prefix use of the types with `err::`.

use std::{ffi::OsString, path::PathBuf};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Some issue with the format of a (numbered) line.
    Format { line: usize, error: FormatError },

    Io(IoError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format { line, error } => write!(f, "Line {line}: {error}"),
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors in the format of a line.
///
/// Each error contains the line, or the token of the line, at issue.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormatError {
    /// A line without any tokens.
    Empty,

    /// The first token of a line is not a step identifier.
    Id(String),

    /// No literal terminator follows the identifier of a line.
    MissingTerminator(String),

    /// A literal token is not an integer.
    Literal { token: String, line: String },

    /// A hint token is not an integer.
    Hint { token: String, line: String },
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "An empty line."),
            Self::Id(line) => write!(f, "No step identifier in '{line}'."),
            Self::MissingTerminator(line) => write!(f, "No literal terminator in '{line}'."),
            Self::Literal { token, line } => write!(f, "Invalid literal '{token}' in '{line}'."),
            Self::Hint { token, line } => write!(f, "Invalid hint '{token}' in '{line}'."),
        }
    }
}

impl std::error::Error for FormatError {}

/// Errors when reading or writing a proof.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IoError {
    /// The proof could not be opened.
    FileNotFound(PathBuf),

    /// The proof has an extension which requires some feature not built.
    UnsupportedExtension(OsString),

    /// A (numbered) line could not be read, either from some failure of the reader or as the line is not valid UTF-8.
    Read(usize),

    /// A canonical line could not be written.
    Write,

    /// Some thread used for canonicalisation failed.
    Worker,
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "Failed to open proof file {path:?}."),
            Self::UnsupportedExtension(ex) => write!(f, "Unsupported extension {ex:?}."),
            Self::Read(line) => write!(f, "Failed to read line {line}."),
            Self::Write => write!(f, "Failed to write a canonical line."),
            Self::Worker => write!(f, "A canonicalisation thread failed."),
        }
    }
}

impl From<IoError> for ErrorKind {
    fn from(e: IoError) -> Self {
        ErrorKind::Io(e)
    }
}
