use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::capture::CaptureKind;

/// Custom error type for Filer
#[derive(Debug)]
pub enum Error {
    /// More captures were recorded than the table can hold
    CaptureOverflow { capacity: usize },
    /// A template reference points at a capture that does not exist
    IndexNotFound {
        kind: CaptureKind,
        index: usize,
        available: usize,
        template: String,
        position: usize,
    },
    /// A quote in the template is followed by an unknown sub-command
    InvalidQuoteSpec {
        template: String,
        position: usize,
        found: Option<char>,
    },
    /// A date sub-command names an unknown unit
    InvalidDateSpec {
        template: String,
        position: usize,
        found: Option<char>,
    },
    /// A wildcard index suffix is not a digit from 1 to 9
    InvalidIndexDigit {
        template: String,
        position: usize,
        found: Option<char>,
    },
    /// A sequence sub-command has no valid width digit
    InvalidSequenceSpec {
        template: String,
        position: usize,
        found: Option<char>,
    },
    /// A match or rebuild pattern is longer than allowed
    PatternTooLong {
        subject: String,
        length: usize,
        limit: usize,
    },
    /// A name or rebuilt name is longer than allowed
    LengthExceeded {
        subject: String,
        length: usize,
        limit: usize,
    },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// A generated command could not be run or exited unsuccessfully
    CommandExecution { command: String, detail: String },
    /// Generic error with a message
    Generic { message: String },
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("'{c}'"),
        None => "end of template".to_string(),
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CaptureOverflow { capacity } => {
                write!(f, "Too many wildcards: at most {capacity} captures are supported")
            }
            Error::IndexNotFound {
                kind,
                index,
                available,
                template,
                position,
            } => {
                write!(
                    f,
                    "Can't find indexed pattern item: {kind} number {index} referenced at position {position} in '{template}', but the pattern only has {available}"
                )
            }
            Error::InvalidQuoteSpec {
                template,
                position,
                found,
            } => {
                write!(
                    f,
                    "Invalid '_ quote spec at position {position} in '{template}': found {}",
                    describe_found(found)
                )
            }
            Error::InvalidDateSpec {
                template,
                position,
                found,
            } => {
                write!(
                    f,
                    "Invalid 'd_ date spec at position {position} in '{template}': found {}",
                    describe_found(found)
                )
            }
            Error::InvalidIndexDigit {
                template,
                position,
                found,
            } => {
                write!(
                    f,
                    "Pattern index must be 1-9 at position {position} in '{template}': found {}",
                    describe_found(found)
                )
            }
            Error::InvalidSequenceSpec {
                template,
                position,
                found,
            } => {
                write!(
                    f,
                    "Sequence digit count must be 1-9 at position {position} in '{template}': found {}",
                    describe_found(found)
                )
            }
            Error::PatternTooLong {
                subject,
                length,
                limit,
            }
            | Error::LengthExceeded {
                subject,
                length,
                limit,
            } => {
                write!(
                    f,
                    "{subject} is {length} characters long, the limit is {limit}"
                )
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} {}", operation, path.display())
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::CommandExecution { command, detail } => {
                write!(f, "Command '{command}' failed: {detail}")
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on file".to_string(),
        }
    }
}

impl Error {
    /// Whether the error comes from a malformed pattern or template
    ///
    /// These are user-input errors that are the same for every entry of a
    /// run, so the driver aborts on them.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Error::CaptureOverflow { .. }
                | Error::PatternTooLong { .. }
                | Error::IndexNotFound { .. }
                | Error::InvalidQuoteSpec { .. }
                | Error::InvalidDateSpec { .. }
                | Error::InvalidIndexDigit { .. }
                | Error::InvalidSequenceSpec { .. }
        )
    }
}

/// Custom Result type for Filer
///
/// # Examples
/// ```
/// use filer::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     // Return success
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a capture overflow error
pub fn capture_overflow_error(capacity: usize) -> Error {
    Error::CaptureOverflow { capacity }
}

/// Helper function to create an index-not-found error
pub fn index_not_found_error(
    kind: CaptureKind,
    index: usize,
    available: usize,
    template: &str,
    position: usize,
) -> Error {
    Error::IndexNotFound {
        kind,
        index,
        available,
        template: template.to_string(),
        position,
    }
}

/// Helper function to create an invalid quote spec error
pub fn invalid_quote_spec_error(template: &str, position: usize, found: Option<char>) -> Error {
    Error::InvalidQuoteSpec {
        template: template.to_string(),
        position,
        found,
    }
}

/// Helper function to create an invalid date spec error
pub fn invalid_date_spec_error(template: &str, position: usize, found: Option<char>) -> Error {
    Error::InvalidDateSpec {
        template: template.to_string(),
        position,
        found,
    }
}

/// Helper function to create an invalid index digit error
pub fn invalid_index_digit_error(template: &str, position: usize, found: Option<char>) -> Error {
    Error::InvalidIndexDigit {
        template: template.to_string(),
        position,
        found,
    }
}

/// Helper function to create an invalid sequence spec error
pub fn invalid_sequence_spec_error(template: &str, position: usize, found: Option<char>) -> Error {
    Error::InvalidSequenceSpec {
        template: template.to_string(),
        position,
        found,
    }
}

/// Helper function to create a pattern too long error
pub fn pattern_too_long_error(subject: &str, length: usize, limit: usize) -> Error {
    Error::PatternTooLong {
        subject: subject.to_string(),
        length,
        limit,
    }
}

/// Helper function to create a length exceeded error
pub fn length_exceeded_error(subject: &str, length: usize, limit: usize) -> Error {
    Error::LengthExceeded {
        subject: subject.to_string(),
        length,
        limit,
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a command execution error
pub fn command_execution_error(command: &str, detail: &str) -> Error {
    Error::CommandExecution {
        command: command.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
