//! Filer, a pattern matching file management utility
//!
//! Names are matched against a wildcard pattern (`*` matches one or more
//! characters, `?` exactly one). What each wildcard matched is recorded in a
//! [`capture::CaptureTable`], from which a rebuild pattern builds a new name.
//! The binary turns every match into a command line such as
//! `mv ./abc cba`, to be reviewed and piped to a shell or run directly.

pub use errors::*;

pub mod capture;
pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
mod errors;
pub mod logging;
pub mod pattern;
pub mod rebuild;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::capture::{Capture, CaptureKind, CaptureTable};
    pub use crate::cli::{get_log_file, get_matches, get_verbosity, run_from_matches};
    pub use crate::errors::{
        capture_overflow_error, command_execution_error, file_operation_error, generic_error,
        index_not_found_error, invalid_date_spec_error, invalid_filename_error,
        invalid_index_digit_error, invalid_quote_spec_error, invalid_sequence_spec_error,
        length_exceeded_error, pattern_too_long_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_default_logger, init_logger};
    pub use crate::pattern::{MatchOptions, MatchOutcome, Matcher, Pattern, match_name};
    pub use crate::rebuild::{ClockSnapshot, Template, rebuild};
    pub use crate::workflow::{EntrySource, RunOptions, WorkflowContext, process_entries, run};
}
