//! Pattern module
//!
//! This module contains the match-side pattern and the backtracking matcher.

mod matcher;
mod parser;

pub use matcher::{MatchOptions, MatchOutcome, Matcher, match_name};
pub use parser::{Pattern, PatternAtom};
