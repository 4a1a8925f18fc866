//! Pattern parsing
//!
//! Turns a match pattern string into a sequence of atoms.

use std::fmt;
use std::str::FromStr;

use crate::capture::CaptureKind;
use crate::constants::{MAX_CAPTURES, MAX_NAME_LENGTH, QUESTION_MARK, STAR};
use crate::errors::{Error, Result, capture_overflow_error, pattern_too_long_error};

/// One element of a match pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternAtom {
    /// A character that must appear as-is
    Literal(char),
    /// `?`, any single character
    AnyChar,
    /// `*`, any run of one or more characters
    AnyRun,
}

impl PatternAtom {
    /// The capture kind this atom records, if it is a wildcard
    pub fn capture_kind(&self) -> Option<CaptureKind> {
        match self {
            PatternAtom::Literal(_) => None,
            PatternAtom::AnyChar => Some(CaptureKind::QuestionMark),
            PatternAtom::AnyRun => Some(CaptureKind::Star),
        }
    }
}

/// A parsed match pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    atoms: Vec<PatternAtom>,
}

impl Pattern {
    /// Parses a match pattern
    ///
    /// # Errors
    /// * `PatternTooLong` if the pattern is longer than the name limit
    /// * `CaptureOverflow` if it holds more wildcards than a capture table can store
    pub fn parse(source: &str) -> Result<Pattern> {
        let length = source.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(pattern_too_long_error("Match pattern", length, MAX_NAME_LENGTH));
        }

        let atoms: Vec<PatternAtom> = source
            .chars()
            .map(|c| match c {
                STAR => PatternAtom::AnyRun,
                QUESTION_MARK => PatternAtom::AnyChar,
                other => PatternAtom::Literal(other),
            })
            .collect();

        let pattern = Pattern {
            source: source.to_string(),
            atoms,
        };
        if pattern.wildcard_count() > MAX_CAPTURES {
            return Err(capture_overflow_error(MAX_CAPTURES));
        }

        Ok(pattern)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn atoms(&self) -> &[PatternAtom] {
        &self.atoms
    }

    /// Number of wildcards, i.e. the number of captures a match produces
    pub fn wildcard_count(&self) -> usize {
        self.atoms
            .iter()
            .filter(|atom| atom.capture_kind().is_some())
            .count()
    }

    /// Number of wildcards of one kind
    pub fn count_of_kind(&self, kind: CaptureKind) -> usize {
        self.atoms
            .iter()
            .filter(|atom| atom.capture_kind() == Some(kind))
            .count()
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Pattern::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
