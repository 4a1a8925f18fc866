//! Capture table
//!
//! Holds the text bound to each wildcard during a successful match, in the
//! order the wildcards appear in the pattern.

use std::fmt;

use crate::constants::{MAX_CAPTURES, QUESTION_MARK, STAR};
use crate::errors::{Result, capture_overflow_error, generic_error};

/// The wildcard that produced a capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureKind {
    /// `*`, one or more characters
    Star,
    /// `?`, exactly one character
    QuestionMark,
}

impl CaptureKind {
    /// The wildcard character for this kind
    pub fn symbol(&self) -> char {
        match self {
            CaptureKind::Star => STAR,
            CaptureKind::QuestionMark => QUESTION_MARK,
        }
    }
}

impl fmt::Display for CaptureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Text bound to one wildcard occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub kind: CaptureKind,
    pub text: String,
}

/// Fixed-capacity, ordered list of captures
///
/// Slot `i` belongs to the `i`-th wildcard of the pattern. Recording into a
/// slot drops every slot after it, so a matcher that backtracks to an earlier
/// wildcard never keeps captures from the abandoned branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTable {
    entries: Vec<Capture>,
    capacity: usize,
}

impl Default for CaptureTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureTable {
    /// Creates an empty table with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(MAX_CAPTURES)
    }

    /// Creates an empty table holding at most `capacity` captures
    pub fn with_capacity(capacity: usize) -> Self {
        CaptureTable {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every capture
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Stores a capture in slot `index`, discarding the slots after it
    ///
    /// # Errors
    /// * `CaptureOverflow` if `index` is past the table capacity
    /// * a generic error if `index` would leave a gap before it
    pub fn record(
        &mut self,
        index: usize,
        kind: CaptureKind,
        text: impl Into<String>,
    ) -> Result<()> {
        if index >= self.capacity {
            return Err(capture_overflow_error(self.capacity));
        }
        if index > self.entries.len() {
            return Err(generic_error(&format!(
                "Capture slot {index} recorded before slot {}",
                self.entries.len()
            )));
        }

        self.entries.truncate(index);
        self.entries.push(Capture {
            kind,
            text: text.into(),
        });
        Ok(())
    }

    /// Number of captures of the given kind
    pub fn count_of_kind(&self, kind: CaptureKind) -> usize {
        self.entries.iter().filter(|c| c.kind == kind).count()
    }

    /// Text of the `n`-th (1-based) capture of the given kind
    ///
    /// Returns `None` when fewer than `n` captures of that kind exist; the
    /// rebuild interpreter turns that into `IndexNotFound` with the template
    /// position attached.
    pub fn nth_of_kind(&self, kind: CaptureKind, n: usize) -> Option<&str> {
        if n == 0 {
            return None;
        }
        self.entries
            .iter()
            .filter(|c| c.kind == kind)
            .nth(n - 1)
            .map(|c| c.text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Capture> {
        self.entries.iter()
    }
}
