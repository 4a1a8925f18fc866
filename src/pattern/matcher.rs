//! Backtracking matcher
//!
//! Compares a name against a parsed pattern, recording what each wildcard
//! matched. `*` matches at least one character and tries the shortest run
//! first, growing it one character at a time while the rest of the pattern
//! fails to match.

use log::trace;

use crate::capture::{CaptureKind, CaptureTable};
use crate::constants::MAX_NAME_LENGTH;
use crate::errors::{Result, length_exceeded_error};

use super::parser::{Pattern, PatternAtom};

/// Policy flags for matching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Allow names beginning with `.` to match
    pub include_dots: bool,
}

/// Result of matching one name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The name matched; the table holds one capture per wildcard
    Matched(CaptureTable),
    /// The name did not match
    NoMatch,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }

    pub fn captures(&self) -> Option<&CaptureTable> {
        match self {
            MatchOutcome::Matched(table) => Some(table),
            MatchOutcome::NoMatch => None,
        }
    }
}

/// A parsed pattern together with its matching options
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: Pattern,
    options: MatchOptions,
}

impl Matcher {
    pub fn new(pattern: Pattern, options: MatchOptions) -> Self {
        Matcher { pattern, options }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Matches `name`, filling the caller's scratch table
    ///
    /// The table is cleared first and is left empty when the name does not
    /// match.
    ///
    /// # Errors
    /// * `LengthExceeded` if the name is longer than the name limit
    /// * `CaptureOverflow` if the table is smaller than the pattern needs
    pub fn match_into(&self, name: &str, table: &mut CaptureTable) -> Result<bool> {
        table.clear();

        if name.starts_with('.') && !self.options.include_dots {
            trace!("Skipping dotfile: {name}");
            return Ok(false);
        }

        let chars: Vec<char> = name.chars().collect();
        if chars.len() > MAX_NAME_LENGTH {
            return Err(length_exceeded_error("Name", chars.len(), MAX_NAME_LENGTH));
        }

        let matched = match_from(&chars, 0, self.pattern.atoms(), 0, 0, table)?;
        if !matched {
            table.clear();
        }

        trace!(
            "'{name}' {} '{}'",
            if matched { "matches" } else { "does not match" },
            self.pattern
        );
        Ok(matched)
    }

    /// Matches `name` into a fresh capture table
    pub fn match_name(&self, name: &str) -> Result<MatchOutcome> {
        let mut table = CaptureTable::new();
        if self.match_into(name, &mut table)? {
            Ok(MatchOutcome::Matched(table))
        } else {
            Ok(MatchOutcome::NoMatch)
        }
    }
}

/// Parses `pattern` and matches `name` against it
///
/// # Examples
/// ```
/// use filer::pattern::match_name;
///
/// let outcome = match_name("abc", "*b*", false).unwrap();
/// assert!(outcome.is_match());
/// ```
pub fn match_name(name: &str, pattern: &str, include_dots: bool) -> Result<MatchOutcome> {
    let pattern = Pattern::parse(pattern)?;
    Matcher::new(pattern, MatchOptions { include_dots }).match_name(name)
}

/// Matches `name[np..]` against `atoms[pp..]`, recording captures from `slot` on
fn match_from(
    name: &[char],
    mut np: usize,
    atoms: &[PatternAtom],
    mut pp: usize,
    mut slot: usize,
    table: &mut CaptureTable,
) -> Result<bool> {
    loop {
        let (c, atom) = match (name.get(np), atoms.get(pp)) {
            (None, None) => return Ok(true),
            (None, _) | (_, None) => return Ok(false),
            (Some(&c), Some(&atom)) => (c, atom),
        };

        match atom {
            PatternAtom::Literal(expected) => {
                if expected != c {
                    return Ok(false);
                }
            }
            PatternAtom::AnyChar => {
                table.record(slot, CaptureKind::QuestionMark, c.to_string())?;
                slot += 1;
            }
            PatternAtom::AnyRun => {
                // Nested stars backtrack in polynomial time in the name length;
                // only the name length limit bounds the work.
                for end in np + 1..=name.len() {
                    let run: String = name[np..end].iter().collect();
                    table.record(slot, CaptureKind::Star, run)?;
                    if match_from(name, end, atoms, pp + 1, slot + 1, table)? {
                        return Ok(true);
                    }
                }
                return Ok(false);
            }
        }

        np += 1;
        pp += 1;
    }
}
