//! Rebuild interpreter
//!
//! Expands a parsed template against the captures of one match.

use crate::capture::CaptureTable;
use crate::constants::MAX_NAME_LENGTH;
use crate::errors::{Result, index_not_found_error, length_exceeded_error};

use super::clock::ClockSnapshot;
use super::template::{Cursors, Template, TemplateAtom};

impl Template {
    /// Builds the new name for one matched entry
    ///
    /// # Arguments
    /// * `captures` - The captures of a successful match
    /// * `clock` - The run's clock snapshot
    /// * `sequence` - 1-based number of the entry within the run
    ///
    /// # Errors
    /// * `IndexNotFound` if a reference selects a capture that does not exist
    /// * `LengthExceeded` if the rebuilt name is longer than the name limit
    pub fn render(
        &self,
        captures: &CaptureTable,
        clock: &ClockSnapshot,
        sequence: usize,
    ) -> Result<String> {
        let mut output = String::new();
        let mut cursors = Cursors::default();

        for atom in self.atoms() {
            match atom {
                TemplateAtom::Literal(text) => output.push_str(text),
                TemplateAtom::Reference {
                    kind,
                    index,
                    position,
                } => {
                    let occurrence = cursors.resolve(*kind, *index);
                    let text = captures.nth_of_kind(*kind, occurrence).ok_or_else(|| {
                        index_not_found_error(
                            *kind,
                            occurrence,
                            captures.count_of_kind(*kind),
                            self.source(),
                            *position,
                        )
                    })?;
                    output.push_str(text);
                }
                TemplateAtom::Date(unit) => output.push_str(&clock.format(*unit)),
                TemplateAtom::Sequence { width } => {
                    let width = *width;
                    output.push_str(&format!("{sequence:0width$}"));
                }
            }
        }

        let length = output.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(length_exceeded_error("Rebuilt name", length, MAX_NAME_LENGTH));
        }

        Ok(output)
    }
}

/// Parses `template` and renders it as the first entry of a run
///
/// # Examples
/// ```
/// use filer::pattern::{match_name, MatchOutcome};
/// use filer::rebuild::{rebuild, ClockSnapshot};
///
/// if let MatchOutcome::Matched(captures) = match_name("abc", "*b*", false).unwrap() {
///     let name = rebuild("*'2b*'1", &captures, &ClockSnapshot::now()).unwrap();
///     assert_eq!(name, "cba");
/// }
/// ```
pub fn rebuild(template: &str, captures: &CaptureTable, clock: &ClockSnapshot) -> Result<String> {
    Template::parse(template)?.render(captures, clock, 1)
}
