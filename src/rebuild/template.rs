//! Rebuild template parsing
//!
//! A template is parsed once per run. Every malformed token is reported here,
//! before any entry is processed.

use std::fmt;
use std::str::FromStr;

use crate::capture::CaptureKind;
use crate::constants::{
    DATE_COMMAND, MAX_NAME_LENGTH, QUESTION_MARK, QUOTE, SEQUENCE_COMMAND, STAR,
};
use crate::errors::{
    Error, Result, index_not_found_error, invalid_date_spec_error, invalid_index_digit_error,
    invalid_quote_spec_error, invalid_sequence_spec_error, pattern_too_long_error,
};
use crate::pattern::Pattern;

use super::clock::DateUnit;

/// One element of a rebuild template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateAtom {
    /// Text copied as-is
    Literal(String),
    /// `*` or `?`, optionally followed by `'n`
    Reference {
        kind: CaptureKind,
        index: Option<usize>,
        position: usize,
    },
    /// `'d` followed by a unit
    Date(DateUnit),
    /// `'s` followed by a width
    Sequence { width: usize },
}

/// Star and question mark cursors used to resolve references
#[derive(Debug, Default)]
pub(crate) struct Cursors {
    star: usize,
    question_mark: usize,
}

impl Cursors {
    /// Resolves a reference to a 1-based occurrence and moves the cursor there
    pub(crate) fn resolve(&mut self, kind: CaptureKind, explicit: Option<usize>) -> usize {
        let cursor = match kind {
            CaptureKind::Star => &mut self.star,
            CaptureKind::QuestionMark => &mut self.question_mark,
        };
        *cursor = match explicit {
            Some(index) => index,
            None => *cursor + 1,
        };
        *cursor
    }
}

/// A parsed rebuild template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    atoms: Vec<TemplateAtom>,
}

impl Template {
    /// Parses a rebuild template
    ///
    /// # Errors
    /// * `InvalidIndexDigit` if `'` after a wildcard is not followed by 1-9
    /// * `InvalidQuoteSpec` if a `'` starts an unknown sub-command
    /// * `InvalidDateSpec` if `'d` is followed by an unknown unit
    /// * `InvalidSequenceSpec` if `'s` is not followed by 1-9
    /// * `PatternTooLong` if the template is longer than the name limit
    pub fn parse(source: &str) -> Result<Template> {
        let chars: Vec<char> = source.chars().collect();
        if chars.len() > MAX_NAME_LENGTH {
            return Err(pattern_too_long_error(
                "Rebuild pattern",
                chars.len(),
                MAX_NAME_LENGTH,
            ));
        }

        let mut atoms = Vec::new();
        let mut literal = String::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            if c != STAR && c != QUESTION_MARK && c != QUOTE {
                literal.push(c);
                i += 1;
                continue;
            }

            if !literal.is_empty() {
                atoms.push(TemplateAtom::Literal(std::mem::take(&mut literal)));
            }

            if c == QUOTE {
                let command = chars.get(i + 1).copied();
                let argument = chars.get(i + 2).copied();
                let atom = match command {
                    Some(DATE_COMMAND) => argument
                        .and_then(DateUnit::from_symbol)
                        .map(TemplateAtom::Date)
                        .ok_or_else(|| invalid_date_spec_error(source, i + 2, argument))?,
                    Some(SEQUENCE_COMMAND) => argument
                        .and_then(digit_value)
                        .map(|width| TemplateAtom::Sequence { width })
                        .ok_or_else(|| invalid_sequence_spec_error(source, i + 2, argument))?,
                    _ => return Err(invalid_quote_spec_error(source, i + 1, command)),
                };
                atoms.push(atom);
                i += 3;
                continue;
            }

            let kind = if c == STAR {
                CaptureKind::Star
            } else {
                CaptureKind::QuestionMark
            };
            let position = i;
            i += 1;

            // A quote right after a wildcard is always an index suffix
            let index = if chars.get(i) == Some(&QUOTE) {
                let digit = chars.get(i + 1).copied();
                let value = digit
                    .and_then(digit_value)
                    .ok_or_else(|| invalid_index_digit_error(source, i + 1, digit))?;
                i += 2;
                Some(value)
            } else {
                None
            };

            atoms.push(TemplateAtom::Reference {
                kind,
                index,
                position,
            });
        }

        if !literal.is_empty() {
            atoms.push(TemplateAtom::Literal(literal));
        }

        Ok(Template {
            source: source.to_string(),
            atoms,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn atoms(&self) -> &[TemplateAtom] {
        &self.atoms
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Checks that every capture reference can be satisfied by `pattern`
    ///
    /// Every successful match against a pattern yields the same number of
    /// captures of each kind, so the check holds for all entries of a run.
    ///
    /// # Errors
    /// * `IndexNotFound` for the first reference past the pattern's wildcards
    pub fn check_against(&self, pattern: &Pattern) -> Result<()> {
        let mut cursors = Cursors::default();
        for atom in &self.atoms {
            if let TemplateAtom::Reference {
                kind,
                index,
                position,
            } = atom
            {
                let occurrence = cursors.resolve(*kind, *index);
                let available = pattern.count_of_kind(*kind);
                if occurrence > available {
                    return Err(index_not_found_error(
                        *kind,
                        occurrence,
                        available,
                        &self.source,
                        *position,
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Value of an index or width digit, accepted only from 1 to 9
fn digit_value(c: char) -> Option<usize> {
    let value = c as i64 - '0' as i64;
    if (1..=9).contains(&value) {
        Some(value as usize)
    } else {
        None
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Template::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(kind: CaptureKind, index: Option<usize>, position: usize) -> TemplateAtom {
        TemplateAtom::Reference {
            kind,
            index,
            position,
        }
    }

    #[test]
    fn test_parse_references_and_literals() {
        let template = Template::parse("*'2b*'1").unwrap();

        assert_eq!(
            template.atoms(),
            &[
                reference(CaptureKind::Star, Some(2), 0),
                TemplateAtom::Literal("b".to_string()),
                reference(CaptureKind::Star, Some(1), 4),
            ]
        );
    }

    #[test]
    fn test_parse_implicit_references() {
        let template = Template::parse("x?-*.bak").unwrap();

        assert_eq!(
            template.atoms(),
            &[
                TemplateAtom::Literal("x".to_string()),
                reference(CaptureKind::QuestionMark, None, 1),
                TemplateAtom::Literal("-".to_string()),
                reference(CaptureKind::Star, None, 3),
                TemplateAtom::Literal(".bak".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_date_and_sequence() {
        let template = Template::parse("'ds_'s3").unwrap();

        assert_eq!(
            template.atoms(),
            &[
                TemplateAtom::Date(DateUnit::StandardDate),
                TemplateAtom::Literal("_".to_string()),
                TemplateAtom::Sequence { width: 3 },
            ]
        );
    }

    #[test]
    fn test_invalid_index_digit() {
        for source in ["*'0", "*'a", "?':", "*'"] {
            let result = Template::parse(source);
            assert!(
                matches!(result, Err(Error::InvalidIndexDigit { position: 2, .. })),
                "'{source}' should be rejected"
            );
        }
    }

    #[test]
    fn test_quote_after_wildcard_is_an_index() {
        // "'d" right after "*" is read as an index suffix
        let result = Template::parse("*'dY");
        assert!(matches!(result, Err(Error::InvalidIndexDigit { .. })));
    }

    #[test]
    fn test_invalid_quote_spec() {
        let result = Template::parse("ab'x");
        assert!(matches!(
            result,
            Err(Error::InvalidQuoteSpec {
                position: 3,
                found: Some('x'),
                ..
            })
        ));

        let result = Template::parse("ab'");
        assert!(matches!(
            result,
            Err(Error::InvalidQuoteSpec { found: None, .. })
        ));
    }

    #[test]
    fn test_invalid_date_spec() {
        let result = Template::parse("'dq");
        assert!(matches!(
            result,
            Err(Error::InvalidDateSpec {
                position: 2,
                found: Some('q'),
                ..
            })
        ));
        assert!(matches!(
            Template::parse("'d"),
            Err(Error::InvalidDateSpec { found: None, .. })
        ));
    }

    #[test]
    fn test_invalid_sequence_spec() {
        assert!(matches!(
            Template::parse("'s0"),
            Err(Error::InvalidSequenceSpec { .. })
        ));
        assert!(matches!(
            Template::parse("'s"),
            Err(Error::InvalidSequenceSpec { found: None, .. })
        ));
    }

    #[test]
    fn test_check_against_pattern() {
        let pattern = Pattern::parse("*-*").unwrap();

        assert!(Template::parse("*'2*'1").unwrap().check_against(&pattern).is_ok());
        assert!(Template::parse("**").unwrap().check_against(&pattern).is_ok());

        let result = Template::parse("*'3").unwrap().check_against(&pattern);
        assert!(matches!(
            result,
            Err(Error::IndexNotFound {
                index: 3,
                available: 2,
                ..
            })
        ));

        // The cursor continues from the explicit index
        let result = Template::parse("*'2*").unwrap().check_against(&pattern);
        assert!(matches!(result, Err(Error::IndexNotFound { index: 3, .. })));

        let result = Template::parse("?").unwrap().check_against(&pattern);
        assert!(matches!(result, Err(Error::IndexNotFound { available: 0, .. })));
    }

    #[test]
    fn test_empty_template() {
        let template = Template::parse("").unwrap();
        assert!(template.is_empty());
    }

    #[test]
    fn test_too_long_template() {
        let source = "x".repeat(MAX_NAME_LENGTH + 1);

        let error = Template::parse(&source).unwrap_err();
        assert!(matches!(error, Error::PatternTooLong { length: 301, .. }));
        assert!(error.is_usage_error());
    }
}
