//! Workflow engine
//!
//! This module contains the engine that orchestrates the workflow steps.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use colored::Colorize;
use log::{debug, error, info, warn};
use rayon::prelude::*;

use crate::constants::{DEFAULT_DIRECTORY, DEFAULT_SHELL};
use crate::discovery::{read_names, scan_directory};
use crate::logging::format_message;
use crate::pattern::{MatchOptions, MatchOutcome, Matcher, Pattern};
use crate::rebuild::{ClockSnapshot, Template};

use super::command::{execute_command, format_command};
use super::context::{GeneratedCommand, WorkflowContext};

/// Where the names to match come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySource {
    /// The entries of the run's directory
    Directory,
    /// One name per line on standard input
    Stdin,
}

/// Options for a run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Match pattern
    pub pattern: String,
    /// Rebuild pattern, empty to list matching entries only
    pub template: String,
    /// Command prefixed to every line
    pub command: String,
    /// Directory the entries live in
    pub directory: PathBuf,
    /// Whether names beginning with `.` may match
    pub include_dots: bool,
    /// Whether paths are wrapped in double quotes
    pub quote: bool,
    /// Whether lines are run instead of printed
    pub execute: bool,
    /// Shell used for execution
    pub shell: String,
    /// Where the names come from
    pub source: EntrySource,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            pattern: String::new(),
            template: String::new(),
            command: String::new(),
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            include_dots: false,
            quote: false,
            execute: false,
            shell: DEFAULT_SHELL.to_string(),
            source: EntrySource::Directory,
        }
    }
}

impl RunOptions {
    /// Checks that the options describe a runnable job
    ///
    /// # Errors
    /// * Returns an error if execution is requested without a command
    /// * Returns an error if the pattern or template is malformed, or the
    ///   template refers to captures the pattern cannot produce
    pub fn validate(&self) -> Result<()> {
        if self.execute && self.command.trim().is_empty() {
            return Err(anyhow!(
                "Nothing to execute: --execute needs a command (-c)"
            ));
        }

        let pattern = Pattern::parse(&self.pattern)?;
        Template::parse(&self.template)?.check_against(&pattern)?;

        Ok(())
    }
}

/// Runs the whole job: discovery, matching, rebuilding, output
///
/// The options are validated before any entry is listed. Lines are written
/// to standard output unless the options ask for execution.
///
/// # Errors
/// * Returns an error if the pattern or template is malformed
/// * Returns an error if the entries cannot be listed
pub fn run(options: &RunOptions) -> Result<WorkflowContext> {
    options.validate()?;

    let names = match options.source {
        EntrySource::Directory => scan_directory(&options.directory)?,
        EntrySource::Stdin => read_names(io::stdin().lock())?,
    };

    let clock = ClockSnapshot::now();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let context = process_entries(options, names, &clock, &mut out)?;
    out.flush()?;

    Ok(context)
}

/// Processes a list of entry names
///
/// The workflow steps are:
/// 1. Parse the pattern and template, and check the template against the pattern
/// 2. Match every name, in parallel, each with its own capture table
/// 3. For each match, in name order, rebuild the new name and numbered sequence
/// 4. Print the line to `out`, or execute it
///
/// # Arguments
/// * `options` - Options for the run
/// * `names` - The entry names, in output order
/// * `clock` - The run's clock snapshot
/// * `out` - Where printed lines go
///
/// # Errors
/// * Returns an error if the pattern or template is malformed
/// * Returns an error if writing to `out` fails
pub fn process_entries<W: Write>(
    options: &RunOptions,
    names: Vec<String>,
    clock: &ClockSnapshot,
    out: &mut W,
) -> Result<WorkflowContext> {
    // Step 1: Parse once, fail before touching any entry
    let pattern = Pattern::parse(&options.pattern)?;
    let template = Template::parse(&options.template)?;
    template.check_against(&pattern)?;

    let matcher = Matcher::new(
        pattern,
        MatchOptions {
            include_dots: options.include_dots,
        },
    );
    let mut context = WorkflowContext::new();

    info!(
        "Matching {} entries against '{}'{}...",
        names.len(),
        matcher.pattern(),
        if options.execute { " (executing)" } else { "" }
    );

    // Step 2: Match every name
    let outcomes: Vec<(String, crate::errors::Result<MatchOutcome>)> = names
        .into_par_iter()
        .map(|name| {
            let outcome = matcher.match_name(&name);
            (name, outcome)
        })
        .collect();

    for (name, outcome) in outcomes {
        context.increment_entries_seen();

        let captures = match outcome {
            Ok(MatchOutcome::Matched(captures)) => captures,
            Ok(MatchOutcome::NoMatch) => {
                debug!("No match: {name}");
                continue;
            }
            Err(e) => {
                warn!("Skipping '{name}': {e}");
                context.increment_entries_skipped();
                continue;
            }
        };

        // Step 3: Rebuild the new name
        let sequence = context.next_sequence();
        context.increment_entries_matched();

        let rebuilt = if template.is_empty() {
            None
        } else {
            match template.render(&captures, clock, sequence) {
                Ok(rebuilt) => Some(rebuilt),
                Err(e) if e.is_usage_error() => return Err(e.into()),
                Err(e) => {
                    warn!("Skipping '{name}': {e}");
                    context.increment_entries_skipped();
                    continue;
                }
            }
        };

        // Step 4: Print or execute
        let source = options.directory.join(&name);
        let line = format_command(&options.command, &source, rebuilt.as_deref(), options.quote);

        if options.execute {
            info!("{line}");
            if let Err(e) = execute_command(&options.shell, &line) {
                error!("{e}");
                context.increment_commands_failed();
            }
        } else {
            writeln!(out, "{line}")?;
        }

        context.add_command(GeneratedCommand {
            source,
            rebuilt,
            line,
        });
    }

    let stats = &context.stats;
    let message = format!(
        "Finished: {} of {} entries matched, {} skipped, {} commands failed",
        stats.entries_matched, stats.entries_seen, stats.entries_skipped, stats.commands_failed
    );
    let colored_message = format!(
        "Finished: {} of {} entries matched, {} skipped, {} commands failed",
        stats.entries_matched.to_string().bold().green(),
        stats.entries_seen,
        stats.entries_skipped.to_string().yellow(),
        stats.commands_failed.to_string().red()
    );
    info!("{}", format_message(&message, &colored_message));

    Ok(context)
}
