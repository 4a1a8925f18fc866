//! Workflow context
//!
//! This module defines the state collected while a run processes its entries.

use std::path::PathBuf;

/// A command line generated for one matched entry
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCommand {
    /// Path of the matched entry
    pub source: PathBuf,
    /// The rebuilt name, if the run has a rebuild pattern
    pub rebuilt: Option<String>,
    /// The full line that was printed or executed
    pub line: String,
}

/// Statistics about the run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of entries considered
    pub entries_seen: usize,
    /// Number of entries that matched the pattern
    pub entries_matched: usize,
    /// Number of entries skipped because of an error
    pub entries_skipped: usize,
    /// Number of command lines printed or executed
    pub commands_emitted: usize,
    /// Number of executed commands that failed
    pub commands_failed: usize,
}

/// Context for the workflow
#[derive(Debug, Clone, Default)]
pub struct WorkflowContext {
    /// Statistics about the processing
    pub stats: WorkflowStats,
    /// Commands generated so far, in output order
    pub commands: Vec<GeneratedCommand>,
}

impl WorkflowContext {
    pub fn new() -> Self {
        WorkflowContext::default()
    }

    /// Records a generated command
    pub fn add_command(&mut self, command: GeneratedCommand) {
        self.commands.push(command);
        self.stats.commands_emitted += 1;
    }

    pub fn increment_entries_seen(&mut self) {
        self.stats.entries_seen += 1;
    }

    pub fn increment_entries_matched(&mut self) {
        self.stats.entries_matched += 1;
    }

    pub fn increment_entries_skipped(&mut self) {
        self.stats.entries_skipped += 1;
    }

    pub fn increment_commands_failed(&mut self) {
        self.stats.commands_failed += 1;
    }

    /// Sequence number of the next matched entry
    pub fn next_sequence(&self) -> usize {
        self.stats.entries_matched + 1
    }
}
