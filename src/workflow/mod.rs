//! Workflow module
//!
//! This module contains components for orchestrating the workflow steps.

mod command;
mod context;
mod engine;

pub use command::{execute_command, format_command};
pub use context::{GeneratedCommand, WorkflowContext, WorkflowStats};
pub use engine::{EntrySource, RunOptions, process_entries, run};
