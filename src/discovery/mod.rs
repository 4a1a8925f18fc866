//! Entry discovery module
//!
//! This module contains components for listing the names to match.

mod scanner;

pub use scanner::{read_names, scan_directory};
