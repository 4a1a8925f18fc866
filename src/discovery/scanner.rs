//! Directory scanning functionality
//!
//! This module contains functions for listing the entry names of a directory
//! or reading them from a stream.

use std::fs::read_dir;
use std::io::BufRead;
use std::path::Path;

use anyhow::{Result, anyhow};
use log::{debug, warn};

use crate::errors::{file_operation_error, invalid_filename_error};

/// Lists the names of the entries in a directory
///
/// Files and directories are both listed; the listing is not recursive.
/// Names that are not valid Unicode are skipped with a warning. The result is
/// sorted so that output and sequence numbers do not depend on the order the
/// filesystem returns entries in.
///
/// # Errors
/// Returns an error if the directory cannot be read
pub fn scan_directory(directory: &Path) -> Result<Vec<String>> {
    debug!("Scanning directory: {}", directory.display());

    let entries = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "read directory"))?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Failed to read an entry of {}: {e}", directory.display());
                None
            }
        })
        .filter_map(|entry| match entry.file_name().into_string() {
            Ok(name) => Some(name),
            Err(_) => {
                warn!("{}", invalid_filename_error(entry.path()));
                None
            }
        })
        .collect();
    names.sort();

    debug!("Found {} entries in directory", names.len());

    Ok(names)
}

/// Reads one name per line
///
/// Empty lines are ignored and a trailing carriage return is dropped.
///
/// # Errors
/// Returns an error if the reader fails or yields invalid UTF-8
pub fn read_names<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| anyhow!("Failed to read names: {}", e))?;
        let name = line.strip_suffix('\r').unwrap_or(&line);
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }

    debug!("Read {} names", names.len());

    Ok(names)
}
