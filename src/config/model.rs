//! Configuration data structures

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Deserializer};

use crate::constants::{DEFAULT_DIRECTORY, DEFAULT_SHELL};
use crate::utils::expand_path;

/// Defaults for a run, read from the YAML configuration file
///
/// Every field is optional in the file; command-line options take precedence.
///
/// ```yaml
/// command: mv
/// directory: ~/Downloads
/// include_dots: false
/// quote: true
/// execute: false
/// shell: sh
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Command prefixed to every generated line
    pub command: String,
    /// Directory whose entries are matched
    #[serde(deserialize_with = "deserialize_expanded_path")]
    pub directory: PathBuf,
    /// Whether names beginning with `.` may match
    pub include_dots: bool,
    /// Whether paths are wrapped in double quotes
    pub quote: bool,
    /// Whether generated commands are run instead of printed
    pub execute: bool,
    /// Shell used to run generated commands
    pub shell: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            command: String::new(),
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            include_dots: false,
            quote: false,
            execute: false,
            shell: DEFAULT_SHELL.to_string(),
        }
    }
}

impl Config {
    /// Validates the configuration
    ///
    /// # Errors
    /// Returns an error with a detailed message if validation fails
    pub fn validate(&self) -> Result<()> {
        if self.shell.trim().is_empty() {
            return Err(anyhow!(
                "No shell specified in configuration. Remove the 'shell' key to use '{}'.",
                DEFAULT_SHELL
            ));
        }

        if self.directory.as_os_str().is_empty() {
            return Err(anyhow!(
                "Empty directory in configuration. Remove the 'directory' key to use '{}'.",
                DEFAULT_DIRECTORY
            ));
        }

        if self.execute && self.command.trim().is_empty() {
            return Err(anyhow!(
                "Configuration enables 'execute' but sets no 'command' to run."
            ));
        }

        Ok(())
    }
}

fn deserialize_expanded_path<'de, D>(deserializer: D) -> std::result::Result<PathBuf, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: String = Deserialize::deserialize(deserializer)?;
    Ok(expand_path(&raw))
}
