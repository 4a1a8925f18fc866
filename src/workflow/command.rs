//! Command line formatting and execution

use std::path::Path;
use std::process::Command;

use log::debug;

use crate::errors::{Result, command_execution_error};

/// Builds the line for one matched entry
///
/// The non-empty parts among `command`, `source` and `rebuilt` are joined by
/// single spaces. With `quote`, the source path and rebuilt name are wrapped
/// in double quotes.
pub fn format_command(command: &str, source: &Path, rebuilt: Option<&str>, quote: bool) -> String {
    let wrap = |text: &str| {
        if quote {
            format!("\"{text}\"")
        } else {
            text.to_string()
        }
    };

    let mut parts = Vec::with_capacity(3);
    if !command.is_empty() {
        parts.push(command.to_string());
    }
    parts.push(wrap(&source.display().to_string()));
    if let Some(name) = rebuilt {
        parts.push(wrap(name));
    }

    parts.join(" ")
}

/// Runs a generated line through `shell -c`
///
/// # Errors
/// Returns an error if the shell cannot be started or the command exits
/// unsuccessfully
pub fn execute_command(shell: &str, line: &str) -> Result<()> {
    debug!("Executing: {line}");

    let status = Command::new(shell)
        .arg("-c")
        .arg(line)
        .status()
        .map_err(|e| command_execution_error(line, &format!("failed to start {shell}: {e}")))?;

    if !status.success() {
        return Err(command_execution_error(line, &status.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_command() {
        let source = Path::new("./abc");

        assert_eq!(format_command("cp", source, Some("cba"), false), "cp ./abc cba");
        assert_eq!(
            format_command("cp", source, Some("cba"), true),
            "cp \"./abc\" \"cba\""
        );
    }

    #[test]
    fn test_format_command_without_command_or_rebuild() {
        let source = Path::new("dir/file name.txt");

        assert_eq!(format_command("", source, None, false), "dir/file name.txt");
        assert_eq!(format_command("", source, None, true), "\"dir/file name.txt\"");
        assert_eq!(format_command("rm", source, None, false), "rm dir/file name.txt");
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_command() {
        assert!(execute_command("sh", "true").is_ok());
        assert!(execute_command("sh", "exit 3").is_err());
        assert!(execute_command("definitely-not-a-shell", "true").is_err());
    }
}
