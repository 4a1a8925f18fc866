use std::fs;
use std::path::PathBuf;

use filer::config::{Config, load_config, resolve_config};
use tempfile::tempdir;

#[cfg(test)]
mod tests {
    use super::*;

    // Helper function to write a configuration file and load it
    fn load(content: &str) -> anyhow::Result<Config> {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let path = temp_dir.path().join("filer.yaml");
        fs::write(&path, content).expect("Failed to write config file");
        load_config(&path)
    }

    #[test]
    fn test_full_config() {
        let config = load(
            "command: mv\n\
             directory: photos/2024\n\
             include_dots: true\n\
             quote: true\n\
             execute: true\n\
             shell: bash\n",
        )
        .expect("Config should load");

        assert_eq!(config.command, "mv");
        assert_eq!(config.directory, PathBuf::from("photos/2024"));
        assert!(config.include_dots);
        assert!(config.quote);
        assert!(config.execute);
        assert_eq!(config.shell, "bash");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = load("quote: true\n").expect("Config should load");

        assert_eq!(
            config,
            Config {
                quote: true,
                ..Config::default()
            }
        );
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = load("").expect("Config should load");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let result = load("command: [mv\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = load("comand: mv\n");

        let message = format!("{:#}", result.expect_err("Unknown field should fail"));
        assert!(message.contains("comand"), "Error should name the field: {message}");
    }

    #[test]
    fn test_empty_shell_is_rejected() {
        let result = load("shell: ''\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_without_command_is_rejected() {
        let result = load("execute: true\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp_dir = tempdir().expect("Failed to create temp directory");

        let result = resolve_config(Some(&temp_dir.path().join("missing.yaml")));
        assert!(result.is_err());
    }
}
