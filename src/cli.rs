use std::path::PathBuf;

use anyhow::Result;
use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version,
};

use crate::config::{Config, resolve_config};
use crate::constants::{
    AFTER_HELP, ALL_HELP, COMMAND_HELP, CONFIG_HELP, DIRECTORY_HELP, EXECUTE_HELP, LOG_FILE_DEFAULT,
    LOG_FILE_HELP, MATCH_HELP, QUOTE_HELP, REBUILD_HELP, STDIN_HELP, VERBOSE_HELP,
};
use crate::logging::LogLevel;
use crate::utils::expand_path;
use crate::workflow::{EntrySource, RunOptions, WorkflowContext, run};

/// Defines the command-line interface
///
/// Defines the following arguments:
/// - `match`: The matching pattern
/// - `rebuild`: The rebuilding pattern
/// - `command`: A command prefixed to every generated line
/// - `directory`: Directory in which to do matches
/// - `all`, `quote`, `execute`, `stdin`: Behaviour flags
/// - `config`: Path to the configuration file
/// - `verbose`: Increase verbosity level
/// - `log_file`: Also log to a file
pub fn build_command() -> Command {
    // define arg for the matching pattern
    let arg_match = Arg::new("match")
        .short('m')
        .long("match")
        .help(MATCH_HELP)
        .required(true)
        .allow_hyphen_values(true);

    // define arg for the rebuilding pattern
    let arg_rebuild = Arg::new("rebuild")
        .short('r')
        .long("rebuild")
        .help(REBUILD_HELP)
        .allow_hyphen_values(true);

    // define arg for the command prefix
    let arg_command = Arg::new("command")
        .short('c')
        .long("command")
        .help(COMMAND_HELP)
        .allow_hyphen_values(true);

    // define arg for the directory
    let arg_directory = Arg::new("directory")
        .short('d')
        .long("directory")
        .help(DIRECTORY_HELP);

    let arg_all = Arg::new("all")
        .short('a')
        .long("all")
        .help(ALL_HELP)
        .action(ArgAction::SetTrue);

    let arg_quote = Arg::new("quote")
        .short('q')
        .long("quote")
        .help(QUOTE_HELP)
        .action(ArgAction::SetTrue);

    let arg_execute = Arg::new("execute")
        .short('e')
        .long("execute")
        .help(EXECUTE_HELP)
        .action(ArgAction::SetTrue);

    let arg_stdin = Arg::new("stdin")
        .short('i')
        .long("stdin")
        .help(STDIN_HELP)
        .action(ArgAction::SetTrue);

    // define arg for reading from a specific config file
    let arg_config = Arg::new("config").long("config").help(CONFIG_HELP);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .after_help(AFTER_HELP)
        .arg(arg_match)
        .arg(arg_rebuild)
        .arg(arg_command)
        .arg(arg_directory)
        .arg(arg_all)
        .arg(arg_quote)
        .arg(arg_execute)
        .arg(arg_stdin)
        .arg(arg_config)
        .arg(log_file)
        .arg(arg_verbose)
}

/// Parses the process arguments
///
/// Exits with a usage message if the arguments are invalid.
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the command-line arguments
///
/// # Examples
/// ```
/// # use filer::cli::{build_command, get_verbosity};
/// # use filer::logging::LogLevel;
/// let matches = build_command().get_matches_from(["filer", "-m", "*", "-v"]);
/// assert_eq!(get_verbosity(&matches), LogLevel::Info);
/// ```
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

pub fn get_log_file(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string())
}

pub fn get_config_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<String>("config").map(|path| expand_path(path))
}

/// Combines the configuration defaults with the command-line arguments
///
/// Values given on the command line win; flags can only switch a setting on.
pub fn options_from_matches(matches: &ArgMatches, config: &Config) -> RunOptions {
    let string_arg = |name: &str| matches.get_one::<String>(name).cloned();

    RunOptions {
        pattern: string_arg("match").unwrap_or_default(),
        template: string_arg("rebuild").unwrap_or_default(),
        command: string_arg("command").unwrap_or_else(|| config.command.clone()),
        directory: string_arg("directory")
            .map(|dir| expand_path(&dir))
            .unwrap_or_else(|| config.directory.clone()),
        include_dots: matches.get_flag("all") || config.include_dots,
        quote: matches.get_flag("quote") || config.quote,
        execute: matches.get_flag("execute") || config.execute,
        shell: config.shell.clone(),
        source: if matches.get_flag("stdin") {
            EntrySource::Stdin
        } else {
            EntrySource::Directory
        },
    }
}

/// Loads the configuration, builds the run options and performs the run
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or the run fails
pub fn run_from_matches(matches: &ArgMatches) -> Result<WorkflowContext> {
    let config = resolve_config(get_config_path(matches).as_deref())?;
    let options = options_from_matches(matches, &config);
    run(&options)
}
