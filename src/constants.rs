/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Wildcard matching any non-empty run of characters
pub const STAR: char = '*';

/// Wildcard matching exactly one character
pub const QUESTION_MARK: char = '?';

/// Introduces an index suffix after a wildcard, or a sub-command elsewhere
pub const QUOTE: char = '\'';

/// Sub-command selecting a date unit
pub const DATE_COMMAND: char = 'd';

/// Sub-command inserting the sequence number
pub const SEQUENCE_COMMAND: char = 's';

/// Maximum number of wildcards a single pattern may hold
pub const MAX_CAPTURES: usize = 10;

/// Maximum length (in characters) of a name, pattern, template or rebuilt name
pub const MAX_NAME_LENGTH: usize = 300;

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is used for the configuration directory lookup.
pub const APPLICATION: &str = "filer";

/// Name of the configuration file looked up in the configuration directory
pub const DEFAULT_CONFIG_FILE: &str = "filer.yaml";

/// Shell used to run generated commands
pub const DEFAULT_SHELL: &str = "sh";

/// Directory scanned when none is given
pub const DEFAULT_DIRECTORY: &str = ".";

/// Log file name, empty when logging to a file is disabled
pub const LOG_FILE_DEFAULT: &str = "";

/// Help text for the match command-line option
pub const MATCH_HELP: &str = "Matching pattern (* matches one or more chars, ? matches one char)";

/// Help text for the rebuild command-line option
pub const REBUILD_HELP: &str = "Rebuilding pattern (*'n / ?'n pick the nth capture, 'dX inserts a date, 'sN a sequence number)";

/// Help text for the command option
pub const COMMAND_HELP: &str = "A command to prefix to resulting matches and rebuilds";

/// Help text for the directory option
pub const DIRECTORY_HELP: &str = "Directory in which to do matches";

/// Help text for the all option
pub const ALL_HELP: &str = "Include files that begin with a period (.)";

/// Help text for the quote option
pub const QUOTE_HELP: &str = "Quote filenames (useful for funny characters)";

/// Help text for the execute option
pub const EXECUTE_HELP: &str = "Run the generated commands instead of printing them";

/// Help text for the stdin option
pub const STDIN_HELP: &str = "Read names from standard input instead of the directory";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read defaults from a specific config file";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";

/// Text shown after the option list
pub const AFTER_HELP: &str = "\
Example: filer -c cp -m \"*b*\" -r \"*'2b*'1\"
Will turn: 'abc' into 'cba', etc.

Date units for 'd: Y (1995), y (95), m (01-12), d (01-31), s (19950922),
                   H (00-23), M (00-59), t (hhmm)

Filer only prints the commands unless --execute is given. Check them before
piping them to a shell.";
