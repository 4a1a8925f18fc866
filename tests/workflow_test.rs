use std::fs::{self, File};
use std::path::PathBuf;

use chrono::NaiveDate;
use filer::Error;
use filer::rebuild::ClockSnapshot;
use filer::workflow::{RunOptions, WorkflowContext, process_entries};
use tempfile::tempdir;

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> ClockSnapshot {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
            .into()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    // Helper function to run a job and collect what it printed
    fn run_job(options: &RunOptions, entries: &[&str]) -> (WorkflowContext, Vec<String>) {
        let mut out = Vec::new();
        let context = process_entries(options, names(entries), &clock(), &mut out)
            .expect("Job should succeed");
        let printed = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        (context, printed)
    }

    #[test]
    fn test_copy_with_swapped_name() {
        let options = RunOptions {
            pattern: "*b*".to_string(),
            template: "*'2b*'1".to_string(),
            command: "cp".to_string(),
            ..RunOptions::default()
        };

        let (context, printed) = run_job(&options, &["abc", "xyz"]);

        assert_eq!(printed, vec!["cp ./abc cba"]);
        assert_eq!(context.stats.entries_seen, 2);
        assert_eq!(context.stats.entries_matched, 1);
        assert_eq!(context.stats.commands_emitted, 1);
        assert_eq!(context.commands[0].source, PathBuf::from("./abc"));
        assert_eq!(context.commands[0].rebuilt.as_deref(), Some("cba"));
    }

    #[test]
    fn test_listing_without_template() {
        let options = RunOptions {
            pattern: "*.txt".to_string(),
            directory: PathBuf::from("notes"),
            quote: true,
            ..RunOptions::default()
        };

        let (_, printed) = run_job(&options, &["a.txt", "b.md", "c d.txt"]);

        assert_eq!(printed, vec!["\"notes/a.txt\"", "\"notes/c d.txt\""]);
    }

    #[test]
    fn test_dotfiles_are_skipped_unless_included() {
        let mut options = RunOptions {
            pattern: "*".to_string(),
            ..RunOptions::default()
        };

        let (_, printed) = run_job(&options, &[".profile", "readme"]);
        assert_eq!(printed, vec!["./readme"]);

        options.include_dots = true;
        let (_, printed) = run_job(&options, &[".profile", "readme"]);
        assert_eq!(printed, vec!["./.profile", "./readme"]);
    }

    #[test]
    fn test_sequence_and_date_in_rebuilt_names() {
        let options = RunOptions {
            pattern: "IMG_*.jpg".to_string(),
            template: "'dY-'s3.jpg".to_string(),
            command: "mv".to_string(),
            ..RunOptions::default()
        };

        let entries = ["IMG_0001.jpg", "IMG_0002.jpg", "notes.txt", "IMG_0003.jpg"];
        let (_, printed) = run_job(&options, &entries);

        assert_eq!(
            printed,
            vec![
                "mv ./IMG_0001.jpg 2024-001.jpg",
                "mv ./IMG_0002.jpg 2024-002.jpg",
                "mv ./IMG_0003.jpg 2024-003.jpg",
            ]
        );
    }

    #[test]
    fn test_template_referencing_missing_capture_aborts() {
        let options = RunOptions {
            pattern: "*-*".to_string(),
            template: "*'3".to_string(),
            ..RunOptions::default()
        };
        let mut out = Vec::new();

        let result = process_entries(&options, names(&["a-b"]), &clock(), &mut out);

        let err = result.expect_err("Template should be rejected");
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::IndexNotFound { index: 3, .. })
        ));
        assert!(out.is_empty(), "Nothing should be printed");
    }

    #[test]
    fn test_malformed_template_aborts() {
        let options = RunOptions {
            pattern: "*".to_string(),
            template: "*'x".to_string(),
            ..RunOptions::default()
        };
        let mut out = Vec::new();

        let result = process_entries(&options, names(&["a"]), &clock(), &mut out);

        let err = result.expect_err("Template should be rejected");
        let inner = err.downcast_ref::<Error>().expect("Should be a filer error");
        assert!(inner.is_usage_error());
    }

    #[test]
    fn test_scanned_directory_is_processed_in_order() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        for name in ["beta.log", "alpha.log", "gamma.txt"] {
            File::create(temp_dir.path().join(name)).unwrap();
        }

        let entries = filer::discovery::scan_directory(temp_dir.path()).unwrap();
        let options = RunOptions {
            pattern: "*.log".to_string(),
            template: "*.old".to_string(),
            directory: temp_dir.path().to_path_buf(),
            ..RunOptions::default()
        };
        let mut out = Vec::new();

        let context = process_entries(&options, entries, &clock(), &mut out).unwrap();

        let rebuilt: Vec<_> = context
            .commands
            .iter()
            .filter_map(|command| command.rebuilt.clone())
            .collect();
        assert_eq!(rebuilt, vec!["alpha.old", "beta.old"]);
        assert_eq!(context.stats.entries_seen, 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_renames_files() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("draft-one.md"), "one").unwrap();
        fs::write(temp_dir.path().join("draft-two.md"), "two").unwrap();

        let entries = filer::discovery::scan_directory(temp_dir.path()).unwrap();
        let directory = temp_dir.path().to_path_buf();
        let options = RunOptions {
            pattern: "draft-*.md".to_string(),
            template: format!("{}/final-*.md", directory.display()),
            command: "mv".to_string(),
            directory,
            quote: true,
            execute: true,
            ..RunOptions::default()
        };
        let mut out = Vec::new();

        let context = process_entries(&options, entries, &clock(), &mut out).unwrap();

        assert!(out.is_empty(), "Executed lines are not printed");
        assert_eq!(context.stats.commands_failed, 0);
        assert_eq!(context.stats.commands_emitted, 2);
        assert!(temp_dir.path().join("final-one.md").exists());
        assert!(temp_dir.path().join("final-two.md").exists());
        assert!(!temp_dir.path().join("draft-one.md").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_commands_are_counted() {
        let options = RunOptions {
            pattern: "*".to_string(),
            command: "false".to_string(),
            execute: true,
            ..RunOptions::default()
        };
        let mut out = Vec::new();

        let context = process_entries(&options, names(&["a", "b"]), &clock(), &mut out).unwrap();

        assert_eq!(context.stats.commands_failed, 2);
        assert_eq!(context.stats.commands_emitted, 2);
    }
}
