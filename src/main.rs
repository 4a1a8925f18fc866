use std::process::ExitCode;

use log::error;

use filer::prelude::*;

/// Exit code for usage and template errors
const USAGE_ERROR_CODE: u8 = 2;

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let matches = get_matches();

    if let Err(e) = init_logger(get_verbosity(&matches), &get_log_file(&matches)) {
        eprintln!("Filer: failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    match run_from_matches(&matches) {
        Ok(context) if context.stats.commands_failed > 0 => {
            error!(
                "Filer: {} of {} commands failed",
                context.stats.commands_failed, context.stats.commands_emitted
            );
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Filer: {e:#}");
            let is_usage_error = e
                .downcast_ref::<Error>()
                .is_some_and(|inner| inner.is_usage_error());
            if is_usage_error {
                ExitCode::from(USAGE_ERROR_CODE)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
