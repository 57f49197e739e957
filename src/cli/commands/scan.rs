use anyhow::Result;
use colored::Colorize;

use crate::cli::args::ScanCommand;
use crate::cli::exit_status::ExitStatus;
use crate::config::load_config;
use crate::core::extract::Extractor;
use crate::report;

pub fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let config_result = load_config(&cmd.path)?;
    if cmd.verbose && !config_result.from_file {
        eprintln!("Note: No {} found, using default configuration", crate::config::CONFIG_FILE_NAME);
    }

    let extractor = Extractor::new(&config_result.config);
    let extraction = extractor.extract_dir(&cmd.path, cmd.verbose);

    if extraction.skipped > 0 {
        eprintln!(
            "{} {} path(s) skipped due to access errors{}",
            "warning:".bold().yellow(),
            extraction.skipped,
            if cmd.verbose { "" } else { " (use -v for details)" }
        );
    }

    // per-file failures are reported and the run keeps going
    for err in &extraction.errors {
        eprintln!("{} {}", "warning:".bold().yellow(), err);
    }

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&extraction.reports)?);
    } else if extraction.reports.is_empty() {
        report::print_success(extraction.scanned);
    } else {
        report::report(&extraction.reports);
    }

    let clean = extraction.reports.is_empty() && extraction.errors.is_empty();
    Ok(if clean {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    })
}
