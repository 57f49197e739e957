//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Find hardcoded double-byte text in a project tree
//! - `init`: Initialize hanseek configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan a project tree for hardcoded double-byte text
    Scan(ScanCommand),
    /// Create a default .hanseekrc.json in the current directory
    Init,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Project root to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Emit reports as JSON instead of the console listing
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn test_scan_defaults() {
        let args = Arguments::parse_from(["hanseek", "scan"]);
        let Some(Command::Scan(cmd)) = args.command else {
            panic!("expected scan command");
        };
        assert_eq!(cmd.path, PathBuf::from("."));
        assert!(!cmd.json);
        assert!(!cmd.verbose);
    }

    #[test]
    fn test_scan_with_flags() {
        let args = Arguments::parse_from(["hanseek", "scan", "web/", "--json", "-v"]);
        let Some(Command::Scan(cmd)) = args.command else {
            panic!("expected scan command");
        };
        assert_eq!(cmd.path, PathBuf::from("web/"));
        assert!(cmd.json);
        assert!(cmd.verbose);
    }
}
