//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Exception reporter: build an exception report and save, copy or send it
#[derive(Parser, Debug)]
#[command(name = "exception-reporter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file (defaults to the per-user config location)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Error message to report
    #[arg(short, long, global = true, default_value = "Unhandled exception")]
    pub message: String,

    /// Cause of the error; repeat for deeper levels
    #[arg(long = "caused-by", global = true)]
    pub caused_by: Vec<String>,

    /// What the user was doing when the error happened
    #[arg(short, long, global = true, default_value = "")]
    pub explanation: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the report
    Show {
        /// Print the full detail view
        #[arg(short, long)]
        full: bool,
    },

    /// Save the report to a text file
    Save {
        /// Destination file
        path: PathBuf,
    },

    /// Send the report through the configured channel
    Send,

    /// Copy the report to the clipboard
    Copy,

    /// Print the collected system information
    Sysinfo,

    /// Open a mail to the support contact
    Contact,

    /// Open the vendor website
    Website,

    /// Configure settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the configuration file location
    Path,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_send_with_globals() {
        let cli = Cli::try_parse_from([
            "exception-reporter",
            "--message",
            "disk full",
            "--caused-by",
            "write failed",
            "send",
            "-e",
            "saving a draft",
        ])
        .unwrap();

        assert_eq!(cli.message, "disk full");
        assert_eq!(cli.caused_by, vec!["write failed".to_string()]);
        assert_eq!(cli.explanation, "saving a draft");
        assert!(matches!(cli.command, Some(Commands::Send)));
    }

    #[test]
    fn test_parse_save_path() {
        let cli = Cli::try_parse_from(["exception-reporter", "save", "/tmp/report.txt"]).unwrap();
        match cli.command {
            Some(Commands::Save { path }) => assert_eq!(path, PathBuf::from("/tmp/report.txt")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::try_parse_from(["exception-reporter", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init { force: true }
            })
        ));
    }

    #[test]
    fn test_quiet_flag() {
        let cli = Cli::try_parse_from(["exception-reporter", "copy", "-q"]).unwrap();
        assert!(cli.quiet);
        assert!(Cli::try_parse_from(["exception-reporter", "-q", "-v", "copy"]).is_err());
    }
}
