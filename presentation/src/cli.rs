//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for roundtable
#[derive(Parser, Debug)]
#[command(name = "roundtable")]
#[command(author, version, about = "Multi-agent discussion client - agents discuss, agree, execute")]
#[command(long_about = r#"
Roundtable connects to a multi-agent discussion server. Each message you send
opens a round: the agents analyze it, discuss among themselves, reach
consensus, and execute the agreed plan while you watch the transcript live.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./roundtable.toml   Project-level config
3. ~/.config/roundtable/config.toml   Global config

Example:
  roundtable
  roundtable -v chat
  roundtable bookings --date 2026-08-24
"#)]
pub struct Cli {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the welcome banner and phase summaries
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive discussion chat (default)
    Chat,

    /// List bookings from the booking service
    Bookings {
        /// Only show bookings for this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },

    /// Show daily booking statistics
    Stats {
        /// Date to summarize (YYYY-MM-DD), defaults to today
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::parse_from(["roundtable"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_config);
    }

    #[test]
    fn test_bookings_with_date() {
        let cli = Cli::parse_from(["roundtable", "bookings", "--date", "2026-08-24"]);
        match cli.command {
            Some(Commands::Bookings { date }) => {
                assert_eq!(date.as_deref(), Some("2026-08-24"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["roundtable", "-vvv", "chat"]);
        assert_eq!(cli.verbose, 3);
        assert!(matches!(cli.command, Some(Commands::Chat)));
    }
}
