use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::str::FromStr;

use crate::commands::{
    cmd_config_get, cmd_config_set, cmd_config_show, cmd_dashboard, cmd_ls, cmd_mark,
};
use crate::error::Result;
use crate::logging;
use crate::types::{StatusFilter, VALID_STATUS_FILTERS};

#[derive(Parser)]
#[command(name = "turnstile")]
#[command(about = "Festival ticket desk: browse tickets and mark them used")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive ticket dashboard
    #[command(visible_alias = "ui")]
    Dashboard,

    /// List tickets
    Ls {
        /// Case-insensitive substring of ticket ID, email or category
        #[arg(short, long)]
        search: Option<String>,

        /// Status filter: all, used, unused, paid, pending (default: all)
        #[arg(long, default_value = "all", value_parser = parse_status_filter)]
        status: StatusFilter,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle a ticket between used and unused
    Mark {
        /// Ticket ID (exact)
        #[arg(value_parser = parse_ticket_id)]
        ticket_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (api_url, api_token, currency_symbol, remote_timeout)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    pub async fn run(self) -> Result<()> {
        // The dashboard owns the terminal and logs to a file instead
        if !matches!(self, Commands::Dashboard) {
            logging::init_stderr();
        }

        match self {
            Commands::Dashboard => cmd_dashboard().await,
            Commands::Ls {
                search,
                status,
                json,
            } => cmd_ls(search.as_deref(), status, json).await,
            Commands::Mark { ticket_id, json } => cmd_mark(&ticket_id, json).await,
            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> std::result::Result<T, String>
where
    F: FnOnce(&str) -> std::result::Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_status_filter(s: &str) -> std::result::Result<StatusFilter, String> {
    parse_with_validation(
        s,
        |v| StatusFilter::from_str(v).map_err(|_| String::new()),
        "status",
        VALID_STATUS_FILTERS,
    )
}

fn parse_ticket_id(s: &str) -> std::result::Result<String, String> {
    if s.trim().is_empty() {
        return Err("ticket ID cannot be empty".to_string());
    }
    Ok(s.to_string())
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "turnstile", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_status_filter_valid() {
        assert_eq!(parse_status_filter("all").unwrap(), StatusFilter::All);
        assert_eq!(parse_status_filter("USED").unwrap(), StatusFilter::Used);
        assert_eq!(parse_status_filter("pending").unwrap(), StatusFilter::Pending);
    }

    #[test]
    fn test_parse_status_filter_error_lists_values() {
        let err = parse_status_filter("refunded").unwrap_err();
        assert_eq!(
            err,
            "Invalid status. Must be one of: all, used, unused, paid, pending"
        );
    }

    #[test]
    fn test_parse_ticket_id() {
        assert_eq!(parse_ticket_id("A1").unwrap(), "A1");
        assert!(parse_ticket_id("").is_err());
        assert!(parse_ticket_id("   ").is_err());
    }

    #[test]
    fn test_ls_defaults() {
        let cli = Cli::try_parse_from(["turnstile", "ls"]).unwrap();
        match cli.command {
            Commands::Ls {
                search,
                status,
                json,
            } => {
                assert_eq!(search, None);
                assert_eq!(status, StatusFilter::All);
                assert!(!json);
            }
            _ => panic!("expected ls"),
        }
    }

    #[test]
    fn test_ls_with_search_and_status() {
        let cli =
            Cli::try_parse_from(["turnstile", "ls", "-s", "vip", "--status", "paid", "--json"])
                .unwrap();
        match cli.command {
            Commands::Ls {
                search,
                status,
                json,
            } => {
                assert_eq!(search.as_deref(), Some("vip"));
                assert_eq!(status, StatusFilter::Paid);
                assert!(json);
            }
            _ => panic!("expected ls"),
        }
    }

    #[test]
    fn test_ls_rejects_unknown_status() {
        assert!(Cli::try_parse_from(["turnstile", "ls", "--status", "refunded"]).is_err());
    }

    #[test]
    fn test_ui_alias() {
        let cli = Cli::try_parse_from(["turnstile", "ui"]).unwrap();
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn test_mark_requires_id() {
        assert!(Cli::try_parse_from(["turnstile", "mark"]).is_err());
        let cli = Cli::try_parse_from(["turnstile", "mark", "A1"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Mark { ref ticket_id, json: false } if ticket_id == "A1"
        ));
    }
}
