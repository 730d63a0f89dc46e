use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "nbcut")]
#[command(about = "Schedule disconnection of a hosted notebook compute session")]
#[command(version)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Base URL of the runtime control endpoint
    #[arg(
        long,
        global = true,
        env = "NBCUT_ENDPOINT",
        default_value = "http://127.0.0.1:8899",
        value_name = "URL"
    )]
    pub endpoint: String,

    /// Bearer token for the control endpoint
    #[arg(long, global = true, env = "NBCUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Wait the given number of seconds, then release the compute session
    #[command(alias = "cut")]
    Disconnect {
        /// Seconds to wait before releasing; -1 disables scheduling.
        /// Prompts on stdin when omitted.
        #[arg(value_name = "SECONDS", allow_hyphen_values = true)]
        delay_seconds: Option<String>,
    },

    /// Show the current session assignment
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_disconnect_with_delay() {
        let cli = Cli::try_parse_from(["nbcut", "disconnect", "5"]).unwrap();
        match cli.command {
            Commands::Disconnect { delay_seconds } => {
                assert_eq!(delay_seconds.as_deref(), Some("5"));
            }
            _ => panic!("Expected Disconnect command"),
        }
    }

    #[test]
    fn parse_disconnect_sentinel() {
        let cli = Cli::try_parse_from(["nbcut", "disconnect", "-1"]).unwrap();
        match cli.command {
            Commands::Disconnect { delay_seconds } => {
                assert_eq!(delay_seconds.as_deref(), Some("-1"));
            }
            _ => panic!("Expected Disconnect command"),
        }
    }

    #[test]
    fn parse_disconnect_without_delay() {
        let cli = Cli::try_parse_from(["nbcut", "disconnect"]).unwrap();
        match cli.command {
            Commands::Disconnect { delay_seconds } => assert_eq!(delay_seconds, None),
            _ => panic!("Expected Disconnect command"),
        }
    }

    #[test]
    fn cut_alias_resolves_to_disconnect() {
        let cli = Cli::try_parse_from(["nbcut", "cut", "30"]).unwrap();
        assert!(matches!(cli.command, Commands::Disconnect { .. }));
    }

    #[test]
    fn parse_status_command() {
        let cli = Cli::try_parse_from(["nbcut", "status"]).unwrap();
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn endpoint_flag_overrides_default() {
        let cli = Cli::try_parse_from([
            "nbcut",
            "--endpoint",
            "http://10.0.0.2:9000",
            "status",
        ])
        .unwrap();
        assert_eq!(cli.endpoint, "http://10.0.0.2:9000");
    }

    #[test]
    fn verbose_flag_counts() {
        let cli = Cli::try_parse_from(["nbcut", "-vv", "status"]).unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["nbcut", "--verbose", "status"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn invalid_command_fails() {
        assert!(Cli::try_parse_from(["nbcut", "reconnect"]).is_err());
    }
}
