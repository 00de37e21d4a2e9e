//! CLI command definitions for the `rizz` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod reply;
pub mod styles;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use rizz_types::reply::{ReplyStyle, Scale};

/// Get a reply for the message you just received.
#[derive(Parser)]
#[command(name = "rizz", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ~/.rizzsite/config.toml.
    #[arg(long, global = true, env = "RIZZ_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one reply and exit.
    Reply {
        /// The message you received.
        message: String,

        #[command(flatten)]
        options: ReplyOptions,
    },

    /// Interactive session: keep answering messages in one conversation.
    Chat {
        #[command(flatten)]
        options: ReplyOptions,
    },

    /// List the available response styles.
    Styles,

    /// Serve the web page and JSON API.
    Serve {
        /// Port to listen on (overrides the config).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides the config).
        #[arg(long)]
        host: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Slider and style selections shared by `reply` and `chat`.
#[derive(clap::Args, Clone, Copy)]
pub struct ReplyOptions {
    /// How interested you are, 1-10.
    #[arg(short, long, default_value_t = Scale::default())]
    pub interest: Scale,

    /// How intense the reply should be, 1-10.
    #[arg(short, long, default_value_t = Scale::default())]
    pub tone: Scale,

    /// Response style (see `rizz styles`).
    #[arg(short, long, default_value_t = ReplyStyle::default())]
    pub style: ReplyStyle,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_reply_with_options() {
        let cli = Cli::try_parse_from([
            "rizz", "reply", "wanna hang?", "-i", "9", "--tone", "2", "--style", "witty",
        ])
        .unwrap();
        match cli.command {
            Commands::Reply { message, options } => {
                assert_eq!(message, "wanna hang?");
                assert_eq!(options.interest.get(), 9);
                assert_eq!(options.tone.get(), 2);
                assert_eq!(options.style, ReplyStyle::Witty);
            }
            _ => panic!("Expected Reply"),
        }
    }

    #[test]
    fn test_parse_reply_defaults() {
        let cli = Cli::try_parse_from(["rizz", "--json", "reply", "hi"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Reply { options, .. } => {
                assert_eq!(options.interest, Scale::default());
                assert_eq!(options.style, ReplyStyle::Neutral);
            }
            _ => panic!("Expected Reply"),
        }
    }

    #[test]
    fn test_out_of_range_scale_is_rejected() {
        assert!(Cli::try_parse_from(["rizz", "reply", "hi", "--interest", "0"]).is_err());
        assert!(Cli::try_parse_from(["rizz", "reply", "hi", "--tone", "11"]).is_err());
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        assert!(Cli::try_parse_from(["rizz", "reply", "hi", "--style", "spicy"]).is_err());
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["rizz", "-vv", "styles"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_offline_commands_parse_without_config() {
        let cli = Cli::try_parse_from(["rizz", "completions", "bash"]).unwrap();
        assert!(matches!(cli.command, Commands::Completions { shell: Shell::Bash }));

        let cli = Cli::try_parse_from(["rizz", "--json", "styles"]).unwrap();
        assert!(matches!(cli.command, Commands::Styles));
    }
}
