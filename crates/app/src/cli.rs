//! Command-line arguments for the desktop app.

use std::path::PathBuf;

use clap::{Args, FromArgMatches, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
    name = "flashdeck",
    version,
    about = "Timed flashcard practice with a swipeable card stack"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the study window (default).
    Ui(UiArgs),

    /// Write a small sample deck to the deck file.
    Seed(SeedArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DeckFileArg {
    /// Deck file to read and write (default: per-user data directory).
    #[arg(long = "deck-file", value_name = "PATH", env = "FLASHDECK_DECK_FILE")]
    pub deck_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct UiArgs {
    #[command(flatten)]
    pub deck: DeckFileArg,

    /// Length of a study session in seconds.
    #[arg(
        long = "session-secs",
        value_name = "N",
        env = "FLASHDECK_SESSION_SECS",
        default_value_t = flash_core::model::DEFAULT_SESSION_SECS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub session_secs: u32,

    /// Show answer buttons and drop the red/green swipe tint.
    #[arg(long = "differentiate-without-color")]
    pub differentiate_without_color: bool,

    /// Screen-reader mode: one card face at a time, with answer buttons.
    #[arg(long = "voice-over")]
    pub voice_over: bool,
}

impl UiArgs {
    /// `ui` arguments when no subcommand was given: defaults plus environment.
    pub fn from_env() -> Result<Self, clap::Error> {
        let matches = Self::augment_args(clap::Command::new("ui")).try_get_matches_from(["ui"])?;
        Self::from_arg_matches(&matches)
    }
}

#[derive(Args, Debug, Clone)]
pub struct SeedArgs {
    #[command(flatten)]
    pub deck: DeckFileArg,

    /// Overwrite an existing deck file.
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_ui() {
        let cli = Cli::try_parse_from(["flashdeck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn ui_flags_parse() {
        let cli = Cli::try_parse_from([
            "flashdeck",
            "ui",
            "--deck-file",
            "/tmp/cards.json",
            "--session-secs",
            "30",
            "--voice-over",
        ])
        .unwrap();
        let Some(Command::Ui(args)) = cli.command else {
            panic!("expected ui");
        };
        assert_eq!(args.deck.deck_file, Some(PathBuf::from("/tmp/cards.json")));
        assert_eq!(args.session_secs, 30);
        assert!(args.voice_over);
        assert!(!args.differentiate_without_color);
    }

    #[test]
    fn bare_ui_args_use_defaults() {
        let args = UiArgs::from_env().unwrap();
        assert!(!args.voice_over);
        assert!(!args.differentiate_without_color);
    }

    #[test]
    fn zero_length_session_is_rejected() {
        assert!(Cli::try_parse_from(["flashdeck", "ui", "--session-secs", "0"]).is_err());
    }

    #[test]
    fn global_log_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["flashdeck", "seed", "--force", "--log-format", "json"]).unwrap();
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert!(matches!(cli.command, Some(Command::Seed(SeedArgs { force: true, .. }))));
    }
}
