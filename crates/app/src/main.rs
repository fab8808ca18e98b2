use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, DeckStore, EditorService, ServicesConfig};
use storage::default_deck_path;
use ui::{App, DisplayConfig, UiApp, build_app_context};

mod cli;
mod logging;
mod seed;

use crate::cli::{Cli, Command, LogFormatArg, UiArgs};
use crate::logging::{LogConfig, LogFormat, init_logging};
use crate::seed::run_seed;

struct DesktopApp {
    services: AppServices,
    display: DisplayConfig,
}

impl UiApp for DesktopApp {
    fn deck_store(&self) -> Arc<DeckStore> {
        self.services.deck_store()
    }

    fn editor(&self) -> Arc<EditorService> {
        self.services.editor()
    }

    fn display(&self) -> DisplayConfig {
        self.display
    }
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        with_ansi: cli.log_file.is_none() && io::stderr().is_terminal(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        log_file: cli.log_file.clone(),
    }
}

fn run_ui(args: UiArgs) -> anyhow::Result<()> {
    let mut config = ServicesConfig::default().with_session_secs(args.session_secs);
    if let Some(path) = args.deck.deck_file {
        config = config.with_deck_path(path);
    }
    let services = AppServices::from_config(&config).context("resolving deck file")?;
    let display = DisplayConfig {
        differentiate_without_color: args.differentiate_without_color,
        voice_over: args.voice_over,
    };
    tracing::info!(
        session_secs = args.session_secs,
        ?display,
        "launching study window"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services, display });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("FlashDeck")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let command = match cli.command {
        Some(command) => command,
        None => Command::Ui(UiArgs::from_env()?),
    };
    match command {
        Command::Ui(args) => run_ui(args),
        Command::Seed(args) => {
            let path = match args.deck.deck_file {
                Some(path) => path,
                None => default_deck_path()?,
            };
            let count = run_seed(&path, args.force)?;
            println!("wrote {count} cards to {}", path.display());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {err}");
        std::process::exit(1);
    }
    if let Err(err) = run(cli) {
        // At this layer (binary glue), printing once is fine.
        tracing::error!("{err:#}");
        eprintln!("error: {err:#}");
        std::process::exit(2);
    }
}
