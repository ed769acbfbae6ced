pub mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use handoff_core::config::{AppConfig, LoadOptions};
use handoff_core::Locale;

use commands::CommandResult;

#[derive(Debug, Parser)]
#[command(
    name = "handoff",
    about = "Handoff approval-policy CLI",
    long_about = "Preview alert-ignore approval decisions, inspect the weekend-window calendar boundary, and review effective configuration.",
    after_help = "Examples:\n  handoff check --created-at 2025-01-01T18:00 --ignore-until 2025-01-04T10:00\n  handoff boundary --at 2025-01-05T07:59\n  handoff config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Evaluate the approval policy for an ignore window")]
    Check {
        #[arg(long, help = "Creation instant, local wall clock (YYYY-MM-DDTHH:MM[:SS])")]
        created_at: String,
        #[arg(long, help = "Requested expiry instant, local wall clock")]
        ignore_until: String,
        #[arg(long, help = "Submit as an admin (bypasses the approval queue)")]
        admin: bool,
        #[arg(long, help = "Override the banner locale (en|ru)")]
        locale: Option<String>,
    },
    #[command(about = "Print the next Sunday 08:00 boundary for an instant")]
    Boundary {
        #[arg(long, help = "Instant to compute the boundary from, local wall clock")]
        at: String,
    },
    #[command(about = "Classify an instant against the weekend creation window")]
    Window {
        #[arg(long, help = "Instant to classify, local wall clock")]
        at: String,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

fn init_logging(config: &AppConfig) {
    use handoff_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("config validation failed: {error}");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    let result = match cli.command {
        Command::Check { created_at, ignore_until, admin, locale } => {
            match resolve_locale(locale.as_deref(), config.display.locale) {
                Ok(locale) => commands::check::run(&created_at, &ignore_until, admin, locale),
                Err(message) => CommandResult::failure("check", "invalid_locale", message, 2),
            }
        }
        Command::Boundary { at } => commands::boundary::run(&at),
        Command::Window { at } => commands::window::run(&at),
        Command::Config => CommandResult { exit_code: 0, output: commands::config::run() },
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn resolve_locale(flag: Option<&str>, configured: Locale) -> Result<Locale, String> {
    match flag {
        Some(raw) => raw.parse::<Locale>().map_err(|error| error.to_string()),
        None => Ok(configured),
    }
}
