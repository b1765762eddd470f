mod api;
mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod session;
mod summary;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::API_URL_ENV_VAR;
use crate::environment::{Environment, InvalidEnvironment};
use crate::session::messages::SessionMessage;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about = "Terminal dashboard for the gradebook service", long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the dashboard
    Start {
        /// Base URL of the gradebook backend, or "local"
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Print the dashboard once instead of opening the terminal UI
        #[arg(long)]
        headless: bool,

        /// Paint a dark background behind the content area
        #[arg(long)]
        with_background: bool,
    },
    /// Save the backend URL and display preferences
    Configure {
        /// Base URL of the gradebook backend, or "local"
        #[arg(long, value_name = "URL")]
        api_url: String,

        /// Paint a dark background behind the content area
        #[arg(long)]
        with_background: bool,
    },
    /// Remove the saved configuration
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            api_url,
            headless,
            with_background,
        } => {
            let config = Config::load_or_default(&config_path).unwrap_or_else(|e| {
                SessionMessage::warn(format!(
                    "Ignoring unreadable config {}: {}",
                    config_path.display(),
                    e
                ))
                .print();
                Config::default()
            });
            let env_value = std::env::var(API_URL_ENV_VAR).ok();
            let environment = Environment::resolve(
                api_url.as_deref(),
                env_value.as_deref(),
                config.api_url.as_deref(),
            )
            .map_err(|e| e.to_string())?;
            let with_background = with_background || config.with_background_color;
            start(environment, headless, with_background).await
        }
        Command::Configure {
            api_url,
            with_background,
        } => {
            let environment: Environment = api_url
                .parse()
                .map_err(|e: InvalidEnvironment| e.to_string())?;
            let config = Config::new(Some(environment.api_url()), with_background);
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            SessionMessage::success(format!(
                "Saved {} to {}",
                environment.api_url(),
                config_path.display()
            ))
            .print();
            Ok(())
        }
        Command::Reset => {
            SessionMessage::info("Clearing saved configuration...").print();
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Starts the dashboard in TUI or headless mode.
async fn start(
    environment: Environment,
    headless: bool,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    let session = setup_session(environment, with_background)?;
    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session).await
    }
}
