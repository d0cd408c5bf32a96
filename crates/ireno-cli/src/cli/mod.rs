//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use ireno_core::settings::Settings;

mod commands;

#[derive(Parser)]
#[command(name = "ireno")]
#[command(version)]
#[command(about = "IRENO utility-grid monitoring dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Chat utilities (scripted assistant without the dashboard)
    Chat {
        #[command(subcommand)]
        command: ChatCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the settings file
    Path,
    /// Print the effective settings as JSON
    Show,
    /// Restore the default settings and persist them
    Reset,
}

#[derive(clap::Subcommand)]
enum ChatCommands {
    /// Print the assistant's reply for a message
    Respond {
        /// The message to resolve
        #[arg(value_name = "MESSAGE")]
        message: String,
    },
    /// Write a chat export artifact for a fresh session
    Export {
        /// Directory to write the export into (default: current directory)
        #[arg(long, value_name = "DIR")]
        out: Option<std::path::PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // File logging; stderr belongs to the TUI
    let _log_guard = ireno_core::logging::init();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    // default to the dashboard
    let Some(command) = cli.command else {
        let settings = Settings::load();
        return crate::modes::run_dashboard(settings).await;
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Show => commands::config::show(),
            ConfigCommands::Reset => commands::config::reset(),
        },
        Commands::Chat { command } => match command {
            ChatCommands::Respond { message } => {
                commands::chat::respond(&message);
                Ok(())
            }
            ChatCommands::Export { out } => commands::chat::export(out.as_deref()),
        },
    }
}
