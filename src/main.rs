use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use voxedit::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "voxedit")]
#[command(about = "Voice-controlled photo editing")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.voxedit/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply utterances to an image and save the result
    Apply {
        /// Image to edit
        input: PathBuf,

        /// Where to write the edited image (format follows the extension)
        #[arg(short, long)]
        output: PathBuf,

        /// Commands, one per argument (e.g. "grey scale" "brightness by 20")
        #[arg(required = true)]
        utterances: Vec<String>,
    },

    /// Show how an utterance is interpreted
    Interpret {
        #[arg(required = true)]
        utterance: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Edit an image interactively with typed or spoken commands
    Session {
        /// Image to edit
        input: PathBuf,

        /// Listen for spoken commands and speak feedback
        #[arg(long)]
        voice: bool,
    },

    /// Write the default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { force } => {
            cli::init::init_command(cli.config, force).await?;
        }
        Commands::Apply {
            input,
            output,
            utterances,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            cli::apply::apply_command(&config, &input, &output, &utterances).await?;
        }
        Commands::Interpret { utterance, json } => {
            let config = Config::load(cli.config.as_deref())?;
            cli::interpret::interpret_command(&config, &utterance.join(" "), json).await?;
        }
        Commands::Session { input, voice } => {
            let config = Config::load(cli.config.as_deref())?;
            cli::session::session_command(&config, &input, voice).await?;
        }
    }

    Ok(())
}
