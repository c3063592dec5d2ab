//! diprobe - inspect dependency-injection configuration.

use clap::{Parser, Subcommand};

mod commands;
mod config;

use commands::PreferencesCommand;

/// Dependency-injection configuration inspection tool.
///
/// Reads a DI configuration file (YAML or JSON) and answers questions
/// about it, such as which concrete class is configured as the
/// preference for a given interface.
#[derive(Parser)]
#[command(name = "diprobe")]
#[command(about = "Dependency-injection configuration inspection tool")]
#[command(version)]
pub struct Cli {
    /// DI config file (default: di.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect configured preferences
    Preferences(PreferencesCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    }

    match &cli.command {
        Commands::Preferences(cmd) => cmd.run(&cli),
    }
}
