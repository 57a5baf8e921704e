mod commands;
mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    blocks, edit, init, inspect, render, BlocksArgs, EditArgs, InitArgs, InspectArgs, RenderArgs,
};
use tracing_subscriber::EnvFilter;

/// Lander CLI - Campaign landing page builder
#[derive(Parser, Debug)]
#[command(name = "lander")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a campaign with the starter page
    Init(InitArgs),

    /// List available block types
    Blocks(BlocksArgs),

    /// Render a campaign to static HTML
    Render(RenderArgs),

    /// Apply an edit script to a campaign and save it
    Edit(EditArgs),

    /// Show a campaign's blocks or one block's settings
    Inspect(InspectArgs),
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()
        .context("Cannot get current directory")?
        .display()
        .to_string();

    match cli.command {
        Command::Init(args) => init(args, &cwd).await,
        Command::Blocks(args) => blocks(args),
        Command::Render(args) => render(args, &cwd).await,
        Command::Edit(args) => edit(args, &cwd).await,
        Command::Inspect(args) => inspect(args, &cwd).await,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
