use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod build;
mod commands;
mod config;
mod util;

#[derive(Parser)]
struct Args {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true, default_value = "false")]
    verbose: bool,

    /// The command to execute
    #[command(subcommand)]
    command: MoviePagesCommand,
}

#[derive(Parser)]
struct InitArgs {
    /// The path to initialize the project in
    path: PathBuf,

    /// Whether to create the directory if it doesn't exist
    #[arg(short, long, default_value = "false")]
    create: bool,
}

#[derive(Parser)]
struct BuildArgs {
    /// The path to the configuration file [default: movie-pages.yaml, if present]
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    /// The movies CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// The page template
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// The output directory (cleared before writing)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Escape HTML-special characters in field values
    #[arg(long)]
    escape_html: bool,
}

#[derive(Parser)]
struct CleanArgs {
    /// The path to the configuration file [default: movie-pages.yaml, if present]
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    /// The output directory to delete
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print what would be deleted without deleting it
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum MoviePagesCommand {
    /// Initialize a new project with a sample config, template and CSV
    Init(InitArgs),

    /// Generate one HTML page per movie
    Build(BuildArgs),

    /// Delete the output directory
    Clean(CleanArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Errors go back to the runtime, which prints them with their cause chain
    match args.command {
        MoviePagesCommand::Init(args) => commands::init::run(&args).await,
        MoviePagesCommand::Build(args) => commands::build::run(&args).await,
        MoviePagesCommand::Clean(args) => commands::clean::run(&args).await,
    }
}
