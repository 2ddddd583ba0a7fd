//! CLI application for scanning receipts into transaction drafts.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{categories, config, parse, scan};

/// Receipt scanner - turn receipt photos into expense transaction drafts
#[derive(Parser)]
#[command(name = "kharcha")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a receipt image into a transaction draft
    Scan(scan::ScanArgs),

    /// Draft a transaction from already-recognized text
    Parse(parse::ParseArgs),

    /// List expense categories and their keywords
    Categories(categories::CategoriesArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Scan(args) => scan::run(args, cli.config.as_deref()).await,
        Commands::Parse(args) => parse::run(args).await,
        Commands::Categories(args) => categories::run(args).await,
        Commands::Config(args) => config::run(args, cli.config.as_deref()).await,
    }
}
