//! Taj Mahal CLI - Restaurant details and reviews from the terminal.
//!
//! Commands:
//! - `tajmahal details` - Restaurant details and rating summary
//! - `tajmahal reviews` - List reviews, most recent first
//! - `tajmahal submit` - Write a review for this session
//! - `tajmahal config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, DetailsArgs, ReviewsArgs, SubmitArgs};

/// Taj Mahal CLI - Read and write restaurant reviews
#[derive(Parser)]
#[command(name = "tajmahal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show restaurant details and the rating summary
    Details(DetailsArgs),

    /// List reviews
    Reviews(ReviewsArgs),

    /// Submit a review
    Submit(SubmitArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Details(args) => commands::details::run(args, &ctx),
        Commands::Reviews(args) => commands::reviews::run(args, &ctx),
        Commands::Submit(args) => commands::submit::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` overrides the default filter.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,tajmahal_reviews=debug,tajmahal_cli=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
