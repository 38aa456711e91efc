//! CLI command implementations.

pub mod config;
pub mod details;
pub mod reviews;
pub mod submit;

use clap::{Args, Subcommand, ValueEnum};

/// Arguments for the details command.
#[derive(Args)]
pub struct DetailsArgs {
    /// Width of the distribution bars.
    #[arg(long, default_value = "20")]
    pub bar_width: usize,
}

/// Arguments for the reviews command.
#[derive(Args)]
pub struct ReviewsArgs {
    /// Show only the first N reviews (overrides display.review_limit).
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the submit command.
#[derive(Args)]
pub struct SubmitArgs {
    /// Star rating, 1 to 5. Prompted for when omitted.
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<i32>,

    /// Review text. Prompted for when omitted.
    #[arg(short = 'm', long)]
    pub comment: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// File format to write.
        #[arg(long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
    },
    /// Validate the config file.
    Validate,
}

/// Config file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
}
