//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use tajmahal_reviews::{RatingAggregator, Review, MAX_RATE, MIN_RATE};

use super::{ConfigArgs, ConfigCommand, ConfigFormat};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, format } => init_config(force, format, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[reviewer]");
    ctx.output.kv("username", &ctx.config.reviewer.username);
    if let Some(picture) = ctx.config.reviewer.avatar() {
        ctx.output.kv("picture", picture);
    }

    ctx.output.info("");
    ctx.output.info("[source]");
    ctx.output.kv(
        "seed",
        ctx.config.source.seed.as_deref().unwrap_or("(built-in)"),
    );

    ctx.output.info("");
    ctx.output.info("[display]");
    ctx.output
        .kv("review_limit", &ctx.config.display.review_limit.to_string());
    ctx.output
        .kv("show_pictures", &ctx.config.display.show_pictures.to_string());

    Ok(())
}

fn init_config(force: bool, format: ConfigFormat, ctx: &Context) -> Result<()> {
    let name = match format {
        ConfigFormat::Toml => CONFIG_NAMES[0],
        ConfigFormat::Json => CONFIG_NAMES[2],
    };
    let config_path = ctx.cwd.join(name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    match format {
        // Template keeps its comments.
        ConfigFormat::Toml => fs::write(&config_path, generate_default_config())?,
        ConfigFormat::Json => CliConfig::default().save(&config_path.to_string_lossy())?,
    }

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config.reviewer.username.trim().is_empty() {
        errors.push("reviewer.username is required".to_string());
    }

    if ctx.config.reviewer.avatar().is_none() {
        warnings.push("reviewer.picture is not set".to_string());
    }

    // Seed file must load; its reviews are trusted but worth flagging.
    if ctx.config.source.seed.is_some() {
        match ctx.source() {
            Ok(source) => warnings.extend(seed_warnings(&source.reviews())),
            Err(e) => errors.push(format!("{:#}", e)),
        }
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Warnings for seed reviews that submit would refuse.
fn seed_warnings(reviews: &[Review]) -> Vec<String> {
    let mut warnings = Vec::new();

    let rejected = reviews.iter().filter(|r| r.validate().is_err()).count();
    if rejected > 0 {
        warnings.push(format!(
            "source.seed holds {} review(s) that would be rejected on submit",
            rejected
        ));
    }

    let stats = RatingAggregator::compute(reviews);
    let unbucketed = stats.total_reviews - stats.bucketed();
    if unbucketed > 0 {
        warnings.push(format!(
            "source.seed holds {} rating(s) outside {}-{}, counted in the average but in no bar",
            unbucketed, MIN_RATE, MAX_RATE
        ));
    }

    warnings
}
