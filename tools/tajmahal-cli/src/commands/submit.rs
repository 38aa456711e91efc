//! Review submission.
//!
//! Submissions live in a session store seeded from the configured source;
//! nothing is written back to disk.

use anyhow::{bail, Result};
use dialoguer::Input;
use serde::Serialize;
use tajmahal_reviews::{RejectionReason, Review, ReviewStats};

use super::details::render_summary;
use super::reviews::print_review;
use super::SubmitArgs;
use crate::context::Context;

/// Run the submit command.
pub fn run(args: SubmitArgs, ctx: &Context) -> Result<()> {
    let store = ctx.session_store()?;
    let reviewer = ctx.config.reviewer();

    let comment = match args.comment {
        Some(comment) => comment,
        None if ctx.output.is_json() => bail!("--comment is required with --json"),
        None => Input::<String>::new()
            .with_prompt(format!("Review as {}", reviewer.username))
            .allow_empty(true)
            .interact_text()?,
    };

    let rate = match args.rate {
        Some(rate) => rate,
        None if ctx.output.is_json() => bail!("--rate is required with --json"),
        None => Input::<i32>::new()
            .with_prompt("Rating (1-5)")
            .interact_text()?,
    };

    let candidate = reviewer.compose(&comment, rate);
    ctx.output.debug(&format!(
        "submitting {} star review as {}",
        candidate.rate, candidate.username
    ));

    if let Err(reason) = store.submit(candidate) {
        bail!(rejection_message(reason));
    }

    let review = match store.latest() {
        Some(review) => review,
        None => bail!("Review store is empty after submission"),
    };
    let stats = store.stats();

    if ctx.output.is_json() {
        ctx.output.json(&SubmitReport {
            review: &review,
            stats: &stats,
        });
        return Ok(());
    }

    ctx.output.success("Review added");
    print_review(&review, ctx.config.display.show_pictures, ctx.output.term_width());
    render_summary(&stats, 20, &ctx.output);
    ctx.output.warn("Reviews are kept for this session only.");

    Ok(())
}

#[derive(Serialize)]
struct SubmitReport<'a> {
    review: &'a Review,
    stats: &'a ReviewStats,
}

/// User-facing text for a rejection.
pub fn rejection_message(reason: RejectionReason) -> &'static str {
    match reason {
        RejectionReason::EmptyComment => "Please enter a comment.",
        RejectionReason::InvalidRating => "Please choose a rating between 1 and 5.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            rejection_message(RejectionReason::EmptyComment),
            "Please enter a comment."
        );
        assert_eq!(
            rejection_message(RejectionReason::InvalidRating),
            "Please choose a rating between 1 and 5."
        );
    }
}
