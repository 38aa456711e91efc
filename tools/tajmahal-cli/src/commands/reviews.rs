//! Review listing.

use anyhow::Result;
use console::style;
use tajmahal_reviews::Review;

use super::ReviewsArgs;
use crate::context::Context;
use crate::output::truncate;

/// Run the reviews command.
pub fn run(args: ReviewsArgs, ctx: &Context) -> Result<()> {
    let store = ctx.session_store()?;

    let limit = args.limit.unwrap_or(ctx.config.display.review_limit);
    let mut reviews = store.all();
    if limit > 0 {
        reviews.truncate(limit);
    }

    if ctx.output.is_json() {
        ctx.output.json(&reviews);
        return Ok(());
    }

    ctx.output.header(&format!("Reviews ({})", store.len()));
    if reviews.is_empty() {
        ctx.output.info("No reviews yet.");
        return Ok(());
    }

    let width = ctx.output.term_width().max(40);
    for review in &reviews {
        print_review(review, ctx.config.display.show_pictures, width);
    }

    if reviews.len() < store.len() {
        ctx.output.info(&format!(
            "Showing {} of {} reviews",
            reviews.len(),
            store.len()
        ));
    }

    Ok(())
}

/// Print one review block.
pub fn print_review(review: &Review, show_picture: bool, width: usize) {
    let name = if review.username.is_empty() {
        style("(anonymous)".to_string()).dim()
    } else {
        style(review.username.clone()).bold()
    };

    match review.picture.as_deref() {
        Some(picture) if show_picture => {
            println!("\n  {} {} {}", name, review.render_stars(), style(picture).dim())
        }
        _ => println!("\n  {} {}", name, review.render_stars()),
    }

    if let Some(comment) = review.comment.as_deref() {
        println!("    {}", truncate(comment, width.saturating_sub(4)));
    }
}
