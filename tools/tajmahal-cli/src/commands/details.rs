//! Restaurant details and rating summary.

use anyhow::Result;
use chrono::{Datelike, Local, Weekday};
use serde::Serialize;
use tajmahal_reviews::{Restaurant, ReviewStats, ReviewStore, StarLevel};

use super::DetailsArgs;
use crate::context::Context;
use crate::output::{percentage_bar, star_indicator, Output};

/// Run the details command.
pub fn run(args: DetailsArgs, ctx: &Context) -> Result<()> {
    let source = ctx.source()?;
    let restaurant = source.restaurant();
    let store = ReviewStore::from_source(source.as_ref());
    let stats = store.stats();

    if ctx.output.is_json() {
        ctx.output.json(&DetailsReport {
            restaurant: &restaurant,
            stats: &stats,
        });
        return Ok(());
    }

    render_restaurant(&restaurant, &ctx.output);
    render_summary(&stats, args.bar_width, &ctx.output);

    Ok(())
}

#[derive(Serialize)]
struct DetailsReport<'a> {
    restaurant: &'a Restaurant,
    stats: &'a ReviewStats,
}

fn render_restaurant(restaurant: &Restaurant, output: &Output) {
    output.header(&restaurant.name);
    output.kv("Cuisine", &restaurant.cuisine);
    output.kv("Today", weekday_label(Local::now().weekday()));
    output.kv("Hours", &restaurant.hours);
    output.kv("Address", &restaurant.address);
    output.kv("Phone", &restaurant.phone_number);
    output.kv("Website", &restaurant.website);

    let services = restaurant.services();
    if !services.is_empty() {
        output.info("Services:");
        for service in services {
            output.list_item(service);
        }
    }
}

/// Day name shown next to the opening hours.
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lundi",
        Weekday::Tue => "Mardi",
        Weekday::Wed => "Mercredi",
        Weekday::Thu => "Jeudi",
        Weekday::Fri => "Vendredi",
        Weekday::Sat => "Samedi",
        Weekday::Sun => "Dimanche",
    }
}

/// Average to one decimal (half up), star indicator and review count.
pub fn summary_line(stats: &ReviewStats) -> String {
    let average = stats.rounded_average();
    format!(
        "{:.1} {} ({})",
        average,
        star_indicator(average),
        stats.total_reviews
    )
}

/// One bar per star level with its percentage and count.
pub fn level_line(stats: &ReviewStats, level: StarLevel, bar_width: usize) -> String {
    format!(
        "{} {} {:>3}% ({})",
        level,
        percentage_bar(stats.percentage(level), bar_width),
        stats.percentage(level),
        stats.count(level)
    )
}

/// Summary line followed by the bars, 5 down to 1.
pub fn render_summary(stats: &ReviewStats, bar_width: usize, output: &Output) {
    output.header("Ratings");
    output.line(&summary_line(stats));

    for level in StarLevel::descending() {
        output.line(&level_line(stats, level, bar_width));
    }
}
