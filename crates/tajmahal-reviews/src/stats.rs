//! Rating summary statistics.

use crate::review::{Review, MAX_RATE, MIN_RATE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of star buckets.
pub const STAR_LEVELS: usize = 5;

/// One of the five star buckets, 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarLevel(u8);

impl StarLevel {
    /// All levels, lowest first.
    pub const ALL: [StarLevel; STAR_LEVELS] = [
        StarLevel(1),
        StarLevel(2),
        StarLevel(3),
        StarLevel(4),
        StarLevel(5),
    ];

    /// Create a level, `None` outside 1..=5.
    pub fn new(stars: u8) -> Option<Self> {
        (1..=STAR_LEVELS as u8).contains(&stars).then_some(Self(stars))
    }

    /// Bucket for a review rate, `None` when the rate is out of range.
    pub fn from_rate(rate: i32) -> Option<Self> {
        if (MIN_RATE..=MAX_RATE).contains(&rate) {
            Some(Self(rate as u8))
        } else {
            None
        }
    }

    /// Levels from 5 down to 1, the order summary bars are drawn in.
    pub fn descending() -> impl Iterator<Item = StarLevel> {
        Self::ALL.into_iter().rev()
    }

    /// Star count.
    pub fn stars(&self) -> u8 {
        self.0
    }

    /// Position in `ReviewStats::percentages`.
    pub fn index(&self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u8> for StarLevel {
    type Error = String;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars).ok_or_else(|| format!("star level out of range: {}", stars))
    }
}

impl From<StarLevel> for u8 {
    fn from(level: StarLevel) -> Self {
        level.0
    }
}

impl fmt::Display for StarLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Summary statistics over a review collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewStats {
    /// Mean of every rate, 0.0 when there are no reviews.
    pub average: f64,
    /// Number of reviews, including any with out-of-range rates.
    pub total_reviews: usize,
    /// Truncated percentage per star level, index 0 is one star.
    pub percentages: [u32; STAR_LEVELS],
    /// Raw review count per star level.
    pub counts: [usize; STAR_LEVELS],
}

impl ReviewStats {
    /// Compute statistics over a review slice.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let total_reviews = reviews.len();
        if total_reviews == 0 {
            return Self::default();
        }

        let mut counts = [0usize; STAR_LEVELS];
        let mut sum: i64 = 0;
        for review in reviews {
            // Out-of-range seed rates still count toward the mean.
            sum += i64::from(review.rate);
            if let Some(level) = StarLevel::from_rate(review.rate) {
                counts[level.index()] += 1;
            }
        }

        let mut percentages = [0u32; STAR_LEVELS];
        for (pct, count) in percentages.iter_mut().zip(counts.iter()) {
            *pct = (count * 100 / total_reviews) as u32;
        }

        Self {
            average: sum as f64 / total_reviews as f64,
            total_reviews,
            percentages,
            counts,
        }
    }

    /// Percentage for one star level.
    pub fn percentage(&self, level: StarLevel) -> u32 {
        self.percentages[level.index()]
    }

    /// Review count for one star level.
    pub fn count(&self, level: StarLevel) -> usize {
        self.counts[level.index()]
    }

    /// Number of reviews that landed in a bucket.
    ///
    /// Smaller than `total_reviews` when seed data holds out-of-range rates.
    pub fn bucketed(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Average rounded to one decimal for display.
    pub fn rounded_average(&self) -> f64 {
        (self.average * 10.0).round() / 10.0
    }

    /// Whether there is nothing to summarize.
    pub fn is_empty(&self) -> bool {
        self.total_reviews == 0
    }
}

/// Stateless calculator of [`ReviewStats`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingAggregator;

impl RatingAggregator {
    /// Recompute statistics from a snapshot.
    pub fn compute(reviews: &[Review]) -> ReviewStats {
        ReviewStats::from_reviews(reviews)
    }
}
