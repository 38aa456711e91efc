//! Review model and rating aggregation for the Taj Mahal restaurant.
//!
//! This crate holds everything the restaurant details screen needs besides
//! the screen itself:
//!
//! - **Model**: reviews, the reviewer identity, the restaurant record
//! - **Store**: the ordered review list with validated front-insertion
//! - **Stats**: average rating and per-star percentages
//! - **Source**: the seed collaborator (built-in data or a seed file)
//!
//! # Example
//!
//! ```rust
//! use tajmahal_reviews::prelude::*;
//!
//! let store = ReviewStore::from_source(&FakeReviewSource);
//! let me = Reviewer::new("Manon Garcia", Some("profile_picture".to_string()));
//!
//! store.submit(me.compose("Délicieux biryani", 5)).unwrap();
//! assert_eq!(store.latest().unwrap().username, "Manon Garcia");
//!
//! let stats = store.stats();
//! println!("{:.1} ({})", stats.average, stats.total_reviews);
//! ```

pub mod error;
pub mod restaurant;
pub mod review;
pub mod source;
pub mod stats;
pub mod store;

pub use error::{RejectionReason, SourceError};
pub use restaurant::Restaurant;
pub use review::{Review, Reviewer, MAX_RATE, MIN_RATE};
pub use source::{FakeReviewSource, FileReviewSource, ReviewSource, SeedDocument};
pub use stats::{RatingAggregator, ReviewStats, StarLevel};
pub use store::ReviewStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{RejectionReason, SourceError};
    pub use crate::restaurant::Restaurant;
    pub use crate::review::{Review, Reviewer};
    pub use crate::source::{FakeReviewSource, FileReviewSource, ReviewSource};
    pub use crate::stats::{RatingAggregator, ReviewStats, StarLevel};
    pub use crate::store::ReviewStore;
}
