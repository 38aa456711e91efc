//! The session's review list.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::RejectionReason;
use crate::review::Review;
use crate::source::ReviewSource;
use crate::stats::ReviewStats;

/// Ordered reviews for one restaurant, most recent first.
///
/// Every addition goes through [`submit`](Self::submit). Clones share the
/// same storage; concurrent submissions are serialized by the write lock.
#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    reviews: Arc<RwLock<Vec<Review>>>,
}

impl ReviewStore {
    /// Create a store holding `seed` as is, in its order.
    pub fn new(seed: Vec<Review>) -> Self {
        tracing::debug!(seed = seed.len(), "review store initialized");
        Self {
            reviews: Arc::new(RwLock::new(seed)),
        }
    }

    /// Create a store with no reviews.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Create a store seeded from a review source.
    pub fn from_source(source: &dyn ReviewSource) -> Self {
        Self::new(source.reviews())
    }

    /// Validate a candidate and insert it at the front.
    ///
    /// On rejection the store is untouched.
    pub fn submit(&self, candidate: Review) -> Result<(), RejectionReason> {
        let mut reviews = self.write();

        if let Err(reason) = candidate.validate() {
            tracing::warn!(
                username = %candidate.username,
                rate = candidate.rate,
                reason = reason.code(),
                "review rejected"
            );
            return Err(reason);
        }

        tracing::debug!(
            username = %candidate.username,
            rate = candidate.rate,
            len = reviews.len() + 1,
            "review accepted"
        );
        reviews.insert(0, candidate);
        Ok(())
    }

    /// Snapshot of all reviews, most recent first.
    pub fn all(&self) -> Vec<Review> {
        self.read().clone()
    }

    /// The most recent review.
    pub fn latest(&self) -> Option<Review> {
        self.read().first().cloned()
    }

    /// Number of reviews.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the store holds no reviews.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Statistics over the current content.
    pub fn stats(&self) -> ReviewStats {
        ReviewStats::from_reviews(&self.read())
    }

    // The vector is only touched by `insert`, so a panic elsewhere cannot leave
    // it half-written and a poisoned guard is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Review>> {
        self.reviews.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Review>> {
        self.reviews.write().unwrap_or_else(PoisonError::into_inner)
    }
}
