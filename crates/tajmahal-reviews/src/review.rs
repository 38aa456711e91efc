//! Review data models.

use crate::error::RejectionReason;
use serde::{Deserialize, Serialize};

/// Lowest accepted star rating.
pub const MIN_RATE: i32 = 1;

/// Highest accepted star rating.
pub const MAX_RATE: i32 = 5;

/// Individual review.
///
/// The type itself accepts any value, including an empty comment or a rate of
/// 0; only [`ReviewStore::submit`](crate::ReviewStore::submit) enforces the
/// acceptance rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Display name of the reviewer.
    pub username: String,
    /// Avatar identifier or URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// Free-text comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Star rating.
    pub rate: i32,
}

impl Review {
    /// Create a review.
    pub fn new(
        username: impl Into<String>,
        picture: Option<String>,
        comment: Option<String>,
        rate: i32,
    ) -> Self {
        Self {
            username: username.into(),
            picture,
            comment,
            rate,
        }
    }

    /// Check the acceptance rule.
    ///
    /// The comment is checked first: a blank comment with an out-of-range rate
    /// reports [`RejectionReason::EmptyComment`].
    pub fn validate(&self) -> Result<(), RejectionReason> {
        if !self.has_comment() {
            return Err(RejectionReason::EmptyComment);
        }
        if !self.has_valid_rate() {
            return Err(RejectionReason::InvalidRating);
        }
        Ok(())
    }

    /// Whether the comment is present and not blank.
    pub fn has_comment(&self) -> bool {
        self.comment
            .as_deref()
            .map(|c| !c.trim().is_empty())
            .unwrap_or(false)
    }

    /// Whether the rate lies in `MIN_RATE..=MAX_RATE`.
    pub fn has_valid_rate(&self) -> bool {
        (MIN_RATE..=MAX_RATE).contains(&self.rate)
    }

    /// Render the rating as filled and empty stars.
    ///
    /// Out-of-range rates are clamped for display only.
    pub fn render_stars(&self) -> String {
        let filled = self.rate.clamp(0, MAX_RATE) as usize;
        let empty = MAX_RATE as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

/// The identity attached to every review the current user writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl Reviewer {
    /// Create a reviewer identity.
    pub fn new(username: impl Into<String>, picture: Option<String>) -> Self {
        Self {
            username: username.into(),
            picture,
        }
    }

    /// Build a candidate review from form input.
    ///
    /// The comment is trimmed; nothing is validated here.
    pub fn compose(&self, comment: &str, rate: i32) -> Review {
        Review {
            username: self.username.clone(),
            picture: self.picture.clone(),
            comment: Some(comment.trim().to_string()),
            rate,
        }
    }
}
