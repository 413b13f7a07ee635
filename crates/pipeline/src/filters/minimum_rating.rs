//! Filter to ensure a minimum rating threshold.
//!
//! Used by the featured selector to find members worth promoting.

use crate::traits::Filter;
use directory::{DirectoryIndex, MemberRecord};

/// Removes members rated below a threshold.
///
/// ## Algorithm
/// Keep a member if `rating >= min_rating`. The threshold is inclusive.
pub struct MinimumRatingFilter {
    min_rating: f64,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Minimum rating to keep (typically 4.0)
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn keep(&self, member: &MemberRecord, _index: &DirectoryIndex) -> bool {
        member.rating >= self.min_rating
    }
}
