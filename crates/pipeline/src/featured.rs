//! Featured member selection.
//!
//! Picks a few highly rated members for promotion. Selection looks at the
//! whole snapshot and ignores the viewer's filter criteria.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::MinimumRatingFilter;
use directory::{DirectoryIndex, MemberRecord};
use std::cmp::Ordering;

/// Ranks and truncates highly rated members.
///
/// ## Algorithm
/// 1. Keep members with `rating >= min_rating`
/// 2. Stable sort by rating, highest first; ties keep snapshot order
/// 3. Take the first `limit`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeaturedSelector {
    min_rating: f64,
    limit: usize,
}

impl FeaturedSelector {
    pub const DEFAULT_MIN_RATING: f64 = 4.0;
    pub const DEFAULT_LIMIT: usize = 3;

    /// Create a selector with the dashboard defaults (rating 4+, top 3).
    pub fn new() -> Self {
        Self {
            min_rating: Self::DEFAULT_MIN_RATING,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    /// Configure the minimum rating (default: 4.0)
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Configure how many members to return at most (default: 3)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Select featured members from the snapshot.
    ///
    /// Works on a list of references, so the snapshot itself is never
    /// reordered. An empty result means there is nothing to feature.
    pub fn select<'a>(&self, index: &'a DirectoryIndex) -> Vec<&'a MemberRecord> {
        let mut featured = FilterPipeline::new()
            .add_filter(MinimumRatingFilter::new(self.min_rating))
            .apply(index);

        // Vec::sort_by is stable
        featured.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
        featured.truncate(self.limit);

        tracing::debug!(
            "Selected {} featured members (min rating {}, limit {})",
            featured.len(),
            self.min_rating,
            self.limit
        );
        featured
    }
}

impl Default for FeaturedSelector {
    fn default() -> Self {
        Self::new()
    }
}
