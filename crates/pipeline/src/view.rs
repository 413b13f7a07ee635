//! # Directory View
//!
//! Assembles everything the view layer renders for one snapshot:
//! 1. Filter the snapshot with the viewer's criteria
//! 2. Select featured members (independent of the criteria)
//! 3. Project the result count
//!
//! The view borrows from the snapshot. When a fresh snapshot arrives the
//! caller builds a new view from it; views are never patched in place.

use crate::criteria::FilterCriteria;
use crate::featured::FeaturedSelector;
use crate::filter_pipeline::apply_criteria;
use crate::stats::{ResultStats, StatsProjector};
use directory::{DirectoryIndex, MemberRecord};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, instrument};

/// Everything the directory page shows for one snapshot and one set of
/// criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryView<'a> {
    pub filtered: Vec<&'a MemberRecord>,
    pub featured: Vec<&'a MemberRecord>,
    pub stats: ResultStats,
}

impl<'a> DirectoryView<'a> {
    /// Compute the view. Pure: same inputs, same view.
    #[instrument(skip_all, fields(members = index.len()))]
    pub fn compute(
        index: &'a DirectoryIndex,
        criteria: &FilterCriteria,
        featured_selector: &FeaturedSelector,
    ) -> Self {
        let start_time = Instant::now();

        let filtered = apply_criteria(index, criteria);
        let featured = featured_selector.select(index);
        let stats = StatsProjector::project(&filtered, Some(&criteria.search_term));

        debug!(
            "Computed directory view: {} visible, {} featured in {:?}",
            filtered.len(),
            featured.len(),
            start_time.elapsed()
        );

        Self {
            filtered,
            featured,
            stats,
        }
    }

    /// Whether the featured section should be rendered at all.
    pub fn show_featured(&self) -> bool {
        !self.featured.is_empty()
    }
}
