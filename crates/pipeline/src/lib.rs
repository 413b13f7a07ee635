//! Search, filtering and ranking over directory snapshots.
//!
//! This crate provides:
//! - Filter trait and implementations for member filtering
//! - FilterPipeline for composing filters
//! - FeaturedSelector for picking members to promote
//! - StatsProjector and DirectorySummary for display counts
//! - DirectoryView tying the above together for one snapshot
//!
//! ## Architecture
//! Every stage is a pure function over an immutable `DirectoryIndex`:
//! 1. Filters narrow the snapshot to the visible members (self, search,
//!    skill category, availability)
//! 2. FeaturedSelector ranks highly rated members, ignoring the filters
//! 3. StatsProjector counts the visible members
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{DirectoryView, FeaturedSelector, FilterCriteria};
//!
//! let criteria = FilterCriteria::new()
//!     .with_search(Some("react"))
//!     .with_category("Development");
//!
//! let view = DirectoryView::compute(&index, &criteria, &FeaturedSelector::new());
//! println!("Found {} members", view.stats.count);
//! ```

pub mod criteria;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod featured;
pub mod stats;
pub mod view;

// Re-export main types
pub use criteria::{Availability, FilterCriteria, SkillCategory, SKILL_CATEGORIES};
pub use traits::Filter;
pub use filter_pipeline::{apply_criteria, FilterPipeline};
pub use featured::FeaturedSelector;
pub use stats::{pending_for, DirectorySummary, ResultStats, StatsProjector};
pub use view::DirectoryView;
