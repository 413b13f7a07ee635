//! Filter implementations for the directory pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod availability;
pub mod minimum_rating;
pub mod search_term;
pub mod self_exclusion;
pub mod skill_category;

// Re-export for convenience
pub use availability::AvailabilityFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use search_term::SearchTermFilter;
pub use self_exclusion::SelfExclusionFilter;
pub use skill_category::SkillCategoryFilter;
