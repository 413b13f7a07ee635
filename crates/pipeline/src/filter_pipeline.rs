//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, and the
//! criteria-driven entry point the directory listing uses.

use crate::criteria::FilterCriteria;
use crate::filters::{AvailabilityFilter, SearchTermFilter, SelfExclusionFilter, SkillCategoryFilter};
use crate::traits::Filter;
use directory::{DirectoryIndex, MemberRecord};

/// Chains multiple filters together into a processing pipeline.
///
/// A member is visible only if every filter keeps it. Filtering never
/// reorders: the output is a subsequence of the snapshot.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SelfExclusionFilter)
///     .add_filter(SearchTermFilter::new("react"))
///     .add_filter(SkillCategoryFilter::new(&SkillCategory::from("Development")));
///
/// let visible = pipeline.apply(&index);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the listing pipeline for the viewer's criteria.
    ///
    /// Self-exclusion always runs. Search, category and availability
    /// filters are only added when they would exclude someone.
    pub fn for_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new().add_filter(SelfExclusionFilter);

        let search = SearchTermFilter::new(&criteria.search_term);
        if !search.is_vacuous() {
            pipeline = pipeline.add_filter(search);
        }

        let category = SkillCategoryFilter::new(&criteria.skill_category);
        if !category.is_vacuous() {
            pipeline = pipeline.add_filter(category);
        }

        let availability = AvailabilityFilter::new(criteria.availability);
        if !availability.is_vacuous() {
            pipeline = pipeline.add_filter(availability);
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters to every member of the snapshot.
    pub fn apply<'a>(&self, index: &'a DirectoryIndex) -> Vec<&'a MemberRecord> {
        self.apply_to(index.members().iter().collect(), index)
    }

    /// Apply all filters in sequence to a list of members.
    ///
    /// ## Algorithm
    /// 1. Start with the input members
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Retain members the filter keeps
    ///    c. Log output count
    /// 3. Return the surviving members in their original order
    pub fn apply_to<'a>(
        &self,
        members: Vec<&'a MemberRecord>,
        index: &DirectoryIndex,
    ) -> Vec<&'a MemberRecord> {
        let mut current = members;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|member| filter.keep(member, index));
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Visible members of `index` under `criteria`, in snapshot order.
pub fn apply_criteria<'a>(
    index: &'a DirectoryIndex,
    criteria: &FilterCriteria,
) -> Vec<&'a MemberRecord> {
    FilterPipeline::for_criteria(criteria).apply(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{Availability, SkillCategory};
    use crate::filters::MinimumRatingFilter;
    use crate::test_support::{member, snapshot, with_skills};

    fn ids(members: &[&MemberRecord]) -> Vec<String> {
        members.iter().map(|m| m.id.to_string()).collect()
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let index = snapshot(vec![member("1", "Ada", 4.0), member("2", "Bo", 3.0)], Some("1"));

        let filtered = pipeline.apply(&index);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let index = snapshot(vec![member("1", "Ada", 4.0), member("2", "Bo", 3.0)], Some("1"));
        let pipeline = FilterPipeline::new().add_filter(SelfExclusionFilter);

        let filtered = pipeline.apply(&index);
        assert_eq!(ids(&filtered), vec!["2"]);
    }

    #[test]
    fn test_chained_filters_preserve_order() {
        let index = snapshot(
            vec![
                member("5", "Eve", 4.9),
                member("1", "Ada", 2.0),
                member("3", "Cy", 4.1),
                member("2", "Bo", 4.5),
            ],
            None,
        );
        let pipeline = FilterPipeline::new()
            .add_filter(SelfExclusionFilter)
            .add_filter(MinimumRatingFilter::new(4.0));

        assert_eq!(ids(&pipeline.apply(&index)), vec!["5", "3", "2"]);
    }

    #[test]
    fn test_for_criteria_skips_vacuous_filters() {
        assert_eq!(FilterPipeline::for_criteria(&FilterCriteria::new()).len(), 1);

        let criteria = FilterCriteria::new()
            .with_search(Some("go"))
            .with_category("Development")
            .with_availability(Availability::Available);
        assert_eq!(FilterPipeline::for_criteria(&criteria).len(), 4);
    }

    #[test]
    fn test_empty_category_drops_members_without_skills() {
        let index = snapshot(
            vec![member("1", "Ada", 4.0), with_skills(member("2", "Bo", 4.0), &["Rust"], &[])],
            None,
        );
        let criteria = FilterCriteria::new().with_category("");

        assert_eq!(FilterPipeline::for_criteria(&criteria).len(), 2);
        assert_eq!(ids(&apply_criteria(&index, &criteria)), vec!["2"]);
    }

    #[test]
    fn test_apply_criteria_combines_predicates() {
        let mut online_dev = with_skills(member("1", "Ada", 4.0), &["Web Development"], &["Go"]);
        online_dev.is_online = true;
        let offline_dev = with_skills(member("2", "Bo", 4.0), &["Game Development"], &["Go"]);
        let online_designer = {
            let mut m = with_skills(member("3", "Cy", 4.0), &["Design"], &["Go"]);
            m.is_online = true;
            m
        };
        let index = snapshot(vec![online_dev, offline_dev, online_designer], None);

        let criteria = FilterCriteria::new()
            .with_search(Some("go"))
            .with_category(SkillCategory::from("development"))
            .with_availability(Availability::Available);

        assert_eq!(ids(&apply_criteria(&index, &criteria)), vec!["1"]);
    }
}
