//! Filter to keep only members offering skills in a category.
//!
//! Categories are matched by substring, not by exact name: a member
//! offering "Web Development" is in the "Development" category.

use crate::criteria::SkillCategory;
use crate::traits::Filter;
use directory::{DirectoryIndex, MemberRecord};

/// Keeps members with at least one offered skill containing the category
/// name, ignoring case.
///
/// ## Algorithm
/// 1. `All` keeps everyone
/// 2. Otherwise lower-case the category once
/// 3. Keep a member if any lower-cased offered skill contains it
///
/// Wanted skills are not consulted, so a member offering nothing never
/// passes a named category.
pub struct SkillCategoryFilter {
    category: Option<String>,
}

impl SkillCategoryFilter {
    /// Create a new SkillCategoryFilter.
    pub fn new(category: &SkillCategory) -> Self {
        let category = match category {
            SkillCategory::All => None,
            SkillCategory::Named(name) => Some(name.to_lowercase()),
        };
        Self { category }
    }

    pub fn is_vacuous(&self) -> bool {
        self.category.is_none()
    }
}

impl Filter for SkillCategoryFilter {
    fn name(&self) -> &str {
        "SkillCategoryFilter"
    }

    fn keep(&self, member: &MemberRecord, _index: &DirectoryIndex) -> bool {
        match &self.category {
            None => true,
            Some(category) => member
                .skills_offered
                .iter()
                .any(|skill| skill.to_lowercase().contains(category.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{member, snapshot, with_skills};

    #[test]
    fn test_skill_category_filter() {
        let index = snapshot(
            vec![
                with_skills(member("1", "Ada", 4.0), &["Web Development"], &[]),
                with_skills(member("2", "Bo", 4.0), &["Brand Marketing"], &[]),
                with_skills(member("3", "Cy", 4.0), &[], &["Development"]),
            ],
            None,
        );

        let filter = SkillCategoryFilter::new(&SkillCategory::from("Development"));
        let kept: Vec<&str> = index
            .members()
            .iter()
            .filter(|m| filter.keep(m, &index))
            .map(|m| m.id.as_str())
            .collect();

        // Wanted skills don't count toward a category
        assert_eq!(kept, vec!["1"]);
    }

    #[test]
    fn test_category_excludes_non_matching() {
        let index = snapshot(
            vec![with_skills(member("1", "Ada", 4.0), &["Web Development"], &[])],
            None,
        );
        let filter = SkillCategoryFilter::new(&SkillCategory::from("Marketing"));
        assert!(!filter.keep(&index.members()[0], &index));
    }

    #[test]
    fn test_category_is_case_insensitive() {
        let index = snapshot(vec![with_skills(member("1", "Ada", 4.0), &["UI DESIGN"], &[])], None);
        let filter = SkillCategoryFilter::new(&SkillCategory::from("design"));
        assert!(filter.keep(&index.members()[0], &index));
    }

    #[test]
    fn test_all_keeps_members_without_skills() {
        let index = snapshot(vec![member("1", "Ada", 4.0)], None);
        let filter = SkillCategoryFilter::new(&SkillCategory::All);
        assert!(filter.is_vacuous());
        assert!(filter.keep(&index.members()[0], &index));
    }
}
