//! Free-text search over names and skills.

use crate::traits::Filter;
use directory::{DirectoryIndex, MemberRecord};

/// Keeps members whose name, offered skills or wanted skills contain the
/// search term, ignoring case.
///
/// ## Algorithm
/// 1. Trim and lower-case the term once at construction
/// 2. For each member, lower-case name and skills and test for a substring
///
/// An empty term matches every member.
pub struct SearchTermFilter {
    needle: String,
}

impl SearchTermFilter {
    /// Create a new SearchTermFilter.
    ///
    /// # Arguments
    /// * `term` - Raw search input; surrounding whitespace is ignored
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.trim().to_lowercase(),
        }
    }

    /// Whether this filter would let every member through.
    pub fn is_vacuous(&self) -> bool {
        self.needle.is_empty()
    }

    fn contains(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

impl Filter for SearchTermFilter {
    fn name(&self) -> &str {
        "SearchTermFilter"
    }

    fn keep(&self, member: &MemberRecord, _index: &DirectoryIndex) -> bool {
        if self.is_vacuous() {
            return true;
        }
        self.contains(&member.name)
            || member.skills_offered.iter().any(|s| self.contains(s))
            || member.skills_wanted.iter().any(|s| self.contains(s))
    }
}
