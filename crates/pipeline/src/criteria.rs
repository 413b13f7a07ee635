//! Filter state chosen by the viewer.
//!
//! `FilterCriteria` is ephemeral: the view layer owns the current value and
//! hands it to the pipeline on every recompute.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Category choices offered by the dashboard's filter dropdown.
pub const SKILL_CATEGORIES: [&str; 6] = [
    "All",
    "Development",
    "Design",
    "Marketing",
    "Business",
    "Creative",
];

/// Skill-category selection. Only the exact string `"All"` is the wildcard;
/// any other string, empty included, is a case-insensitive substring to look
/// for in offered skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillCategory {
    #[default]
    All,
    Named(String),
}

impl From<&str> for SkillCategory {
    fn from(s: &str) -> Self {
        if s == "All" {
            SkillCategory::All
        } else {
            SkillCategory::Named(s.to_string())
        }
    }
}

impl From<String> for SkillCategory {
    fn from(s: String) -> Self {
        SkillCategory::from(s.as_str())
    }
}

impl From<SkillCategory> for String {
    fn from(c: SkillCategory) -> Self {
        c.to_string()
    }
}

impl FromStr for SkillCategory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SkillCategory::from(s))
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillCategory::All => f.write_str("All"),
            SkillCategory::Named(name) => f.write_str(name),
        }
    }
}

/// Presence selection. The record only carries an online flag, so `Busy`
/// and `Offline` both mean "not online".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    All,
    Available,
    Busy,
    Offline,
}

impl Availability {
    /// Whether a member with the given presence flag passes this selection.
    pub fn admits(self, is_online: bool) -> bool {
        match self {
            Availability::All => true,
            Availability::Available => is_online,
            Availability::Busy | Availability::Offline => !is_online,
        }
    }
}

impl FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(Availability::All),
            "available" | "online" => Ok(Availability::Available),
            "busy" => Ok(Availability::Busy),
            "offline" => Ok(Availability::Offline),
            other => Err(format!(
                "unknown availability '{other}' (expected All, Available, Busy or Offline)"
            )),
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Availability::All => "All",
            Availability::Available => "Available",
            Availability::Busy => "Busy",
            Availability::Offline => "Offline",
        };
        f.write_str(s)
    }
}

/// The viewer's current search and filter choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Raw search input; trimmed and lower-cased when matched.
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub skill_category: SkillCategory,
    #[serde(default)]
    pub availability: Availability,
}

impl FilterCriteria {
    /// Criteria that match everybody except the viewer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term. `None` is the same as an empty search.
    pub fn with_search(mut self, term: Option<&str>) -> Self {
        self.search_term = term.unwrap_or_default().to_string();
        self
    }

    pub fn with_category(mut self, category: impl Into<SkillCategory>) -> Self {
        self.skill_category = category.into();
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// The search term as it is matched: trimmed, or `None` when empty.
    pub fn trimmed_search(&self) -> Option<&str> {
        Some(self.search_term.trim()).filter(|s| !s.is_empty())
    }
}
