//! Display-ready counts derived from a snapshot or a filtered list.

use crate::featured::FeaturedSelector;
use directory::{distinct_skill_count, DirectoryIndex, MemberId, SwapRequest};
use serde::Serialize;

/// Count line for the listing ("Found N ... matching 'S'").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultStats {
    pub count: usize,
    /// Trimmed search term, present only when non-empty.
    pub search_term_echo: Option<String>,
}

/// Derives `ResultStats` from a filtered list.
pub struct StatsProjector;

impl StatsProjector {
    /// `count` is the length of `filtered`; ranking plays no part.
    pub fn project<T>(filtered: &[T], search_term: Option<&str>) -> ResultStats {
        let search_term_echo = search_term
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        ResultStats {
            count: filtered.len(),
            search_term_echo,
        }
    }
}

/// Headline numbers for the whole directory, viewer excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorySummary {
    pub total_members: usize,
    pub online_members: usize,
    /// Distinct offered skill names, ignoring case
    pub distinct_skills_offered: usize,
    pub distinct_skills_wanted: usize,
    /// Members that meet the featured rating threshold
    pub featured_eligible: usize,
}

impl DirectorySummary {
    /// Summarize with the default featured threshold.
    pub fn from_index(index: &DirectoryIndex) -> Self {
        Self::with_threshold(index, FeaturedSelector::DEFAULT_MIN_RATING)
    }

    pub fn with_threshold(index: &DirectoryIndex, featured_min_rating: f64) -> Self {
        let others: Vec<_> = index
            .members()
            .iter()
            .filter(|m| !index.is_viewer(m))
            .collect();

        Self {
            total_members: others.len(),
            online_members: others.iter().filter(|m| m.is_online).count(),
            distinct_skills_offered: distinct_skill_count(
                others.iter().copied().flat_map(|m| m.skills_offered.iter()),
            ),
            distinct_skills_wanted: distinct_skill_count(
                others.iter().copied().flat_map(|m| m.skills_wanted.iter()),
            ),
            featured_eligible: others
                .iter()
                .filter(|m| m.rating >= featured_min_rating)
                .count(),
        }
    }
}

/// Pending swap requests addressed to `viewer`.
///
/// Requests without a receiver are taken to come from an inbox that was
/// already scoped to the viewer. With no viewer there is no inbox.
pub fn pending_for(requests: &[SwapRequest], viewer: Option<&MemberId>) -> usize {
    let Some(viewer) = viewer else {
        return 0;
    };
    requests
        .iter()
        .filter(|r| r.is_pending())
        .filter(|r| r.receiver_id.as_ref().is_none_or(|to| to == viewer))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{member, snapshot, with_skills};
    use directory::SwapStatus;

    #[test]
    fn test_project_counts_and_echo() {
        let filtered = vec![1, 2, 3];
        let stats = StatsProjector::project(&filtered, Some("  abc  "));
        assert_eq!(stats.count, 3);
        assert_eq!(stats.search_term_echo.as_deref(), Some("abc"));
    }

    #[test]
    fn test_project_empty_search_has_no_echo() {
        let filtered: Vec<u8> = vec![];
        assert_eq!(StatsProjector::project(&filtered, Some("")).search_term_echo, None);
        assert_eq!(StatsProjector::project(&filtered, Some("   ")).search_term_echo, None);
        assert_eq!(StatsProjector::project(&filtered, None).search_term_echo, None);
    }

    #[test]
    fn test_summary_excludes_viewer() {
        let mut online = with_skills(member("2", "Bo", 4.5), &["React", "Go"], &["Design"]);
        online.is_online = true;
        let index = snapshot(
            vec![
                with_skills(member("1", "Me", 5.0), &["Cobol"], &[]),
                online,
                with_skills(member("3", "Cy", 3.0), &["react"], &["design", "SQL"]),
            ],
            Some("1"),
        );

        let summary = DirectorySummary::from_index(&index);
        assert_eq!(
            summary,
            DirectorySummary {
                total_members: 2,
                online_members: 1,
                distinct_skills_offered: 2,
                distinct_skills_wanted: 2,
                featured_eligible: 1,
            }
        );
    }

    fn request(receiver: Option<&str>, status: SwapStatus) -> SwapRequest {
        SwapRequest {
            id: None,
            sender_id: Some(MemberId::new("someone")),
            receiver_id: receiver.map(MemberId::new),
            status,
        }
    }

    #[test]
    fn test_pending_for_viewer() {
        let requests = vec![
            request(Some("me"), SwapStatus::Pending),
            request(Some("me"), SwapStatus::Accepted),
            request(Some("other"), SwapStatus::Pending),
            request(None, SwapStatus::Pending),
        ];
        let viewer = MemberId::new("me");
        assert_eq!(pending_for(&requests, Some(&viewer)), 2);
        assert_eq!(pending_for(&requests, None), 0);
    }
}
