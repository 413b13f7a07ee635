//! Filter to remove the viewer from their own listing.
//!
//! This is the first filter in every directory pipeline: nobody is
//! offered a swap with themselves.

use crate::traits::Filter;
use directory::{DirectoryIndex, MemberRecord};

/// Removes the member whose id equals the snapshot's viewer id.
///
/// Ids compare as strings, so a numeric id from the wire and a textual
/// viewer id refer to the same member. With no viewer, nobody is removed.
pub struct SelfExclusionFilter;

impl Filter for SelfExclusionFilter {
    fn name(&self) -> &str {
        "SelfExclusionFilter"
    }

    fn keep(&self, member: &MemberRecord, index: &DirectoryIndex) -> bool {
        !index.is_viewer(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{member, snapshot};
    use directory::MemberId;

    #[test]
    fn test_self_exclusion_filter() {
        let index = snapshot(
            vec![member("1", "Ada", 4.0), member("2", "Bo", 3.0), member("3", "Cy", 5.0)],
            Some("2"),
        );

        let kept: Vec<&str> = index
            .members()
            .iter()
            .filter(|m| SelfExclusionFilter.keep(m, &index))
            .map(|m| m.id.as_str())
            .collect();

        assert_eq!(kept, vec!["1", "3"]);
    }

    #[test]
    fn test_no_viewer_keeps_everyone() {
        let index = snapshot(vec![member("1", "Ada", 4.0), member("2", "Bo", 3.0)], None);
        assert!(index.members().iter().all(|m| SelfExclusionFilter.keep(m, &index)));
    }

    #[test]
    fn test_numeric_and_text_ids_compare_equal() {
        let index = directory::DirectoryIndex::from_members(
            vec![member("7", "Ada", 4.0)],
            Some(MemberId::from(7u64)),
        );
        assert!(!SelfExclusionFilter.keep(&index.members()[0], &index));
    }
}
