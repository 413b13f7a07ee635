//! # Directory Crate
//!
//! Holds the member directory of the skill-swap platform as immutable
//! snapshots.
//!
//! ## Main Components
//!
//! - **types**: Wire shapes and the normalized `MemberRecord`
//! - **index**: `DirectoryIndex`, one snapshot plus the viewer's identity
//! - **parser**: Read member lists and swap requests from JSON
//! - **error**: Error types for snapshot loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use directory::{load_snapshot, MemberId};
//! use std::path::Path;
//!
//! let index = load_snapshot(Path::new("data/members.json"), Some(MemberId::new("42")))?;
//! println!("{} members in snapshot", index.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DirectoryError, Result};
pub use index::{distinct_skill_count, DirectoryIndex};
pub use parser::{load_snapshot, load_swap_requests, parse_members, parse_swap_requests};
pub use types::{
    MemberId,
    MemberRecord,
    RawMemberRecord,
    SkillPreview,
    SwapRequest,
    SwapStatus,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_json() {
        let raw = parse_members(
            r#"[{"id": 1, "name": "Ada"}, {"id": 2, "name": "Bo", "skillsOffered": null}]"#
                .as_bytes(),
        )
        .unwrap();
        let index = DirectoryIndex::build(raw, Some(MemberId::from(1u64)));

        assert_eq!(index.len(), 2);
        assert!(index.is_viewer(&index.members()[0]));
        assert!(index.members()[1].skills_offered.is_empty());
    }

    #[test]
    fn test_from_members_keeps_records() {
        let member = MemberRecord {
            id: MemberId::new("x"),
            name: "Xi".to_string(),
            username: "xi".to_string(),
            avatar_initial: "X".to_string(),
            is_online: true,
            rating: 4.2,
            skills_offered: vec!["Design".to_string()],
            skills_wanted: vec![],
        };
        let index = DirectoryIndex::from_members(vec![member.clone()], None);
        assert_eq!(index.members(), &[member]);
    }
}
