//! DirectoryIndex snapshot building.
//!
//! A `DirectoryIndex` is built once per fetch and never mutated. Refreshing
//! the directory means building a new index and dropping the old one.
//!
//! Building never fails. Raw records are normalized:
//! - missing skill lists become empty, blank entries are dropped
//! - ratings are clamped into `[0, 5]`, missing or non-finite ratings become 0
//! - a missing name falls back to the username, then to the id
//! - a missing avatar initial is derived from the name
//! - records without an id are skipped, as are repeated ids

use crate::types::*;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

/// An immutable snapshot of the directory plus the identity of the viewer.
#[derive(Debug, Clone, Default)]
pub struct DirectoryIndex {
    members: Vec<MemberRecord>,
    viewer_id: Option<MemberId>,
    /// Position of each member in `members`
    by_id: HashMap<MemberId, usize>,
}

impl DirectoryIndex {
    /// Build a snapshot from raw wire records.
    ///
    /// Record order is preserved; it is the order every downstream
    /// consumer reports members in.
    pub fn build(raw: Vec<RawMemberRecord>, viewer_id: Option<MemberId>) -> Self {
        let received = raw.len();

        // Normalize in parallel; indexed collect keeps input order
        let normalized: Vec<Option<MemberRecord>> =
            raw.into_par_iter().map(normalize_record).collect();

        let mut members = Vec::with_capacity(normalized.len());
        let mut by_id = HashMap::with_capacity(normalized.len());
        let mut missing_id = 0usize;

        for record in normalized {
            let Some(record) = record else {
                missing_id += 1;
                continue;
            };
            if by_id.contains_key(&record.id) {
                warn!("Skipping duplicate member id {}", record.id);
                continue;
            }
            by_id.insert(record.id.clone(), members.len());
            members.push(record);
        }

        if missing_id > 0 {
            warn!("Skipped {} member records without an id", missing_id);
        }

        // A blank viewer id identifies nobody
        let viewer_id = viewer_id.filter(|id| !id.as_str().trim().is_empty());

        info!(
            "Built directory snapshot: {} members from {} records (viewer: {})",
            members.len(),
            received,
            viewer_id.as_ref().map(|v| v.as_str()).unwrap_or("none")
        );

        Self {
            members,
            viewer_id,
            by_id,
        }
    }

    /// Build a snapshot from records that are already normalized.
    ///
    /// Records still pass through normalization so the index invariants
    /// hold regardless of where the records came from.
    pub fn from_members(members: Vec<MemberRecord>, viewer_id: Option<MemberId>) -> Self {
        let raw = members.into_iter().map(RawMemberRecord::from).collect();
        Self::build(raw, viewer_id)
    }

    /// All members in snapshot order, including the viewer.
    pub fn members(&self) -> &[MemberRecord] {
        &self.members
    }

    pub fn viewer_id(&self) -> Option<&MemberId> {
        self.viewer_id.as_ref()
    }

    /// Whether `member` is the one viewing the directory.
    pub fn is_viewer(&self, member: &MemberRecord) -> bool {
        self.viewer_id.as_ref() == Some(&member.id)
    }

    /// Get a member by ID
    pub fn get_member(&self, id: &MemberId) -> Option<&MemberRecord> {
        self.by_id.get(id).map(|&pos| &self.members[pos])
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl From<MemberRecord> for RawMemberRecord {
    fn from(m: MemberRecord) -> Self {
        Self {
            id: Some(m.id),
            name: Some(m.name),
            username: Some(m.username),
            avatar_initial: Some(m.avatar_initial),
            is_online: Some(m.is_online),
            rating: Some(m.rating),
            skills_offered: Some(m.skills_offered.into_iter().map(Some).collect()),
            skills_wanted: Some(m.skills_wanted.into_iter().map(Some).collect()),
        }
    }
}

/// Turn one raw record into a `MemberRecord`, or `None` if it has no id.
fn normalize_record(raw: RawMemberRecord) -> Option<MemberRecord> {
    let id = raw.id.filter(|id| !id.as_str().trim().is_empty())?;

    let username = raw
        .username
        .map(|u| u.trim().to_string())
        .unwrap_or_default();

    let name = raw
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .or_else(|| Some(username.clone()).filter(|u| !u.is_empty()))
        .unwrap_or_else(|| id.to_string());

    let avatar_initial = raw
        .avatar_initial
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| derive_initial(&name));

    Some(MemberRecord {
        id,
        name,
        username,
        avatar_initial,
        is_online: raw.is_online.unwrap_or(false),
        rating: clamp_rating(raw.rating),
        skills_offered: normalize_skills(raw.skills_offered),
        skills_wanted: normalize_skills(raw.skills_wanted),
    })
}

fn clamp_rating(rating: Option<f64>) -> f64 {
    match rating {
        Some(r) if r.is_finite() => r.clamp(MemberRecord::MIN_RATING, MemberRecord::MAX_RATING),
        _ => MemberRecord::MIN_RATING,
    }
}

/// Drop null and blank entries, trim the rest. Order is kept.
fn normalize_skills(skills: Option<Vec<Option<String>>>) -> Vec<String> {
    skills
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn derive_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Count distinct skill names case-insensitively.
pub fn distinct_skill_count<'a>(skills: impl IntoIterator<Item = &'a String>) -> usize {
    skills
        .into_iter()
        .map(|s| s.to_lowercase())
        .collect::<HashSet<_>>()
        .len()
}
