//! Core domain types for the member directory.
//!
//! Two layers live here:
//! - wire shapes (`RawMemberRecord`, `SwapRequest`) that mirror what the
//!   directory fetch hands us, where any field may be missing
//! - the normalized `MemberRecord` that everything downstream consumes
//!
//! Normalization from one to the other happens in [`crate::index`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Opaque member identifier.
///
/// The backend sends ids as either JSON strings or JSON numbers. Both are
/// kept in their textual form so that every comparison (most importantly
/// the viewer check) is a plain string comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MemberId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for MemberId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl<'de> Deserialize<'de> for MemberId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum WireId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match WireId::deserialize(deserializer)? {
            WireId::Text(s) => MemberId(s),
            WireId::Number(n) => MemberId(n.to_string()),
        })
    }
}

// =============================================================================
// Member records
// =============================================================================

/// One directory entry exactly as it arrives on the wire.
///
/// Every field is optional; unknown keys are ignored. A field of the wrong
/// JSON type decodes as absent instead of failing the record, so one bad
/// value never costs the rest of the directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMemberRecord {
    #[serde(default, alias = "_id", deserialize_with = "lenient_id")]
    pub id: Option<MemberId>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
    #[serde(default, alias = "avatar", deserialize_with = "lenient_string")]
    pub avatar_initial: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_online: Option<bool>,
    /// Numeric strings such as `"4.5"` are accepted.
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: Option<f64>,
    /// A non-array value decodes as absent; non-string entries become `None`.
    #[serde(default, deserialize_with = "lenient_skills")]
    pub skills_offered: Option<Vec<Option<String>>>,
    #[serde(default, deserialize_with = "lenient_skills")]
    pub skills_wanted: Option<Vec<Option<String>>>,
}

// Field decoders for `RawMemberRecord`. Each takes any JSON value and keeps
// it only when it has the expected shape.

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<MemberId>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(MemberId(s)),
        Value::Number(n) => Some(MemberId(n.to_string())),
        _ => None,
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        _ => None,
    })
}

fn lenient_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_skills<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<Option<String>>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// A normalized directory entry.
///
/// Invariants (established by `DirectoryIndex::build`):
/// - `rating` is within `[0.0, 5.0]`
/// - `name` is non-empty
/// - skill lists contain no empty entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    pub id: MemberId,
    pub name: String,
    pub username: String,
    /// Display token only; derived from `name` when the wire omits it.
    pub avatar_initial: String,
    /// Advisory presence flag, no freshness guarantee.
    pub is_online: bool,
    pub rating: f64,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
}

/// First few offered skills plus how many were left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillPreview<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl MemberRecord {
    /// Lowest rating a member can hold
    pub const MIN_RATING: f64 = 0.0;
    /// Highest rating a member can hold
    pub const MAX_RATING: f64 = 5.0;

    /// Split `skills_offered` into the first `n` entries and an overflow count.
    pub fn skill_preview(&self, n: usize) -> SkillPreview<'_> {
        let shown_len = n.min(self.skills_offered.len());
        SkillPreview {
            shown: &self.skills_offered[..shown_len],
            hidden: self.skills_offered.len() - shown_len,
        }
    }
}

// =============================================================================
// Swap requests
// =============================================================================

/// Lifecycle state of a swap request.
///
/// Unrecognized status strings become `Other` rather than failing the
/// whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SwapStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
    Other(String),
}

impl From<String> for SwapStatus {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "pending" => SwapStatus::Pending,
            "accepted" => SwapStatus::Accepted,
            "rejected" | "declined" => SwapStatus::Rejected,
            "cancelled" | "canceled" => SwapStatus::Cancelled,
            _ => SwapStatus::Other(s),
        }
    }
}

impl From<SwapStatus> for String {
    fn from(status: SwapStatus) -> Self {
        match status {
            SwapStatus::Pending => "pending".to_string(),
            SwapStatus::Accepted => "accepted".to_string(),
            SwapStatus::Rejected => "rejected".to_string(),
            SwapStatus::Cancelled => "cancelled".to_string(),
            SwapStatus::Other(s) => s,
        }
    }
}

/// A request from one member to swap skills with another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    #[serde(default, alias = "_id")]
    pub id: Option<MemberId>,
    #[serde(default)]
    pub sender_id: Option<MemberId>,
    /// Absent when the payload was already scoped to one receiver.
    #[serde(default)]
    pub receiver_id: Option<MemberId>,
    pub status: SwapStatus,
}

impl SwapRequest {
    pub fn is_pending(&self) -> bool {
        self.status == SwapStatus::Pending
    }
}
