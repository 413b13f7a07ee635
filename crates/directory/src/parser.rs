//! Reading directory payloads from JSON.
//!
//! The directory fetch returns a JSON array of member objects and the
//! swap-request inbox a JSON array of request objects. These helpers read
//! either from any `Read` or from a file on disk.
//!
//! Only a payload that is not a JSON array fails. Entries are decoded one
//! at a time and an entry that cannot be decoded at all is skipped.

use crate::error::{DirectoryError, Result};
use crate::index::DirectoryIndex;
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use serde_json::Value;
use tracing::{debug, warn};

/// Parse a JSON array of raw member records.
pub fn parse_members<R: Read>(reader: R) -> Result<Vec<RawMemberRecord>> {
    parse_array(reader, "member list")
}

/// Parse a JSON array of swap requests.
pub fn parse_swap_requests<R: Read>(reader: R) -> Result<Vec<SwapRequest>> {
    parse_array(reader, "swap request list")
}

/// Load a snapshot file and build a `DirectoryIndex` from it.
pub fn load_snapshot(path: &Path, viewer_id: Option<MemberId>) -> Result<DirectoryIndex> {
    let raw = parse_members(open(path)?)?;
    debug!("Read {} raw member records from {}", raw.len(), path.display());
    Ok(DirectoryIndex::build(raw, viewer_id))
}

/// Load swap requests from a file.
pub fn load_swap_requests(path: &Path) -> Result<Vec<SwapRequest>> {
    parse_swap_requests(open(path)?)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    if !path.exists() {
        return Err(DirectoryError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(BufReader::new(File::open(path)?))
}

fn parse_array<T: DeserializeOwned, R: Read>(reader: R, context: &str) -> Result<Vec<T>> {
    let entries: Vec<Value> =
        serde_json::from_reader(reader).map_err(|source| DirectoryError::Json {
            context: context.to_string(),
            source,
        })?;

    let received = entries.len();
    let records: Vec<T> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(pos, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping unreadable entry {} in {}: {}", pos, context, e);
                None
            }
        })
        .collect();

    if records.len() < received {
        debug!(
            "Kept {} of {} entries in {}",
            records.len(),
            received,
            context
        );
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"[
        {"id": 1, "name": "Ada", "rating": 4.8, "isOnline": true,
         "skillsOffered": ["Rust", "Web Development"], "skillsWanted": ["Design"]},
        {"id": "2", "name": "Bo", "rating": 3.1}
    ]"#;

    #[test]
    fn test_parse_members() {
        let raw = parse_members(SNAPSHOT.as_bytes()).unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0].is_online, Some(true));
        assert!(raw[1].skills_offered.is_none());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_members(r#"{"error": "boom"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, DirectoryError::Json { .. }));
    }

    #[test]
    fn test_string_rating_keeps_whole_list() {
        let raw = parse_members(
            r#"[{"id": 1, "name": "Ada", "rating": 4.5}, {"id": 2, "name": "Bo", "rating": "4.0"}]"#
                .as_bytes(),
        )
        .unwrap();
        let index = DirectoryIndex::build(raw, None);
        assert_eq!(index.len(), 2);
        assert_eq!(index.members()[0].rating, 4.5);
        assert_eq!(index.members()[1].rating, 4.0);
    }

    #[test]
    fn test_non_string_skill_entry_dropped() {
        let raw = parse_members(
            r#"[{"id": 1, "name": "Ada"}, {"id": 2, "name": "Bo", "skillsOffered": ["Go", 5]}]"#
                .as_bytes(),
        )
        .unwrap();
        let index = DirectoryIndex::build(raw, None);
        assert_eq!(index.len(), 2);
        assert_eq!(index.members()[1].skills_offered, vec!["Go"]);
    }

    #[test]
    fn test_scalar_skill_list_becomes_empty() {
        let raw = parse_members(
            r#"[{"id": 1, "name": "Ada"}, {"id": 2, "name": "Bo", "skillsOffered": "Go"}]"#
                .as_bytes(),
        )
        .unwrap();
        let index = DirectoryIndex::build(raw, None);
        assert_eq!(index.len(), 2);
        assert!(index.members()[1].skills_offered.is_empty());
    }

    #[test]
    fn test_non_object_entries_skipped() {
        let raw = parse_members(r#"[{"id": 1, "name": "Ada"}, 42, "oops", null]"#.as_bytes())
            .unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_rating_keeps_double_precision() {
        let raw = parse_members(r#"[{"id": 1, "rating": 3.99999999}]"#.as_bytes()).unwrap();
        let index = DirectoryIndex::build(raw, None);
        assert!(index.members()[0].rating < 4.0);
    }

    #[test]
    fn test_load_snapshot_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let index = load_snapshot(file.path(), Some(MemberId::from(2u64))).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.viewer_id(), Some(&MemberId::new("2")));
        assert_eq!(index.members()[0].skills_offered.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_snapshot(&dir.path().join("nope.json"), None).unwrap_err();
        assert!(matches!(err, DirectoryError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_swap_requests() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"receiverId": 5, "status": "pending"}]"#)
            .unwrap();
        let requests = load_swap_requests(file.path()).unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].is_pending());
    }
}
