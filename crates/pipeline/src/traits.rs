//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable
//! predicates to be applied to a directory snapshot.

use directory::{DirectoryIndex, MemberRecord};

/// Core trait for filtering directory members.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - Filters judge one member at a time and never see or reorder the
///   rest of the list, which keeps every pipeline a stable filter
/// - The snapshot is passed in so filters can consult snapshot-level
///   facts such as the viewer's identity
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `member` stays in the visible list.
    fn keep(&self, member: &MemberRecord, index: &DirectoryIndex) -> bool;
}
