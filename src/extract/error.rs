//! Error types emitted while extracting logical messages.
//!
//! [`AttemptError`] describes structural defects of a selected attempt and
//! is only raised in strict mode. [`ExtractionError`] is the error of the
//! whole extraction call and names the offending group.

use std::num::NonZeroUsize;

use thiserror::Error;

use crate::fragment::{AttemptTimestamp, FragmentIndex, GroupId};

/// Structural defects detected in a selected attempt.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AttemptError {
    /// The group contained no fragments at all.
    #[error("attempt contains no fragments")]
    Empty,
    /// Fragments from more than one attempt were selected.
    #[error("attempt timestamp mismatch: expected {expected}, found {found}")]
    MixedAttempts {
        /// Timestamp of the earliest selected fragment.
        expected: AttemptTimestamp,
        /// Timestamp carried by a later selected fragment.
        found: AttemptTimestamp,
    },
    /// Fragments disagree about the index of the final fragment.
    #[error("last index mismatch: expected {expected}, found {found}")]
    LastIndexMismatch {
        /// Last index declared by the earliest selected fragment.
        expected: FragmentIndex,
        /// Last index declared by a later selected fragment.
        found: FragmentIndex,
    },
    /// The attempt holds fewer fragments than its last index requires.
    #[error("fragment count mismatch: expected {expected}, found {found}")]
    FragmentCount {
        /// Number of fragments implied by the last index.
        expected: usize,
        /// Number of fragments actually selected.
        found: usize,
    },
    /// A fragment's index lies beyond the attempt's last index.
    #[error("fragment index {index} exceeds last index {last}")]
    IndexOutOfRange {
        /// Offending sequence index.
        index: FragmentIndex,
        /// Declared last index of the attempt.
        last: FragmentIndex,
    },
    /// Two fragments share one sequence index.
    #[error("duplicate fragment index {index}")]
    DuplicateIndex {
        /// Index that appeared more than once.
        index: FragmentIndex,
    },
}

/// Errors produced while extracting logical messages from fragments.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Strict validation rejected the selected attempt.
    #[error("group {group_id} has a malformed attempt: {source}")]
    Attempt {
        /// Group whose attempt was rejected.
        group_id: GroupId,
        /// Defect found in the attempt.
        #[source]
        source: AttemptError,
    },
    /// The concatenated payload exceeds the configured cap.
    #[error("group {group_id} payload exceeds size limit: {attempted} bytes > {limit} bytes")]
    MessageTooLarge {
        /// Group whose payload was too large.
        group_id: GroupId,
        /// Length of the concatenated payload.
        attempted: usize,
        /// Configured size cap.
        limit: NonZeroUsize,
    },
    /// The decoded payload is not a valid JSON document.
    #[error("group {group_id} payload could not be parsed: {source}")]
    Parse {
        /// Group whose payload failed to parse.
        group_id: GroupId,
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },
}

impl ExtractionError {
    /// Group the error refers to.
    #[must_use]
    pub fn group_id(&self) -> &GroupId {
        match self {
            Self::Attempt { group_id, .. }
            | Self::MessageTooLarge { group_id, .. }
            | Self::Parse { group_id, .. } => group_id,
        }
    }
}
