use serde::{Deserialize, Serialize};

use super::{AttemptTimestamp, FragmentIndex, GroupId};

/// One transport-level record carrying a chunk of a larger payload.
///
/// The serde representation uses the ledger's transaction-object field names.
/// `signatureMessageFragment` must already hold the ASCII-escaped chunk: a
/// raw ledger message fragment is tryte-encoded and has to be converted to
/// text before it maps onto this type. Fields unrelated to reassembly are
/// ignored.
///
/// # Examples
///
/// ```
/// use bundleframe::fragment::FragmentRecord;
/// let record = FragmentRecord::new("B", 0, 1, 100, "{\"");
/// assert_eq!(record.group_id().as_str(), "B");
/// assert_eq!(record.sequence_index().get(), 0);
/// assert_eq!(record.last_index().get(), 1);
/// assert_eq!(record.attempt_timestamp().get(), 100);
/// assert_eq!(record.payload_chunk(), "{\"");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentRecord {
    #[serde(rename = "bundle")]
    group_id: GroupId,
    #[serde(rename = "currentIndex")]
    sequence_index: FragmentIndex,
    #[serde(rename = "lastIndex")]
    last_index: FragmentIndex,
    #[serde(rename = "attachmentTimestamp")]
    attempt_timestamp: AttemptTimestamp,
    #[serde(rename = "signatureMessageFragment")]
    payload_chunk: String,
}

impl FragmentRecord {
    /// Create a new fragment record.
    #[must_use]
    pub fn new(
        group_id: impl Into<GroupId>,
        sequence_index: impl Into<FragmentIndex>,
        last_index: impl Into<FragmentIndex>,
        attempt_timestamp: impl Into<AttemptTimestamp>,
        payload_chunk: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            sequence_index: sequence_index.into(),
            last_index: last_index.into(),
            attempt_timestamp: attempt_timestamp.into(),
            payload_chunk: payload_chunk.into(),
        }
    }

    /// Identifier of the logical message this fragment belongs to.
    #[must_use]
    pub fn group_id(&self) -> &GroupId { &self.group_id }

    /// Position of this fragment within its attempt.
    #[must_use]
    pub const fn sequence_index(&self) -> FragmentIndex { self.sequence_index }

    /// Index of the final fragment of this fragment's attempt.
    #[must_use]
    pub const fn last_index(&self) -> FragmentIndex { self.last_index }

    /// Submission time of the attempt this fragment belongs to.
    #[must_use]
    pub const fn attempt_timestamp(&self) -> AttemptTimestamp { self.attempt_timestamp }

    /// Borrow the escaped payload chunk.
    #[must_use]
    pub fn payload_chunk(&self) -> &str { &self.payload_chunk }

    /// Return a copy of this record stamped with a different attempt time.
    #[must_use]
    pub fn with_attempt_timestamp(&self, attempt_timestamp: AttemptTimestamp) -> Self {
        Self {
            attempt_timestamp,
            ..self.clone()
        }
    }
}
