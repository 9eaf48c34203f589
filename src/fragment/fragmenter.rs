//! Outbound helper that splits logical messages into ledger fragments.
//!
//! [`Fragmenter`] is the inverse of extraction: it serialises a value to
//! JSON, escapes non-ASCII text, and chunks the escaped text into
//! [`FragmentRecord`]s that share one group identifier and attempt
//! timestamp.

use std::num::NonZeroUsize;

use serde::Serialize;

use super::{AttemptTimestamp, FragmentIndex, FragmentRecord, FragmentationError, GroupId};
use crate::escape::encode_non_ascii;

/// Splits logical messages into fragment-sized payload chunks.
#[derive(Clone, Copy, Debug)]
pub struct Fragmenter {
    max_chunk_len: NonZeroUsize,
}

impl Fragmenter {
    /// Create a fragmenter that caps each payload chunk at `max_chunk_len` bytes.
    #[must_use]
    pub const fn new(max_chunk_len: NonZeroUsize) -> Self { Self { max_chunk_len } }

    /// Return the maximum payload chunk length in bytes.
    #[must_use]
    pub const fn max_chunk_len(&self) -> NonZeroUsize { self.max_chunk_len }

    /// Serialise `value` as JSON and split it into fragments.
    ///
    /// # Errors
    ///
    /// Returns [`FragmentationError::Serialize`] if serialisation fails, or
    /// [`FragmentationError::TooManyFragments`] if the fragment index would
    /// overflow `u32`.
    pub fn fragment_value<T: Serialize + ?Sized>(
        &self,
        group_id: &GroupId,
        attempt_timestamp: AttemptTimestamp,
        value: &T,
    ) -> Result<FragmentBatch, FragmentationError> {
        let json = serde_json::to_string(value)?;
        self.fragment_text(group_id, attempt_timestamp, &json)
    }

    /// Escape `text` and split it into fragments.
    ///
    /// Empty text produces a single fragment with an empty chunk.
    ///
    /// # Errors
    ///
    /// Returns [`FragmentationError::TooManyFragments`] if more than
    /// `u32::MAX + 1` fragments are required.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    ///
    /// use bundleframe::fragment::{AttemptTimestamp, Fragmenter, GroupId};
    ///
    /// let fragmenter = Fragmenter::new(NonZeroUsize::new(4).expect("non-zero"));
    /// let batch = fragmenter
    ///     .fragment_text(&GroupId::new("B"), AttemptTimestamp::new(1), "café")
    ///     .expect("fragment");
    /// let chunks: Vec<_> = batch.fragments().iter().map(|f| f.payload_chunk()).collect();
    /// assert_eq!(chunks, ["caf\\", "u00e", "9"]);
    /// ```
    pub fn fragment_text(
        &self,
        group_id: &GroupId,
        attempt_timestamp: AttemptTimestamp,
        text: &str,
    ) -> Result<FragmentBatch, FragmentationError> {
        let escaped = encode_non_ascii(text).unwrap_or_default();
        let chunks = split_chunks(&escaped, self.max_chunk_len.get());
        let last_index = FragmentIndex::try_from(chunks.len().saturating_sub(1))
            .map_err(|_| FragmentationError::TooManyFragments {
                count: chunks.len(),
            })?;

        let fragments = (0..=last_index.get())
            .zip(chunks)
            .map(|(index, chunk)| {
                FragmentRecord::new(
                    group_id.clone(),
                    index,
                    last_index,
                    attempt_timestamp,
                    chunk,
                )
            })
            .collect();
        Ok(FragmentBatch::new(group_id.clone(), fragments))
    }
}

/// Split `text` into chunks of at most `max` bytes on character boundaries.
///
/// Always yields at least one chunk. A character wider than `max` occupies a
/// chunk of its own.
fn split_chunks(text: &str, max: usize) -> Vec<&str> {
    if text.is_empty() {
        return vec![""];
    }

    let mut chunks = Vec::with_capacity(text.len().div_ceil(max));
    let mut rest = text;
    while !rest.is_empty() {
        let mut end = max.min(rest.len());
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        if end == 0 {
            end = rest.chars().next().map_or(rest.len(), char::len_utf8);
        }
        let (head, tail) = rest.split_at(end);
        chunks.push(head);
        rest = tail;
    }
    chunks
}

/// Fragments produced for a single attempt at submitting a logical message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentBatch {
    group_id: GroupId,
    fragments: Vec<FragmentRecord>,
}

impl FragmentBatch {
    fn new(group_id: GroupId, fragments: Vec<FragmentRecord>) -> Self {
        debug_assert!(!fragments.is_empty(), "fragment batches must not be empty");
        Self {
            group_id,
            fragments,
        }
    }

    /// Return the [`GroupId`] shared by all fragments.
    #[must_use]
    pub fn group_id(&self) -> &GroupId { &self.group_id }

    /// Return the fragments as a slice.
    #[must_use]
    pub fn fragments(&self) -> &[FragmentRecord] { self.fragments.as_slice() }

    /// Number of fragments in the batch.
    #[expect(
        clippy::len_without_is_empty,
        reason = "batches are guaranteed non-empty"
    )]
    #[must_use]
    pub fn len(&self) -> usize { self.fragments.len() }

    /// Whether the logical message required more than one fragment.
    #[must_use]
    pub fn is_fragmented(&self) -> bool { self.len() > 1 }

    /// Copy the batch as a reattachment submitted at `attempt_timestamp`.
    ///
    /// The ledger keeps both attempts; extraction resolves them back to the
    /// earliest one.
    #[must_use]
    pub fn reattach(&self, attempt_timestamp: AttemptTimestamp) -> Self {
        let fragments = self
            .fragments
            .iter()
            .map(|fragment| fragment.with_attempt_timestamp(attempt_timestamp))
            .collect();
        Self::new(self.group_id.clone(), fragments)
    }

    /// Consume the batch, returning all fragments.
    #[must_use]
    pub fn into_fragments(self) -> Vec<FragmentRecord> { self.fragments }
}

impl IntoIterator for FragmentBatch {
    type Item = FragmentRecord;
    type IntoIter = std::vec::IntoIter<FragmentRecord>;

    fn into_iter(self) -> Self::IntoIter { self.fragments.into_iter() }
}
