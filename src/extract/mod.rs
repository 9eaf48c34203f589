//! Reconstruction of logical messages from ledger fragments.
//!
//! Extraction runs four stages per group of fragments:
//!
//! 1. [`group_fragments`] partitions records by group identifier, keeping
//!    first-occurrence order.
//! 2. [`select_attempt`] discards reattachments, keeping the earliest
//!    attempt.
//! 3. [`concatenate`] orders the attempt by sequence index and joins the
//!    payload chunks.
//! 4. [`materialize`] unescapes non-ASCII text and parses the JSON document.
//!
//! All stages are synchronous and borrow their input; nothing is cached
//! between calls.

pub mod attempt;
pub mod config;
pub mod error;
pub mod group;
pub mod materialize;
pub mod sequence;

use log::{debug, warn};
use serde::de::DeserializeOwned;

pub use attempt::{Attempt, select_attempt};
pub use config::{ExtractionConfig, ValidationMode};
pub use error::{AttemptError, ExtractionError};
pub use group::{FragmentGroup, FragmentGroups, group_fragments};
pub use materialize::{LogicalMessage, materialize};
pub use sequence::{concatenate, sequence};

use crate::fragment::FragmentRecord;

/// Reassembles logical messages according to an [`ExtractionConfig`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BundleExtractor {
    config: ExtractionConfig,
}

impl BundleExtractor {
    /// Create an extractor with the given configuration.
    #[must_use]
    pub const fn new(config: ExtractionConfig) -> Self { Self { config } }

    /// Return the extractor's configuration.
    #[must_use]
    pub const fn config(&self) -> &ExtractionConfig { &self.config }

    /// Extract one logical message per distinct group identifier.
    ///
    /// Messages are returned in the order each group identifier first
    /// appears in `records`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Attempt`] when strict validation rejects a
    /// group, [`ExtractionError::MessageTooLarge`] when a payload exceeds the
    /// configured cap, and [`ExtractionError::Parse`] when a payload is not a
    /// valid document. The first failing group aborts the whole call.
    pub fn extract<'a, T, I>(&self, records: I) -> Result<Vec<LogicalMessage<T>>, ExtractionError>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = &'a FragmentRecord>,
    {
        let groups = group_fragments(records);
        debug!("extracting logical messages: groups={}", groups.len());

        let messages = groups
            .iter()
            .map(|group| self.extract_group(group))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("extracted logical messages: count={}", messages.len());
        Ok(messages)
    }

    /// Extract the bare values of every logical message.
    ///
    /// # Errors
    ///
    /// See [`BundleExtractor::extract`].
    pub fn extract_values<'a, T, I>(&self, records: I) -> Result<Vec<T>, ExtractionError>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = &'a FragmentRecord>,
    {
        Ok(self
            .extract(records)?
            .into_iter()
            .map(LogicalMessage::into_value)
            .collect())
    }

    fn extract_group<T: DeserializeOwned>(
        &self,
        group: &FragmentGroup<'_>,
    ) -> Result<LogicalMessage<T>, ExtractionError> {
        let group_id = group.group_id();
        let attempt = select_attempt(group.fragments());
        if attempt.discarded() > 0 {
            debug!(
                "discarded reattached fragments: group_id={group_id}, discarded={}",
                attempt.discarded()
            );
        }

        if let Err(defect) = attempt.validate() {
            match self.config.validation {
                ValidationMode::Strict => {
                    return Err(ExtractionError::Attempt {
                        group_id: group_id.clone(),
                        source: defect,
                    });
                }
                ValidationMode::Lenient => {
                    warn!("accepting malformed attempt: group_id={group_id}, defect={defect}");
                }
            }
        }

        if let Some(limit) = self.config.max_message_len {
            let attempted: usize = attempt
                .fragments()
                .iter()
                .map(|fragment| fragment.payload_chunk().len())
                .sum();
            if attempted > limit.get() {
                return Err(ExtractionError::MessageTooLarge {
                    group_id: group_id.clone(),
                    attempted,
                    limit,
                });
            }
        }

        let payload = concatenate(attempt.fragments());
        let value = materialize(&payload).map_err(|source| {
            warn!("failed to parse reassembled payload: group_id={group_id}, error={source}");
            ExtractionError::Parse {
                group_id: group_id.clone(),
                source,
            }
        })?;
        Ok(LogicalMessage::new(group_id.clone(), value))
    }
}

/// Extract one JSON value per distinct group identifier using lenient
/// validation.
///
/// # Errors
///
/// Returns [`ExtractionError::Parse`] when a group's payload does not parse.
///
/// # Examples
///
/// ```
/// use bundleframe::{extract::extract_logical_messages, fragment::FragmentRecord};
/// use serde_json::json;
///
/// let records = [
///     FragmentRecord::new("B", 1, 1, 100, "a\":1}"),
///     FragmentRecord::new("B", 0, 1, 100, "{\""),
/// ];
/// let messages = extract_logical_messages(&records).expect("valid bundle");
/// assert_eq!(messages[0].value(), &json!({ "a": 1 }));
/// ```
pub fn extract_logical_messages<'a, I>(records: I) -> Result<Vec<LogicalMessage>, ExtractionError>
where
    I: IntoIterator<Item = &'a FragmentRecord>,
{
    BundleExtractor::default().extract(records)
}

/// Extract one typed value per distinct group identifier using lenient
/// validation.
///
/// # Errors
///
/// Returns [`ExtractionError::Parse`] when a group's payload does not
/// deserialise into `T`.
pub fn extract_bundles<'a, T, I>(records: I) -> Result<Vec<T>, ExtractionError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = &'a FragmentRecord>,
{
    BundleExtractor::default().extract_values(records)
}
