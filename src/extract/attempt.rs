//! Resolution of reattachments down to a single authoritative attempt.
//!
//! A group may hold several attempts at submitting the same logical message.
//! Fragments are ordered by attempt timestamp, earliest first, and the first
//! `last_index + 1` of them are kept, where `last_index` is read from the
//! earliest fragment. When every attempt's fragments share one timestamp
//! this selects exactly the earliest attempt. Attempts that share a
//! timestamp, or fragments of one attempt that disagree on it, can yield a
//! mixed selection; [`Attempt::validate`] reports such cases.

use super::AttemptError;
use crate::fragment::{AttemptTimestamp, FragmentIndex, FragmentRecord};

/// Fragments selected as the authoritative attempt of one group.
#[derive(Clone, Debug, Default)]
pub struct Attempt<'a> {
    fragments: Vec<&'a FragmentRecord>,
    discarded: usize,
}

impl<'a> Attempt<'a> {
    /// Selected fragments, ordered by attempt timestamp.
    #[must_use]
    pub fn fragments(&self) -> &[&'a FragmentRecord] { &self.fragments }

    /// Number of fragments dropped as belonging to later attempts.
    #[must_use]
    pub const fn discarded(&self) -> usize { self.discarded }

    /// Timestamp of the earliest selected fragment.
    #[must_use]
    pub fn timestamp(&self) -> Option<AttemptTimestamp> {
        self.fragments
            .first()
            .map(|fragment| fragment.attempt_timestamp())
    }

    /// Last index declared by the earliest selected fragment.
    #[must_use]
    pub fn last_index(&self) -> Option<FragmentIndex> {
        self.fragments.first().map(|fragment| fragment.last_index())
    }

    /// Consume the attempt, returning the selected fragments.
    #[must_use]
    pub fn into_fragments(self) -> Vec<&'a FragmentRecord> { self.fragments }

    /// Check that the selection forms one complete, well-formed attempt.
    ///
    /// # Errors
    ///
    /// Returns [`AttemptError::Empty`] when nothing was selected,
    /// [`AttemptError::MixedAttempts`] or [`AttemptError::LastIndexMismatch`]
    /// when fragments disagree about their attempt,
    /// [`AttemptError::FragmentCount`] when fragments are missing,
    /// [`AttemptError::IndexOutOfRange`] when an index exceeds the last index,
    /// and [`AttemptError::DuplicateIndex`] when an index repeats.
    pub fn validate(&self) -> Result<(), AttemptError> {
        let Some(first) = self.fragments.first() else {
            return Err(AttemptError::Empty);
        };
        let timestamp = first.attempt_timestamp();
        let last = first.last_index();

        for fragment in &self.fragments {
            if fragment.attempt_timestamp() != timestamp {
                return Err(AttemptError::MixedAttempts {
                    expected: timestamp,
                    found: fragment.attempt_timestamp(),
                });
            }
            if fragment.last_index() != last {
                return Err(AttemptError::LastIndexMismatch {
                    expected: last,
                    found: fragment.last_index(),
                });
            }
        }

        let expected = last.fragment_count();
        if self.fragments.len() != expected {
            return Err(AttemptError::FragmentCount {
                expected,
                found: self.fragments.len(),
            });
        }

        let mut seen = vec![false; expected];
        for fragment in &self.fragments {
            let index = fragment.sequence_index();
            let slot = usize::try_from(index.get())
                .ok()
                .and_then(|position| seen.get_mut(position))
                .ok_or(AttemptError::IndexOutOfRange { index, last })?;
            if *slot {
                return Err(AttemptError::DuplicateIndex { index });
            }
            *slot = true;
        }
        Ok(())
    }
}

/// Select the authoritative attempt among a group's fragments.
///
/// The sort is stable, so fragments with equal timestamps keep their input
/// order.
///
/// # Examples
///
/// ```
/// use bundleframe::{extract::select_attempt, fragment::FragmentRecord};
///
/// let reattached = FragmentRecord::new("B", 0, 0, 200, "late");
/// let original = FragmentRecord::new("B", 0, 0, 100, "early");
/// let attempt = select_attempt(&[&reattached, &original]);
/// assert_eq!(attempt.fragments()[0].payload_chunk(), "early");
/// assert_eq!(attempt.discarded(), 1);
/// ```
#[must_use]
pub fn select_attempt<'a>(fragments: &[&'a FragmentRecord]) -> Attempt<'a> {
    let mut sorted = fragments.to_vec();
    sorted.sort_by_key(|fragment| fragment.attempt_timestamp());

    let Some(first) = sorted.first() else {
        return Attempt::default();
    };
    let keep = first.last_index().fragment_count();
    let discarded = sorted.len().saturating_sub(keep);
    sorted.truncate(keep);

    Attempt {
        fragments: sorted,
        discarded,
    }
}
