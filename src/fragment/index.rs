//! Zero-based fragment positioning within one attempt.
//!
//! Provides [`FragmentIndex`], a type-safe wrapper around `u32` used for both
//! a fragment's own position and the position of the attempt's final
//! fragment.

use std::num::TryFromIntError;

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Zero-based ordinal describing a fragment's position within its attempt.
///
/// # Examples
///
/// ```
/// use bundleframe::fragment::FragmentIndex;
/// let index = FragmentIndex::new(3);
/// assert_eq!(index.get(), 3);
/// assert_eq!(index.fragment_count(), 4);
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    From,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct FragmentIndex(u32);

impl FragmentIndex {
    /// Construct an index from a `u32` value.
    #[must_use]
    pub const fn new(value: u32) -> Self { Self(value) }

    /// Return the first valid fragment index.
    #[must_use]
    pub const fn zero() -> Self { Self(0) }

    /// Return the underlying numeric value.
    #[must_use]
    pub const fn get(self) -> u32 { self.0 }

    /// Number of fragments in an attempt whose last index is `self`.
    ///
    /// Saturates on targets where `usize` cannot hold `u32::MAX + 1`.
    #[must_use]
    pub fn fragment_count(self) -> usize {
        usize::try_from(self.0).map_or(usize::MAX, |last| last.saturating_add(1))
    }
}

impl TryFrom<usize> for FragmentIndex {
    type Error = TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> { u32::try_from(value).map(Self) }
}

impl From<FragmentIndex> for u32 {
    fn from(value: FragmentIndex) -> Self { value.0 }
}
