use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Opaque identifier shared by every fragment of one logical message.
///
/// On the ledger this is the bundle hash. Reassembly only compares
/// identifiers for equality and never inspects their contents.
///
/// # Examples
///
/// ```
/// use bundleframe::fragment::GroupId;
/// let id = GroupId::new("BUNDLE9HASH");
/// assert_eq!(id.as_str(), "BUNDLE9HASH");
/// ```
#[derive(
    Clone,
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
    Into,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct GroupId(String);

impl GroupId {
    /// Create a new identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self { Self(value.into()) }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for GroupId {
    fn from(value: &str) -> Self { Self(value.to_owned()) }
}

/// Submission time of one attempt at attaching a bundle to the ledger.
///
/// Every fragment of a single attempt carries the same timestamp. A
/// reattachment repeats the fragments under a later timestamp.
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
    Into,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct AttemptTimestamp(u64);

impl AttemptTimestamp {
    /// Wrap a raw timestamp.
    #[must_use]
    pub const fn new(value: u64) -> Self { Self(value) }

    /// Return the raw timestamp.
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}
