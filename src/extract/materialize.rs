//! Conversion of a concatenated payload into a structured value.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{escape::decode_non_ascii, fragment::GroupId};

/// A logical message reconstructed from one attempt's fragments.
#[derive(Clone, Debug, PartialEq)]
pub struct LogicalMessage<T = Value> {
    group_id: GroupId,
    value: T,
}

impl<T> LogicalMessage<T> {
    /// Construct a new [`LogicalMessage`].
    #[must_use]
    pub fn new(group_id: GroupId, value: T) -> Self { Self { group_id, value } }

    /// Identifier shared by the fragments that formed this message.
    #[must_use]
    pub fn group_id(&self) -> &GroupId { &self.group_id }

    /// Borrow the reconstructed value.
    #[must_use]
    pub fn value(&self) -> &T { &self.value }

    /// Consume the message, returning the value.
    #[must_use]
    pub fn into_value(self) -> T { self.value }

    /// Consume the message, returning its components.
    #[must_use]
    pub fn into_parts(self) -> (GroupId, T) { (self.group_id, self.value) }
}

/// Unescape `payload` and parse it as JSON.
///
/// An empty payload has nothing to decode and fails as empty input.
///
/// # Errors
///
/// Returns the [`serde_json::Error`] raised while parsing the decoded text.
///
/// # Examples
///
/// ```
/// use bundleframe::extract::materialize;
/// use serde_json::{Value, json};
///
/// let value: Value = materialize("{\"name\":\"caf\\u00e9\"}").expect("valid json");
/// assert_eq!(value, json!({ "name": "café" }));
/// ```
pub fn materialize<T: DeserializeOwned>(payload: &str) -> Result<T, serde_json::Error> {
    let decoded = decode_non_ascii(payload).unwrap_or_default();
    serde_json::from_str(&decoded)
}
