//! Argument and result types of the ledger client's operations.

use serde::{Deserialize, Serialize};

use crate::{escape::encode_non_ascii, fragment::GroupId};

/// Criteria for a transaction-object query. Empty lists are omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchValues {
    /// Bundle hashes to match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bundles: Vec<GroupId>,
    /// Addresses to match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
    /// Tags to match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Approved transaction hashes to match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub approvees: Vec<String>,
}

impl SearchValues {
    /// Search for the fragments of the given bundles.
    #[must_use]
    pub fn bundles(bundles: impl IntoIterator<Item = GroupId>) -> Self {
        Self {
            bundles: bundles.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Search for transactions sent to the given addresses.
    #[must_use]
    pub fn addresses<S: Into<String>>(addresses: impl IntoIterator<Item = S>) -> Self {
        Self {
            addresses: addresses.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// Address security level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SecurityLevel {
    /// Level 1.
    Low,
    /// Level 2.
    #[default]
    Medium,
    /// Level 3.
    High,
}

impl From<SecurityLevel> for u8 {
    fn from(value: SecurityLevel) -> Self {
        match value {
            SecurityLevel::Low => 1,
            SecurityLevel::Medium => 2,
            SecurityLevel::High => 3,
        }
    }
}

impl TryFrom<u8> for SecurityLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            other => Err(format!("unsupported security level {other}")),
        }
    }
}

/// Options for address generation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressOptions {
    /// Key index to start from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,
    /// Whether to append the address checksum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<bool>,
    /// Number of addresses to generate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Address security level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityLevel>,
    /// Whether to return every address up to the first unused one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_all: Option<bool>,
}

/// Result of address generation: one address or several.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Addresses {
    /// A single address.
    Single(String),
    /// Several addresses.
    Many(Vec<String>),
}

impl Addresses {
    /// Flatten into a list of addresses.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Single(address) => vec![address],
            Self::Many(addresses) => addresses,
        }
    }
}

/// One outgoing transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Destination address.
    pub address: String,
    /// Value to move.
    pub value: u64,
    /// Escaped message text, split into fragments by the ledger client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Transfer tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Transfer {
    /// Create a transfer without a message.
    #[must_use]
    pub fn new(address: impl Into<String>, value: u64) -> Self {
        Self {
            address: address.into(),
            value,
            message: None,
            tag: None,
        }
    }

    /// Attach `message`, escaping non-ASCII characters for transport.
    ///
    /// An empty message leaves the transfer without one.
    #[must_use]
    pub fn with_message(self, message: &str) -> Self {
        Self {
            message: encode_non_ascii(message),
            ..self
        }
    }

    /// Attach `value` serialised as a JSON message.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] raised while serialising `value`.
    pub fn with_json_message<T: Serialize + ?Sized>(
        self,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        let json = serde_json::to_string(value)?;
        Ok(self.with_message(&json))
    }

    /// Attach a tag.
    #[must_use]
    pub fn with_tag(self, tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..self
        }
    }
}

/// Options for transfer submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOptions {
    /// Address receiving any remainder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remainder_address: Option<String>,
    /// Security level of the input addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityLevel>,
}
