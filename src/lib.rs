#![doc(html_root_url = "https://docs.rs/bundleframe/latest")]
//! Public API for the `bundleframe` library.
//!
//! This crate reconstructs structured payloads that a ledger carries split
//! across fragment records, resolving reattached duplicates, and provides the
//! non-ASCII escape codec used to keep payloads within the ledger's character
//! set.

pub mod escape;
pub mod extract;
pub mod fragment;
pub mod ledger;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use escape::{decode_non_ascii, encode_non_ascii};
pub use extract::{
    Attempt,
    AttemptError,
    BundleExtractor,
    ExtractionConfig,
    ExtractionError,
    LogicalMessage,
    ValidationMode,
    extract_bundles,
    extract_logical_messages,
};
pub use fragment::{
    AttemptTimestamp,
    FragmentBatch,
    FragmentIndex,
    FragmentRecord,
    FragmentationError,
    Fragmenter,
    GroupId,
};
pub use ledger::{AdapterError, AsyncLedger, LedgerApi, LedgerError, completion_future};
