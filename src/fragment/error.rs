//! Errors emitted while splitting outbound payloads into fragments.

use thiserror::Error;

/// Errors produced by [`Fragmenter`](crate::fragment::Fragmenter).
#[derive(Debug, Error)]
pub enum FragmentationError {
    /// Serialisation failed before chunking.
    #[error("failed to serialise message: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The payload needs more fragments than a `u32` index can address.
    #[error("payload requires {count} fragments, exceeding the index range")]
    TooManyFragments {
        /// Number of chunks the payload would have produced.
        count: usize,
    },
}
