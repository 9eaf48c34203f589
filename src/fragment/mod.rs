//! Fragment primitives for ledger-borne logical messages.
//!
//! This module collects the domain types describing a fragment record and
//! the outbound [`Fragmenter`] that produces them. Each sub-module focuses on
//! a single concept to keep the code small and easy to audit while still
//! providing a cohesive API at the crate root.

pub mod error;
pub mod fragmenter;
pub mod id;
pub mod index;
pub mod record;

pub use error::FragmentationError;
pub use fragmenter::{FragmentBatch, Fragmenter};
pub use id::{AttemptTimestamp, GroupId};
pub use index::FragmentIndex;
pub use record::FragmentRecord;
