//! Async access to a completion-style ledger client.
//!
//! [`LedgerApi`] captures the call signatures of the ledger client's
//! operations. Each reports its outcome through a [`Completion`].
//! [`AsyncLedger`] exposes the same operations as futures via the shared
//! [`completion_future`] adapter and adds
//! [`AsyncLedger::find_logical_messages`], which fetches fragments and
//! extracts the logical messages they carry.

pub mod adapter;
pub mod types;

use std::fmt;

use serde::de::DeserializeOwned;

pub use adapter::{AdapterError, Completion, completion_future};
pub use types::{Addresses, AddressOptions, SearchValues, SecurityLevel, Transfer, TransferOptions};

use crate::{
    extract::{BundleExtractor, ExtractionError, LogicalMessage},
    fragment::FragmentRecord,
};

/// Completion-style operations offered by a ledger client.
///
/// Implementations must invoke each completion at most once. Dropping a
/// completion without invoking it is reported as
/// [`AdapterError::Abandoned`].
pub trait LedgerApi {
    /// Error type reported by the client.
    type Error: Send + 'static;

    /// Query transaction objects matching `search`.
    fn find_transaction_objects(
        &self,
        search: &SearchValues,
        done: Completion<Vec<FragmentRecord>, Self::Error>,
    );

    /// Derive a fresh address from `seed`.
    fn get_new_address(
        &self,
        seed: &str,
        options: &AddressOptions,
        done: Completion<Addresses, Self::Error>,
    );

    /// Prepare, attach, and broadcast `transfers`.
    fn send_transfer(
        &self,
        seed: &str,
        depth: u32,
        min_weight_magnitude: u32,
        transfers: &[Transfer],
        options: &TransferOptions,
        done: Completion<Vec<FragmentRecord>, Self::Error>,
    );
}

/// Errors produced by [`AsyncLedger::find_logical_messages`].
#[derive(Debug)]
pub enum LedgerError<E> {
    /// Fetching fragments failed.
    Fetch(AdapterError<E>),
    /// Fragments were fetched but could not be reassembled.
    Extraction(ExtractionError),
}

impl<E> From<AdapterError<E>> for LedgerError<E> {
    fn from(error: AdapterError<E>) -> Self { Self::Fetch(error) }
}

impl<E> From<ExtractionError> for LedgerError<E> {
    fn from(error: ExtractionError) -> Self { Self::Extraction(error) }
}

impl<E: fmt::Debug> fmt::Display for LedgerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(error) => write!(f, "failed to fetch fragments: {error}"),
            Self::Extraction(error) => write!(f, "{error}"),
        }
    }
}

impl<E> std::error::Error for LedgerError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(error) => Some(error),
            Self::Extraction(error) => Some(error),
        }
    }
}

/// Future-returning wrapper around a [`LedgerApi`] client.
#[derive(Clone, Debug, Default)]
pub struct AsyncLedger<C> {
    client: C,
    extractor: BundleExtractor,
}

impl<C: LedgerApi> AsyncLedger<C> {
    /// Wrap `client`, extracting with the default configuration.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            extractor: BundleExtractor::default(),
        }
    }

    /// Wrap `client`, extracting with `extractor`.
    #[must_use]
    pub const fn with_extractor(client: C, extractor: BundleExtractor) -> Self {
        Self { client, extractor }
    }

    /// Borrow the wrapped client.
    #[must_use]
    pub const fn client(&self) -> &C { &self.client }

    /// Query transaction objects matching `search`.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Rejected`] with the client's error, or
    /// [`AdapterError::Abandoned`] if the client never reports back.
    pub async fn find_transaction_objects(
        &self,
        search: &SearchValues,
    ) -> Result<Vec<FragmentRecord>, AdapterError<C::Error>> {
        completion_future(|done| self.client.find_transaction_objects(search, done)).await
    }

    /// Derive a fresh address from `seed`.
    ///
    /// # Errors
    ///
    /// See [`AsyncLedger::find_transaction_objects`].
    pub async fn get_new_address(
        &self,
        seed: &str,
        options: &AddressOptions,
    ) -> Result<Addresses, AdapterError<C::Error>> {
        completion_future(|done| self.client.get_new_address(seed, options, done)).await
    }

    /// Prepare, attach, and broadcast `transfers`.
    ///
    /// Absent options are sent as [`TransferOptions::default`].
    ///
    /// # Errors
    ///
    /// See [`AsyncLedger::find_transaction_objects`].
    pub async fn send_transfer(
        &self,
        seed: &str,
        depth: u32,
        min_weight_magnitude: u32,
        transfers: &[Transfer],
        options: Option<&TransferOptions>,
    ) -> Result<Vec<FragmentRecord>, AdapterError<C::Error>> {
        let defaults = TransferOptions::default();
        let options = options.unwrap_or(&defaults);
        completion_future(|done| {
            self.client.send_transfer(
                seed,
                depth,
                min_weight_magnitude,
                transfers,
                options,
                done,
            );
        })
        .await
    }

    /// Fetch fragments matching `search` and extract their logical messages.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Fetch`] when the query fails and
    /// [`LedgerError::Extraction`] when the fragments cannot be reassembled.
    pub async fn find_logical_messages<T: DeserializeOwned>(
        &self,
        search: &SearchValues,
    ) -> Result<Vec<LogicalMessage<T>>, LedgerError<C::Error>> {
        let records = self.find_transaction_objects(search).await?;
        Ok(self.extractor.extract(&records)?)
    }
}
