//! One-shot adapter from completion callbacks to futures.
//!
//! Ledger clients report results by invoking a completion exactly once.
//! [`completion_future`] hands such an operation a [`Completion`] backed by a
//! one-shot channel and returns a future that resolves with whatever the
//! operation reported.

use std::{fmt, future::Future};

use log::{debug, warn};
use tokio::sync::oneshot;

/// Callback through which a ledger operation reports its outcome.
pub type Completion<T, E> = Box<dyn FnOnce(Result<T, E>) + Send + 'static>;

/// Errors surfaced by a future created with [`completion_future`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdapterError<E> {
    /// The operation reported this error through its completion.
    Rejected(E),
    /// The completion was dropped without being invoked.
    Abandoned,
}

impl<E> AdapterError<E> {
    /// Return the operation's own error, if it reported one.
    #[must_use]
    pub fn into_rejection(self) -> Option<E> {
        match self {
            Self::Rejected(err) => Some(err),
            Self::Abandoned => None,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for AdapterError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(error) => write!(f, "ledger operation failed: {error:?}"),
            Self::Abandoned => f.write_str(
                "ledger operation dropped its completion without reporting a result",
            ),
        }
    }
}

impl<E> std::error::Error for AdapterError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected(error) => Some(error),
            Self::Abandoned => None,
        }
    }
}

/// Start a completion-style operation and await its outcome.
///
/// `start` runs immediately, before the returned future is first polled.
/// The future resolves with the value passed to the completion, or rejects
/// with the exact error value passed to it.
///
/// # Examples
///
/// ```
/// use bundleframe::ledger::{AdapterError, completion_future};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let ok = completion_future(|done| done(Ok::<_, String>(7))).await;
/// assert_eq!(ok, Ok(7));
///
/// let err = completion_future(|done| done(Err::<u8, _>("offline".to_owned()))).await;
/// assert_eq!(err, Err(AdapterError::Rejected("offline".to_owned())));
/// # }
/// ```
pub fn completion_future<T, E, F>(start: F) -> impl Future<Output = Result<T, AdapterError<E>>>
where
    T: Send + 'static,
    E: Send + 'static,
    F: FnOnce(Completion<T, E>),
{
    let (tx, rx) = oneshot::channel();
    start(Box::new(move |outcome| {
        if tx.send(outcome).is_err() {
            debug!("completion invoked after its future was dropped");
        }
    }));

    async move {
        match rx.await {
            Ok(outcome) => outcome.map_err(AdapterError::Rejected),
            Err(_) => {
                warn!("ledger operation abandoned its completion");
                Err(AdapterError::Abandoned)
            }
        }
    }
}
