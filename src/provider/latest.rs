use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};
use tokio::sync::Mutex;

use crate::provider::ProviderError;

/// Identifies one fetch issued through [`LatestOnly`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// The fetch was the most recent one and its value is now the latest.
    Applied(T),
    /// A newer fetch was issued while this one was in flight, the value
    /// was discarded.
    Superseded,
    /// The provider failed; the previous value stays in place.
    Failed(ProviderError),
}

/// Keeps the result of the most recently *issued* fetch.
///
/// When the user changes the period or contract faster than the backend
/// answers, responses can arrive out of order. A response is only
/// applied if no newer fetch was issued since.
#[derive(Debug)]
pub struct LatestOnly<T> {
    issued: AtomicU64,
    latest: Mutex<Option<T>>,
}

impl<T: Clone> LatestOnly<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
            latest: Mutex::new(None),
        }
    }

    /// Marks the start of a new fetch, every older ticket becomes stale.
    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Stores the result of the fetch identified by `ticket`.
    pub async fn apply(
        &self,
        ticket: Ticket,
        result: Result<T, ProviderError>,
    ) -> FetchOutcome<T> {
        let mut latest = self.latest.lock().await;

        // checked while holding the lock, so two applies can not interleave
        if !self.is_current(ticket) {
            debug!("discarding the result of superseded fetch {:?}", ticket);
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(value) => {
                *latest = Some(value.clone());
                FetchOutcome::Applied(value)
            }
            Err(error) => {
                warn!("fetch {:?} failed: {}", ticket, error);
                FetchOutcome::Failed(error)
            }
        }
    }

    /// Issues a ticket, awaits `fetch` and applies its result.
    pub async fn run<F>(&self, fetch: F) -> FetchOutcome<T>
    where
        F: Future<Output = Result<T, ProviderError>>,
    {
        let ticket = self.issue();
        let result = fetch.await;
        self.apply(ticket, result).await
    }

    /// The value of the most recent successful fetch.
    pub async fn latest(&self) -> Option<T> {
        self.latest.lock().await.clone()
    }
}
