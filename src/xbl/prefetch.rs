//! Background fetch handle
//!
//! A [`PendingFetch`] runs one future on the Tokio runtime and records its
//! outcome. Callers can [`peek`](PendingFetch::peek) without blocking or
//! [`wait`](PendingFetch::wait) for completion.

use crate::error::{Result, XblError};
use std::future::Future;
use tokio::runtime::Handle;
use tokio::sync::watch;

/// State of a background fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Pending,
    Completed(T),
    Failed(XblError),
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }
}

#[derive(Debug, Clone)]
pub struct PendingFetch<T> {
    state: watch::Receiver<FetchState<T>>,
}

impl<T> PendingFetch<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Start `fetch` on the current Tokio runtime
    ///
    /// Fails with a configuration error when called outside a runtime.
    pub fn spawn<F>(fetch: F) -> Result<Self>
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let handle = Handle::try_current().map_err(|e| {
            XblError::Configuration(format!("Background fetch needs a Tokio runtime: {}", e))
        })?;

        let (tx, rx) = watch::channel(FetchState::Pending);

        handle.spawn(async move {
            let state = match fetch.await {
                Ok(value) => FetchState::Completed(value),
                Err(e) => FetchState::Failed(e),
            };
            // Nobody left to observe the result
            let _ = tx.send(state);
        });

        Ok(Self { state: rx })
    }

    /// Current state, without waiting
    pub fn peek(&self) -> FetchState<T> {
        let state = self.state.borrow().clone();
        if !state.is_pending() || self.state.has_changed().is_ok() {
            return state;
        }

        // Sender closed: either it just sent a result or the task died
        match self.state.borrow().clone() {
            FetchState::Pending => FetchState::Failed(XblError::PrefetchAborted),
            finished => finished,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.peek().is_pending()
    }

    /// Wait for the fetch to finish and return its outcome
    pub async fn wait(&self) -> Result<T> {
        let mut state = self.state.clone();
        let outcome = match state.wait_for(|s| !s.is_pending()).await {
            Ok(finished) => finished.clone(),
            // Sender dropped without a result: the task panicked
            Err(_) => FetchState::Failed(XblError::PrefetchAborted),
        };

        match outcome {
            FetchState::Completed(value) => Ok(value),
            FetchState::Failed(e) => Err(e),
            FetchState::Pending => Err(XblError::PrefetchAborted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_pending_until_fetch_completes() {
        let (release, gate) = oneshot::channel::<()>();
        let fetch = PendingFetch::spawn(async move {
            let _ = gate.await;
            Ok(42u32)
        })
        .unwrap();

        assert_eq!(fetch.peek(), FetchState::Pending);

        release.send(()).unwrap();
        assert_eq!(fetch.wait().await, Ok(42));
        assert_eq!(fetch.peek(), FetchState::Completed(42));
    }

    #[tokio::test]
    async fn test_failure_is_reported_on_every_access() {
        let fetch = PendingFetch::<u32>::spawn(async { Err(XblError::transport(Some(401), "denied")) })
            .unwrap();

        let first = fetch.wait().await.unwrap_err();
        let second = fetch.wait().await.unwrap_err();
        assert_eq!(first.status(), Some(401));
        assert_eq!(first, second);
        assert!(matches!(fetch.peek(), FetchState::Failed(_)));
    }

    #[tokio::test]
    async fn test_panicking_fetch_is_aborted() {
        let fetch = PendingFetch::<u32>::spawn(async {
            if true {
                panic!("boom");
            }
            Ok(0)
        })
        .unwrap();
        assert_eq!(fetch.wait().await, Err(XblError::PrefetchAborted));
        assert_eq!(fetch.peek(), FetchState::Failed(XblError::PrefetchAborted));
        assert!(!fetch.is_pending());
    }

    #[tokio::test]
    async fn test_peek_reports_abort_without_wait() {
        let fetch = PendingFetch::<u32>::spawn(async {
            if true {
                panic!("boom");
            }
            Ok(0)
        })
        .unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        assert_eq!(fetch.peek(), FetchState::Failed(XblError::PrefetchAborted));
    }

    #[test]
    fn test_spawn_outside_runtime_fails() {
        let result = PendingFetch::spawn(async { Ok(1u8) });
        assert!(matches!(result, Err(XblError::Configuration(_))));
    }
}
