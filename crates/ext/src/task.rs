//! Deadline and continuation helpers for futures.
//!
//! Thin wrappers over the tokio primitives: no locking, cancellation
//! plumbing, or retry discipline of their own.

use ratchet_core::{RatchetError, RatchetResult};
use std::future::Future;
use std::time::Duration;

/// Awaits `future`, failing with [`RatchetError::Timeout`] if it does not
/// complete within `deadline`. The future is dropped on timeout.
pub async fn with_timeout<F: Future>(future: F, deadline: Duration) -> RatchetResult<F::Output> {
    match tokio::time::timeout(deadline, future).await {
        Ok(value) => Ok(value),
        Err(_) => {
            tracing::warn!(?deadline, "task did not complete before the deadline");
            Err(RatchetError::Timeout(format!(
                "task did not complete within {deadline:?}"
            )))
        }
    }
}

/// Awaits `future`, then applies `continuation` to its output.
pub async fn then<F: Future, V>(future: F, continuation: impl FnOnce(F::Output) -> V) -> V {
    continuation(future.await)
}
