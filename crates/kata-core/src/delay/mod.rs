//! Best-effort pauses for cancellable tasks.
//!
//! A task's cancellation flag is the [`CancellationToken`] it was handed.
//! [`sleep`] ends early when that token fires, logs the interruption and returns normally;
//! the token stays cancelled, so the caller can still observe and act on it.
//! [`pause`] is the strict variant that reports the interruption as [`CoreError::Cancelled`].
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{trace, warn};

use crate::error::CoreError;

/// Wait for `duration` unless `ctx` is cancelled first.
///
/// Returns `Err(CoreError::Cancelled)` when the wait ended because of the token,
/// including when the token was already cancelled on entry.
pub async fn pause(duration: Duration, ctx: &CancellationToken) -> Result<(), CoreError> {
    if ctx.is_cancelled() {
        return Err(CoreError::Cancelled);
    }
    tokio::select! {
        biased;
        _ = ctx.cancelled() => Err(CoreError::Cancelled),
        _ = tokio::time::sleep(duration) => Ok(()),
    }
}

/// Suspend the calling task for `duration_ms` milliseconds.
///
/// Negative durations are rejected with [`CoreError::InvalidArgument`] before any wait.
/// An interruption is not an error here: the wait ends early, one `sleep interrupted`
/// diagnostic is emitted and `Ok(())` is returned. The sleep is not retried.
///
/// The diagnostic is a `WARN` event with target `kata_core::delay`; a subscriber
/// filtering that target above `warn` will not see it. The token is still left cancelled.
pub async fn sleep(duration_ms: i64, ctx: &CancellationToken) -> Result<(), CoreError> {
    let requested_ms = u64::try_from(duration_ms).map_err(|_| {
        CoreError::InvalidArgument(format!(
            "sleep duration must be non-negative, got {duration_ms}ms"
        ))
    })?;

    let started = Instant::now();
    match pause(Duration::from_millis(requested_ms), ctx).await {
        Ok(()) => {
            trace!(target: "kata_core::delay", requested_ms, "sleep completed");
            Ok(())
        }
        Err(CoreError::Cancelled) => {
            let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            warn!(target: "kata_core::delay", requested_ms, elapsed_ms, "sleep interrupted");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
