//! One-slot confirmation rendezvous.
//!
//! Bridges a UI "confirm" button into a suspended narrative phase. At most
//! one waiter is outstanding at a time; a confirm delivered with no waiter
//! is dropped, not buffered.

use std::sync::{Mutex, PoisonError};

use tokio::sync::oneshot;

/// A single-producer, single-consumer, one-shot handoff.
///
/// Each `wait` installs a fresh sender in the slot; `confirm` takes and
/// fires it. A `wait` that is still pending when a newer `wait` arrives is
/// resumed as well, since replacing the slot drops its sender.
#[derive(Debug, Default)]
pub struct ConfirmationGate {
    slot: Mutex<Option<oneshot::Sender<()>>>,
}

impl ConfirmationGate {
    /// Creates an empty gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspends until the next `confirm` call.
    pub async fn wait(&self) {
        let (tx, rx) = oneshot::channel();
        {
            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            *slot = Some(tx);
        }
        // Resolves on confirm, or on being replaced by a newer wait.
        let _ = rx.await;
    }

    /// Delivers a confirm to the outstanding waiter, if any.
    pub fn confirm(&self) {
        let sender = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match sender {
            Some(tx) => {
                let _ = tx.send(());
            }
            None => tracing::debug!("confirm with no outstanding waiter; dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_confirm_resolves_the_single_waiter() {
        // Arrange
        let gate = Arc::new(ConfirmationGate::new());
        let waiter = tokio::spawn({
            let gate = Arc::clone(&gate);
            async move { gate.wait().await }
        });
        tokio::task::yield_now().await;

        // Act
        gate.confirm();

        // Assert
        waiter.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirm_without_waiter_is_dropped_not_buffered() {
        // Arrange
        let gate = Arc::new(ConfirmationGate::new());

        // Act — confirm before anyone waits.
        gate.confirm();

        // Assert — a later wait is not satisfied by the earlier confirm.
        let gate_for_wait = Arc::clone(&gate);
        tokio::select! {
            () = gate_for_wait.wait() => panic!("wait resolved from a buffered confirm"),
            () = tokio::time::sleep(Duration::from_secs(10)) => {}
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_confirm_has_no_effect() {
        // Arrange
        let gate = Arc::new(ConfirmationGate::new());
        let waiter = tokio::spawn({
            let gate = Arc::clone(&gate);
            async move { gate.wait().await }
        });
        tokio::task::yield_now().await;
        gate.confirm();
        waiter.await.unwrap();

        // Act — a second confirm with no new waiter.
        gate.confirm();

        // Assert — the next wait still blocks until its own confirm.
        let gate_for_wait = Arc::clone(&gate);
        tokio::select! {
            () = gate_for_wait.wait() => panic!("wait resolved from a stale confirm"),
            () = tokio::time::sleep(Duration::from_secs(10)) => {}
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_wait_replaces_a_stale_waiter() {
        // Arrange
        let gate = Arc::new(ConfirmationGate::new());
        let first = tokio::spawn({
            let gate = Arc::clone(&gate);
            async move { gate.wait().await }
        });
        tokio::task::yield_now().await;
        let second = tokio::spawn({
            let gate = Arc::clone(&gate);
            async move { gate.wait().await }
        });
        tokio::task::yield_now().await;

        // Act — the replaced waiter resumes; the confirm wakes the newer one.
        first.await.unwrap();
        gate.confirm();

        // Assert
        second.await.unwrap();
    }
}
