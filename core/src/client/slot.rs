//! At most one live execution per slot.

use crate::error::{AppError, AppResult};
use futures::future::{abortable, AbortHandle, Aborted};
use parking_lot::Mutex;
use std::future::Future;
use tracing::debug;

/// Runs futures so that starting a new one cancels the previous one.
///
/// A superseded run resolves to `AppError::Cancelled`.
#[derive(Debug, Default)]
pub struct ExecutionSlot {
    current: Mutex<Option<AbortHandle>>,
}

impl ExecutionSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `future`, superseding whatever this slot was running.
    pub async fn run<F, T>(&self, future: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        let (future, handle) = abortable(future);
        if let Some(previous) = self.current.lock().replace(handle) {
            debug!("Superseding in-flight request");
            previous.abort();
        }
        match future.await {
            Ok(result) => result,
            Err(Aborted) => Err(AppError::Cancelled),
        }
    }

    /// Cancels the current run, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.current.lock().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_newer_run_supersedes() {
        let slot = ExecutionSlot::new();
        let slow = slot.run(async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok::<_, AppError>(1)
        });
        let fast = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            slot.run(async { Ok::<_, AppError>(2) }).await
        };
        let (first, second) = tokio::join!(slow, fast);
        assert!(matches!(first, Err(AppError::Cancelled)));
        assert_eq!(second.unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let slot = ExecutionSlot::new();
        let run = slot.run(async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok::<_, AppError>(())
        });
        let cancel = async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            slot.cancel();
        };
        let (result, ()) = tokio::join!(run, cancel);
        assert!(matches!(result, Err(AppError::Cancelled)));
    }

    #[tokio::test]
    async fn test_sequential_runs_complete() {
        let slot = ExecutionSlot::new();
        assert_eq!(slot.run(async { Ok::<_, AppError>(1) }).await.unwrap(), 1);
        assert_eq!(slot.run(async { Ok::<_, AppError>(2) }).await.unwrap(), 2);
    }
}
