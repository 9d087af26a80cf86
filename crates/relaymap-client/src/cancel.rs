//! Cancellation signals for in-flight fetches.

use std::future::Future;
use std::pin::Pin;
use tokio::time::Instant;

/// A future that resolves when the caller wants the fetch abandoned
pub type Cancellation = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// A cancellation that never fires
#[must_use]
pub fn never() -> Cancellation {
    Box::pin(std::future::pending())
}

/// A cancellation that fires once `at` is reached
#[must_use]
pub fn deadline(at: Instant) -> Cancellation {
    Box::pin(tokio::time::sleep_until(at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn deadline_fires_after_instant() {
        let start = Instant::now();
        deadline(start + Duration::from_secs(5)).await;
        assert!(start.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn never_does_not_fire() {
        let fired = tokio::time::timeout(Duration::from_secs(60), never()).await;
        assert!(fired.is_err());
    }
}
