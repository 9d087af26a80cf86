//! One refresh cycle: fetch the inventory, aggregate it, stamp the result.

use crate::ServerSnapshot;
use chrono::{DateTime, Utc};
use relaymap_client::{Cancellation, Fetcher, DEFAULT_RELAYS_URL};
use relaymap_core::Result;
use tracing::{info, warn};

/// Refreshes a provider's server list on demand.
///
/// The updater holds no server state of its own; every call to
/// [`update`](Self::update) starts from a fresh fetch and returns an
/// independent snapshot. Retries and scheduling are up to the caller.
pub struct Updater<F> {
    fetcher: F,
    url: String,
    clock: fn() -> DateTime<Utc>,
}

impl<F: Fetcher> Updater<F> {
    /// Create an updater for the default inventory URL
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            url: DEFAULT_RELAYS_URL.to_string(),
            clock: Utc::now,
        }
    }

    /// Use a different inventory URL
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Replace the clock used to stamp snapshots
    #[must_use]
    pub fn clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Fetch and aggregate the inventory.
    ///
    /// If `cancel` resolves before the document arrives, nothing is
    /// aggregated and [`Error::Cancelled`](relaymap_core::Error::Cancelled)
    /// is returned.
    pub async fn update(&self, cancel: Cancellation) -> Result<ServerSnapshot> {
        let result = self.run(cancel).await;
        if let Err(e) = &result {
            warn!(url = %self.url, error = %e, "cannot update servers");
        }
        result
    }

    async fn run(&self, cancel: Cancellation) -> Result<ServerSnapshot> {
        let body = self.fetcher.fetch(&self.url, cancel).await?.into_success(&self.url)?;
        let servers = relaymap_core::aggregate(&body)?;
        let snapshot = ServerSnapshot::new(servers, (self.clock)());

        info!(
            url = %self.url,
            servers = snapshot.servers.len(),
            addresses = snapshot.address_count(),
            "updated servers"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use relaymap_client::{never, FetchResponse};
    use relaymap_core::{Error, Stage};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticFetcher {
        status: u16,
        body: &'static str,
        calls: AtomicUsize,
    }

    impl StaticFetcher {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, _url: &str, _cancel: Cancellation) -> Result<FetchResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(FetchResponse {
                status: self.status,
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    struct HangingFetcher;

    #[async_trait]
    impl Fetcher for HangingFetcher {
        async fn fetch(&self, _url: &str, cancel: Cancellation) -> Result<FetchResponse> {
            cancel.await;
            Err(Error::Cancelled)
        }
    }

    const INVENTORY: &str = r#"[
        {"country_name":"US","city_name":"New York","active":true,"owned":false,
         "provider":"Acme","ipv4_addr_in":"1.2.3.5","ipv6_addr_in":"2001:db8::2"},
        {"country_name":"US","city_name":"New York","active":true,"owned":false,
         "provider":"Acme","ipv4_addr_in":"1.2.3.4","ipv6_addr_in":"2001:db8::1"}
    ]"#;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()
    }

    #[tokio::test]
    async fn update_stamps_aggregated_servers() {
        let updater = Updater::new(StaticFetcher::new(200, INVENTORY)).clock(fixed_clock);

        let snapshot = updater.update(never()).await.unwrap();

        assert_eq!(snapshot.timestamp, fixed_clock().timestamp());
        assert_eq!(snapshot.servers.len(), 1);
        assert_eq!(snapshot.servers[0].ipv4.len(), 2);
    }

    #[tokio::test]
    async fn repeated_updates_are_independent() {
        let updater = Updater::new(StaticFetcher::new(200, INVENTORY)).clock(fixed_clock);

        let first = updater.update(never()).await.unwrap();
        let second = updater.update(never()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(updater.fetcher.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn bad_status_fails_without_aggregating() {
        let updater = Updater::new(StaticFetcher::new(502, INVENTORY));

        let err = updater.update(never()).await.unwrap_err();

        assert_eq!(err.status_code(), Some(502));
        assert_eq!(updater.fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalid_document_fails_whole_update() {
        let updater = Updater::new(StaticFetcher::new(
            200,
            r#"[{"country_name":"US","city_name":"A","active":true,"owned":false,
                 "provider":"P","ipv4_addr_in":"1.2.3.4","ipv6_addr_in":"::ffff:1.2.3.4"}]"#,
        ));

        let err = updater.update(never()).await.unwrap_err();

        assert_eq!(err.stage(), Some(Stage::Validating));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_fetch_never_aggregates() {
        let updater = Updater::new(HangingFetcher);
        let cancel = relaymap_client::deadline(
            tokio::time::Instant::now() + std::time::Duration::from_secs(10),
        );

        let err = updater.update(cancel).await.unwrap_err();

        assert!(matches!(err, Error::Cancelled));
    }
}
