//! The transport boundary of the updater.

use crate::Cancellation;
use async_trait::async_trait;
use relaymap_core::{Error, Result};

/// Raw result of a fetch: status code and body, whatever the status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// Returns true for 2xx status codes
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Return the body, or [`Error::Status`] if the server did not succeed
    pub fn into_success(self, url: &str) -> Result<Vec<u8>> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(Error::Status {
                code: self.status,
                url: url.to_string(),
            })
        }
    }
}

/// Retrieves a document by URL.
///
/// Implementations must give up with [`Error::Cancelled`] as soon as
/// `cancel` resolves, and must not retry.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url`, returning the status and body
    async fn fetch(&self, url: &str, cancel: Cancellation) -> Result<FetchResponse>;
}
