//! HTTP fetcher for VPN provider relay inventories.
//!
//! This crate provides [`RelayClient`], which retrieves the raw inventory
//! document, and the [`Fetcher`] trait callers depend on so the transport
//! can be swapped out.

#![doc(html_root_url = "https://docs.rs/relaymap-client/0.1.0")]

mod cancel;
mod client;
mod fetcher;

pub use cancel::{deadline, never, Cancellation};
pub use client::{RelayClient, RelayClientBuilder, DEFAULT_RELAYS_URL};
pub use fetcher::{FetchResponse, Fetcher};
pub use relaymap_core::{Error, Result};
