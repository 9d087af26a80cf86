//! Turn VPN provider relay inventories into deduplicated, sorted server lists.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use relaymap::{never, RelayClient, Updater};
//!
//! #[tokio::main]
//! async fn main() -> relaymap::Result<()> {
//!     let updater = Updater::new(RelayClient::new()?);
//!
//!     let snapshot = updater.update(never()).await?;
//!     println!("{} servers at {}", snapshot.servers.len(), snapshot.timestamp);
//!     println!("{}", relaymap::render_listing(&snapshot.servers));
//!
//!     Ok(())
//! }
//! ```
//!
//! For an inventory already on disk, skip the network entirely with
//! [`aggregate`].
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/relaymap/0.1.0")]

mod render;
mod snapshot;
mod updater;

pub use render::render_listing;
pub use snapshot::ServerSnapshot;
pub use updater::Updater;

// Re-export core types
pub use relaymap_core::*;

// Re-export client
pub use relaymap_client::{
    deadline, never, Cancellation, FetchResponse, Fetcher, RelayClient, RelayClientBuilder,
    DEFAULT_RELAYS_URL,
};

// Re-export runtime for convenience
pub use serde_json;
pub use tokio;
