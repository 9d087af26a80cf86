//! Core types and the aggregation pipeline for VPN relay inventories.
//!
//! A provider publishes one record per physical relay. This crate turns
//! that inventory into one [`ServerRecord`] per logical server:
//!
//! - **Types**: the raw and validated relay records, the [`ServerKey`]
//!   identity and the finished [`ServerRecord`]
//! - **Pipeline**: decode, validate, aggregate and finalize, wired together
//!   by [`aggregate`]
//! - **Errors**: every failure mode in a single [`Error`]
//!
//! # Example
//!
//! ```rust
//! let doc = br#"[
//!     {"country_name": "US", "city_name": "New York", "active": true,
//!      "owned": false, "provider": "Acme",
//!      "ipv4_addr_in": "1.2.3.4", "ipv6_addr_in": "2001:db8::1"}
//! ]"#;
//!
//! let servers = relaymap_core::aggregate(doc).unwrap();
//! assert_eq!(servers.len(), 1);
//! assert_eq!(servers[0].isp, "Acme");
//! ```

#![doc(html_root_url = "https://docs.rs/relaymap-core/0.1.0")]

mod error;
pub mod pipeline;
pub mod types;

pub use error::{AddressField, Error, Result};
pub use pipeline::{aggregate, Stage};
pub use types::*;
