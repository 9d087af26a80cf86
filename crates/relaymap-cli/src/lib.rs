//! # relaymap-cli
//!
//! Command-line interface for refreshing VPN server lists.
//!
//! ## Features
//!
//! - **Update**: fetch a provider's relay inventory and store the aggregated
//!   server list with its capture time
//! - **Offline aggregation**: run the pipeline on an inventory file
//! - **Multiple output formats**: Pretty tables, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod output;
pub mod store;

pub use cli::run;
