//! relaymap - refresh VPN server lists from provider relay inventories.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    relaymap_cli::run().await
}
