use chrono::{DateTime, Utc};
use relaymap_core::ServerRecord;
use serde::{Deserialize, Serialize};

/// A server list together with the moment it was captured
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSnapshot {
    /// Capture time, Unix seconds (UTC)
    pub timestamp: i64,

    /// Aggregated servers in their canonical order
    #[serde(default)]
    pub servers: Vec<ServerRecord>,
}

impl ServerSnapshot {
    /// Stamp a server list with the given capture time
    #[must_use]
    pub fn new(servers: Vec<ServerRecord>, captured_at: DateTime<Utc>) -> Self {
        Self {
            timestamp: captured_at.timestamp(),
            servers,
        }
    }

    /// Capture time as a date, if the timestamp is in range
    #[must_use]
    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }

    /// Servers located in `country`, compared exactly
    pub fn in_country<'a>(&'a self, country: &'a str) -> impl Iterator<Item = &'a ServerRecord> + 'a {
        self.servers.iter().filter(move |s| s.country == country)
    }

    /// Total number of entry addresses across all servers
    #[must_use]
    pub fn address_count(&self) -> usize {
        self.servers.iter().map(ServerRecord::address_count).sum()
    }
}
