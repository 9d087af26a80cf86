use super::ValidatedRelay;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

/// A logical server: every relay sharing a [`ServerKey`](super::ServerKey)
/// merged into one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    /// Full country name
    pub country: String,

    /// City name with commas removed
    pub city: String,

    /// Hosting provider / ISP
    pub isp: String,

    /// Whether the provider owns the hardware
    pub owned: bool,

    /// IPv4 entry addresses, unique and ascending once finalized
    #[serde(default)]
    pub ipv4: Vec<Ipv4Addr>,

    /// IPv6 entry addresses, unique and ascending once finalized
    #[serde(default)]
    pub ipv6: Vec<Ipv6Addr>,
}

impl ServerRecord {
    /// Seed a record from the first relay seen for its key
    #[must_use]
    pub fn from_relay(relay: &ValidatedRelay) -> Self {
        Self {
            country: relay.country.clone(),
            city: strip_commas(&relay.city),
            isp: relay.provider.clone(),
            owned: relay.owned,
            ipv4: vec![relay.ipv4],
            ipv6: vec![relay.ipv6],
        }
    }

    /// Append the addresses of another relay sharing this record's key.
    ///
    /// Duplicates are kept until [`finalize`](Self::finalize).
    pub fn push(&mut self, relay: &ValidatedRelay) {
        self.ipv4.push(relay.ipv4);
        self.ipv6.push(relay.ipv6);
    }

    /// Sort both address lists and drop repeated addresses
    pub fn finalize(&mut self) {
        self.ipv4.sort_unstable();
        self.ipv4.dedup();
        self.ipv6.sort_unstable();
        self.ipv6.dedup();
    }

    /// Concatenation of country, city and ISP used to order records
    #[must_use]
    pub fn sort_key(&self) -> String {
        let mut key = String::with_capacity(self.country.len() + self.city.len() + self.isp.len());
        key.push_str(&self.country);
        key.push_str(&self.city);
        key.push_str(&self.isp);
        key
    }

    /// Total number of entry addresses across both families
    #[must_use]
    pub fn address_count(&self) -> usize {
        self.ipv4.len() + self.ipv6.len()
    }
}

impl std::fmt::Display for ServerRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{country: {:?}, city: {:?}, isp: {:?}, owned: {}, ipv4: [{}], ipv6: [{}]}}",
            self.country,
            self.city,
            self.isp,
            self.owned,
            join_addrs(&self.ipv4),
            join_addrs(&self.ipv6),
        )
    }
}

fn join_addrs<T: std::fmt::Display>(addrs: &[T]) -> String {
    addrs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Commas in city names break downstream comma-separated formats
fn strip_commas(city: &str) -> String {
    city.replace(',', "")
}
