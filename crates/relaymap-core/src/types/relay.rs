use serde::Deserialize;
use std::net::{Ipv4Addr, Ipv6Addr};

/// A relay exactly as it appears in the provider's inventory document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRelay {
    /// Full country name
    #[serde(rename = "country_name")]
    pub country: String,

    /// City name, possibly containing commas
    #[serde(rename = "city_name")]
    pub city: String,

    /// Whether the relay is currently in service
    pub active: bool,

    /// Whether the provider owns the hardware
    pub owned: bool,

    /// Hosting provider / ISP
    pub provider: String,

    /// IPv4 entry address, unparsed
    #[serde(rename = "ipv4_addr_in")]
    pub ipv4: String,

    /// IPv6 entry address, unparsed
    #[serde(rename = "ipv6_addr_in")]
    pub ipv6: String,
}

/// An active relay whose addresses were confirmed to belong to the right family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRelay {
    /// Full country name
    pub country: String,
    /// City name, possibly containing commas
    pub city: String,
    /// Whether the provider owns the hardware
    pub owned: bool,
    /// Hosting provider / ISP
    pub provider: String,
    /// IPv4 entry address
    pub ipv4: Ipv4Addr,
    /// IPv6 entry address, never v4-mapped
    pub ipv6: Ipv6Addr,
}

impl ValidatedRelay {
    /// Identity of the logical server this relay belongs to
    #[must_use]
    pub fn key(&self) -> ServerKey {
        ServerKey {
            country: self.country.clone(),
            city: self.city.clone(),
            owned: self.owned,
            provider: self.provider.clone(),
        }
    }
}

/// Identity of a logical server.
///
/// Fields are compared exactly; no case folding or trimming is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServerKey {
    /// Full country name
    pub country: String,
    /// City name as found in the document
    pub city: String,
    /// Whether the provider owns the hardware
    pub owned: bool,
    /// Hosting provider / ISP
    pub provider: String,
}
