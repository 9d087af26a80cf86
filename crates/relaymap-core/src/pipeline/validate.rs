use crate::{AddressField, Error, RawRelay, Result, ValidatedRelay};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use tracing::{trace, warn};

/// Drop inactive relays and check the address family of the rest.
///
/// The first bad address aborts the whole run: a document with one
/// malformed entry is not trusted for any of its entries.
pub fn validate(relays: Vec<RawRelay>) -> Result<Vec<ValidatedRelay>> {
    let mut validated = Vec::with_capacity(relays.len());

    for (index, relay) in relays.into_iter().enumerate() {
        if !relay.active {
            trace!(index, country = %relay.country, city = %relay.city, "skipping inactive relay");
            continue;
        }

        let ipv4 = parse_ipv4(&relay.ipv4).ok_or_else(|| invalid(index, AddressField::Ipv4, &relay.ipv4))?;
        let ipv6 = parse_ipv6(&relay.ipv6).ok_or_else(|| invalid(index, AddressField::Ipv6, &relay.ipv6))?;

        validated.push(ValidatedRelay {
            country: relay.country,
            city: relay.city,
            owned: relay.owned,
            provider: relay.provider,
            ipv4,
            ipv6,
        });
    }

    Ok(validated)
}

/// Accepts any literal that denotes a 4-byte address, including the
/// `::ffff:a.b.c.d` mapped form.
fn parse_ipv4(literal: &str) -> Option<Ipv4Addr> {
    match literal.parse::<IpAddr>().ok()? {
        IpAddr::V4(addr) => Some(addr),
        IpAddr::V6(addr) => addr.to_ipv4_mapped(),
    }
}

/// Accepts only addresses with no 4-byte form.
fn parse_ipv6(literal: &str) -> Option<Ipv6Addr> {
    match literal.parse::<IpAddr>().ok()? {
        IpAddr::V6(addr) if addr.to_ipv4_mapped().is_none() => Some(addr),
        _ => None,
    }
}

fn invalid(index: usize, field: AddressField, value: &str) -> Error {
    warn!(index, %field, value, "rejecting relay inventory");
    Error::Validation {
        index,
        field,
        value: value.to_string(),
    }
}
