use crate::{ServerKey, ServerRecord, ValidatedRelay};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Group relays into logical servers keyed by [`ServerKey`].
///
/// Addresses accumulate as-is, duplicates included. The map carries no
/// ordering; [`finalize`](super::finalize) imposes one.
#[must_use]
pub fn aggregate_relays(relays: Vec<ValidatedRelay>) -> HashMap<ServerKey, ServerRecord> {
    let mut servers: HashMap<ServerKey, ServerRecord> = HashMap::new();

    for relay in relays {
        match servers.entry(relay.key()) {
            Entry::Occupied(mut entry) => entry.get_mut().push(&relay),
            Entry::Vacant(entry) => {
                entry.insert(ServerRecord::from_relay(&relay));
            }
        }
    }

    servers
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn relay(city: &str, provider: &str, last_octet: u8) -> ValidatedRelay {
        ValidatedRelay {
            country: "Japan".to_string(),
            city: city.to_string(),
            owned: false,
            provider: provider.to_string(),
            ipv4: Ipv4Addr::new(198, 51, 100, last_octet),
            ipv6: Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, u16::from(last_octet)),
        }
    }

    #[test]
    fn relays_with_equal_keys_merge() {
        let servers = aggregate_relays(vec![
            relay("Tokyo", "xTom", 1),
            relay("Tokyo", "xTom", 2),
            relay("Osaka", "xTom", 3),
        ]);

        assert_eq!(servers.len(), 2);
        let tokyo = &servers[&relay("Tokyo", "xTom", 0).key()];
        assert_eq!(
            tokyo.ipv4,
            vec![Ipv4Addr::new(198, 51, 100, 1), Ipv4Addr::new(198, 51, 100, 2)]
        );
        assert_eq!(tokyo.ipv6.len(), 2);
    }

    #[test]
    fn duplicates_accumulate_until_finalized() {
        let servers = aggregate_relays(vec![relay("Tokyo", "xTom", 1), relay("Tokyo", "xTom", 1)]);
        let tokyo = servers.values().next().unwrap();
        assert_eq!(tokyo.ipv4.len(), 2);
    }

    #[test]
    fn key_uses_raw_city_but_record_strips_commas() {
        let servers = aggregate_relays(vec![
            relay("Tokyo, Minato", "xTom", 1),
            relay("Tokyo Minato", "xTom", 2),
        ]);

        assert_eq!(servers.len(), 2);
        assert!(servers.values().all(|s| s.city == "Tokyo Minato"));
    }
}
