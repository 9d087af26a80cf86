use relaymap_core::ServerRecord;

/// Render servers as a bracketed block, one record literal per line.
///
/// The output is stable for a given list, which makes it suitable for
/// pasting into a config file and diffing between refreshes.
#[must_use]
pub fn render_listing(servers: &[ServerRecord]) -> String {
    let body: String = servers.iter().map(|server| format!("    {server},\n")).collect();
    format!("[\n{body}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_line_per_server() {
        let servers = vec![
            ServerRecord {
                country: "Sweden".to_string(),
                city: "Malmo".to_string(),
                isp: "31173".to_string(),
                owned: true,
                ipv4: vec!["193.138.218.1".parse().unwrap()],
                ipv6: vec!["2a03:1b20:1::1".parse().unwrap()],
            },
            ServerRecord {
                country: "US".to_string(),
                city: "Dallas".to_string(),
                isp: "M247".to_string(),
                owned: false,
                ipv4: vec![],
                ipv6: vec![],
            },
        ];

        let listing = render_listing(&servers);

        assert_eq!(
            listing,
            "[\n    {country: \"Sweden\", city: \"Malmo\", isp: \"31173\", owned: true, \
             ipv4: [193.138.218.1], ipv6: [2a03:1b20:1::1]},\n    \
             {country: \"US\", city: \"Dallas\", isp: \"M247\", owned: false, ipv4: [], ipv6: []},\n]"
        );
    }

    #[test]
    fn empty_list_renders_empty_block() {
        assert_eq!(render_listing(&[]), "[\n]");
    }
}
