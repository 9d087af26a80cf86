//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use relaymap::ServerRecord;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;
use tabled::{settings::Style, Table, Tabled};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed tables with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

#[derive(Tabled)]
struct ServerRow {
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "ISP")]
    isp: String,
    #[tabled(rename = "Owned")]
    owned: &'static str,
    #[tabled(rename = "IPv4")]
    ipv4: String,
    #[tabled(rename = "IPv6")]
    ipv6: String,
}

impl From<&ServerRecord> for ServerRow {
    fn from(server: &ServerRecord) -> Self {
        Self {
            country: server.country.clone(),
            city: server.city.clone(),
            isp: server.isp.clone(),
            owned: if server.owned { "yes" } else { "no" },
            ipv4: join(&server.ipv4, "\n"),
            ipv6: join(&server.ipv6, "\n"),
        }
    }
}

fn join<T: ToString>(addrs: &[T], sep: &str) -> String {
    addrs.iter().map(ToString::to_string).collect::<Vec<_>>().join(sep)
}

/// Write servers to `out` in the requested format.
pub fn write_servers<W: Write>(out: &mut W, servers: &[ServerRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(servers)?)?;
        }
        OutputFormat::Yaml => {
            write!(out, "{}", serde_yaml::to_string(servers)?)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["country", "city", "isp", "owned", "ipv4", "ipv6"])?;
            for server in servers {
                let ipv4 = join(&server.ipv4, ";");
                let ipv6 = join(&server.ipv6, ";");
                writer.write_record([
                    server.country.as_str(),
                    server.city.as_str(),
                    server.isp.as_str(),
                    if server.owned { "true" } else { "false" },
                    ipv4.as_str(),
                    ipv6.as_str(),
                ])?;
            }
            writer.flush()?;
        }
        OutputFormat::Pretty => {
            if servers.is_empty() {
                writeln!(out, "{}", "No servers.".dimmed())?;
                return Ok(());
            }

            let rows: Vec<ServerRow> = servers.iter().map(ServerRow::from).collect();
            let table = Table::new(&rows).with(Style::rounded()).to_string();
            writeln!(out, "{table}")?;
        }
    }

    Ok(())
}

/// Print servers to stdout in the requested format.
pub fn print_servers(servers: &[ServerRecord], format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_servers(&mut lock, servers, format)
}
