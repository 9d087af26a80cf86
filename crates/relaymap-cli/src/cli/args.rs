//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Refresh VPN server lists from provider relay inventories
///
/// Fetches the provider's list of physical relays, merges relays that
/// belong to the same logical server and stores the sorted result.
#[derive(Parser, Debug)]
#[command(name = "relaymap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Path of the server store (or set RELAYMAP_STORE env var)
    #[arg(long, env = "RELAYMAP_STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the relay inventory and store the aggregated servers
    Update(UpdateArgs),

    /// Aggregate an inventory document from a file or stdin
    Aggregate(AggregateArgs),

    /// Show the stored servers
    Show(ShowArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Update command
// ============================================================================

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Inventory URL (or set RELAYMAP_URL env var)
    #[arg(long, env = "RELAYMAP_URL")]
    pub url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Print the server listing instead of a summary
    #[arg(long)]
    pub stdout: bool,

    /// Do not write the result to the store
    #[arg(long)]
    pub no_store: bool,
}

// ============================================================================
// Aggregate command
// ============================================================================

#[derive(Args, Debug)]
pub struct AggregateArgs {
    /// Inventory file, or "-" for stdin
    pub input: PathBuf,
}

// ============================================================================
// Show command
// ============================================================================

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Only show servers in this country (exact match)
    #[arg(short, long)]
    pub country: Option<String>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (relays_url, timeout_secs, store_path, output_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show configuration file path
    Path,
}
