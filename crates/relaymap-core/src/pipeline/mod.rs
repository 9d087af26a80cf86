//! The aggregation pipeline.
//!
//! Data flows strictly forward through four stages:
//!
//! 1. [`decode`] parses the inventory document into [`RawRelay`]s
//! 2. [`validate`] drops inactive relays and checks address families
//! 3. [`aggregate_relays`] groups relays by [`ServerKey`]
//! 4. [`finalize`] dedups, sorts and orders the result
//!
//! Only the first two stages can fail. Any failure aborts the run and no
//! records are returned.
//!
//! [`RawRelay`]: crate::RawRelay
//! [`ServerKey`]: crate::ServerKey

mod aggregate;
mod decode;
mod finalize;
mod validate;

pub use aggregate::aggregate_relays;
pub use decode::decode;
pub use finalize::finalize;
pub use validate::validate;

use crate::{Result, ServerRecord};
use tracing::debug;

/// Stage of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Parsing the inventory document
    Decoding,
    /// Filtering inactive relays and checking addresses
    Validating,
    /// Grouping relays into logical servers
    Aggregating,
    /// Deduplicating and ordering the result
    Finalizing,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decoding => write!(f, "decoding"),
            Self::Validating => write!(f, "validating"),
            Self::Aggregating => write!(f, "aggregating"),
            Self::Finalizing => write!(f, "finalizing"),
        }
    }
}

/// Turn a raw relay inventory into a sorted list of logical servers.
///
/// Each call is independent: no state is kept between invocations, and
/// byte-identical documents always produce identical output.
pub fn aggregate(bytes: &[u8]) -> Result<Vec<ServerRecord>> {
    let raw = decode(bytes)?;
    debug!(stage = %Stage::Decoding, relays = raw.len(), "decoded inventory");

    let validated = validate(raw)?;
    debug!(stage = %Stage::Validating, active = validated.len(), "validated relays");

    let grouped = aggregate_relays(validated);
    debug!(stage = %Stage::Aggregating, servers = grouped.len(), "grouped relays");

    let servers = finalize(grouped);
    debug!(stage = %Stage::Finalizing, servers = servers.len(), "finalized servers");

    Ok(servers)
}
