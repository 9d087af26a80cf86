use crate::{ServerKey, ServerRecord};
use std::collections::HashMap;

/// Dedup and sort every record's addresses, then order the records by
/// country, city and ISP.
///
/// Records are first laid out in [`ServerKey`] order so that the stable
/// sort below is deterministic even when two records concatenate to the
/// same country + city + ISP string.
#[must_use]
pub fn finalize(servers: HashMap<ServerKey, ServerRecord>) -> Vec<ServerRecord> {
    let mut entries: Vec<(ServerKey, ServerRecord)> = servers.into_iter().collect();
    entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    let mut records: Vec<ServerRecord> = entries
        .into_iter()
        .map(|(_, mut record)| {
            record.finalize();
            record
        })
        .collect();

    records.sort_by_cached_key(ServerRecord::sort_key);
    records
}
