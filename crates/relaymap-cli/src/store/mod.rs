//! Persisted server snapshots.
//!
//! The store is a single JSON file holding the most recent
//! [`ServerSnapshot`]. Writes go to a sibling temporary file first and are
//! renamed into place, so a reader never sees a half-written store.

use anyhow::{Context as _, Result};
use relaymap::ServerSnapshot;
use std::path::Path;
use tracing::debug;

/// Read the snapshot at `path`.
pub fn load(path: &Path) -> Result<ServerSnapshot> {
    let content = std::fs::read(path)
        .with_context(|| format!("cannot read server store {}", path.display()))?;
    let snapshot = serde_json::from_slice(&content)
        .with_context(|| format!("server store {} is corrupt", path.display()))?;
    Ok(snapshot)
}

/// Replace the snapshot at `path`.
pub fn save(path: &Path, snapshot: &ServerSnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("json.tmp");
    let content = serde_json::to_vec_pretty(snapshot)?;
    let written = std::fs::write(&tmp, content).and_then(|()| std::fs::rename(&tmp, path));
    if let Err(err) = written {
        if let Err(cleanup) = std::fs::remove_file(&tmp) {
            debug!(path = %tmp.display(), error = %cleanup, "cannot remove temporary store");
        }
        return Err(err).with_context(|| format!("cannot write server store {}", path.display()));
    }

    debug!(path = %path.display(), servers = snapshot.servers.len(), "saved snapshot");
    Ok(())
}
