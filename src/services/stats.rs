//! Repository size extraction from the stats subcommand

use crate::Result;
use crate::services::format::format_bytes;
use crate::services::null_as_default;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StatsContainer {
    #[serde(deserialize_with = "null_as_default")]
    pub total_size: u64,
}

/// Decode the stats output and return the humanized total size.
pub fn extract_stats_info(output: &[u8]) -> Result<String> {
    let stats: StatsContainer = serde_json::from_slice(output)?;
    Ok(format_bytes(stats.total_size))
}
