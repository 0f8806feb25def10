//! Retention result aggregation for the forget subcommand

use crate::Result;
use serde::Deserialize;
use serde::de::IgnoredAny;

/// One retention group. Entries are opaque; only the list lengths are used.
///
/// The forget command prints `null` for a list with nothing in it.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ForgetGroup {
    pub keep: Option<Vec<IgnoredAny>>,
    pub remove: Option<Vec<IgnoredAny>>,
}

fn list_len(list: Option<&Vec<IgnoredAny>>) -> i64 {
    list.map_or(0, |entries| i64::try_from(entries.len()).unwrap_or(i64::MAX))
}

/// Sum kept and removed snapshots over every retention group.
///
/// Returns `(keep, remove)`. The whole input must decode as a JSON array
/// of groups; there is no partial result.
pub fn extract_cleanup_info(output: &[u8]) -> Result<(i64, i64)> {
    let groups: Vec<ForgetGroup> = serde_json::from_slice(output)?;

    let (keep, remove) = groups.iter().fold((0i64, 0i64), |(keep, remove), group| {
        (
            keep.saturating_add(list_len(group.keep.as_ref())),
            remove.saturating_add(list_len(group.remove.as_ref())),
        )
    });

    log::debug!(
        "Retention over {} groups: {keep} kept, {remove} removed",
        groups.len()
    );
    Ok((keep, remove))
}
