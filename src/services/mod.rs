//! Extraction services over captured backup tool output

pub mod backup;
pub mod check;
pub mod cleanup;
pub mod format;
pub mod messages;
pub mod session;
pub mod stats;

use serde::{Deserialize, Deserializer};

/// Decode `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
