//! Lenient decoding for fields the services send as `null` despite
//! documenting a plain value.

use std::collections::HashMap;

use serde::Deserialize;

pub fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

/// Decodes a string map whose values may be `null`, dropping those entries.
pub fn deserialize_sparse_map<'de, D>(d: D) -> Result<HashMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let map = Option::<HashMap<String, Option<String>>>::deserialize(d)?;

    Ok(map
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect())
}
