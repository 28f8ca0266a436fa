//! Serde helpers that keep a missing key and an explicit `null` apart.
//!
//! Plain `Option<T>` fields treat both the same, so each shape picks the
//! helper matching whether the column may be absent, null, or both.

use serde::{Deserialize, Deserializer};

/// Key must be present, `null` allowed. Use without `default`.
pub fn required<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Key may be absent, `null` rejected. Use with `default`.
pub fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Key may be absent or `null`, and the two stay distinct. Use with `default`.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
