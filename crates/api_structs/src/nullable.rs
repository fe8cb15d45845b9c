use serde::{Deserialize, Deserializer};

/// Tells a missing field apart from an explicit `null`.
///
/// Used together with `#[serde(default)]`, so that a missing field is `None`
/// (left unchanged), `null` is `Some(None)` (cleared) and a value is `Some(Some(_))`.
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
