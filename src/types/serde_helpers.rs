//! Serde helpers for flexible type handling
//!
//! The service is inconsistent about scalar types: identifiers that are
//! posted as numbers come back as strings, and optional text fields are sent
//! as `null` instead of being omitted.

use serde::{Deserialize, Deserializer, Serialize, de};

/// A coded value the service may extend beyond the codes this crate knows.
///
/// Known codes decode to `T`; anything else is kept verbatim so a single new
/// code does not fail a whole response. Serializes back to the same JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Known(T),
    Unknown(serde_json::Value),
}

impl<T> Lenient<T> {
    /// The decoded code, if it was one this crate knows
    pub fn known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown(_) => None,
        }
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}

/// Deserialize an identifier that can be:
/// - JSON string: `"1234"` (kept verbatim)
/// - Integer: `1234` (rendered in decimal)
/// - `null` / missing: empty string
///
/// Floats and other JSON types are rejected.
pub fn deserialize_string_from_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    let value: Option<StringOrNumber> = Option::deserialize(deserializer)?;

    match value {
        None => Ok(String::new()),
        Some(StringOrNumber::String(s)) => Ok(s),
        Some(StringOrNumber::Unsigned(n)) => Ok(n.to_string()),
        Some(StringOrNumber::Signed(n)) => Ok(n.to_string()),
        Some(StringOrNumber::Float(f)) => Err(de::Error::custom(format!(
            "expected an integer or string identifier, found {}",
            f
        ))),
    }
}

/// Deserialize `null` as the type's default value
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
