//! Serde helpers for row ids.
//!
//! Hosts read ids back from rendered rows, so an id may arrive as a JSON
//! integer or as a numeric string such as `"5"`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

impl RawId {
    fn into_id<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            Self::Int(id) => Ok(id),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid id `{text}`"))),
        }
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer)?.into_id()
}

/// Optional id: `null`, a missing field or a blank string mean "no id".
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(raw) => raw.into_id::<D::Error>().map(Some),
    }
}
