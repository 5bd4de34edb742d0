//! Serde helpers for boolean flags.
//!
//! SQLite stores flags as `0/1` integers and older clients send them that
//! way, so inputs accept a JSON boolean, an integer (non-zero is `true`) or
//! `null` (`false`).

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
    Null,
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Int(value) => value != 0,
        Flag::Null => false,
    })
}

/// Write a flag as `0` or `1`.
pub fn serialize_as_int<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}
