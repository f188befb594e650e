//! Data models for the storefront resources.
//!
//! These models mirror the JSON the backend sends and expects. Records keep any
//! field they do not model in `extra`, so a record always round-trips as
//! received.

mod client;
mod product;
mod sale;

pub use client::*;
pub use product::*;
pub use sale::*;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Backend-assigned identifier. The backend may send either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

/// Returns the trimmed value of a required form field.
pub(crate) fn required<'a>(value: &'a str, label: &str) -> Result<&'a str, crate::ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::ApiError::input(format!("{} is required", label)));
    }
    Ok(trimmed)
}

/// Treats an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Numbers that may arrive as JSON numbers or numeric strings
/// (decimal columns are commonly serialized as text).
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
    Other(Value),
}

pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => n.as_f64().unwrap_or_default(),
        NumberOrText::Text(s) => s.trim().parse().unwrap_or_default(),
        NumberOrText::Other(_) => 0.0,
    })
}

pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        NumberOrText::Text(s) => s.trim().parse().unwrap_or_default(),
        NumberOrText::Other(_) => 0,
    })
}
