/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::enums::{MarketType, OrderStatus, OrderType, Resource};
use super::serde_helpers;
use crate::http::{Result, TemError};

const SIGNED_MESSAGE_PREFIX: &str = "te_";

/// Stand-in printed by `Debug` for keys and signatures
pub(crate) const REDACTED: &str = "<redacted>";

/// Resource receiver: one address, or several for a bulk order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Single(String),
    Bulk(Vec<String>),
}

impl Target {
    /// Collapse a one-element list to a single address; reject an empty list.
    pub fn normalize(self) -> Result<Self> {
        match self {
            Target::Single(address) => Ok(Target::Single(address)),
            Target::Bulk(mut addresses) => match addresses.len() {
                0 => Err(TemError::validation("Target list cannot be empty")),
                1 => Ok(Target::Single(addresses.remove(0))),
                _ => Ok(Target::Bulk(addresses)),
            },
        }
    }

    pub fn is_bulk(&self) -> bool {
        matches!(self, Target::Bulk(_))
    }

    pub fn addresses(&self) -> &[String] {
        match self {
            Target::Single(address) => std::slice::from_ref(address),
            Target::Bulk(addresses) => addresses,
        }
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(address) => Ok(Target::Single(address)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(address) => Ok(address),
                    _ => Err(TemError::validation("Invalid target type")),
                })
                .collect::<Result<Vec<_>>>()
                .and_then(|addresses| Target::Bulk(addresses).normalize()),
            _ => Err(TemError::validation("Invalid target type")),
        }
    }
}

impl From<String> for Target {
    fn from(address: String) -> Self {
        Target::Single(address)
    }
}

impl From<&str> for Target {
    fn from(address: &str) -> Self {
        Target::Single(address.to_string())
    }
}

impl From<Vec<String>> for Target {
    fn from(addresses: Vec<String>) -> Self {
        Target::Bulk(addresses)
    }
}

impl From<Vec<&str>> for Target {
    fn from(addresses: Vec<&str>) -> Self {
        Target::Bulk(addresses.into_iter().map(str::to_string).collect())
    }
}

impl Serialize for Target {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Target::Single(address) => serializer.serialize_str(address),
            Target::Bulk(addresses) => addresses.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Target {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Target::from_value(value).map_err(D::Error::custom)
    }
}

/// Signed off-chain message authorizing an account action
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignedMs {
    message: String,
    signature: String,
}

impl SignedMs {
    /// `message` must look like `te_<word characters>`.
    pub fn new(message: impl Into<String>, signature: impl Into<String>) -> Result<Self> {
        let message = message.into();
        if !is_signed_message(&message) {
            return Err(TemError::validation(format!(
                "signed message {message:?} does not match ^te_\\w+$"
            )));
        }
        Ok(Self {
            message,
            signature: signature.into(),
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }
}

impl fmt::Debug for SignedMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedMs")
            .field("message", &self.message)
            .field("signature", &REDACTED)
            .finish()
    }
}

impl<'de> Deserialize<'de> for SignedMs {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            message: String,
            signature: String,
        }

        let raw = Raw::deserialize(deserializer)?;
        SignedMs::new(raw.message, raw.signature).map_err(D::Error::custom)
    }
}

fn is_signed_message(message: &str) -> bool {
    message
        .strip_prefix(SIGNED_MESSAGE_PREFIX)
        .is_some_and(|rest| {
            !rest.is_empty() && rest.chars().all(|c| c.is_alphanumeric() || c == '_')
        })
}

fn default_maxlock() -> i64 {
    -1
}

/// Market order as reported by the server.
///
/// Two orders are equal when their ids are equal, so fetched pages can be
/// merged through a `HashSet`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub id: u64,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(default)]
    pub market: MarketType,
    pub origin: String,
    pub target: Target,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub price: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub amount: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_i64")]
    pub freeze: i64,
    #[serde(deserialize_with = "serde_helpers::deserialize_i64")]
    pub frozen: i64,
    pub resource: Resource,
    #[serde(default)]
    pub locked: bool,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub duration: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub payment: u64,
    #[serde(default)]
    pub partfill: bool,
    #[serde(default)]
    pub extend: bool,
    #[serde(
        default = "default_maxlock",
        deserialize_with = "serde_helpers::deserialize_i64"
    )]
    pub maxlock: i64,
    pub status: OrderStatus,
    pub archive: bool,
    #[serde(deserialize_with = "serde_helpers::deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "serde_helpers::deserialize_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn is_bulk(&self) -> bool {
        self.target.is_bulk()
    }

    /// `maxlock` of -1 means the order has no lock limit
    pub fn max_lock(&self) -> Option<u64> {
        u64::try_from(self.maxlock).ok()
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

impl Hash for Order {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
