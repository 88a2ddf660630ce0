/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    Public,
    Internal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketType {
    #[default]
    Open,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Completed,
    #[serde(alias = "Canceled")]
    Cancelled,
}

impl OrderStatus {
    /// Value used for the `status` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// Rentable network resource, integer-coded on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Resource {
    Energy = 0,
    Bandwidth = 1,
}

impl TryFrom<u64> for Resource {
    type Error = String;

    fn try_from(code: u64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Resource::Energy),
            1 => Ok(Resource::Bandwidth),
            other => Err(format!("unknown resource code {other}")),
        }
    }
}

impl Serialize for Resource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(number) => number
                .as_u64()
                .ok_or_else(|| format!("unknown resource code {number}"))
                .and_then(Resource::try_from)
                .map_err(D::Error::custom),
            Value::String(name) => match name.as_str() {
                "Energy" | "energy" | "ENERGY" => Ok(Resource::Energy),
                "Bandwidth" | "bandwidth" | "BANDWIDTH" => Ok(Resource::Bandwidth),
                raw => raw
                    .parse::<u64>()
                    .map_err(|_| format!("unknown resource {raw:?}"))
                    .and_then(Resource::try_from)
                    .map_err(D::Error::custom),
            },
            other => Err(D::Error::custom(format!("expected a resource, found {other}"))),
        }
    }
}
