/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::casing::{normalize_keys, take_first};
use super::models::Order;
use super::serde_helpers;

/// Keys the order list may arrive under, in order of preference
const ORDER_LIST_KEYS: [&str; 3] = ["list", "items", "orders"];

/// Keys the new order id may arrive under, in order of preference
const ORDER_ID_KEYS: [&str; 2] = ["order", "order_id"];

/// GET /credit body, in SUN
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub value: u64,
}

/// One page of GET /order/list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedOrders {
    pub orders: Vec<Order>,
    pub total: u64,
}

impl<'de> Deserialize<'de> for PaginatedOrders {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut map = into_object::<D::Error>(Value::deserialize(deserializer)?)?;

        let orders = match take_first(&mut map, &ORDER_LIST_KEYS) {
            Some(list) => Vec::<Order>::deserialize(list).map_err(D::Error::custom)?,
            None => Vec::new(),
        };
        let total = map
            .remove("total")
            .ok_or_else(|| D::Error::missing_field("total"))?;
        let total = serde_helpers::deserialize_u64(total).map_err(D::Error::custom)?;

        Ok(Self { orders, total })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOrderResponse {
    pub order_id: u64,
}

impl<'de> Deserialize<'de> for CreateOrderResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut map = into_object::<D::Error>(Value::deserialize(deserializer)?)?;

        let order_id = take_first(&mut map, &ORDER_ID_KEYS)
            .ok_or_else(|| D::Error::missing_field("order_id"))?;
        let order_id = serde_helpers::deserialize_u64(order_id).map_err(D::Error::custom)?;

        Ok(Self { order_id })
    }
}

fn into_object<E>(value: Value) -> Result<Map<String, Value>, E>
where
    E: serde::de::Error,
{
    match normalize_keys(value) {
        Value::Object(map) => Ok(map),
        other => Err(E::custom(format!("expected an object, found {other}"))),
    }
}
