/*
[INPUT]:  Caller-supplied order, credit and authorization parameters
[OUTPUT]: Validated request bodies and query strings
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use super::enums::{MarketType, OrderStatus, Resource};
use super::models::{REDACTED, SignedMs, Target};
use crate::http::{Result, TemError};
use crate::pricing::compute_order_payment;

/// How a new order is authorized.
///
/// An API key wins over signatures. Without one, both a signed transaction
/// and a signed message are required.
#[derive(Clone, PartialEq, Eq)]
pub enum Authorization {
    ApiKey(String),
    Signature {
        tx: Option<String>,
        ms: Option<SignedMs>,
    },
}

impl Authorization {
    /// Pick the authorization channel from whatever the caller supplied.
    ///
    /// Empty strings count as absent. A lone `signed_tx` or lone `signed_ms`
    /// is rejected.
    pub fn resolve(
        api_key: Option<String>,
        signed_tx: Option<String>,
        signed_ms: Option<SignedMs>,
    ) -> Result<Self> {
        let api_key = api_key.filter(|key| !key.is_empty());
        let signed_tx = signed_tx.filter(|tx| !tx.is_empty());

        match (api_key, signed_tx, signed_ms) {
            (Some(key), _, _) => Ok(Authorization::ApiKey(key)),
            (None, Some(tx), Some(ms)) => Ok(Authorization::Signature {
                tx: Some(tx),
                ms: Some(ms),
            }),
            _ => Err(TemError::validation("Invalid signature")),
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        match self {
            Authorization::ApiKey(key) => Some(key),
            Authorization::Signature { .. } => None,
        }
    }

    pub fn signed_tx(&self) -> Option<&str> {
        match self {
            Authorization::ApiKey(_) => None,
            Authorization::Signature { tx, .. } => tx.as_deref(),
        }
    }

    pub fn signed_ms(&self) -> Option<&SignedMs> {
        match self {
            Authorization::ApiKey(_) => None,
            Authorization::Signature { ms, .. } => ms.as_ref(),
        }
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authorization::ApiKey(_) => f.debug_tuple("ApiKey").field(&REDACTED).finish(),
            Authorization::Signature { tx, ms } => f
                .debug_struct("Signature")
                .field("tx", &tx.as_ref().map(|_| REDACTED))
                .field("ms", ms)
                .finish(),
        }
    }
}

/// Caller-side description of an order to place.
///
/// `payment` is not part of it: it is derived from price, amount and
/// duration when the draft is turned into a [`CreateOrderRequest`].
#[derive(Clone, PartialEq)]
pub struct NewOrder {
    pub market: MarketType,
    /// Account placing (and paying for) the order
    pub address: String,
    pub target: Target,
    pub resource: Resource,
    pub amount: u64,
    /// Seconds
    pub duration: u64,
    /// SUN per unit per day
    pub price: u64,
    pub partfill: bool,
    pub api_key: Option<String>,
    pub signed_tx: Option<String>,
    pub signed_ms: Option<SignedMs>,
}

impl fmt::Debug for NewOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewOrder")
            .field("market", &self.market)
            .field("address", &self.address)
            .field("target", &self.target)
            .field("resource", &self.resource)
            .field("amount", &self.amount)
            .field("duration", &self.duration)
            .field("price", &self.price)
            .field("partfill", &self.partfill)
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("signed_tx", &self.signed_tx.as_ref().map(|_| REDACTED))
            .field("signed_ms", &self.signed_ms)
            .finish()
    }
}

impl NewOrder {
    pub fn new(
        market: MarketType,
        address: impl Into<String>,
        target: impl Into<Target>,
        resource: Resource,
        amount: u64,
        duration: u64,
        price: u64,
    ) -> Self {
        Self {
            market,
            address: address.into(),
            target: target.into(),
            resource,
            amount,
            duration,
            price,
            partfill: true,
            api_key: None,
            signed_tx: None,
            signed_ms: None,
        }
    }

    pub fn with_partfill(mut self, partfill: bool) -> Self {
        self.partfill = partfill;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_signatures(mut self, signed_tx: impl Into<String>, signed_ms: SignedMs) -> Self {
        self.signed_tx = Some(signed_tx.into());
        self.signed_ms = Some(signed_ms);
        self
    }
}

/// Validated POST /order/new body
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderRequest {
    market: MarketType,
    address: String,
    target: Target,
    payment: u64,
    resource: Resource,
    duration: u64,
    price: u64,
    partfill: bool,
    authorization: Authorization,
}

impl CreateOrderRequest {
    pub fn market(&self) -> MarketType {
        self.market
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// True when the order targets more than one address
    pub fn bulk(&self) -> bool {
        self.target.is_bulk()
    }

    pub fn payment(&self) -> u64 {
        self.payment
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn partfill(&self) -> bool {
        self.partfill
    }

    pub fn authorization(&self) -> &Authorization {
        &self.authorization
    }
}

impl TryFrom<NewOrder> for CreateOrderRequest {
    type Error = TemError;

    fn try_from(order: NewOrder) -> Result<Self> {
        let target = order.target.normalize()?;
        let authorization = Authorization::resolve(order.api_key, order.signed_tx, order.signed_ms)?;
        let payment = compute_order_payment(order.price, order.amount, order.duration)?;

        Ok(Self {
            market: order.market,
            address: order.address,
            target,
            payment,
            resource: order.resource,
            duration: order.duration,
            price: order.price,
            partfill: order.partfill,
            authorization,
        })
    }
}

#[derive(Serialize)]
struct CreateOrderBody<'a> {
    market: MarketType,
    address: &'a str,
    target: &'a Target,
    payment: u64,
    resource: Resource,
    duration: u64,
    price: u64,
    partfill: bool,
    bulk: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    signed_tx: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    signed_ms: Option<&'a SignedMs>,
}

impl Serialize for CreateOrderRequest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CreateOrderBody {
            market: self.market,
            address: &self.address,
            target: &self.target,
            payment: self.payment,
            resource: self.resource,
            duration: self.duration,
            price: self.price,
            partfill: self.partfill,
            bulk: self.bulk(),
            api_key: self.authorization.api_key(),
            signed_tx: self.authorization.signed_tx(),
            signed_ms: self.authorization.signed_ms(),
        }
        .serialize(serializer)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceDepositRequest {
    pub address: String,
    pub signed_tx: String,
}

impl fmt::Debug for BalanceDepositRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BalanceDepositRequest")
            .field("address", &self.address)
            .field("signed_tx", &REDACTED)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceWithdrawRequest {
    pub address: String,
    pub signed_ms: SignedMs,
    /// SUN; the whole balance is withdrawn when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct FillOrderRequest {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_address: Option<String>,
    pub address: String,
    pub signed_tx: String,
}

impl fmt::Debug for FillOrderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FillOrderRequest")
            .field("id", &self.id)
            .field("origin_address", &self.origin_address)
            .field("address", &self.address)
            .field("signed_tx", &REDACTED)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    pub order: u64,
    pub address: String,
    pub signed_ms: SignedMs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceQuery {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderQuery {
    pub id: u64,
}

/// GET /order/list parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOrdersRequest {
    pub skip: u64,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
