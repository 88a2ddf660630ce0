/*
[INPUT]:  Raw JSON field values from API payloads
[OUTPUT]: Integral quantities, exact decimals and UTC timestamps
[POS]:    Data layer - field-level parsers shared by the models
[UPDATE]: When the server changes numeric or timestamp encodings
*/

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Unix timestamps above this are read as milliseconds
const MILLIS_THRESHOLD: i64 = 20_000_000_000;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub(crate) fn parse_decimal(raw: &str) -> Result<Decimal, String> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|err| format!("invalid decimal value {raw:?}: {err}"))
}

fn decimal_from_value(value: &Value) -> Result<Decimal, String> {
    match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(raw) => parse_decimal(raw.trim()),
        other => Err(format!("expected a number, found {other}")),
    }
}

/// Numeric value with zero decimal places
pub(crate) fn integral_from_value(value: &Value) -> Result<Decimal, String> {
    let decimal = decimal_from_value(value)?;
    if !decimal.fract().is_zero() {
        return Err(format!("{decimal} has decimal places, expected an integer"));
    }
    Ok(decimal)
}

fn to_u64(value: &Value) -> Result<u64, String> {
    let decimal = integral_from_value(value)?;
    decimal
        .to_u64()
        .ok_or_else(|| format!("{decimal} is out of range for an unsigned integer"))
}

pub fn deserialize_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    to_u64(&value).map_err(D::Error::custom)
}

pub fn deserialize_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let decimal = integral_from_value(&value).map_err(D::Error::custom)?;
    decimal
        .to_i64()
        .ok_or_else(|| D::Error::custom(format!("{decimal} is out of range for an integer")))
}

pub fn deserialize_u64_vec<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<Value> = Vec::deserialize(deserializer)?;
    values
        .iter()
        .map(|value| to_u64(value).map_err(D::Error::custom))
        .collect()
}

/// Exact decimal from a JSON number or numeric string
pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    decimal_from_value(&value).map_err(D::Error::custom)
}

/// RFC 3339, naive ISO (read as UTC) or unix seconds/milliseconds
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::String(raw) => parse_timestamp_str(raw.trim()).map_err(D::Error::custom),
        Value::Number(_) => {
            let decimal = integral_from_value(&value).map_err(D::Error::custom)?;
            let raw = decimal
                .to_i64()
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {decimal}")))?;
            let parsed = if raw.abs() > MILLIS_THRESHOLD {
                DateTime::from_timestamp_millis(raw)
            } else {
                DateTime::from_timestamp(raw, 0)
            };
            parsed.ok_or_else(|| D::Error::custom(format!("timestamp out of range: {raw}")))
        }
        other => Err(D::Error::custom(format!(
            "expected a timestamp, found {other}"
        ))),
    }
}

fn parse_timestamp_str(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid timestamp {raw:?}"))
}
