/*
[INPUT]:  Raw JSON response bodies with mixed key casing
[OUTPUT]: Typed models parsed from snake_case-normalized payloads
[POS]:    Data layer - parse-time field alias resolution
[UPDATE]: When the server introduces a new key spelling
*/

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::http::Result;

/// Parse a response body into `T`, accepting snake_case, camelCase and PascalCase keys.
pub fn decode<T>(body: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let value: Value = serde_json::from_slice(body)?;
    decode_value(value)
}

/// Same as [`decode`] for an already parsed JSON value.
pub fn decode_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(normalize_keys(value))?)
}

/// Rewrite every object key to snake_case, recursively.
///
/// When several spellings of one key are present the snake_case one wins,
/// then camelCase, then PascalCase.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut ranked: Map<String, Value> = Map::new();
            let mut ranks: Vec<(String, u8)> = Vec::new();

            for (key, inner) in map {
                let snake = to_snake_case(&key);
                let rank = spelling_rank(&key, &snake);
                match ranks.iter().position(|(name, _)| *name == snake) {
                    Some(pos) if ranks[pos].1 <= rank => continue,
                    Some(pos) => ranks[pos].1 = rank,
                    None => ranks.push((snake.clone(), rank)),
                }
                ranked.insert(snake, normalize_keys(inner));
            }

            Value::Object(ranked)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

/// Remove every key in `keys` from `map` and return the value of the first one present.
pub(crate) fn take_first(map: &mut Map<String, Value>, keys: &[&str]) -> Option<Value> {
    let mut picked = None;
    for key in keys {
        if let Some(value) = map.remove(*key) {
            picked.get_or_insert(value);
        }
    }
    picked
}

fn spelling_rank(key: &str, snake: &str) -> u8 {
    if key == snake {
        0
    } else if key.starts_with(|c: char| c.is_lowercase()) {
        1
    } else {
        2
    }
}

pub(crate) fn to_snake_case(key: &str) -> String {
    let mut snake = String::with_capacity(key.len() + 4);
    for (index, ch) in key.chars().enumerate() {
        if ch.is_uppercase() {
            if index > 0 && !snake.ends_with('_') {
                snake.push('_');
            }
            snake.extend(ch.to_lowercase());
        } else {
            snake.push(ch);
        }
    }
    snake
}
