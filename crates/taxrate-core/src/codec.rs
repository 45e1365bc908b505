//! Value codec: scalar conversions between typed values and wire JSON.
//!
//! Decimal and currency values never pass through `f64` — the JSON layer
//! carries them as exact numeric literals (`serde_json` with
//! `arbitrary_precision`) and this module parses them into
//! [`rust_decimal::Decimal`]. Timestamps use a single canonical format:
//! RFC 3339 with an explicit offset.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::WireError;
use crate::registry::{EnumDescriptor, PrimitiveKind};
use crate::value::{BagScalar, EnumValue, WireValue};

fn mismatch(kind: PrimitiveKind, wire: &Value, model: &str, field: &str) -> WireError {
    WireError::TypeMismatch {
        model: model.to_string(),
        field: field.to_string(),
        expected: kind.name().to_string(),
        actual: json_kind(wire).to_string(),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Encode one scalar to its wire representation.
pub fn encode_primitive(
    kind: PrimitiveKind,
    value: &WireValue,
    model: &str,
    field: &str,
) -> Result<Value, WireError> {
    match (kind, value) {
        (PrimitiveKind::String, WireValue::String(s)) => Ok(Value::String(s.clone())),
        (PrimitiveKind::Integer, WireValue::Integer(i)) => {
            Ok(Value::Number(serde_json::Number::from(*i)))
        }
        (PrimitiveKind::Decimal, WireValue::Decimal(d)) => encode_decimal(*d, model, field),
        // An integer is a valid exact decimal; accept it for decimal fields.
        (PrimitiveKind::Decimal, WireValue::Integer(i)) => {
            Ok(Value::Number(serde_json::Number::from(*i)))
        }
        (PrimitiveKind::Boolean, WireValue::Boolean(b)) => Ok(Value::Bool(*b)),
        (PrimitiveKind::Instant, WireValue::Instant(t)) => Ok(Value::String(
            t.to_rfc3339_opts(SecondsFormat::AutoSi, false),
        )),
        (expected, other) => Err(WireError::TypeMismatch {
            model: model.to_string(),
            field: field.to_string(),
            expected: expected.name().to_string(),
            actual: other.kind_name().to_string(),
        }),
    }
}

/// Decode one scalar from its wire representation.
pub fn decode_primitive(
    kind: PrimitiveKind,
    wire: &Value,
    model: &str,
    field: &str,
) -> Result<WireValue, WireError> {
    match kind {
        PrimitiveKind::String => match wire {
            Value::String(s) => Ok(WireValue::String(s.clone())),
            // Historical payloads carry numbers in string fields; accept and
            // stringify. This is the single lenient axis.
            Value::Number(n) => Ok(WireValue::String(n.to_string())),
            other => Err(mismatch(kind, other, model, field)),
        },
        PrimitiveKind::Integer => match wire {
            Value::Number(n) => decode_integer(n, model, field),
            other => Err(mismatch(kind, other, model, field)),
        },
        PrimitiveKind::Decimal => match wire {
            Value::Number(n) => decode_decimal(n, model, field),
            other => Err(mismatch(kind, other, model, field)),
        },
        PrimitiveKind::Boolean => match wire {
            Value::Bool(b) => Ok(WireValue::Boolean(*b)),
            other => Err(mismatch(kind, other, model, field)),
        },
        PrimitiveKind::Instant => match wire {
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .map(WireValue::Instant)
                .map_err(|_| WireError::MalformedTimestamp {
                    model: model.to_string(),
                    field: field.to_string(),
                    raw: s.clone(),
                }),
            other => Err(mismatch(kind, other, model, field)),
        },
    }
}

fn encode_decimal(value: Decimal, model: &str, field: &str) -> Result<Value, WireError> {
    let literal = value.to_string();
    serde_json::from_str::<serde_json::Number>(&literal)
        .map(Value::Number)
        .map_err(|_| WireError::MalformedDecimal {
            model: model.to_string(),
            field: field.to_string(),
            raw: literal,
        })
}

fn decode_decimal(
    n: &serde_json::Number,
    model: &str,
    field: &str,
) -> Result<WireValue, WireError> {
    let literal = n.to_string();
    Decimal::from_str(&literal)
        .or_else(|_| Decimal::from_scientific(&literal))
        .map(WireValue::Decimal)
        .map_err(|_| WireError::MalformedDecimal {
            model: model.to_string(),
            field: field.to_string(),
            raw: literal,
        })
}

fn decode_integer(
    n: &serde_json::Number,
    model: &str,
    field: &str,
) -> Result<WireValue, WireError> {
    if let Some(i) = n.as_i64() {
        return Ok(WireValue::Integer(i));
    }
    let actual = if Decimal::from_str(&n.to_string())
        .or_else(|_| Decimal::from_scientific(&n.to_string()))
        .map(|d| d.fract() != Decimal::ZERO)
        .unwrap_or(false)
    {
        "number with a fractional component"
    } else {
        "number outside the integer range"
    };
    Err(WireError::TypeMismatch {
        model: model.to_string(),
        field: field.to_string(),
        expected: PrimitiveKind::Integer.name().to_string(),
        actual: actual.to_string(),
    })
}

/// Encode an enumeration value as its wire-name string.
///
/// Unrecognized sentinels re-emit their raw symbol, so payloads decoded from
/// a newer server survive a round trip unchanged.
pub fn encode_enum(value: &EnumValue) -> Value {
    Value::String(value.as_wire().to_string())
}

/// Decode an enumeration symbol against a closed vocabulary.
///
/// Symbols outside the vocabulary degrade to [`EnumValue::Unrecognized`]
/// instead of failing the field — newly added server-side vocabulary must not
/// break older clients.
pub fn decode_enum(
    descriptor: &EnumDescriptor,
    wire: &Value,
    model: &str,
    field: &str,
) -> Result<WireValue, WireError> {
    match wire {
        Value::String(raw) => match descriptor.resolve(raw) {
            Some(symbol) => Ok(WireValue::Enum(EnumValue::Known(symbol))),
            None => {
                tracing::warn!(
                    vocabulary = descriptor.name(),
                    symbol = raw.as_str(),
                    "unrecognized enumeration symbol, keeping sentinel"
                );
                Ok(WireValue::Enum(EnumValue::Unrecognized(raw.clone())))
            }
        },
        other => Err(WireError::TypeMismatch {
            model: model.to_string(),
            field: field.to_string(),
            expected: format!("enum {}", descriptor.name()),
            actual: json_kind(other).to_string(),
        }),
    }
}

/// Encode an opaque property bag as a JSON object of scalars.
pub fn encode_bag(bag: &BTreeMap<String, BagScalar>) -> Value {
    let mut object = serde_json::Map::new();
    for (key, scalar) in bag {
        let value = match scalar {
            BagScalar::String(s) => Value::String(s.clone()),
            BagScalar::Number(n) => Value::Number(n.clone()),
            BagScalar::Bool(b) => Value::Bool(*b),
        };
        object.insert(key.clone(), value);
    }
    Value::Object(object)
}

/// Decode an opaque property bag.
///
/// Scalar entries pass through untyped; `null` entries are dropped; an
/// object or array inside a bag is a [`WireError::TypeMismatch`].
pub fn decode_bag(wire: &Value, model: &str, field: &str) -> Result<WireValue, WireError> {
    let object = match wire {
        Value::Object(object) => object,
        other => {
            return Err(WireError::TypeMismatch {
                model: model.to_string(),
                field: field.to_string(),
                expected: "opaque bag".to_string(),
                actual: json_kind(other).to_string(),
            })
        }
    };
    let mut bag = BTreeMap::new();
    for (key, value) in object {
        match value {
            Value::String(s) => {
                bag.insert(key.clone(), BagScalar::String(s.clone()));
            }
            Value::Number(n) => {
                bag.insert(key.clone(), BagScalar::Number(n.clone()));
            }
            Value::Bool(b) => {
                bag.insert(key.clone(), BagScalar::Bool(*b));
            }
            Value::Null => {}
            nested => {
                return Err(WireError::TypeMismatch {
                    model: model.to_string(),
                    field: field.to_string(),
                    expected: "scalar bag entry".to_string(),
                    actual: format!("{} under key \"{key}\"", json_kind(nested)),
                })
            }
        }
    }
    Ok(WireValue::Bag(bag))
}
