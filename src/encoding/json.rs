// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # JSON codec
//!
//! Reads and writes wire messages as JSON, either directly through serde or
//! through the dynamic [`DecodedMessage`] representation.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use lfc_msgs::encoding::JsonCodec;
//! use lfc_msgs::msg::WrenchMsg;
//!
//! let codec = JsonCodec::new();
//! let wrench: WrenchMsg = codec.decode(r#"{"force": {"x": 1.0}}"#)?;
//! assert_eq!(wrench.force.x, 1.0);
//! assert_eq!(wrench.torque.z, 0.0);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::{CodecValue, ConversionError, DecodedMessage, Result};
use crate::msg::MessageValue;

/// JSON codec for wire messages.
pub struct JsonCodec {
    _private: (),
}

impl JsonCodec {
    /// Create a new JSON codec.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Decode a JSON string into a typed wire message.
    pub fn decode<T: DeserializeOwned>(&self, json: &str) -> Result<T> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode JSON bytes into a typed wire message.
    pub fn decode_bytes<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Encode a typed wire message as JSON.
    ///
    /// Non-finite floats are rejected, as in [`encode_value`](Self::encode_value),
    /// rather than written as `null`.
    pub fn encode<T: Serialize + MessageValue>(&self, message: &T, pretty: bool) -> Result<String> {
        for value in message.to_message().values() {
            ensure_finite(value)?;
        }

        if pretty {
            Ok(serde_json::to_string_pretty(message)?)
        } else {
            Ok(serde_json::to_string(message)?)
        }
    }

    /// Decode a JSON object into a dynamic message.
    pub fn decode_value(&self, json: &str) -> Result<DecodedMessage> {
        let value: serde_json::Value = serde_json::from_str(json)?;

        match value {
            serde_json::Value::Object(obj) => obj
                .iter()
                .map(|(key, val)| Ok((key.clone(), self.json_value_to_codec_value(val)?)))
                .collect(),
            other => Err(ConversionError::parse(
                "json",
                format!("expected an object, found {}", json_kind(&other)),
            )),
        }
    }

    /// Encode a dynamic message as a JSON object.
    ///
    /// Timestamps are written as `{"sec": .., "nanosec": ..}` objects so that
    /// they decode back into `builtin_interfaces/Time` fields.
    pub fn encode_value(&self, message: &DecodedMessage, pretty: bool) -> Result<String> {
        let json_value = self.message_to_json_value(message)?;

        if pretty {
            Ok(serde_json::to_string_pretty(&json_value)?)
        } else {
            Ok(serde_json::to_string(&json_value)?)
        }
    }

    fn message_to_json_value(&self, message: &DecodedMessage) -> Result<serde_json::Value> {
        let mut obj = serde_json::Map::new();

        for (key, value) in message {
            obj.insert(key.clone(), self.codec_value_to_json(value)?);
        }

        Ok(serde_json::Value::Object(obj))
    }

    #[allow(clippy::only_used_in_recursion)]
    fn json_value_to_codec_value(&self, value: &serde_json::Value) -> Result<CodecValue> {
        match value {
            serde_json::Value::Null => Ok(CodecValue::Null),
            serde_json::Value::Bool(b) => Ok(CodecValue::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(CodecValue::Int64(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(CodecValue::UInt64(u))
                } else if let Some(f) = n.as_f64() {
                    Ok(CodecValue::Float64(f))
                } else {
                    Err(ConversionError::parse("json", "unknown number format"))
                }
            }
            serde_json::Value::String(s) => Ok(CodecValue::String(s.clone())),
            serde_json::Value::Array(arr) => arr
                .iter()
                .map(|item| self.json_value_to_codec_value(item))
                .collect::<Result<Vec<_>>>()
                .map(CodecValue::Array),
            serde_json::Value::Object(obj) => {
                let mut map = HashMap::new();
                for (key, val) in obj {
                    map.insert(key.clone(), self.json_value_to_codec_value(val)?);
                }
                Ok(CodecValue::Struct(map))
            }
        }
    }

    #[allow(clippy::only_used_in_recursion)]
    fn codec_value_to_json(&self, value: &CodecValue) -> Result<serde_json::Value> {
        match value {
            CodecValue::Null => Ok(serde_json::Value::Null),
            CodecValue::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            CodecValue::Int32(i) => Ok(serde_json::Value::from(*i)),
            CodecValue::Int64(i) => Ok(serde_json::Value::from(*i)),
            CodecValue::UInt32(u) => Ok(serde_json::Value::from(*u)),
            CodecValue::UInt64(u) => Ok(serde_json::Value::from(*u)),
            CodecValue::Float32(f) => finite_number(*f as f64, "float32"),
            CodecValue::Float64(f) => finite_number(*f, "float64"),
            CodecValue::String(s) => Ok(serde_json::Value::String(s.clone())),
            CodecValue::Timestamp(nanos) => {
                let sec = nanos.div_euclid(1_000_000_000);
                let nanosec = nanos.rem_euclid(1_000_000_000);
                Ok(serde_json::json!({ "sec": sec, "nanosec": nanosec }))
            }
            CodecValue::Array(arr) => arr
                .iter()
                .map(|item| self.codec_value_to_json(item))
                .collect::<Result<Vec<_>>>()
                .map(serde_json::Value::Array),
            CodecValue::Struct(map) => self.message_to_json_value(map),
        }
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new()
    }
}

fn finite_number(f: f64, kind: &str) -> Result<serde_json::Value> {
    serde_json::Number::from_f64(f)
        .map(serde_json::Value::Number)
        .ok_or_else(|| ConversionError::parse(kind, "not representable as JSON number"))
}

fn ensure_finite(value: &CodecValue) -> Result<()> {
    match value {
        CodecValue::Float32(f) => finite_number(*f as f64, "float32").map(|_| ()),
        CodecValue::Float64(f) => finite_number(*f, "float64").map(|_| ()),
        CodecValue::Array(arr) => arr.iter().try_for_each(ensure_finite),
        CodecValue::Struct(map) => map.values().try_for_each(ensure_finite),
        _ => Ok(()),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
