/*
 * Copyright 2024 Google LLC
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Extensions to `prost` and related crates.

use prost_types::value::Kind;
use serde_json::map::Map as JsonMap;
use serde_json::value::Value as JsonValue;
use serde_json::Number as JsonNumber;

pub fn encode<M: prost::Message>(message: &M) -> Result<Vec<u8>, prost::EncodeError> {
    let mut buf = Vec::with_capacity(message.encoded_len());
    message.encode(&mut buf)?;
    Ok(buf)
}

/// Converts a protobuf `Struct` into an equivalent JSON map.
///
/// Fails if the struct contains a non-finite number, which JSON cannot
/// represent.
pub fn struct_to_json(message: prost_types::Struct) -> Result<JsonValue, String> {
    let mut map = JsonMap::new();

    for (key, value) in message.fields {
        let kind = match value.kind {
            Some(kind) => kind,
            None => continue,
        };
        let value = value_from_kind(&key, kind)?;
        map.insert(key, value);
    }

    Ok(JsonValue::Object(map))
}

fn value_from_kind(key: &str, kind: Kind) -> Result<JsonValue, String> {
    let value = match kind {
        Kind::NullValue(_) => JsonValue::Null,
        Kind::BoolValue(v) => JsonValue::Bool(v),
        Kind::NumberValue(v) => JsonValue::Number(
            JsonNumber::from_f64(v)
                .ok_or_else(|| format!("invalid f64 {v:?} found under key {key}"))?,
        ),
        Kind::StringValue(v) => JsonValue::String(v),
        Kind::ListValue(v) => {
            let mut array = Vec::with_capacity(v.values.len());
            for value in v.values.into_iter().filter_map(|v| v.kind) {
                array.push(value_from_kind(key, value)?);
            }
            JsonValue::Array(array)
        }
        Kind::StructValue(v) => struct_to_json(v)?,
    };

    Ok(value)
}

/// Total length of a protobuf `Duration` in nanoseconds.
///
/// Mirrors how the well-known type is normalized on the wire: for negative
/// durations both `seconds` and `nanos` carry the sign, so the sum is exact.
pub fn duration_nanos(duration: &prost_types::Duration) -> i64 {
    duration
        .seconds
        .saturating_mul(1_000_000_000)
        .saturating_add(i64::from(duration.nanos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost_types::{ListValue, Struct as ProstStruct, Value as ProstValue};

    fn value(kind: Kind) -> ProstValue {
        ProstValue { kind: Some(kind) }
    }

    #[test]
    fn empty_struct() {
        let converted = struct_to_json(ProstStruct::default()).unwrap();
        assert_eq!(converted, serde_json::json!({}));
    }

    #[test]
    fn struct_data_types() {
        let message = ProstStruct {
            fields: [
                ("bool".into(), value(Kind::BoolValue(true))),
                ("number".into(), value(Kind::NumberValue(1234.0))),
                ("string".into(), value(Kind::StringValue("hello".into()))),
                ("null".into(), value(Kind::NullValue(0))),
                (
                    "list".into(),
                    value(Kind::ListValue(ListValue {
                        values: vec![
                            value(Kind::NumberValue(5678.0)),
                            value(Kind::StringValue("world".into())),
                        ],
                    })),
                ),
                (
                    "nested".into(),
                    value(Kind::StructValue(ProstStruct {
                        fields: [("inner".into(), value(Kind::BoolValue(false)))]
                            .into_iter()
                            .collect(),
                    })),
                ),
            ]
            .into_iter()
            .collect(),
        };

        assert_eq!(
            struct_to_json(message).unwrap(),
            serde_json::json!({
                "bool": true,
                "number": 1234.0,
                "string": "hello",
                "null": null,
                "list": [5678.0, "world"],
                "nested": { "inner": false },
            })
        );
    }

    #[test]
    fn non_finite_number_is_rejected() {
        let message = ProstStruct {
            fields: [("nan".into(), value(Kind::NumberValue(f64::NAN)))]
                .into_iter()
                .collect(),
        };

        let error = struct_to_json(message).unwrap_err();
        assert!(error.contains("nan"), "unexpected error: {error}");
    }

    #[test]
    fn duration_nanos_sums_components() {
        let duration = prost_types::Duration {
            seconds: 2,
            nanos: 500_000_000,
        };
        assert_eq!(duration_nanos(&duration), 2_500_000_000);

        let negative = prost_types::Duration {
            seconds: -1,
            nanos: -500_000_000,
        };
        assert_eq!(duration_nanos(&negative), -1_500_000_000);
    }
}
