/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! The value codec: coercion between engine-native cells and the protocol
//! value union, table-driven by the column's declared primitive type.
//!
//! The codec is pure. `Null` passes through at every declared type; the
//! column spec rides along purely for diagnostics.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rpc::protos::database::{
    DatabaseColumnSpec, DatabaseColumnType, DatabaseValue, Value, database_value, value,
};

use crate::engine::Value as EngineValue;
use crate::{BasaltError, BasaltResult};

/// The closed set of declared column type strings. Anything else is
/// unknown; callers decide whether unknown is an error (reflection) or
/// falls back to unspecified (result typing).
pub(crate) fn primitive_type(declared: &str) -> Option<DatabaseColumnType> {
    match declared.trim().to_ascii_uppercase().as_str() {
        "TEXT" => Some(DatabaseColumnType::Text),
        "INTEGER" => Some(DatabaseColumnType::Integer),
        "REAL" => Some(DatabaseColumnType::Real),
        "BLOB" => Some(DatabaseColumnType::Blob),
        _ => None,
    }
}

pub(crate) fn null_value() -> DatabaseValue {
    wrap(value::Kind::Null(true))
}

pub(crate) fn string_value(value: String) -> DatabaseValue {
    wrap(value::Kind::String(value))
}

pub(crate) fn number_value(value: f64) -> DatabaseValue {
    wrap(value::Kind::Number(value))
}

fn wrap(kind: value::Kind) -> DatabaseValue {
    DatabaseValue {
        kind: Some(database_value::Kind::Value(Value { kind: Some(kind) })),
    }
}

/// Decode one engine-native cell into the protocol value, as the column's
/// declared type dictates.
pub fn decode(column: &DatabaseColumnSpec, cell: EngineValue) -> BasaltResult<DatabaseValue> {
    if matches!(cell, EngineValue::Null) {
        return Ok(null_value());
    }
    match column.r#type() {
        DatabaseColumnType::Text => Ok(string_value(stringify(cell))),
        DatabaseColumnType::Integer => match cell {
            EngineValue::Integer(i) => Ok(number_value(i as f64)),
            EngineValue::Real(f) => Ok(number_value(f)),
            other => Err(decode_error(column, &other, "a numeric value")),
        },
        DatabaseColumnType::Real => match cell {
            EngineValue::Integer(i) => Ok(number_value(i as f64)),
            EngineValue::Real(f) => Ok(number_value(f)),
            other => Err(decode_error(column, &other, "a numeric value")),
        },
        DatabaseColumnType::Blob => match cell {
            EngineValue::Blob(bytes) => Ok(string_value(STANDARD.encode(bytes))),
            other => Err(decode_error(column, &other, "a byte sequence")),
        },
        DatabaseColumnType::Unspecified => match cell {
            EngineValue::Text(s) => Ok(string_value(s)),
            EngineValue::Integer(i) => Ok(number_value(i as f64)),
            EngineValue::Real(f) => Ok(number_value(f)),
            other => Err(decode_error(column, &other, "an inferrable value")),
        },
    }
}

/// Encode a protocol value back into an engine-native cell. The inverse of
/// [`decode`] up to the documented canonicalizations (blobs come back as
/// their base64 text).
pub fn encode(value: &DatabaseValue) -> BasaltResult<EngineValue> {
    match &value.kind {
        None | Some(database_value::Kind::Empty(_)) => Ok(EngineValue::Null),
        Some(database_value::Kind::Blob(bytes)) => Ok(EngineValue::Blob(bytes.clone())),
        Some(database_value::Kind::Real(f)) => Ok(EngineValue::Real(*f)),
        Some(database_value::Kind::Value(inner)) => match &inner.kind {
            None | Some(value::Kind::Null(_)) => Ok(EngineValue::Null),
            Some(value::Kind::String(s)) => Ok(EngineValue::Text(s.clone())),
            Some(value::Kind::Number(n)) => {
                if n.is_finite() && n.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(n)
                {
                    Ok(EngineValue::Integer(*n as i64))
                } else {
                    Ok(EngineValue::Real(*n))
                }
            }
            Some(value::Kind::Bool(b)) => Ok(EngineValue::Integer(i64::from(*b))),
        },
    }
}

fn stringify(cell: EngineValue) -> String {
    match cell {
        EngineValue::Null => String::new(),
        EngineValue::Integer(i) => i.to_string(),
        EngineValue::Real(f) => f.to_string(),
        EngineValue::Text(s) => s,
        EngineValue::Blob(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
    }
}

fn cell_kind(cell: &EngineValue) -> &'static str {
    match cell {
        EngineValue::Null => "NULL",
        EngineValue::Integer(_) => "INTEGER",
        EngineValue::Real(_) => "REAL",
        EngineValue::Text(_) => "TEXT",
        EngineValue::Blob(_) => "BLOB",
    }
}

fn decode_error(column: &DatabaseColumnSpec, cell: &EngineValue, expected: &str) -> BasaltError {
    BasaltError::Internal(format!(
        "column {} (declared {}): expected {}, got {}",
        column.ordinal,
        column.r#type().as_str_name(),
        expected,
        cell_kind(cell)
    ))
}
