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

//! Decoding the wire result envelope back into the result-mode union.

use rpc::protos::database::{
    DatabaseResult, DatabaseRow, DatabaseTable, DatabaseValue, database_result,
};

use crate::AdapterError;

/// What a query resolved to, as seen by a client.
#[derive(Clone, Debug, PartialEq)]
pub enum DatabaseOutcome {
    /// No rows, no count.
    Empty,
    /// A single primitive value.
    Single(DatabaseValue),
    /// The number of rows the statement modified.
    Mutation(i64),
    /// Zero or more rows with their table descriptors.
    Rows {
        tables: Vec<DatabaseTable>,
        rows: Vec<DatabaseRow>,
    },
    /// The server reported a terminal failure inside the envelope.
    Error { code: i32, message: String },
}

/// The inverse of the server-side envelope encoding. A wire `ok=false`
/// envelope becomes an `Error` outcome.
pub fn decode_result(result: DatabaseResult) -> Result<DatabaseOutcome, AdapterError> {
    if !result.ok {
        let error = result.error.unwrap_or_default();
        return Ok(DatabaseOutcome::Error {
            code: error.code,
            message: error.message,
        });
    }
    match result.outcome {
        Some(database_result::Outcome::Empty(_)) => Ok(DatabaseOutcome::Empty),
        Some(database_result::Outcome::Single(single)) => Ok(DatabaseOutcome::Single(
            single
                .value
                .ok_or(AdapterError::MissingField("single.value"))?,
        )),
        Some(database_result::Outcome::Mutation(mutation)) => {
            Ok(DatabaseOutcome::Mutation(mutation.rows_modified))
        }
        Some(database_result::Outcome::Resultset(set)) => Ok(DatabaseOutcome::Rows {
            tables: set.tables,
            rows: set.rows,
        }),
        None => Err(AdapterError::MissingField("result.outcome")),
    }
}
