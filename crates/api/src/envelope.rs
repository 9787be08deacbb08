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

//! Translation from the internal result-mode union to the wire result
//! envelope. The mapping is one-to-one and order-preserving; a `Single`
//! wraps its cell through the value codec at column ordinal 0.

use rpc::protos::database::{
    DatabaseError, DatabaseMutationResult, DatabaseResult, DatabaseResultSet, DatabaseValueResult,
    database_result,
};

use crate::BasaltResult;
use crate::observer::QueryOutcome;
use crate::value;

pub fn encode(outcome: &QueryOutcome) -> BasaltResult<DatabaseResult> {
    let result = match outcome {
        QueryOutcome::Empty => ok_result(database_result::Outcome::Empty(true)),
        QueryOutcome::Single { column, value } => {
            let value = value::decode(column, value.clone())?;
            ok_result(database_result::Outcome::Single(DatabaseValueResult {
                value: Some(value),
            }))
        }
        QueryOutcome::Mutation { count } => {
            ok_result(database_result::Outcome::Mutation(DatabaseMutationResult {
                rows_modified: *count as i64,
            }))
        }
        QueryOutcome::Rows { tables, rows } => {
            ok_result(database_result::Outcome::Resultset(DatabaseResultSet {
                tables: tables.clone(),
                rows: rows.clone(),
            }))
        }
        QueryOutcome::Error { code, message } => DatabaseResult {
            ok: false,
            error: Some(DatabaseError {
                code: *code as i32,
                message: message.clone(),
            }),
            outcome: None,
        },
    };
    Ok(result)
}

fn ok_result(outcome: database_result::Outcome) -> DatabaseResult {
    DatabaseResult {
        ok: true,
        error: None,
        outcome: Some(outcome),
    }
}
