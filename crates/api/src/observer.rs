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

//! The query observer: runs one query against a database handle, classifies
//! the outcome into a result mode, and drives per-row, end, and error
//! callbacks in registration order.
//!
//! `recv` returns engine failures as an `Error` outcome rather than
//! propagating them; only protocol-level preconditions (a missing SQL
//! string) surface as `Err`.

use std::sync::Arc;

use rpc::protos::database::{
    DatabaseColumnSpec, DatabaseColumnType, DatabaseQuery, DatabaseRow, DatabaseTable,
};
use tonic::Code;

use crate::engine::{ColumnInfo, Engine, ResultRows, Value as EngineValue};
use crate::value;
use crate::{BasaltError, BasaltResult};

/// The result-mode union a query resolves to, before wire encoding.
#[derive(Debug)]
pub enum QueryOutcome {
    /// No rows, no count.
    Empty,
    /// A single primitive projected from a one-column, one-row outcome.
    /// Carries the raw cell plus its column spec; wire encoding wraps it
    /// through the value codec at ordinal 0.
    Single {
        column: DatabaseColumnSpec,
        value: EngineValue,
    },
    /// Zero or more decoded rows with their table descriptors.
    Rows {
        tables: Vec<DatabaseTable>,
        rows: Vec<DatabaseRow>,
    },
    /// A non-zero engine change count.
    Mutation { count: u64 },
    /// Terminal failure.
    Error { code: Code, message: String },
}

type RowHandler = Box<dyn FnMut(&DatabaseRow) + Send>;
type EndHandler = Box<dyn FnOnce(&QueryOutcome) + Send>;
type ErrorHandler = Box<dyn FnMut(&BasaltError) + Send>;

/// Accumulates callbacks, then runs the query to completion with `recv`.
pub struct QueryObserver {
    engine: Arc<dyn Engine>,
    query: DatabaseQuery,
    row_handlers: Vec<RowHandler>,
    end_handlers: Vec<EndHandler>,
    error_handlers: Vec<ErrorHandler>,
}

impl QueryObserver {
    pub fn new(engine: Arc<dyn Engine>, query: DatabaseQuery) -> Self {
        Self {
            engine,
            query,
            row_handlers: Vec::new(),
            end_handlers: Vec::new(),
            error_handlers: Vec::new(),
        }
    }

    pub fn on_row(mut self, handler: impl FnMut(&DatabaseRow) + Send + 'static) -> Self {
        self.row_handlers.push(Box::new(handler));
        self
    }

    pub fn on_end(mut self, handler: impl FnOnce(&QueryOutcome) + Send + 'static) -> Self {
        self.end_handlers.push(Box::new(handler));
        self
    }

    pub fn on_error(mut self, handler: impl FnMut(&BasaltError) + Send + 'static) -> Self {
        self.error_handlers.push(Box::new(handler));
        self
    }

    /// Run the query to completion and return the terminal outcome.
    ///
    /// With the statement flag set the engine's exec path runs: a non-zero
    /// change count is a `Mutation`, zero is `Empty`. Otherwise the
    /// statement is evaluated to a materialized row sequence and resolved
    /// to `Single` or `Rows`. Per-row callbacks fire in row order, on-end
    /// after the last row; an error precludes on-end.
    pub async fn recv(mut self) -> BasaltResult<QueryOutcome> {
        if self.query.spec.is_empty() {
            return Err(BasaltError::InvalidArgument(
                "query has no SQL text".into(),
            ));
        }
        let engine = self.engine.clone();
        let sql = self.query.spec.clone();
        let outcome = if self.query.statement {
            let changes = tokio::task::spawn_blocking(move || engine.execute(&sql))
                .await
                .map_err(|err| BasaltError::Internal(format!("engine task failed: {err}")))?;
            match changes {
                Ok(0) => QueryOutcome::Empty,
                Ok(count) => QueryOutcome::Mutation { count },
                Err(err) => return Ok(self.fail(err.into())),
            }
        } else {
            let result = tokio::task::spawn_blocking(move || engine.query_all(&sql))
                .await
                .map_err(|err| BasaltError::Internal(format!("engine task failed: {err}")))?;
            match result {
                Ok(result) => match self.materialize(result) {
                    Ok(outcome) => outcome,
                    Err(err) => return Ok(self.fail(err)),
                },
                Err(err) => return Ok(self.fail(err.into())),
            }
        };
        for handler in self.end_handlers.drain(..) {
            handler(&outcome);
        }
        Ok(outcome)
    }

    fn materialize(&mut self, result: ResultRows) -> BasaltResult<QueryOutcome> {
        let ResultRows { columns, mut rows } = result;
        if columns.len() == 1 && rows.len() == 1 && rows[0].len() == 1 {
            let value = rows.remove(0).remove(0);
            return Ok(QueryOutcome::Single {
                column: column_spec(0, &columns[0]),
                value,
            });
        }
        let specs: Vec<DatabaseColumnSpec> = columns
            .iter()
            .enumerate()
            .map(|(ordinal, info)| column_spec(ordinal as u32, info))
            .collect();
        let table = DatabaseTable {
            identity: 1,
            name: None,
            columns: specs.clone(),
        };
        let mut decoded_rows = Vec::with_capacity(rows.len());
        for (ordinal, cells) in rows.into_iter().enumerate() {
            let mut values = Vec::with_capacity(cells.len());
            for (spec, cell) in specs.iter().zip(cells) {
                values.push(value::decode(spec, cell)?);
            }
            let row = DatabaseRow {
                table: table.identity,
                ordinal: ordinal as u32,
                values,
            };
            for handler in &mut self.row_handlers {
                handler(&row);
            }
            decoded_rows.push(row);
        }
        Ok(QueryOutcome::Rows {
            tables: vec![table],
            rows: decoded_rows,
        })
    }

    fn fail(&mut self, err: BasaltError) -> QueryOutcome {
        for handler in &mut self.error_handlers {
            handler(&err);
        }
        QueryOutcome::Error {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

fn column_spec(ordinal: u32, info: &ColumnInfo) -> DatabaseColumnSpec {
    let declared = info
        .decl_type
        .as_deref()
        .and_then(value::primitive_type)
        .unwrap_or(DatabaseColumnType::Unspecified);
    DatabaseColumnSpec {
        ordinal,
        name: Some(info.name.clone()),
        r#type: declared as i32,
    }
}
