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

//! The embedded SQL engine, expressed as a small capability set so the
//! service layer never talks to the SQLite handle directly. One handle per
//! database; concurrent statements are serialized by the handle's own lock.

use std::sync::{Mutex, MutexGuard};

pub use rusqlite::types::Value;

#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Engine handle lock is poisoned")]
    Poisoned,
}

/// An ordered result column: the projected name and, when the engine knows
/// it, the declared type of the underlying schema column.
#[derive(Clone, Debug)]
pub struct ColumnInfo {
    pub name: String,
    pub decl_type: Option<String>,
}

/// A fully materialized query result.
#[derive(Debug)]
pub struct ResultRows {
    pub columns: Vec<ColumnInfo>,
    pub rows: Vec<Vec<Value>>,
}

/// One table entry from the engine's catalog: its name and the SQL text
/// that created it.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    pub name: String,
    pub sql: String,
}

pub trait Engine: Send + Sync + 'static {
    /// Run one or more statements, returning the engine's change count.
    /// The count is only touched by data modification, so schema-only
    /// batches on a fresh handle report zero.
    fn execute(&self, sql: &str) -> Result<u64, EngineError>;

    /// Prepare a statement, evaluate it to a materialized row sequence,
    /// and capture the ordered column names.
    fn query_all(&self, sql: &str) -> Result<ResultRows, EngineError>;

    /// List the catalog: every user table and its creation SQL, ordered
    /// by table name.
    fn catalog(&self) -> Result<Vec<CatalogEntry>, EngineError>;
}

pub struct SqliteEngine {
    conn: Mutex<rusqlite::Connection>,
}

impl SqliteEngine {
    pub fn open(spec: &str) -> Result<Self, EngineError> {
        let conn = rusqlite::Connection::open(spec)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, rusqlite::Connection>, EngineError> {
        self.conn.lock().map_err(|_| EngineError::Poisoned)
    }
}

impl Engine for SqliteEngine {
    fn execute(&self, sql: &str) -> Result<u64, EngineError> {
        let conn = self.lock()?;
        conn.execute_batch(sql)?;
        Ok(conn.changes())
    }

    fn query_all(&self, sql: &str) -> Result<ResultRows, EngineError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql)?;
        let columns: Vec<ColumnInfo> = stmt
            .columns()
            .iter()
            .map(|column| ColumnInfo {
                name: column.name().to_string(),
                decl_type: column.decl_type().map(str::to_string),
            })
            .collect();
        let mut out = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(columns.len());
            for ordinal in 0..columns.len() {
                values.push(row.get::<_, Value>(ordinal)?);
            }
            out.push(values);
        }
        Ok(ResultRows { columns, rows: out })
    }

    fn catalog(&self) -> Result<Vec<CatalogEntry>, EngineError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT name, sql FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )?;
        let mut entries = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let name: String = row.get(0)?;
            // Some internal entries carry no SQL text; they are not tables
            // a client can reflect.
            let sql: Option<String> = row.get(1)?;
            if let Some(sql) = sql {
                entries.push(CatalogEntry { name, sql });
            }
        }
        Ok(entries)
    }
}
