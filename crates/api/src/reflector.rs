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

//! The table reflector: reads the engine's catalog, re-parses each table's
//! creation SQL, and produces column-typed table descriptors. Indexes,
//! triggers, and views are not exposed.

use rpc::protos::database::{DatabaseColumnSpec, DatabaseTable};
use sqlparser::ast::Statement;

use crate::engine::{CatalogEntry, Engine};
use crate::sql::ParsedQuery;
use crate::value;
use crate::{BasaltError, BasaltResult};

/// Describe every table in the connection's database, ordered by name.
/// Identity is scoped to this response and starts at 1.
pub fn tables(engine: &dyn Engine) -> BasaltResult<Vec<DatabaseTable>> {
    engine
        .catalog()?
        .iter()
        .enumerate()
        .map(|(index, entry)| describe(index as u32 + 1, entry))
        .collect()
}

fn describe(identity: u32, entry: &CatalogEntry) -> BasaltResult<DatabaseTable> {
    let parsed = ParsedQuery::parse(&entry.sql)?;
    let [statement] = parsed.statements() else {
        return Err(BasaltError::InvalidArgument(format!(
            "table {}: creation SQL holds {} statements, expected one",
            entry.name,
            parsed.statements().len()
        )));
    };
    let Statement::CreateTable(create) = &statement.statement else {
        return Err(BasaltError::InvalidArgument(format!(
            "table {}: creation SQL is not a CREATE TABLE statement",
            entry.name
        )));
    };
    let declared_name = create.name.to_string();
    if !declared_name.eq_ignore_ascii_case(&entry.name) {
        return Err(BasaltError::InvalidArgument(format!(
            "table {}: creation SQL declares table {declared_name}",
            entry.name
        )));
    }
    let columns = create
        .columns
        .iter()
        .enumerate()
        .map(|(ordinal, column)| {
            let declared = column.data_type.to_string();
            let primitive = value::primitive_type(&declared).ok_or_else(|| {
                BasaltError::InvalidArgument(format!(
                    "table {}: column {} has unsupported type {declared}",
                    entry.name, column.name
                ))
            })?;
            Ok(DatabaseColumnSpec {
                ordinal: ordinal as u32,
                name: Some(column.name.value.clone()),
                r#type: primitive as i32,
            })
        })
        .collect::<BasaltResult<Vec<_>>>()?;
    Ok(DatabaseTable {
        identity,
        name: Some(entry.name.clone()),
        columns,
    })
}

#[cfg(test)]
mod tests {
    use rpc::protos::database::DatabaseColumnType;

    use super::*;
    use crate::engine::SqliteEngine;

    fn engine_with(sql: &[&str]) -> SqliteEngine {
        let engine = SqliteEngine::open(":memory:").expect("in-memory open");
        for statement in sql {
            engine.execute(statement).unwrap();
        }
        engine
    }

    #[test]
    fn descriptors_are_typed_and_ordered_by_name() {
        let engine = engine_with(&[
            "CREATE TABLE zebra (payload BLOB, weight REAL)",
            "CREATE TABLE apple (id INTEGER, name TEXT)",
        ]);
        let tables = tables(&engine).unwrap();
        assert_eq!(tables.len(), 2);

        assert_eq!(tables[0].identity, 1);
        assert_eq!(tables[0].name.as_deref(), Some("apple"));
        assert_eq!(tables[0].columns[0].name.as_deref(), Some("id"));
        assert_eq!(tables[0].columns[0].r#type(), DatabaseColumnType::Integer);
        assert_eq!(tables[0].columns[1].r#type(), DatabaseColumnType::Text);

        assert_eq!(tables[1].identity, 2);
        assert_eq!(tables[1].name.as_deref(), Some("zebra"));
        assert_eq!(tables[1].columns[0].r#type(), DatabaseColumnType::Blob);
        assert_eq!(tables[1].columns[1].r#type(), DatabaseColumnType::Real);
    }

    #[test]
    fn column_ordinals_follow_declaration_order() {
        let engine = engine_with(&["CREATE TABLE t (a TEXT, b INTEGER, c REAL)"]);
        let tables = tables(&engine).unwrap();
        let ordinals: Vec<u32> = tables[0].columns.iter().map(|c| c.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
    }

    #[test]
    fn unsupported_declared_types_fail_loudly() {
        let engine = engine_with(&["CREATE TABLE t (id INT)"]);
        let err = tables(&engine).unwrap_err();
        assert_eq!(err.code(), tonic::Code::InvalidArgument);
        assert!(err.to_string().contains("INT"), "{err}");
    }

    #[test]
    fn an_empty_catalog_reflects_to_nothing() {
        let engine = engine_with(&[]);
        assert!(tables(&engine).unwrap().is_empty());
    }
}
