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

//! SQL parsing and access-level classification.
//!
//! Every statement the service accepts falls into exactly one query class;
//! anything the classifier does not recognize is a parse failure, not a
//! pass-through. A compound query requires the maximum access level across
//! its statements.

use std::fmt;

use sqlparser::ast::Statement;
use sqlparser::dialect::SQLiteDialect;
use sqlparser::parser::Parser;

use crate::{BasaltError, BasaltResult};

/// Coarse capability granted to a caller. The order is total:
/// `Anonymous < ReadOnly < ReadWrite < Admin`.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccessLevel {
    Anonymous,
    ReadOnly,
    ReadWrite,
    Admin,
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessLevel::Anonymous => "anonymous",
            AccessLevel::ReadOnly => "read-only",
            AccessLevel::ReadWrite => "read-write",
            AccessLevel::Admin => "admin",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryClass {
    /// `SELECT`.
    Dql,
    /// `INSERT`, `UPDATE`, `DELETE`.
    Dml,
    /// `CREATE`, `ALTER`, `DROP`.
    Ddl,
}

impl QueryClass {
    pub fn required_access(self) -> AccessLevel {
        match self {
            QueryClass::Dql => AccessLevel::ReadOnly,
            QueryClass::Dml => AccessLevel::ReadWrite,
            QueryClass::Ddl => AccessLevel::Admin,
        }
    }
}

/// One parsed statement together with its class. `canonical_sql` is the
/// re-serialized form, which round-trips through the parser.
#[derive(Debug)]
pub struct ClassifiedStatement {
    pub statement: Statement,
    pub class: QueryClass,
}

impl ClassifiedStatement {
    pub fn canonical_sql(&self) -> String {
        self.statement.to_string()
    }
}

/// A parsed query: one or more classified statements.
#[derive(Debug)]
pub struct ParsedQuery {
    statements: Vec<ClassifiedStatement>,
}

impl ParsedQuery {
    pub fn parse(sql: &str) -> BasaltResult<Self> {
        let statements = Parser::parse_sql(&SQLiteDialect {}, sql)
            .map_err(|err| BasaltError::Parse(err.to_string()))?;
        if statements.is_empty() {
            return Err(BasaltError::Parse("query contains no statements".into()));
        }
        let statements = statements
            .into_iter()
            .enumerate()
            .map(|(index, statement)| {
                let class = classify(index, &statement)?;
                Ok(ClassifiedStatement { statement, class })
            })
            .collect::<BasaltResult<Vec<_>>>()?;
        Ok(Self { statements })
    }

    pub fn statements(&self) -> &[ClassifiedStatement] {
        &self.statements
    }

    /// The maximum access level any statement in the query demands.
    pub fn required_access(&self) -> AccessLevel {
        self.statements
            .iter()
            .map(|s| s.class.required_access())
            .max()
            .unwrap_or(AccessLevel::Anonymous)
    }

    /// A query is permitted at level `granted` iff every statement's
    /// requirement is at or below it. Denials name the offending
    /// statement by ordinal.
    pub fn check_access(&self, granted: AccessLevel) -> BasaltResult<()> {
        for (index, statement) in self.statements.iter().enumerate() {
            let required = statement.class.required_access();
            if required > granted {
                return Err(BasaltError::PermissionDenied(format!(
                    "statement {} requires {} access, caller is limited to {}",
                    index + 1,
                    required,
                    granted
                )));
            }
        }
        Ok(())
    }
}

fn classify(index: usize, statement: &Statement) -> BasaltResult<QueryClass> {
    match statement {
        Statement::Query(_) => Ok(QueryClass::Dql),
        Statement::Insert { .. } | Statement::Update { .. } | Statement::Delete { .. } => {
            Ok(QueryClass::Dml)
        }
        Statement::CreateTable { .. }
        | Statement::CreateView { .. }
        | Statement::CreateIndex { .. }
        | Statement::AlterTable { .. }
        | Statement::Drop { .. } => Ok(QueryClass::Ddl),
        other => Err(BasaltError::Parse(format!(
            "statement {} is not a supported DQL/DML/DDL statement: {other}",
            index + 1
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_is_dql_read_only() {
        let query = ParsedQuery::parse("SELECT 1").unwrap();
        assert_eq!(query.statements().len(), 1);
        assert_eq!(query.statements()[0].class, QueryClass::Dql);
        assert_eq!(query.required_access(), AccessLevel::ReadOnly);
        assert!(query.check_access(AccessLevel::Anonymous).is_err());
        assert!(query.check_access(AccessLevel::ReadOnly).is_ok());
    }

    #[test]
    fn compound_query_takes_the_maximum() {
        let query =
            ParsedQuery::parse("INSERT INTO x (a, b, c) VALUES (1, 2, 3); SELECT * FROM x")
                .unwrap();
        let classes: Vec<QueryClass> = query.statements().iter().map(|s| s.class).collect();
        assert_eq!(classes, vec![QueryClass::Dml, QueryClass::Dql]);
        assert_eq!(query.required_access(), AccessLevel::ReadWrite);
    }

    #[test]
    fn ddl_statements_require_admin() {
        for sql in [
            "CREATE TABLE t (id INTEGER)",
            "ALTER TABLE t ADD COLUMN c TEXT",
            "DROP TABLE t",
        ] {
            let query = ParsedQuery::parse(sql).unwrap();
            assert_eq!(query.statements()[0].class, QueryClass::Ddl, "{sql}");
            assert_eq!(query.required_access(), AccessLevel::Admin, "{sql}");
        }
    }

    #[test]
    fn every_parsed_statement_has_exactly_one_class() {
        let query = ParsedQuery::parse(
            "SELECT 1; INSERT INTO t (a) VALUES (1); UPDATE t SET a = 2; \
             DELETE FROM t; CREATE TABLE u (id INTEGER); DROP TABLE u",
        )
        .unwrap();
        assert_eq!(query.statements().len(), 6);
    }

    #[test]
    fn access_check_matches_the_lattice() {
        let levels = [
            AccessLevel::Anonymous,
            AccessLevel::ReadOnly,
            AccessLevel::ReadWrite,
            AccessLevel::Admin,
        ];
        let cases = [
            ("SELECT 1", AccessLevel::ReadOnly),
            ("INSERT INTO t (a) VALUES (1)", AccessLevel::ReadWrite),
            ("DROP TABLE t", AccessLevel::Admin),
        ];
        for (sql, required) in cases {
            let query = ParsedQuery::parse(sql).unwrap();
            for granted in levels {
                assert_eq!(
                    query.check_access(granted).is_ok(),
                    required <= granted,
                    "{sql} at {granted}"
                );
            }
        }
    }

    #[test]
    fn denial_names_the_offending_statement() {
        let query = ParsedQuery::parse("SELECT 1; DROP TABLE x").unwrap();
        let err = query.check_access(AccessLevel::ReadOnly).unwrap_err();
        assert!(err.to_string().contains("statement 2"), "{err}");
    }

    #[test]
    fn empty_and_separator_only_queries_fail() {
        assert!(ParsedQuery::parse("").is_err());
        assert!(ParsedQuery::parse(";").is_err());
        assert!(ParsedQuery::parse("   ").is_err());
    }

    #[test]
    fn garbage_fails_to_parse() {
        assert!(ParsedQuery::parse("not a valid query").is_err());
    }

    #[test]
    fn unsupported_statement_kinds_are_rejected_by_ordinal() {
        let err = ParsedQuery::parse("SELECT 1; PRAGMA user_version").unwrap_err();
        assert!(err.to_string().contains("statement 2"), "{err}");
    }

    #[test]
    fn canonical_form_round_trips() {
        let query = ParsedQuery::parse("select id, name from test where id = 1").unwrap();
        let canonical = query.statements()[0].canonical_sql();
        let reparsed = ParsedQuery::parse(&canonical).unwrap();
        assert_eq!(reparsed.statements()[0].canonical_sql(), canonical);
    }
}
