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

//! The process-scoped connection registry: databases keyed by spec string,
//! connections keyed by numeric token. Ids are monotonic and never reused
//! within a process lifetime.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use rpc::protos::database::{DatabaseConnectionRef, database_connection_ref};

use crate::engine::{Engine, SqliteEngine};
use crate::{BasaltError, BasaltResult};

pub const DEFAULT_DATABASE_NAME: &str = "default";
const MEMORY_SPEC: &str = ":memory:";

/// Map a client-provided database name to its canonical spec string. The
/// mapping is deliberately restrictive: only `default` is recognized, and
/// it rewrites to the in-memory spec.
pub fn spec_for_name(name: &str) -> BasaltResult<&'static str> {
    match name {
        DEFAULT_DATABASE_NAME => Ok(MEMORY_SPEC),
        other => Err(BasaltError::InvalidArgument(format!(
            "unknown database name: {other}"
        ))),
    }
}

/// A database: one engine handle, shared by every connection that
/// references the same spec. Lives until process shutdown.
#[derive(Clone)]
pub struct DatabaseEntry {
    pub id: i64,
    pub spec: String,
    pub engine: Arc<dyn Engine>,
}

/// A connection: a monotonically increasing token, the id of its database,
/// and whether it is still usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectionEntry {
    pub id: i64,
    pub database: i64,
    pub active: bool,
}

#[derive(Default)]
struct State {
    databases_by_spec: HashMap<String, DatabaseEntry>,
    databases_by_id: HashMap<i64, DatabaseEntry>,
    connections: HashMap<i64, ConnectionEntry>,
    // The open connection each database hands out to name-based callers.
    // Kept in lockstep with `connections` so every lookup stays constant
    // time.
    active_by_database: HashMap<i64, i64>,
}

pub struct Registry {
    state: Mutex<State>,
    next_database_id: AtomicI64,
    next_connection_id: AtomicI64,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
            next_database_id: AtomicI64::new(1),
            next_connection_id: AtomicI64::new(1),
        }
    }

    fn state(&self) -> BasaltResult<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| BasaltError::Internal("registry lock is poisoned".into()))
    }

    /// Return an existing active connection for the named database, or
    /// create the database (lazily, on first connect) and a fresh
    /// connection for it.
    pub fn resolve_or_open(&self, name: &str) -> BasaltResult<ConnectionEntry> {
        let spec = spec_for_name(name)?;
        let mut state = self.state()?;
        let database_id = match state.databases_by_spec.get(spec) {
            Some(database) => database.id,
            None => {
                let engine: Arc<dyn Engine> = Arc::new(SqliteEngine::open(spec).map_err(|err| {
                    BasaltError::FailedPrecondition(format!(
                        "unable to open database {spec}: {err}"
                    ))
                })?);
                let id = self.next_database_id.fetch_add(1, Ordering::SeqCst);
                let entry = DatabaseEntry {
                    id,
                    spec: spec.to_string(),
                    engine,
                };
                state.databases_by_spec.insert(spec.to_string(), entry.clone());
                state.databases_by_id.insert(id, entry);
                id
            }
        };
        if let Some(existing) = state
            .active_by_database
            .get(&database_id)
            .and_then(|id| state.connections.get(id))
        {
            return Ok(*existing);
        }
        let id = self.next_connection_id.fetch_add(1, Ordering::SeqCst);
        let connection = ConnectionEntry {
            id,
            database: database_id,
            active: true,
        };
        state.connections.insert(id, connection);
        state.active_by_database.insert(database_id, id);
        Ok(connection)
    }

    /// A token is valid iff the connection exists and is active.
    pub fn validate(&self, token: i64) -> BasaltResult<ConnectionEntry> {
        let state = self.state()?;
        match state.connections.get(&token) {
            Some(connection) if connection.active => Ok(*connection),
            Some(_) => Err(BasaltError::FailedPrecondition(format!(
                "connection {token} is closed"
            ))),
            None => Err(BasaltError::FailedPrecondition(format!(
                "unknown connection token {token}"
            ))),
        }
    }

    /// Dispatch on how the request names its connection: token or inline
    /// database name.
    pub fn resolve_request(
        &self,
        reference: &DatabaseConnectionRef,
    ) -> BasaltResult<ConnectionEntry> {
        match &reference.connection {
            Some(database_connection_ref::Connection::Token(token)) => self.validate(*token),
            Some(database_connection_ref::Connection::Name(name)) => self.resolve_or_open(name),
            None => Err(BasaltError::InvalidArgument(
                "connection reference is empty".into(),
            )),
        }
    }

    /// The engine handle backing a connection's database.
    pub fn engine(&self, database_id: i64) -> BasaltResult<Arc<dyn Engine>> {
        let state = self.state()?;
        state
            .databases_by_id
            .get(&database_id)
            .map(|database| database.engine.clone())
            .ok_or_else(|| {
                BasaltError::FailedPrecondition(format!("database {database_id} is gone"))
            })
    }

    /// Mark a connection inactive and release its database's active slot.
    /// Its token is never reissued.
    pub fn close(&self, token: i64) -> BasaltResult<()> {
        let mut state = self.state()?;
        let Some(connection) = state.connections.get_mut(&token) else {
            return Err(BasaltError::FailedPrecondition(format!(
                "unknown connection token {token}"
            )));
        };
        connection.active = false;
        let database = connection.database;
        if state.active_by_database.get(&database) == Some(&token) {
            state.active_by_database.remove(&database);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn only_default_maps_to_a_spec() {
        assert_eq!(spec_for_name("default").unwrap(), ":memory:");
        let err = spec_for_name("elsewhere").unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
    }

    #[test]
    fn fresh_token_is_immediately_usable() {
        let registry = Registry::new();
        let connection = registry.resolve_or_open("default").unwrap();
        assert!(connection.active);
        assert_eq!(registry.validate(connection.id).unwrap(), connection);
    }

    #[test]
    fn unknown_token_is_a_failed_precondition() {
        let registry = Registry::new();
        let err = registry.validate(42).unwrap_err();
        assert_eq!(err.code(), Code::FailedPrecondition);
    }

    #[test]
    fn active_connections_are_shared_per_database() {
        let registry = Registry::new();
        let first = registry.resolve_or_open("default").unwrap();
        let second = registry.resolve_or_open("default").unwrap();
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn closed_tokens_stay_dead_and_are_never_reused() {
        let registry = Registry::new();
        let first = registry.resolve_or_open("default").unwrap();
        registry.close(first.id).unwrap();

        let err = registry.validate(first.id).unwrap_err();
        assert_eq!(err.code(), Code::FailedPrecondition);

        let replacement = registry.resolve_or_open("default").unwrap();
        assert!(replacement.id > first.id);

        // The replacement takes over the database's active slot.
        let shared = registry.resolve_or_open("default").unwrap();
        assert_eq!(shared.id, replacement.id);
    }

    #[test]
    fn token_and_name_references_both_resolve() {
        let registry = Registry::new();
        let opened = registry.resolve_or_open("default").unwrap();

        let by_token = registry
            .resolve_request(&DatabaseConnectionRef {
                connection: Some(database_connection_ref::Connection::Token(opened.id)),
            })
            .unwrap();
        assert_eq!(by_token.id, opened.id);

        let by_name = registry
            .resolve_request(&DatabaseConnectionRef {
                connection: Some(database_connection_ref::Connection::Name("default".into())),
            })
            .unwrap();
        assert_eq!(by_name.database, opened.database);

        let err = registry
            .resolve_request(&DatabaseConnectionRef { connection: None })
            .unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
    }

    #[test]
    fn engine_handle_is_shared() {
        let registry = Registry::new();
        let connection = registry.resolve_or_open("default").unwrap();
        let engine = registry.engine(connection.database).unwrap();
        engine.execute("CREATE TABLE t (id INTEGER)").unwrap();

        let again = registry.engine(connection.database).unwrap();
        assert_eq!(again.catalog().unwrap().len(), 1);
    }
}
