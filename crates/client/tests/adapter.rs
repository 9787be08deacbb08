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

/*!
 *  Adapter tests against a real in-process server on an ephemeral port.
*/

use std::net::SocketAddr;

use basalt::{AccessLevel, Api};
use basalt_client::{AdapterError, DatabaseAdapter, DatabaseOutcome};
use rpc::protos::database::database_service_server::DatabaseServiceServer;
use rpc::protos::database::{DatabaseValue, Value, database_value, value};
use tokio_stream::wrappers::TcpListenerStream;
use tonic::Code;

async fn spawn_server(granted: AccessLevel) -> SocketAddr {
    let api = Api::new(granted);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(DatabaseServiceServer::new(api))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
    });
    addr
}

async fn connected_adapter(addr: SocketAddr) -> DatabaseAdapter {
    let mut adapter = DatabaseAdapter::connect_to(format!("http://{addr}"))
        .await
        .expect("dial server");
    adapter.connect("default").await.expect("connect default");
    adapter
}

fn string_value(s: &str) -> DatabaseValue {
    DatabaseValue {
        kind: Some(database_value::Kind::Value(Value {
            kind: Some(value::Kind::String(s.into())),
        })),
    }
}

#[tokio::test]
async fn exec_and_query_round_trip() {
    let addr = spawn_server(AccessLevel::Admin).await;
    let mut adapter = connected_adapter(addr).await;
    assert!(adapter.is_connected());
    assert!(adapter.token().is_some());

    let outcome = adapter
        .exec("CREATE TABLE test (id INTEGER PRIMARY KEY, name TEXT)")
        .await
        .unwrap();
    assert_eq!(outcome, DatabaseOutcome::Empty);

    let outcome = adapter
        .exec("INSERT INTO test (id, name) VALUES (1, 'hello'), (2, 'hello2'), (3, 'hello3')")
        .await
        .unwrap();
    assert_eq!(outcome, DatabaseOutcome::Mutation(3));

    let outcome = adapter
        .query("SELECT name FROM test WHERE id = 1")
        .await
        .unwrap();
    assert_eq!(outcome, DatabaseOutcome::Single(string_value("hello")));

    match adapter.query("SELECT * FROM test").await.unwrap() {
        DatabaseOutcome::Rows { tables, rows } => {
            assert_eq!(tables.len(), 1);
            assert_eq!(tables[0].identity, 1);
            assert_eq!(rows.len(), 3);
            for row in &rows {
                assert_eq!(row.values.len(), tables[0].columns.len());
            }
        }
        other => panic!("expected Rows, got {other:?}"),
    }
}

#[tokio::test]
async fn connecting_to_an_unknown_database_fails() {
    let addr = spawn_server(AccessLevel::Admin).await;
    let mut adapter = DatabaseAdapter::connect_to(format!("http://{addr}"))
        .await
        .unwrap();

    let err = adapter.connect("elsewhere").await.unwrap_err();
    match err {
        AdapterError::Status(status) => assert_eq!(status.code(), Code::InvalidArgument),
        other => panic!("expected Status, got {other:?}"),
    }
    assert!(!adapter.is_connected());
    assert!(adapter.token().is_none());
}

#[tokio::test]
async fn queries_without_a_connection_are_rejected_locally() {
    let addr = spawn_server(AccessLevel::Admin).await;
    let mut adapter = DatabaseAdapter::connect_to(format!("http://{addr}"))
        .await
        .unwrap();
    assert!(matches!(
        adapter.query("SELECT 1").await.unwrap_err(),
        AdapterError::NotConnected
    ));
}

#[tokio::test]
async fn invalid_sql_surfaces_the_wire_error() {
    let addr = spawn_server(AccessLevel::Admin).await;
    let mut adapter = connected_adapter(addr).await;
    let err = adapter.exec("not a valid query").await.unwrap_err();
    match err {
        AdapterError::Status(status) => assert_eq!(status.code(), Code::InvalidArgument),
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn writes_are_denied_below_the_grant() {
    let addr = spawn_server(AccessLevel::ReadOnly).await;
    let mut adapter = connected_adapter(addr).await;
    let err = adapter
        .exec("INSERT INTO test (id) VALUES (1)")
        .await
        .unwrap_err();
    match err {
        AdapterError::Status(status) => assert_eq!(status.code(), Code::PermissionDenied),
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn tables_lists_typed_descriptors() {
    let addr = spawn_server(AccessLevel::Admin).await;
    let mut adapter = connected_adapter(addr).await;
    adapter
        .exec("CREATE TABLE test (id INTEGER PRIMARY KEY, name TEXT)")
        .await
        .unwrap();

    let tables = adapter.tables().await.unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].name.as_deref(), Some("test"));
    assert_eq!(tables[0].columns.len(), 2);
}
