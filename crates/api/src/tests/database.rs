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
 *  RPC handler tests for the database service.
*/

use rpc::protos::database::{
    DatabaseColumnType, DatabaseConnectRequest, DatabaseListRequest, DatabaseListenRequest,
    DatabaseQuery, DatabaseQueryRequest, DatabaseResult, DatabaseTablesRequest,
    database_connect_request, database_result, database_value, value,
};
use tokio_stream::StreamExt;
use tonic::{Code, Request};

use crate::handlers;
use crate::sql::AccessLevel;
use crate::tests::common::{
    connect_default, create_test_env, create_test_env_with_access, run_query, token_ref,
};

fn single_kind(result: &DatabaseResult) -> &value::Kind {
    match &result.outcome {
        Some(database_result::Outcome::Single(single)) => match &single.value {
            Some(rpc::protos::database::DatabaseValue {
                kind:
                    Some(database_value::Kind::Value(rpc::protos::database::Value {
                        kind: Some(kind),
                    })),
            }) => kind,
            other => panic!("unexpected single value: {other:?}"),
        },
        other => panic!("expected Single, got {other:?}"),
    }
}

#[tokio::test]
async fn exec_create_then_insert() {
    let env = create_test_env();
    let token = connect_default(&env.api).await;

    // Schema changes carry no change count.
    let result = run_query(
        &env.api,
        token,
        "CREATE TABLE test (id INTEGER PRIMARY KEY, name TEXT)",
        true,
    )
    .await
    .unwrap();
    assert!(result.ok);
    assert_eq!(result.outcome, Some(database_result::Outcome::Empty(true)));

    // A single-row insert reports exactly one modified row.
    let result = run_query(
        &env.api,
        token,
        "INSERT INTO test (id, name) VALUES (1, 'a')",
        true,
    )
    .await
    .unwrap();
    match result.outcome {
        Some(database_result::Outcome::Mutation(mutation)) => {
            assert_eq!(mutation.rows_modified, 1);
        }
        other => panic!("expected Mutation, got {other:?}"),
    }
}

#[tokio::test]
async fn one_cell_projections_come_back_single() {
    let env = create_test_env();
    let token = connect_default(&env.api).await;
    run_query(
        &env.api,
        token,
        "CREATE TABLE test (id INTEGER PRIMARY KEY, name TEXT)",
        true,
    )
    .await
    .unwrap();
    run_query(
        &env.api,
        token,
        "INSERT INTO test (id, name) VALUES (1, 'hello')",
        true,
    )
    .await
    .unwrap();

    let result = run_query(&env.api, token, "SELECT name FROM test LIMIT 1", false)
        .await
        .unwrap();
    assert!(result.ok);
    assert_eq!(single_kind(&result), &value::Kind::String("hello".into()));

    let result = run_query(&env.api, token, "SELECT 1", false).await.unwrap();
    assert_eq!(single_kind(&result), &value::Kind::Number(1.0));
}

#[tokio::test]
async fn multi_row_projections_come_back_as_a_result_set() {
    let env = create_test_env();
    let token = connect_default(&env.api).await;
    run_query(
        &env.api,
        token,
        "CREATE TABLE test (id INTEGER PRIMARY KEY, name TEXT)",
        true,
    )
    .await
    .unwrap();
    run_query(
        &env.api,
        token,
        "INSERT INTO test (id, name) VALUES (1, 'hello'), (2, 'hello2'), (3, 'hello3')",
        true,
    )
    .await
    .unwrap();

    let result = run_query(&env.api, token, "SELECT * FROM test", false)
        .await
        .unwrap();
    let Some(database_result::Outcome::Resultset(set)) = result.outcome else {
        panic!("expected Resultset, got {:?}", result.outcome);
    };
    assert_eq!(set.tables.len(), 1);
    let table = &set.tables[0];
    assert_eq!(table.identity, 1);
    assert_eq!(table.name, None);
    assert_eq!(table.columns[0].r#type(), DatabaseColumnType::Integer);
    assert_eq!(table.columns[1].r#type(), DatabaseColumnType::Text);

    assert_eq!(set.rows.len(), 3);
    for (index, row) in set.rows.iter().enumerate() {
        assert_eq!(row.table, table.identity);
        assert_eq!(row.ordinal, index as u32);
        assert_eq!(row.values.len(), table.columns.len());
    }
}

#[tokio::test]
async fn invalid_sql_is_an_invalid_argument() {
    let env = create_test_env();
    let token = connect_default(&env.api).await;
    let err = run_query(&env.api, token, "not a valid query", true)
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn only_default_is_a_known_database() {
    let env = create_test_env();
    let req = Request::new(DatabaseConnectRequest {
        identifier: Some(database_connect_request::Identifier::Name(
            "elsewhere".into(),
        )),
    });
    let err = handlers::database::connect(&env.api, req).await.unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn connect_without_identifier_is_rejected() {
    let env = create_test_env();
    let req = Request::new(DatabaseConnectRequest { identifier: None });
    let err = handlers::database::connect(&env.api, req).await.unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn unknown_and_closed_tokens_fail_the_precondition() {
    let env = create_test_env();
    let err = run_query(&env.api, 9999, "SELECT 1", false)
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::FailedPrecondition);

    let token = connect_default(&env.api).await;
    assert!(run_query(&env.api, token, "SELECT 1", false).await.is_ok());

    env.api.registry().close(token).unwrap();
    let err = run_query(&env.api, token, "SELECT 1", false)
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::FailedPrecondition);
}

#[tokio::test]
async fn queries_over_the_grant_are_denied() {
    let env = create_test_env_with_access(AccessLevel::ReadOnly);
    let token = connect_default(&env.api).await;

    let err = run_query(
        &env.api,
        token,
        "INSERT INTO test (id) VALUES (1)",
        true,
    )
    .await
    .unwrap_err();
    assert_eq!(err.code(), Code::PermissionDenied);

    // Reads stay permitted at the same grant.
    assert!(run_query(&env.api, token, "SELECT 1", false).await.is_ok());
}

#[tokio::test]
async fn query_requests_must_name_a_connection_and_a_query() {
    let env = create_test_env();
    let err = handlers::database::query(
        &env.api,
        Request::new(DatabaseQueryRequest {
            connection: None,
            query: Some(DatabaseQuery {
                spec: "SELECT 1".into(),
                statement: false,
            }),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);

    let token = connect_default(&env.api).await;
    let err = handlers::database::query(
        &env.api,
        Request::new(DatabaseQueryRequest {
            connection: Some(token_ref(token)),
            query: None,
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn list_returns_the_default_database() {
    let env = create_test_env();
    let token = connect_default(&env.api).await;
    let resp = handlers::database::list(
        &env.api,
        Request::new(DatabaseListRequest {
            connection: Some(token_ref(token)),
        }),
    )
    .await
    .unwrap();
    let databases = resp.into_inner().database;
    assert_eq!(databases.len(), 1);
    assert_eq!(databases[0].name, "default");
}

#[tokio::test]
async fn tables_reflects_the_schema() {
    let env = create_test_env();
    let token = connect_default(&env.api).await;
    run_query(
        &env.api,
        token,
        "CREATE TABLE test (id INTEGER PRIMARY KEY, name TEXT)",
        true,
    )
    .await
    .unwrap();

    let resp = handlers::database::tables(
        &env.api,
        Request::new(DatabaseTablesRequest {
            connection: Some(token_ref(token)),
        }),
    )
    .await
    .unwrap();
    let tables = resp.into_inner().table;
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].name.as_deref(), Some("test"));
    assert_eq!(tables[0].columns.len(), 2);
}

#[tokio::test]
async fn listen_emits_one_event_then_fails_unimplemented() {
    let env = create_test_env();
    let token = connect_default(&env.api).await;
    let resp = handlers::database::listen(
        &env.api,
        Request::new(DatabaseListenRequest {
            connection: Some(token_ref(token)),
        }),
    )
    .await
    .unwrap();

    let mut stream = resp.into_inner();
    let first = stream.next().await.expect("one event");
    assert!(first.is_ok());
    let second = stream.next().await.expect("terminal status");
    assert_eq!(second.unwrap_err().code(), Code::Unimplemented);
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn inline_names_open_a_connection_on_first_use() {
    let env = create_test_env();
    let req = Request::new(DatabaseQueryRequest {
        connection: Some(rpc::protos::database::DatabaseConnectionRef {
            connection: Some(
                rpc::protos::database::database_connection_ref::Connection::Name(
                    "default".into(),
                ),
            ),
        }),
        query: Some(DatabaseQuery {
            spec: "SELECT 1".into(),
            statement: false,
        }),
    });
    let resp = handlers::database::query(&env.api, req).await.unwrap();
    let result = resp.into_inner().result.unwrap();
    assert_eq!(single_kind(&result), &value::Kind::Number(1.0));
}
