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

//! Shared fixtures for handler-level tests.

use rpc::protos::database::{
    DatabaseConnectRequest, DatabaseConnectionRef, DatabaseQuery, DatabaseQueryRequest,
    DatabaseResult, database_connect_request, database_connection_ref,
};
use tonic::{Request, Status};

use crate::api::Api;
use crate::handlers;
use crate::sql::AccessLevel;

pub(crate) struct TestEnv {
    pub api: Api,
}

pub(crate) fn create_test_env() -> TestEnv {
    create_test_env_with_access(AccessLevel::Admin)
}

pub(crate) fn create_test_env_with_access(granted: AccessLevel) -> TestEnv {
    TestEnv {
        api: Api::new(granted),
    }
}

pub(crate) fn token_ref(token: i64) -> DatabaseConnectionRef {
    DatabaseConnectionRef {
        connection: Some(database_connection_ref::Connection::Token(token)),
    }
}

/// Connect to the default database and return the issued token.
pub(crate) async fn connect_default(api: &Api) -> i64 {
    let req = Request::new(DatabaseConnectRequest {
        identifier: Some(database_connect_request::Identifier::Name("default".into())),
    });
    let resp = handlers::database::connect(api, req)
        .await
        .expect("connect default");
    resp.into_inner().connection.expect("connection present").id
}

/// Run a query through the handler, returning the wire result envelope.
pub(crate) async fn run_query(
    api: &Api,
    token: i64,
    sql: &str,
    statement: bool,
) -> Result<DatabaseResult, Status> {
    let req = Request::new(DatabaseQueryRequest {
        connection: Some(token_ref(token)),
        query: Some(DatabaseQuery {
            spec: sql.into(),
            statement,
        }),
    });
    let resp = handlers::database::query(api, req).await?;
    Ok(resp.into_inner().result.expect("result present"))
}
