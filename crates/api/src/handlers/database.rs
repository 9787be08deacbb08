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

//! Request handlers for the database service.

use std::sync::{Arc, Mutex};

use rpc::protos::database::{
    DatabaseConnectRequest, DatabaseConnectResponse, DatabaseConnection, DatabaseInfo,
    DatabaseListRequest, DatabaseListResponse, DatabaseListenEvent, DatabaseListenRequest,
    DatabaseQueryRequest, DatabaseQueryResponse, DatabaseResult, DatabaseTablesRequest,
    DatabaseTablesResponse, database_connect_request,
};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};
use tracing::debug;

use crate::api::{Api, log_request_data};
use crate::observer::QueryObserver;
use crate::registry::DEFAULT_DATABASE_NAME;
use crate::sql::ParsedQuery;
use crate::{BasaltError, BasaltResult, envelope, reflector};

pub(crate) async fn connect(
    api: &Api,
    request: Request<DatabaseConnectRequest>,
) -> Result<Response<DatabaseConnectResponse>, Status> {
    log_request_data(&request);
    let req = request.into_inner();
    let Some(database_connect_request::Identifier::Name(name)) = req.identifier else {
        return Err(Status::invalid_argument(
            "connect request carries no database name",
        ));
    };
    let connection = api.registry().resolve_or_open(&name)?;
    Ok(Response::new(DatabaseConnectResponse {
        connection: Some(DatabaseConnection { id: connection.id }),
    }))
}

pub(crate) async fn query(
    api: &Api,
    request: Request<DatabaseQueryRequest>,
) -> Result<Response<DatabaseQueryResponse>, Status> {
    log_request_data(&request);
    let req = request.into_inner();
    let reference = req
        .connection
        .ok_or_else(|| Status::invalid_argument("query request carries no connection"))?;
    let query = req
        .query
        .ok_or_else(|| Status::invalid_argument("query request carries no query"))?;
    let connection = api.registry().resolve_request(&reference)?;
    let parsed = ParsedQuery::parse(&query.spec)?;
    parsed.check_access(api.granted_access())?;
    let engine = api.registry().engine(connection.database)?;

    let captured_error: Arc<Mutex<Option<Status>>> = Arc::new(Mutex::new(None));
    let captured_result: Arc<Mutex<Option<BasaltResult<DatabaseResult>>>> =
        Arc::new(Mutex::new(None));
    let observer = QueryObserver::new(engine, query)
        .on_row(|row| debug!(table = row.table, ordinal = row.ordinal, "query row"))
        .on_end({
            let slot = captured_result.clone();
            move |outcome| {
                if let Ok(mut slot) = slot.lock() {
                    *slot = Some(envelope::encode(outcome));
                }
            }
        })
        .on_error({
            let slot = captured_error.clone();
            move |err| {
                if let Ok(mut slot) = slot.lock() {
                    *slot = Some(Status::new(err.code(), err.to_string()));
                }
            }
        });
    observer.recv().await?;

    if let Some(status) = captured_error.lock().ok().and_then(|mut slot| slot.take()) {
        return Err(status);
    }
    let result = captured_result
        .lock()
        .ok()
        .and_then(|mut slot| slot.take())
        .ok_or_else(|| Status::internal("query produced no terminal result"))??;
    Ok(Response::new(DatabaseQueryResponse {
        result: Some(result),
    }))
}

pub(crate) async fn list(
    api: &Api,
    request: Request<DatabaseListRequest>,
) -> Result<Response<DatabaseListResponse>, Status> {
    log_request_data(&request);
    let req = request.into_inner();
    let reference = req
        .connection
        .ok_or_else(|| Status::invalid_argument("list request carries no connection"))?;
    api.registry().resolve_request(&reference)?;
    // The name table only recognizes `default`, so the listing has exactly
    // one entry.
    Ok(Response::new(DatabaseListResponse {
        database: vec![DatabaseInfo {
            name: DEFAULT_DATABASE_NAME.to_string(),
        }],
    }))
}

pub(crate) async fn tables(
    api: &Api,
    request: Request<DatabaseTablesRequest>,
) -> Result<Response<DatabaseTablesResponse>, Status> {
    log_request_data(&request);
    let req = request.into_inner();
    let reference = req
        .connection
        .ok_or_else(|| Status::invalid_argument("tables request carries no connection"))?;
    let connection = api.registry().resolve_request(&reference)?;
    let engine = api.registry().engine(connection.database)?;
    let table = reflector::tables(engine.as_ref())?;
    Ok(Response::new(DatabaseTablesResponse { table }))
}

pub(crate) type ListenStream = ReceiverStream<Result<DatabaseListenEvent, Status>>;

pub(crate) async fn listen(
    api: &Api,
    request: Request<DatabaseListenRequest>,
) -> Result<Response<ListenStream>, Status> {
    log_request_data(&request);
    let req = request.into_inner();
    let reference = req
        .connection
        .ok_or_else(|| Status::invalid_argument("listen request carries no connection"))?;
    api.registry().resolve_request(&reference)?;
    let (tx, rx) = mpsc::channel(4);
    tokio::spawn(async move {
        // A dropped receiver means the client cancelled; the producer
        // stops between events.
        if tx.send(Ok(DatabaseListenEvent {})).await.is_err() {
            return;
        }
        let _ = tx
            .send(Err(BasaltError::Unimplemented(
                "database listen events are not implemented".into(),
            )
            .into()))
            .await;
    });
    Ok(Response::new(ReceiverStream::new(rx)))
}
