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

//!
//! The client adapter for the Basalt database service: a thin wrapper that
//! holds a connection token and converts wire envelopes back into the
//! result-mode union. All parse and access decisions live server-side.
//!

mod outcome;

pub use outcome::{DatabaseOutcome, decode_result};
use rpc::protos::database::database_service_client::DatabaseServiceClient;
use rpc::protos::database::{
    DatabaseConnectRequest, DatabaseConnectionRef, DatabaseQuery, DatabaseQueryRequest,
    DatabaseQueryResponse, DatabaseTable, DatabaseTablesRequest, database_connect_request,
    database_connection_ref,
};
use tonic::transport::{Channel, Endpoint};

#[derive(thiserror::Error, Debug)]
pub enum AdapterError {
    #[error("The API call to the Basalt API server returned {0}")]
    Status(#[from] tonic::Status),

    #[error("Unable to reach the Basalt API: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("No connection has been established")]
    NotConnected,

    #[error("Response is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Exec returned an unexpected {0} result")]
    UnexpectedResult(&'static str),
}

/// A connected client plus the token of its open database connection.
pub struct DatabaseAdapter {
    client: DatabaseServiceClient<Channel>,
    connection_token: Option<i64>,
    connected: bool,
}

impl DatabaseAdapter {
    pub fn new(client: DatabaseServiceClient<Channel>) -> Self {
        Self {
            client,
            connection_token: None,
            connected: false,
        }
    }

    /// Dial an endpoint such as `http://127.0.0.1:7432` and wrap the
    /// resulting client.
    pub async fn connect_to(dst: String) -> Result<Self, AdapterError> {
        let channel = Endpoint::from_shared(dst)?.connect().await?;
        Ok(Self::new(DatabaseServiceClient::new(channel)))
    }

    pub fn token(&self) -> Option<i64> {
        self.connection_token
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Open (or reuse) a connection to the named database and remember the
    /// issued token. A failed connect clears any previous token.
    pub async fn connect(&mut self, name: &str) -> Result<i64, AdapterError> {
        let request = DatabaseConnectRequest {
            identifier: Some(database_connect_request::Identifier::Name(name.to_string())),
        };
        match self.client.connect(request).await {
            Ok(response) => {
                let token = response
                    .into_inner()
                    .connection
                    .ok_or(AdapterError::MissingField("connection"))?
                    .id;
                self.connection_token = Some(token);
                self.connected = true;
                Ok(token)
            }
            Err(status) => {
                self.connection_token = None;
                self.connected = false;
                Err(status.into())
            }
        }
    }

    /// Run a statement that is expected to produce no rows. The outcome is
    /// `Empty`, `Mutation`, or a server-reported `Error`; a row-producing
    /// envelope is an adapter error.
    pub async fn exec(&mut self, sql: &str) -> Result<DatabaseOutcome, AdapterError> {
        let response = self.raw_query(sql, true).await?;
        exec_outcome(decode_response(response)?)
    }

    /// Run a query and decode whatever mode it resolves to.
    pub async fn query(&mut self, sql: &str) -> Result<DatabaseOutcome, AdapterError> {
        let response = self.raw_query(sql, false).await?;
        decode_response(response)
    }

    /// Describe the tables of the connected database.
    pub async fn tables(&mut self) -> Result<Vec<DatabaseTable>, AdapterError> {
        let request = DatabaseTablesRequest {
            connection: Some(self.connection_ref()?),
        };
        let response = self.client.tables(request).await?;
        Ok(response.into_inner().table)
    }

    /// The raw query call, for callers that need the wire response itself.
    pub async fn raw_query(
        &mut self,
        sql: &str,
        statement: bool,
    ) -> Result<DatabaseQueryResponse, AdapterError> {
        let request = DatabaseQueryRequest {
            connection: Some(self.connection_ref()?),
            query: Some(DatabaseQuery {
                spec: sql.to_string(),
                statement,
            }),
        };
        let response = self.client.query(request).await?;
        Ok(response.into_inner())
    }

    fn connection_ref(&self) -> Result<DatabaseConnectionRef, AdapterError> {
        let token = self.connection_token.ok_or(AdapterError::NotConnected)?;
        Ok(DatabaseConnectionRef {
            connection: Some(database_connection_ref::Connection::Token(token)),
        })
    }
}

fn decode_response(response: DatabaseQueryResponse) -> Result<DatabaseOutcome, AdapterError> {
    decode_result(response.result.ok_or(AdapterError::MissingField("result"))?)
}

fn exec_outcome(outcome: DatabaseOutcome) -> Result<DatabaseOutcome, AdapterError> {
    match outcome {
        DatabaseOutcome::Single(_) => Err(AdapterError::UnexpectedResult("single")),
        DatabaseOutcome::Rows { .. } => Err(AdapterError::UnexpectedResult("resultset")),
        other => Ok(other),
    }
}
