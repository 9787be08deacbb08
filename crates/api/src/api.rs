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

//! The service state and the gRPC dispatch surface. Request handling
//! itself lives in `handlers::database`; this type only routes.

use std::sync::Arc;

use rpc::protos::database::database_service_server::DatabaseService;
use rpc::protos::database::{
    DatabaseConnectRequest, DatabaseConnectResponse, DatabaseListRequest, DatabaseListResponse,
    DatabaseListenRequest, DatabaseQueryRequest, DatabaseQueryResponse, DatabaseTablesRequest,
    DatabaseTablesResponse,
};
use tonic::{Request, Response, Status};
use tracing::debug;

use crate::handlers;
use crate::registry::Registry;
use crate::sql::AccessLevel;

pub struct Api {
    registry: Arc<Registry>,
    granted_access: AccessLevel,
}

impl Api {
    pub fn new(granted_access: AccessLevel) -> Self {
        Self {
            registry: Arc::new(Registry::new()),
            granted_access,
        }
    }

    pub(crate) fn registry(&self) -> &Registry {
        &self.registry
    }

    pub(crate) fn granted_access(&self) -> AccessLevel {
        self.granted_access
    }
}

pub(crate) fn log_request_data<T: std::fmt::Debug>(request: &Request<T>) {
    debug!(remote_addr = ?request.remote_addr(), request = ?request.get_ref(), "handling request");
}

#[tonic::async_trait]
impl DatabaseService for Api {
    async fn connect(
        &self,
        request: Request<DatabaseConnectRequest>,
    ) -> Result<Response<DatabaseConnectResponse>, Status> {
        handlers::database::connect(self, request).await
    }

    async fn query(
        &self,
        request: Request<DatabaseQueryRequest>,
    ) -> Result<Response<DatabaseQueryResponse>, Status> {
        handlers::database::query(self, request).await
    }

    async fn list(
        &self,
        request: Request<DatabaseListRequest>,
    ) -> Result<Response<DatabaseListResponse>, Status> {
        handlers::database::list(self, request).await
    }

    async fn tables(
        &self,
        request: Request<DatabaseTablesRequest>,
    ) -> Result<Response<DatabaseTablesResponse>, Status> {
        handlers::database::tables(self, request).await
    }

    type ListenStream = handlers::database::ListenStream;

    async fn listen(
        &self,
        request: Request<DatabaseListenRequest>,
    ) -> Result<Response<Self::ListenStream>, Status> {
        handlers::database::listen(self, request).await
    }
}
