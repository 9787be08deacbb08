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

//! Builds a connected `DatabaseServiceClient` from host/port/TLS/prefix
//! settings. The prefix, when present, is applied as a request-path origin
//! so the service can sit behind a routing proxy.

use http::Uri;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

use crate::protos::database::database_service_client::DatabaseServiceClient;

#[derive(thiserror::Error, Debug)]
pub enum ConnectorError {
    #[error("Invalid endpoint URI: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),

    #[error("Unable to reach the Basalt API: {0}")]
    Transport(#[from] tonic::transport::Error),
}

/// Connect to a Basalt database service endpoint.
pub async fn connect(
    host: &str,
    port: u16,
    tls: bool,
    prefix: &str,
) -> Result<DatabaseServiceClient<Channel>, ConnectorError> {
    let scheme = if tls { "https" } else { "http" };
    let mut endpoint = Endpoint::from_shared(format!("{scheme}://{host}:{port}"))?;
    if tls {
        endpoint = endpoint.tls_config(ClientTlsConfig::new().with_native_roots())?;
    }
    let channel = endpoint.connect().await?;
    if prefix.is_empty() {
        Ok(DatabaseServiceClient::new(channel))
    } else {
        let origin: Uri = format!("{scheme}://{host}:{port}{prefix}").parse()?;
        Ok(DatabaseServiceClient::with_origin(channel, origin))
    }
}
