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

use std::net::{IpAddr, SocketAddr};

use rpc::protos::database::database_service_server::DatabaseServiceServer;
use tracing::info;

use crate::api::Api;

pub(crate) async fn serve(api: Api, host: IpAddr, port: u16) -> eyre::Result<()> {
    let addr = SocketAddr::new(host, port);
    info!(%addr, "basalt database service listening");
    tonic::transport::Server::builder()
        .add_service(DatabaseServiceServer::new(api))
        .serve(addr)
        .await?;
    Ok(())
}
