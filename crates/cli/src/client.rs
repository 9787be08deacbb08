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

//! The `basalt client` subcommands.

use std::path::PathBuf;

use basalt_client::{DatabaseAdapter, DatabaseOutcome, decode_result};
use clap::{Args, Subcommand};
use color_eyre::Result;
use prost::Message;
use rpc::cli::{BasaltCliError, Destination, OutputFormat};
use rpc::protos::database::DatabaseTablesResponse;

#[derive(Args, Debug)]
pub struct ClientCommand {
    /// Host of the service.
    #[clap(long, env = "BASALT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port of the service.
    #[clap(long, env = "BASALT_PORT", default_value_t = 7432)]
    pub port: u16,

    /// Connect over TLS.
    #[clap(long)]
    pub tls: bool,

    /// Request path prefix, for deployments behind a routing proxy.
    #[clap(long, default_value = "")]
    pub prefix: String,

    /// Database name to connect to.
    #[clap(long, default_value = "default")]
    pub database: String,

    /// Output serialization.
    #[clap(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output path; `-` or unset means stdout.
    #[clap(long)]
    pub out: Option<PathBuf>,

    #[clap(subcommand)]
    pub action: ClientAction,
}

#[derive(Subcommand, Debug)]
pub enum ClientAction {
    #[clap(about = "Execute a statement, expecting no rows back")]
    Exec { sql: String },
    #[clap(about = "Run a query and print its result")]
    Query { sql: String },
    #[clap(about = "List the tables of the connected database")]
    Tables,
}

pub async fn dispatch(command: ClientCommand) -> Result<()> {
    let client = rpc::connector::connect(&command.host, command.port, command.tls, &command.prefix)
        .await
        .map_err(BasaltCliError::from)?;
    let mut adapter = DatabaseAdapter::new(client);
    adapter.connect(&command.database).await?;
    let destination = Destination::from_arg(command.out.as_deref());

    match command.action {
        ClientAction::Exec { sql } => {
            let response = adapter.raw_query(&sql, true).await?;
            let result = response.result.clone().ok_or_else(|| {
                BasaltCliError::GenericError("response carried no result".into())
            })?;
            match decode_result(result)? {
                DatabaseOutcome::Empty | DatabaseOutcome::Mutation(_) => {}
                DatabaseOutcome::Error { code, message } => {
                    return Err(
                        BasaltCliError::GenericError(format!("exec failed ({code}): {message}"))
                            .into(),
                    );
                }
                DatabaseOutcome::Single(_) | DatabaseOutcome::Rows { .. } => {
                    return Err(BasaltCliError::GenericError(
                        "exec returned a row-producing result".into(),
                    )
                    .into());
                }
            }
            write_output(&response, command.format, &destination)?;
        }
        ClientAction::Query { sql } => {
            let response = adapter.raw_query(&sql, false).await?;
            write_output(&response, command.format, &destination)?;
        }
        ClientAction::Tables => {
            let table = adapter.tables().await?;
            write_output(
                &DatabaseTablesResponse { table },
                command.format,
                &destination,
            )?;
        }
    }
    Ok(())
}

fn write_output<T>(
    message: &T,
    format: OutputFormat,
    destination: &Destination,
) -> Result<(), BasaltCliError>
where
    T: Message + serde::Serialize,
{
    let bytes = match format {
        OutputFormat::Json => {
            let mut bytes = serde_json::to_vec_pretty(message)?;
            bytes.push(b'\n');
            bytes
        }
        OutputFormat::Binary => message.encode_to_vec(),
    };
    destination.write(&bytes)
}
