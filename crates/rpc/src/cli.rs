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

//! General utility code for working with and displaying data
//! with the `basalt` CLI.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum BasaltCliError {
    #[error("Unable to connect to basalt API: {0}")]
    ApiConnectFailed(#[from] crate::connector::ConnectorError),

    #[error("The API call to the Basalt API server returned {0}")]
    ApiInvocationError(#[from] tonic::Status),

    #[error("Error while handling json: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Error while writing output: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Generic Error: {0}")]
    GenericError(String),
}

pub type BasaltCliResult<T> = Result<T, BasaltCliError>;

/// How the CLI serializes a response before writing it out.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// The raw protobuf encoding of the response message.
    Binary,
}

/// Where the CLI writes its serialized output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `-` and an unset `--out` both mean stdout.
    pub fn from_arg(out: Option<&Path>) -> Self {
        match out {
            None => Destination::Stdout,
            Some(path) if path.as_os_str() == "-" => Destination::Stdout,
            Some(path) => Destination::File(path.to_path_buf()),
        }
    }

    /// Write the serialized bytes verbatim. Callers append any trailing
    /// newline themselves; binary output must not be decorated.
    pub fn write(&self, bytes: &[u8]) -> BasaltCliResult<()> {
        match self {
            Destination::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(bytes)?;
                Ok(())
            }
            Destination::File(path) => {
                let mut file = File::create(path)?;
                file.write_all(bytes)?;
                Ok(())
            }
        }
    }
}
