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

//! The service-wide error type and its mapping onto wire status codes.

use tonic::{Code, Status};

use crate::engine::EngineError;

pub type BasaltResult<T> = Result<T, BasaltError>;

#[derive(thiserror::Error, Debug)]
pub enum BasaltError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    PermissionDenied(String),

    #[error("{0}")]
    FailedPrecondition(String),

    #[error("{0}")]
    Unimplemented(String),

    #[error("{0}")]
    Internal(String),

    #[error("SQL parse error: {0}")]
    Parse(String),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

impl BasaltError {
    /// The wire status code this error surfaces as. Parse failures surface
    /// as invalid-argument; engine failures as internal unless already
    /// classified upstream.
    pub fn code(&self) -> Code {
        match self {
            BasaltError::InvalidArgument(_) | BasaltError::Parse(_) => Code::InvalidArgument,
            BasaltError::PermissionDenied(_) => Code::PermissionDenied,
            BasaltError::FailedPrecondition(_) => Code::FailedPrecondition,
            BasaltError::Unimplemented(_) => Code::Unimplemented,
            BasaltError::Internal(_) | BasaltError::Engine(_) => Code::Internal,
        }
    }
}

impl From<BasaltError> for Status {
    fn from(err: BasaltError) -> Status {
        Status::new(err.code(), err.to_string())
    }
}
