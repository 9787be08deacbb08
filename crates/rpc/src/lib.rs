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
//! Wire protocol types for the Basalt database service, plus the client
//! plumbing shared by the CLI and the adapter.
//!
//! The protobuf schema lives in `proto/database.proto`; its generated Rust
//! is checked in under `src/protos/` so that consumers do not need a protoc
//! toolchain at build time.
//!

pub mod cli;
pub mod connector;
pub mod protos;
