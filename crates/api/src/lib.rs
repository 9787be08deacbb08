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
//! The Basalt API server library.
//!

// NOTE on pub vs non-pub mods:
//
// basalt-api is consumed as a library only by the `basalt` CLI binary and by
// integration tests that need to run a full in-process server. Everything
// else stays private ("mod", not "pub mod") so that dead-code detection keeps
// working: if modules here are public, rust will not find dead code for
// anything marked `pub` within the module.

mod api;
mod cfg;
mod engine;
mod envelope;
mod errors;
mod handlers;
mod listener;
pub mod logging;
mod observer;
mod reflector;
mod registry;
mod run;
mod sql;
#[cfg(test)]
mod tests;
mod value;

// Save typing
pub(crate) use errors::{BasaltError, BasaltResult};

// Stuff needed by main.rs and the integration tests
pub use crate::{api::Api, cfg::command_line::Options, run::run, sql::AccessLevel};
