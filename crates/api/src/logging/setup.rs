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

use eyre::WrapErr;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;

/// We ignore a lot of spans and events from 3rd party frameworks.
pub fn dep_log_filter(env_filter: EnvFilter) -> EnvFilter {
    ["h2=warn", "hyper=error", "rustls=warn", "tower=warn"]
        .iter()
        .fold(env_filter, |filter, filter_str| {
            filter.add_directive(
                filter_str
                    .parse()
                    .unwrap_or_else(|err| panic!("{filter_str} must be parsed; error: {err}")),
            )
        })
}

/// Configure stdout log emission. The verbosity count comes from the
/// command line; `RUST_LOG` directives layer on top.
pub fn setup_logging(debug: u8) -> eyre::Result<()> {
    let log_level = match debug {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let log_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env()
        .wrap_err("parsing log filter directives")?;
    let log_filter = dep_log_filter(log_filter);

    tracing_subscriber::registry()
        .with(log_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .wrap_err("logging subscriber init")?;
    Ok(())
}
