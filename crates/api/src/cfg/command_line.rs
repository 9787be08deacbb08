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

use std::net::IpAddr;

use clap::Parser;

use crate::sql::AccessLevel;

/// Server options for the database service.
#[derive(Parser, Debug, Clone)]
pub struct Options {
    /// Address the gRPC listener binds.
    #[clap(long, env = "BASALT_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port the gRPC listener binds.
    #[clap(long, env = "BASALT_PORT", default_value_t = 7432)]
    pub port: u16,

    /// The access level granted to every caller. Queries whose class
    /// demands more are rejected.
    #[clap(long, env = "BASALT_ACCESS_LEVEL", value_enum, default_value_t = AccessLevel::Admin)]
    pub access_level: AccessLevel,

    /// Increase log verbosity (repeatable).
    #[clap(short = 'd', long, action = clap::ArgAction::Count)]
    pub debug: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_loopback_admin() {
        let options = Options::parse_from(["basalt-api"]);
        assert_eq!(options.host.to_string(), "127.0.0.1");
        assert_eq!(options.port, 7432);
        assert_eq!(options.access_level, AccessLevel::Admin);
        assert_eq!(options.debug, 0);
    }

    #[test]
    fn access_level_parses_from_kebab_case() {
        let options = Options::parse_from(["basalt-api", "--access-level", "read-only", "-dd"]);
        assert_eq!(options.access_level, AccessLevel::ReadOnly);
        assert_eq!(options.debug, 2);
    }
}
