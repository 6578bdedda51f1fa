/*
 * Copyright 2024 Google LLC
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! The terminal router filter. It carries no meaningful configuration; its
//! presence marks the end of an HTTP filter chain.

use serde::{Deserialize, Serialize};

use crate::filters::{DynFilterProvider, FilterConfig, FilterProvider, RawConfig};

/// Provider for `envoy.extensions.filters.http.router.v3.Router` configs.
pub struct Router;

impl Router {
    pub const TYPE_URL: &'static str =
        "type.googleapis.com/envoy.extensions.filters.http.router.v3.Router";

    pub fn provider() -> DynFilterProvider {
        Box::new(Self)
    }
}

impl FilterProvider for Router {
    fn type_urls(&self) -> &'static [&'static str] {
        &[Self::TYPE_URL]
    }

    fn config_schema(&self) -> schemars::schema::RootSchema {
        schemars::schema_for!(Config)
    }

    fn parse_config_override(&self, _: RawConfig) -> Result<FilterConfig, String> {
        // The router terminates the chain; there is nothing to override on a
        // per-route basis.
        Err("router filter does not support config overrides".into())
    }
}

/// The router filter's (empty) configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct Config;
