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

//! xDS resource parsing.

mod error;

pub mod route;

pub use self::error::ResourceInvalid;

/// Type URL of RDS `RouteConfiguration` resources.
pub const ROUTE_TYPE: &str = "type.googleapis.com/envoy.config.route.v3.RouteConfiguration";

/// The optional-filter wrapper recognized in `typed_per_filter_config` maps.
pub(crate) const FILTER_CONFIG_TYPE: &str =
    "type.googleapis.com/envoy.config.route.v3.FilterConfig";

/// Structural envelopes whose inner `type_url` replaces the outer one.
pub(crate) const TYPED_STRUCT_TYPE_UDPA: &str = "type.googleapis.com/udpa.type.v1.TypedStruct";
pub(crate) const TYPED_STRUCT_TYPE: &str = "type.googleapis.com/xds.type.v3.TypedStruct";

/// Details about the xDS server a resource was delivered by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerInfo {
    /// Target URI of the management server.
    pub target: String,
    /// Whether the server is trusted to enable privileged route semantics
    /// such as authority rewriting.
    pub trusted_xds_server: bool,
}

impl ServerInfo {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            trusted_xds_server: false,
        }
    }

    pub fn trusted(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            trusted_xds_server: true,
        }
    }
}

/// Per-parse arguments.
///
/// The two experimental feature toggles are captured here rather than read
/// from the environment mid-parse, so a single parse sees a consistent view
/// and tests can pin them per call.
#[derive(Clone, Debug)]
pub struct ParseArgs {
    pub server_info: ServerInfo,
    /// Gates cluster-specifier plugin support
    /// (`GRPC_EXPERIMENTAL_XDS_RLS_LB`, default on).
    pub enable_route_lookup: bool,
    /// Gates authority rewriting
    /// (`GRPC_EXPERIMENTAL_XDS_AUTHORITY_REWRITE`, default off).
    pub enable_authority_rewrite: bool,
}

impl ParseArgs {
    /// Creates arguments for `server_info` with the feature toggles taken
    /// from the environment.
    pub fn new(server_info: ServerInfo) -> Self {
        Self {
            server_info,
            enable_route_lookup: env_flag("GRPC_EXPERIMENTAL_XDS_RLS_LB", true),
            enable_authority_rewrite: env_flag("GRPC_EXPERIMENTAL_XDS_AUTHORITY_REWRITE", false),
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    std::env::var(name)
        .as_deref()
        .ok()
        .and_then(|var| var.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_flag_defaults() {
        assert!(env_flag("XDS_ROUTE_TEST_FLAG_THAT_IS_NEVER_SET", true));
        assert!(!env_flag("XDS_ROUTE_TEST_FLAG_THAT_IS_NEVER_SET", false));
    }

    #[test]
    fn parse_args_reads_flag_defaults() {
        // Neither experiment is set in the test environment, so the
        // documented defaults apply.
        let args = ParseArgs::new(ServerInfo::new("dns:///xds.example.com"));
        assert!(args.enable_route_lookup);
        assert!(!args.enable_authority_rewrite);
        assert!(!args.server_info.trusted_xds_server);
    }
}
