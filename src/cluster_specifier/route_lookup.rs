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

//! The Route Lookup Service (RLS) cluster-specifier plugin.

use prost::Message;
use serde::{Deserialize, Serialize};

use crate::cluster_specifier::{ClusterSpecifierPlugin, DynClusterSpecifierPlugin, PluginConfig};
use crate::filters::RawConfig;
use crate::generated::grpc::lookup::v1::RouteLookupClusterSpecifier;

/// Plugin for `grpc.lookup.v1.RouteLookupClusterSpecifier` configs.
pub struct RouteLookup;

impl RouteLookup {
    pub const TYPE_URL: &'static str =
        "type.googleapis.com/grpc.lookup.v1.RouteLookupClusterSpecifier";

    pub fn plugin() -> DynClusterSpecifierPlugin {
        Box::new(Self)
    }
}

impl ClusterSpecifierPlugin for RouteLookup {
    fn type_urls(&self) -> &'static [&'static str] {
        &[Self::TYPE_URL]
    }

    fn config_schema(&self) -> schemars::schema::RootSchema {
        schemars::schema_for!(Config)
    }

    fn parse_plugin(&self, config: RawConfig) -> Result<PluginConfig, String> {
        let config = match config {
            RawConfig::Proto(any) => {
                let specifier = RouteLookupClusterSpecifier::decode(&*any.value)
                    .map_err(|err| format!("invalid RouteLookupClusterSpecifier: {err}"))?;
                let proto = specifier
                    .route_lookup_config
                    .ok_or("`route_lookup_config` is required but not found")?;
                Config {
                    lookup_service: proto.lookup_service,
                    cache_size_bytes: proto.cache_size_bytes,
                    valid_targets: proto.valid_targets,
                    default_target: (!proto.default_target.is_empty())
                        .then_some(proto.default_target),
                }
            }
            RawConfig::Json(value) => {
                let specifier: SpecifierConfig = serde_json::from_value(value)
                    .map_err(|err| format!("invalid RouteLookupClusterSpecifier: {err}"))?;
                specifier
                    .route_lookup_config
                    .ok_or("`route_lookup_config` is required but not found")?
            }
        };

        if config.lookup_service.is_empty() {
            return Err("`lookup_service` must not be empty".into());
        }

        Ok(PluginConfig {
            type_url: Self::TYPE_URL,
            config: serde_json::to_value(&config).map_err(|err| err.to_string())?,
        })
    }
}

/// The parsed RLS plugin configuration, in the protobuf JSON mapping of
/// `grpc.lookup.v1.RouteLookupConfig`. Fields the client does not act on are
/// dropped.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Target of the route lookup service, as a gRPC URI.
    pub lookup_service: String,
    #[serde(default)]
    pub cache_size_bytes: i64,
    #[serde(default)]
    pub valid_targets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_target: Option<String>,
}

/// JSON shape of the enclosing `RouteLookupClusterSpecifier` message, as
/// recovered from a `TypedStruct` envelope.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpecifierConfig {
    #[serde(default)]
    route_lookup_config: Option<Config>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generated::grpc::lookup::v1::RouteLookupConfig;

    fn specifier_any(config: RouteLookupConfig) -> prost_types::Any {
        prost_types::Any {
            type_url: RouteLookup::TYPE_URL.into(),
            value: crate::prost::encode(&RouteLookupClusterSpecifier {
                route_lookup_config: Some(config),
            })
            .unwrap(),
        }
    }

    #[test]
    fn parse_binary_config() {
        let parsed = RouteLookup
            .parse_plugin(RawConfig::Proto(specifier_any(RouteLookupConfig {
                lookup_service: "dns:///rls.example.com:443".into(),
                cache_size_bytes: 1024,
                valid_targets: vec!["cluster-a".into()],
                default_target: "cluster-a".into(),
            })))
            .unwrap();

        assert_eq!(parsed.type_url, RouteLookup::TYPE_URL);
        assert_eq!(
            parsed.config,
            serde_json::json!({
                "lookupService": "dns:///rls.example.com:443",
                "cacheSizeBytes": 1024,
                "validTargets": ["cluster-a"],
                "defaultTarget": "cluster-a",
            })
        );
    }

    #[test]
    fn parse_json_config() {
        let parsed = RouteLookup
            .parse_plugin(RawConfig::Json(serde_json::json!({
                "routeLookupConfig": {
                    "lookupService": "dns:///rls.example.com:443",
                },
            })))
            .unwrap();

        assert_eq!(
            parsed.config,
            serde_json::json!({
                "lookupService": "dns:///rls.example.com:443",
                "cacheSizeBytes": 0,
                "validTargets": [],
            })
        );
    }

    #[test]
    fn missing_lookup_config_is_rejected() {
        let error = RouteLookup
            .parse_plugin(RawConfig::Json(serde_json::json!({})))
            .unwrap_err();
        assert_eq!(error, "`route_lookup_config` is required but not found");
    }

    #[test]
    fn empty_lookup_service_is_rejected() {
        let error = RouteLookup
            .parse_plugin(RawConfig::Proto(specifier_any(RouteLookupConfig::default())))
            .unwrap_err();
        assert_eq!(error, "`lookup_service` must not be empty");
    }

    #[test]
    fn undecodable_specifier_is_rejected() {
        let any = prost_types::Any {
            type_url: RouteLookup::TYPE_URL.into(),
            value: vec![0xff, 0xff, 0xff],
        };
        let error = RouteLookup.parse_plugin(RawConfig::Proto(any)).unwrap_err();
        assert!(
            error.starts_with("invalid RouteLookupClusterSpecifier:"),
            "unexpected error: {error}"
        );
    }
}
