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

//! Parses RDS `RouteConfiguration` resources into [`RouteTableUpdate`]s.
//!
//! Parsing fails fast: the first unrecoverable fault rejects the whole
//! resource. A route that is well-formed but unactionable for a gRPC client
//! (query-parameter matchers, `cluster_header` actions, optional plugins
//! that are not supported) is dropped instead, leaving no trace in the
//! output.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use prost::Message;
use regex::Regex;
use tonic::Code;

use crate::cluster_specifier::{
    ClusterSpecifierPluginRegistry, NamedPluginConfig, PluginConfig, PluginSet,
};
use crate::filters::{FilterConfig, FilterRegistry, FilterSet, RawConfig};
use crate::generated::envoy::config::route::v3 as proto;
use crate::generated::envoy::kind::v3::fractional_percent::DenominatorType;
use crate::generated::envoy::kind::v3::FractionalPercent;
use crate::generated::udpa::kind::v1 as udpa_type;
use crate::generated::xds::kind::v3 as xds_type;
use crate::matchers::{self, FractionMatcher};
use crate::prost::{duration_nanos, struct_to_json};
use crate::route::{
    ClusterSpecifier, ClusterWeight, HashPolicy, PathMatcher, RetryPolicy, Route, RouteAction,
    RouteMatch, RouteTableUpdate, VirtualHost,
};
use crate::xds::{
    ParseArgs, ResourceInvalid, FILTER_CONFIG_TYPE, ROUTE_TYPE, TYPED_STRUCT_TYPE,
    TYPED_STRUCT_TYPE_UDPA,
};

/// Short name of the resource type, as used in xDS logs and stats.
pub const TYPE_NAME: &str = "RDS";

/// The filter-state key that selects channel-id hashing.
const HASH_POLICY_FILTER_STATE_KEY: &str = "io.grpc.channel_id";

/// Retryable codes the client supports; `retry_on` tokens outside this set
/// are dropped.
const SUPPORTED_RETRYABLE_CODES: [Code; 5] = [
    Code::Cancelled,
    Code::DeadlineExceeded,
    Code::Internal,
    Code::ResourceExhausted,
    Code::Unavailable,
];

/// Returns the resource name under which a `RouteConfiguration` is tracked.
pub fn extract_resource_name(route_config: &proto::RouteConfiguration) -> &str {
    &route_config.name
}

/// Unpacks and parses a `RouteConfiguration` carried in an `Any`, resolving
/// extensions against the process-wide registries.
pub fn parse_any(
    args: &ParseArgs,
    resource: &prost_types::Any,
) -> Result<RouteTableUpdate, ResourceInvalid> {
    if resource.type_url != ROUTE_TYPE {
        return Err(ResourceInvalid::new(format!(
            "Invalid message type: {}",
            resource.type_url
        )));
    }
    let route_config = proto::RouteConfiguration::decode(&*resource.value)
        .map_err(|err| ResourceInvalid::new(format!("Invalid RouteConfiguration: {err}")))?;
    parse(args, &route_config)
}

/// Parses an already-unpacked `RouteConfiguration`, resolving extensions
/// against the process-wide registries.
pub fn parse(
    args: &ParseArgs,
    route_config: &proto::RouteConfiguration,
) -> Result<RouteTableUpdate, ResourceInvalid> {
    let filter_registry = FilterRegistry::load();
    let plugin_registry = ClusterSpecifierPluginRegistry::load();
    process_route_configuration(route_config, &filter_registry, &plugin_registry, args)
}

fn process_route_configuration(
    route_config: &proto::RouteConfiguration,
    filter_registry: &FilterSet,
    plugin_registry: &PluginSet,
    args: &ParseArgs,
) -> Result<RouteTableUpdate, ResourceInvalid> {
    Ok(RouteTableUpdate {
        virtual_hosts: extract_virtual_hosts(route_config, filter_registry, plugin_registry, args)?,
    })
}

fn extract_virtual_hosts(
    route_config: &proto::RouteConfiguration,
    filter_registry: &FilterSet,
    plugin_registry: &PluginSet,
    args: &ParseArgs,
) -> Result<Vec<VirtualHost>, ResourceInvalid> {
    let mut plugin_configs = HashMap::new();
    let mut optional_plugins = HashSet::new();

    if args.enable_route_lookup {
        for plugin in &route_config.cluster_specifier_plugins {
            let plugin_name = plugin
                .extension
                .as_ref()
                .map(|extension| extension.name.clone())
                .unwrap_or_default();
            match parse_cluster_specifier_plugin(plugin, plugin_registry)? {
                Some(config) => {
                    if plugin_configs.insert(plugin_name.clone(), config).is_some() {
                        return Err(ResourceInvalid::new(format!(
                            "Multiple ClusterSpecifierPlugins with the same name: {plugin_name}"
                        )));
                    }
                }
                // The plugin parsed successfully, and it's not supported, but
                // it's marked as optional.
                None => {
                    optional_plugins.insert(plugin_name);
                }
            }
        }
    }

    let mut virtual_hosts = Vec::with_capacity(route_config.virtual_hosts.len());
    for virtual_host in &route_config.virtual_hosts {
        let virtual_host = parse_virtual_host(
            virtual_host,
            filter_registry,
            &plugin_configs,
            &optional_plugins,
            args,
        )
        .map_err(|err| {
            ResourceInvalid::new(format!(
                "RouteConfiguration contains invalid virtual host: {err}"
            ))
        })?;
        virtual_hosts.push(virtual_host);
    }
    Ok(virtual_hosts)
}

fn parse_virtual_host(
    virtual_host: &proto::VirtualHost,
    filter_registry: &FilterSet,
    plugin_configs: &HashMap<String, PluginConfig>,
    optional_plugins: &HashSet<String>,
    args: &ParseArgs,
) -> Result<VirtualHost, String> {
    let name = &virtual_host.name;
    let mut routes = Vec::with_capacity(virtual_host.routes.len());
    for route in &virtual_host.routes {
        let route = parse_route(route, filter_registry, plugin_configs, optional_plugins, args)
            .map_err(|err| format!("Virtual host [{name}] contains invalid route : {err}"))?;
        if let Some(route) = route {
            routes.push(route);
        }
    }

    let filter_overrides =
        parse_override_filter_configs(&virtual_host.typed_per_filter_config, filter_registry)
            .map_err(|err| {
                format!("VirtualHost [{name}] contains invalid HttpFilter config: {err}")
            })?;

    Ok(VirtualHost {
        name: name.clone(),
        domains: virtual_host.domains.clone(),
        routes,
        filter_overrides,
    })
}

/// Parses a single route entry. `Ok(None)` means the route is ignored.
fn parse_route(
    route: &proto::Route,
    filter_registry: &FilterSet,
    plugin_configs: &HashMap<String, PluginConfig>,
    optional_plugins: &HashSet<String>,
    args: &ParseArgs,
) -> Result<Option<Route>, String> {
    let name = &route.name;

    let match_proto = route.r#match.clone().unwrap_or_default();
    let route_match = match parse_route_match(&match_proto)
        .map_err(|err| format!("Route [{name}] contains invalid RouteMatch: {err}"))?
    {
        Some(route_match) => route_match,
        None => return Ok(None),
    };

    let filter_overrides =
        parse_override_filter_configs(&route.typed_per_filter_config, filter_registry)
            .map_err(|err| format!("Route [{name}] contains invalid HttpFilter config: {err}"))?;

    match &route.action {
        Some(proto::route::Action::Route(action)) => {
            let action = parse_route_action(
                action,
                filter_registry,
                plugin_configs,
                optional_plugins,
                args,
            )
            .map_err(|err| format!("Route [{name}] contains invalid RouteAction: {err}"))?;
            Ok(action.map(|action| Route::Forwarding {
                route_match,
                action,
                filter_overrides,
            }))
        }
        Some(proto::route::Action::NonForwardingAction(_)) => Ok(Some(Route::NonForwarding {
            route_match,
            filter_overrides,
        })),
        other => Err(format!(
            "Route [{name}] with unknown action type: {}",
            action_case_name(other.as_ref())
        )),
    }
}

fn action_case_name(action: Option<&proto::route::Action>) -> &'static str {
    match action {
        Some(proto::route::Action::Route(_)) => "ROUTE",
        Some(proto::route::Action::Redirect(_)) => "REDIRECT",
        Some(proto::route::Action::DirectResponse(_)) => "DIRECT_RESPONSE",
        Some(proto::route::Action::FilterAction(_)) => "FILTER_ACTION",
        Some(proto::route::Action::NonForwardingAction(_)) => "NON_FORWARDING_ACTION",
        None => "ACTION_NOT_SET",
    }
}

/// Parses a route match. `Ok(None)` means routes using it can never match a
/// gRPC request and are dropped.
fn parse_route_match(route_match: &proto::RouteMatch) -> Result<Option<RouteMatch>, String> {
    if !route_match.query_parameters.is_empty() {
        return Ok(None);
    }

    let path = parse_path_matcher(route_match)?;

    let fraction = match &route_match.runtime_fraction {
        Some(runtime_fraction) => {
            let default_value = runtime_fraction.default_value.clone().unwrap_or_default();
            Some(parse_fraction_matcher(&default_value)?)
        }
        None => None,
    };

    let mut headers = Vec::with_capacity(route_match.headers.len());
    for header in &route_match.headers {
        headers.push(matchers::parse_header_matcher(header)?);
    }

    Ok(Some(RouteMatch {
        path,
        headers,
        fraction,
    }))
}

fn parse_path_matcher(route_match: &proto::RouteMatch) -> Result<PathMatcher, String> {
    use proto::route_match::PathSpecifier;

    let case_sensitive = route_match.case_sensitive.unwrap_or(true);
    match &route_match.path_specifier {
        Some(PathSpecifier::Prefix(prefix)) => Ok(PathMatcher::Prefix {
            prefix: prefix.clone(),
            case_sensitive,
        }),
        Some(PathSpecifier::Path(path)) => Ok(PathMatcher::Exact {
            path: path.clone(),
            case_sensitive,
        }),
        Some(PathSpecifier::SafeRegex(matcher)) => {
            let regex = Regex::new(&matcher.regex)
                .map_err(|err| format!("Malformed safe regex pattern: {err}"))?;
            Ok(PathMatcher::Regex(regex))
        }
        _ => Err("Unknown path match type".into()),
    }
}

fn parse_fraction_matcher(fraction: &FractionalPercent) -> Result<FractionMatcher, String> {
    let denominator = match DenominatorType::try_from(fraction.denominator) {
        Ok(DenominatorType::Hundred) => 100,
        Ok(DenominatorType::TenThousand) => 10_000,
        Ok(DenominatorType::Million) => 1_000_000,
        Err(_) => {
            return Err(format!(
                "Unrecognized fractional percent denominator: {}",
                fraction.denominator
            ))
        }
    };
    Ok(FractionMatcher {
        numerator: fraction.numerator,
        denominator,
    })
}

/// Parses a route action. `Ok(None)` means routes carrying it are dropped.
fn parse_route_action(
    action: &proto::RouteAction,
    filter_registry: &FilterSet,
    plugin_configs: &HashMap<String, PluginConfig>,
    optional_plugins: &HashSet<String>,
    args: &ParseArgs,
) -> Result<Option<RouteAction>, String> {
    use proto::route_action::{ClusterSpecifier as ClusterSpecifierProto, HostRewriteSpecifier};

    let timeout = action.max_stream_duration.as_ref().and_then(|max_stream| {
        max_stream
            .grpc_timeout_header_max
            .as_ref()
            .or(max_stream.max_stream_duration.as_ref())
            .map(|duration| Duration::from_nanos(duration_nanos(duration).max(0) as u64))
    });

    let retry_policy = match &action.retry_policy {
        Some(retry_policy) => Some(parse_retry_policy(retry_policy)?),
        None => None,
    };

    let mut hash_policies = Vec::new();
    for config in &action.hash_policy {
        use proto::route_action::hash_policy::PolicySpecifier;

        let terminal = config.terminal;
        match &config.policy_specifier {
            Some(PolicySpecifier::Header(header)) => {
                let mut regex = None;
                let mut regex_substitution = None;
                if let Some(rewrite) = &header.regex_rewrite {
                    if let Some(pattern) = &rewrite.pattern {
                        regex = Some(Regex::new(&pattern.regex).map_err(|err| {
                            format!("Malformed regex rewrite pattern: {err}")
                        })?);
                        regex_substitution = Some(rewrite.substitution.clone());
                    }
                }
                hash_policies.push(HashPolicy::Header {
                    terminal,
                    header_name: header.header_name.clone(),
                    regex,
                    regex_substitution,
                });
            }
            Some(PolicySpecifier::FilterState(filter_state))
                if filter_state.key == HASH_POLICY_FILTER_STATE_KEY =>
            {
                hash_policies.push(HashPolicy::ChannelId { terminal });
            }
            _ => {
                tracing::trace!("ignoring unsupported hash policy");
            }
        }
    }

    let auto_host_rewrite = args.enable_authority_rewrite
        && args.server_info.trusted_xds_server
        && matches!(
            action.host_rewrite_specifier,
            Some(HostRewriteSpecifier::AutoHostRewrite(true))
        );

    let cluster_specifier = match &action.cluster_specifier {
        Some(ClusterSpecifierProto::Cluster(cluster)) => ClusterSpecifier::Cluster(cluster.clone()),
        // Picking the cluster from a request header is not supported; drop
        // the routes that use it.
        Some(ClusterSpecifierProto::ClusterHeader(_)) => return Ok(None),
        Some(ClusterSpecifierProto::WeightedClusters(weighted_clusters)) => {
            if weighted_clusters.clusters.is_empty() {
                return Err("No cluster found in weighted cluster list".into());
            }
            let mut entries = Vec::with_capacity(weighted_clusters.clusters.len());
            let mut weight_sum: u64 = 0;
            for cluster_weight in &weighted_clusters.clusters {
                let entry = parse_cluster_weight(cluster_weight, filter_registry)
                    .map_err(|err| format!("RouteAction contains invalid ClusterWeight: {err}"))?;
                weight_sum += entry.weight;
                entries.push(entry);
            }
            if weight_sum == 0 {
                return Err("Sum of cluster weights should be above 0.".into());
            }
            if weight_sum > u64::from(u32::MAX) {
                return Err(format!(
                    "Sum of cluster weights should be less than the maximum unsigned integer \
                     ({}), but was {}. ",
                    u32::MAX,
                    weight_sum
                ));
            }
            ClusterSpecifier::WeightedClusters(entries)
        }
        Some(ClusterSpecifierProto::ClusterSpecifierPlugin(plugin_name)) => {
            if !args.enable_route_lookup {
                return Ok(None);
            }
            match plugin_configs.get(plugin_name) {
                Some(config) => ClusterSpecifier::ClusterSpecifierPlugin(NamedPluginConfig {
                    name: plugin_name.clone(),
                    config: config.clone(),
                }),
                // The plugin is not registered, but it is optional; drop the
                // routes that use it.
                None if optional_plugins.contains(plugin_name) => return Ok(None),
                None => {
                    return Err(format!("ClusterSpecifierPlugin for [{plugin_name}] not found"))
                }
            }
        }
        None => return Ok(None),
    };

    Ok(Some(RouteAction {
        cluster_specifier,
        hash_policies,
        timeout,
        retry_policy,
        auto_host_rewrite,
    }))
}

fn parse_retry_policy(retry_policy: &proto::RetryPolicy) -> Result<RetryPolicy, String> {
    let max_attempts = match retry_policy.num_retries {
        Some(num_retries) => num_retries.saturating_add(1),
        None => 2,
    };

    let mut initial_backoff = Duration::from_millis(25);
    let mut max_backoff = Duration::from_millis(250);
    if let Some(backoff) = &retry_policy.retry_back_off {
        let base_interval = backoff
            .base_interval
            .as_ref()
            .ok_or("No base_interval specified in retry_backoff")?;
        let base_nanos = duration_nanos(base_interval);
        if base_nanos <= 0 {
            return Err("base_interval in retry_backoff must be positive".into());
        }
        // Sub-millisecond bases are rounded up to 1ms, but the max-vs-base
        // check below still uses the configured value.
        initial_backoff = Duration::from_nanos(base_nanos as u64).max(Duration::from_millis(1));
        max_backoff = match &backoff.max_interval {
            Some(max_interval) => {
                let max_nanos = duration_nanos(max_interval);
                if max_nanos < base_nanos {
                    return Err(
                        "max_interval in retry_backoff cannot be less than base_interval".into(),
                    );
                }
                Duration::from_nanos(max_nanos as u64).max(Duration::from_millis(1))
            }
            None => initial_backoff.saturating_mul(10),
        };
    }

    let mut retryable_status_codes = Vec::new();
    for token in retry_policy.retry_on.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let code = match status_code_from_name(&token.to_uppercase().replace('-', "_")) {
            Some(code) => code,
            // Unsupported value, such as "5xx".
            None => {
                tracing::trace!(token, "ignoring unsupported retry_on token");
                continue;
            }
        };
        if !SUPPORTED_RETRYABLE_CODES.contains(&code) {
            tracing::trace!(token, "ignoring unsupported retryable status code");
            continue;
        }
        retryable_status_codes.push(code);
    }

    Ok(RetryPolicy {
        max_attempts,
        retryable_status_codes,
        initial_backoff,
        max_backoff,
        per_attempt_recv_timeout: None,
    })
}

fn status_code_from_name(name: &str) -> Option<Code> {
    Some(match name {
        "OK" => Code::Ok,
        "CANCELLED" => Code::Cancelled,
        "UNKNOWN" => Code::Unknown,
        "INVALID_ARGUMENT" => Code::InvalidArgument,
        "DEADLINE_EXCEEDED" => Code::DeadlineExceeded,
        "NOT_FOUND" => Code::NotFound,
        "ALREADY_EXISTS" => Code::AlreadyExists,
        "PERMISSION_DENIED" => Code::PermissionDenied,
        "RESOURCE_EXHAUSTED" => Code::ResourceExhausted,
        "FAILED_PRECONDITION" => Code::FailedPrecondition,
        "ABORTED" => Code::Aborted,
        "OUT_OF_RANGE" => Code::OutOfRange,
        "UNIMPLEMENTED" => Code::Unimplemented,
        "INTERNAL" => Code::Internal,
        "UNAVAILABLE" => Code::Unavailable,
        "DATA_LOSS" => Code::DataLoss,
        "UNAUTHENTICATED" => Code::Unauthenticated,
        _ => return None,
    })
}

fn parse_cluster_weight(
    cluster_weight: &proto::weighted_cluster::ClusterWeight,
    filter_registry: &FilterSet,
) -> Result<ClusterWeight, String> {
    let filter_overrides =
        parse_override_filter_configs(&cluster_weight.typed_per_filter_config, filter_registry)
            .map_err(|err| {
                format!(
                    "ClusterWeight [{}] contains invalid HttpFilter config: {err}",
                    cluster_weight.name
                )
            })?;

    Ok(ClusterWeight {
        name: cluster_weight.name.clone(),
        weight: u64::from(cluster_weight.weight.unwrap_or_default()),
        filter_overrides,
    })
}

fn parse_override_filter_configs(
    raw_configs: &HashMap<String, prost_types::Any>,
    filter_registry: &FilterSet,
) -> Result<HashMap<String, FilterConfig>, String> {
    let mut overrides = HashMap::new();
    for (name, any) in raw_configs {
        let mut any = any.clone();
        let mut is_optional = false;
        if any.type_url == FILTER_CONFIG_TYPE {
            let wrapper = proto::FilterConfig::decode(&*any.value)
                .map_err(|err| format!("FilterConfig [{name}] contains invalid proto: {err}"))?;
            is_optional = wrapper.is_optional;
            any = wrapper.config.unwrap_or_default();
        }

        let (type_url, raw_config) = unwrap_typed_struct(any)
            .map_err(|err| format!("FilterConfig [{name}] contains invalid proto: {err}"))?;

        let provider = match filter_registry.get(&type_url) {
            Some(provider) => provider,
            None if is_optional => continue,
            None => {
                return Err(format!(
                    "HttpFilter [{name}]({type_url}) is required but unsupported"
                ))
            }
        };
        let config = provider
            .parse_config_override(raw_config)
            .map_err(|err| format!("Invalid filter config for HttpFilter [{name}]: {err}"))?;
        overrides.insert(name.clone(), config);
    }
    Ok(overrides)
}

/// Peels a `TypedStruct` envelope off an `Any`, if present, yielding the
/// effective type URL and the raw config to hand to a provider.
fn unwrap_typed_struct(any: prost_types::Any) -> Result<(String, RawConfig), String> {
    match any.type_url.as_str() {
        TYPED_STRUCT_TYPE_UDPA => {
            let typed_struct =
                udpa_type::TypedStruct::decode(&*any.value).map_err(|err| err.to_string())?;
            let value = struct_to_json(typed_struct.value.unwrap_or_default())?;
            Ok((typed_struct.type_url, RawConfig::Json(value)))
        }
        TYPED_STRUCT_TYPE => {
            let typed_struct =
                xds_type::TypedStruct::decode(&*any.value).map_err(|err| err.to_string())?;
            let value = struct_to_json(typed_struct.value.unwrap_or_default())?;
            Ok((typed_struct.type_url, RawConfig::Json(value)))
        }
        _ => Ok((any.type_url.clone(), RawConfig::Proto(any))),
    }
}

/// Parses a cluster-specifier plugin declaration. `Ok(None)` means the plugin
/// is unsupported but optional; the caller records its name so that routes
/// referencing it can be dropped.
fn parse_cluster_specifier_plugin(
    plugin: &proto::ClusterSpecifierPlugin,
    plugin_registry: &PluginSet,
) -> Result<Option<PluginConfig>, ResourceInvalid> {
    let extension = plugin.extension.clone().unwrap_or_default();
    let plugin_name = extension.name;
    let any = extension.typed_config.unwrap_or_default();

    let (type_url, raw_config) = unwrap_typed_struct(any).map_err(|_| {
        ResourceInvalid::new(format!(
            "ClusterSpecifierPlugin [{plugin_name}] contains invalid proto"
        ))
    })?;

    let specifier_plugin = match plugin_registry.get(&type_url) {
        Some(specifier_plugin) => specifier_plugin,
        None if plugin.is_optional => return Ok(None),
        None => {
            return Err(ResourceInvalid::new(format!(
                "Unsupported ClusterSpecifierPlugin type: {type_url}"
            )))
        }
    };

    specifier_plugin
        .parse_plugin(raw_config)
        .map(Some)
        .map_err(ResourceInvalid::new)
}
