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

//! The parsed, immutable route table produced from a `RouteConfiguration`
//! resource.
//!
//! Everything in this module is a plain value: once built by
//! [`crate::xds::route::parse`] the tree is never mutated, equality is
//! structural, and consumers may share it freely across threads. Compiled
//! regular expressions compare by their source pattern.

use std::collections::HashMap;
use std::time::Duration;

use regex::Regex;
use tonic::Code;

use crate::cluster_specifier::NamedPluginConfig;
use crate::filters::FilterConfig;
use crate::matchers::{FractionMatcher, HeaderMatcher};

/// A full route table, superseding any previously delivered one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteTableUpdate {
    /// The virtual hosts that make up the route table, in resource order.
    pub virtual_hosts: Vec<VirtualHost>,
}

/// A group of routes selected by matching the request authority against a set
/// of domain patterns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VirtualHost {
    pub name: String,
    /// Domain patterns as delivered; validation of the patterns is left to
    /// the consumer that matches authorities against them.
    pub domains: Vec<String>,
    pub routes: Vec<Route>,
    /// Per-virtual-host HTTP filter config overrides, keyed by filter
    /// instance name.
    pub filter_overrides: HashMap<String, FilterConfig>,
}

/// A single (match, action) entry of a virtual host.
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    /// Forwards matching requests according to its [`RouteAction`].
    Forwarding {
        route_match: RouteMatch,
        action: RouteAction,
        filter_overrides: HashMap<String, FilterConfig>,
    },
    /// Matches requests which the client must not forward anywhere.
    NonForwarding {
        route_match: RouteMatch,
        filter_overrides: HashMap<String, FilterConfig>,
    },
}

/// The matching side of a route.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteMatch {
    pub path: PathMatcher,
    pub headers: Vec<HeaderMatcher>,
    pub fraction: Option<FractionMatcher>,
}

/// How a request path is matched.
#[derive(Clone, Debug)]
pub enum PathMatcher {
    /// The path must start with the given prefix.
    Prefix { prefix: String, case_sensitive: bool },
    /// The path must equal the given literal.
    Exact { path: String, case_sensitive: bool },
    /// The whole path must match the compiled pattern.
    Regex(Regex),
}

impl PartialEq for PathMatcher {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                PathMatcher::Prefix {
                    prefix: a,
                    case_sensitive: ac,
                },
                PathMatcher::Prefix {
                    prefix: b,
                    case_sensitive: bc,
                },
            ) => a == b && ac == bc,
            (
                PathMatcher::Exact {
                    path: a,
                    case_sensitive: ac,
                },
                PathMatcher::Exact {
                    path: b,
                    case_sensitive: bc,
                },
            ) => a == b && ac == bc,
            (PathMatcher::Regex(a), PathMatcher::Regex(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl Eq for PathMatcher {}

/// The forwarding side of a route.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteAction {
    pub cluster_specifier: ClusterSpecifier,
    /// Hash policies in resource order; unsupported policy kinds have
    /// already been dropped.
    pub hash_policies: Vec<HashPolicy>,
    pub timeout: Option<Duration>,
    pub retry_policy: Option<RetryPolicy>,
    /// Whether the client may rewrite the request authority to the upstream
    /// host. Only ever true when the delivering server is trusted.
    pub auto_host_rewrite: bool,
}

/// How the upstream cluster for a request is chosen.
#[derive(Clone, Debug, PartialEq)]
pub enum ClusterSpecifier {
    /// A single, fixed cluster.
    Cluster(String),
    /// A weighted choice between several clusters. The sum of the weights is
    /// in `(0, u32::MAX]`.
    WeightedClusters(Vec<ClusterWeight>),
    /// A cluster-specifier plugin chooses the cluster at request time.
    ClusterSpecifierPlugin(NamedPluginConfig),
}

/// One entry of a weighted-cluster choice.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterWeight {
    pub name: String,
    /// The entry's weight, zero-extended from the wire's unsigned 32-bit
    /// value so sums cannot overflow.
    pub weight: u64,
    pub filter_overrides: HashMap<String, FilterConfig>,
}

/// Input to session-affinity load balancing.
#[derive(Clone, Debug)]
pub enum HashPolicy {
    /// Hash on a request header, optionally rewritten first.
    Header {
        terminal: bool,
        header_name: String,
        regex: Option<Regex>,
        regex_substitution: Option<String>,
    },
    /// Hash on the channel the request arrived on.
    ChannelId { terminal: bool },
}

impl PartialEq for HashPolicy {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                HashPolicy::Header {
                    terminal: a_terminal,
                    header_name: a_name,
                    regex: a_regex,
                    regex_substitution: a_substitution,
                },
                HashPolicy::Header {
                    terminal: b_terminal,
                    header_name: b_name,
                    regex: b_regex,
                    regex_substitution: b_substitution,
                },
            ) => {
                a_terminal == b_terminal
                    && a_name == b_name
                    && a_regex.as_ref().map(Regex::as_str) == b_regex.as_ref().map(Regex::as_str)
                    && a_substitution == b_substitution
            }
            (
                HashPolicy::ChannelId { terminal: a },
                HashPolicy::ChannelId { terminal: b },
            ) => a == b,
            _ => false,
        }
    }
}

impl Eq for HashPolicy {}

/// A route-level retry policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the original one; at least 1.
    pub max_attempts: u32,
    /// Status codes that trigger a retry, in configuration order.
    pub retryable_status_codes: Vec<Code>,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub per_attempt_recv_timeout: Option<Duration>,
}
