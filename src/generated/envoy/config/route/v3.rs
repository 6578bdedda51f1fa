/// \[#next-free-field: 18\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteConfiguration {
    /// The name of the route configuration. For example, it might match
    /// :ref:`route_config_name
    /// <envoy_v3_api_field_extensions.filters.network.http_connection_manager.v3.Rds.route_config_name>` in
    /// :ref:`envoy_v3_api_msg_extensions.filters.network.http_connection_manager.v3.Rds`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// An array of virtual hosts that make up the route table.
    #[prost(message, repeated, tag = "2")]
    pub virtual_hosts: ::prost::alloc::vec::Vec<VirtualHost>,
    /// A list of plugins and their configurations which may be used by a
    /// :ref:`cluster specifier plugin name
    /// <envoy_v3_api_field_config.route.v3.RouteAction.cluster_specifier_plugin>`
    /// within the route. All *extension.name* fields in this list must be unique.
    #[prost(message, repeated, tag = "12")]
    pub cluster_specifier_plugins: ::prost::alloc::vec::Vec<ClusterSpecifierPlugin>,
}
/// Configuration for a cluster specifier plugin.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClusterSpecifierPlugin {
    /// The name of the plugin and its opaque configuration.
    #[prost(message, optional, tag = "1")]
    pub extension: ::core::option::Option<super::super::core::v3::TypedExtensionConfig>,
    /// If is_optional is not set or is set to false and the plugin defined by this
    /// message is not a supported type, the containing resource is NACKed. If
    /// is_optional is set to true, the resource would not be NACKed for this
    /// reason. In this case, routes referencing this plugin's name would not be
    /// treated as illegal configuration, but would result in a failure if the
    /// route is selected.
    #[prost(bool, tag = "2")]
    pub is_optional: bool,
}
/// The top level element in the routing configuration is a virtual host. Each
/// virtual host has a logical name as well as a set of domains that get routed
/// to it based on the incoming request's host header. This allows a single
/// listener to service multiple top level domain path trees. Once a virtual
/// host is selected based on the domain, the routes are processed in order to
/// see which upstream cluster to route to or whether to perform a redirect.
/// \[#next-free-field: 24\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VirtualHost {
    /// The logical name of the virtual host. This is used when emitting certain
    /// statistics but is not relevant for routing.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// A list of domains (host/authority header) that will be matched to this
    /// virtual host. Wildcard hosts are supported in the suffix or prefix form.
    #[prost(string, repeated, tag = "2")]
    pub domains: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// The list of routes that will be matched, in order, for incoming requests.
    /// The first route that matches will be used.
    #[prost(message, repeated, tag = "3")]
    pub routes: ::prost::alloc::vec::Vec<Route>,
    /// This field can be used to provide virtual host level per filter config. The
    /// key should match the :ref:`filter config name
    /// <envoy_v3_api_field_extensions.filters.network.http_connection_manager.v3.HttpFilter.name>`.
    /// See :ref:`Http filter route specific config <arch_overview_http_filters_per_filter_config>`
    /// for details.
    #[prost(map = "string, message", tag = "15")]
    pub typed_per_filter_config:
        ::std::collections::HashMap<::prost::alloc::string::String, ::prost_types::Any>,
}
/// A route is both a specification of how to match a request as well as an
/// indication of what to do next (e.g., redirect, forward, rewrite, etc.).
/// \[#next-free-field: 20\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Route {
    /// Name for the route.
    #[prost(string, tag = "14")]
    pub name: ::prost::alloc::string::String,
    /// Route matching parameters.
    #[prost(message, optional, tag = "1")]
    pub r#match: ::core::option::Option<RouteMatch>,
    /// This field can be used to provide route specific per filter config. The
    /// key should match the :ref:`filter config name
    /// <envoy_v3_api_field_extensions.filters.network.http_connection_manager.v3.HttpFilter.name>`.
    /// See :ref:`Http filter route specific config <arch_overview_http_filters_per_filter_config>`
    /// for details.
    #[prost(map = "string, message", tag = "13")]
    pub typed_per_filter_config:
        ::std::collections::HashMap<::prost::alloc::string::String, ::prost_types::Any>,
    #[prost(oneof = "route::Action", tags = "2, 3, 7, 17, 18")]
    pub action: ::core::option::Option<route::Action>,
}
/// Nested message and enum types in `Route`.
pub mod route {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Action {
        /// Route request to some upstream cluster.
        #[prost(message, tag = "2")]
        Route(super::RouteAction),
        /// Return a redirect.
        #[prost(message, tag = "3")]
        Redirect(super::RedirectAction),
        /// Return an arbitrary HTTP response directly, without proxying.
        #[prost(message, tag = "7")]
        DirectResponse(super::DirectResponseAction),
        /// \[#not-implemented-hide:\]
        /// A filter-defined action (e.g., it could dynamically generate the
        /// RouteAction).
        #[prost(message, tag = "17")]
        FilterAction(super::FilterAction),
        /// \[#not-implemented-hide:\]
        /// An action used when the route will generate a response directly,
        /// without forwarding to an upstream host. This will be used in non-proxy
        /// xDS clients like the gRPC server. It could also be used in the future
        /// in Envoy for a filter that directly generates responses for requests.
        #[prost(message, tag = "18")]
        NonForwardingAction(super::NonForwardingAction),
    }
}
/// Compared to the :ref:`cluster
/// <envoy_v3_api_field_config.route.v3.RouteAction.cluster>` field that
/// specifies a single upstream cluster as the target of a request, the
/// :ref:`weighted_clusters
/// <envoy_v3_api_field_config.route.v3.RouteAction.weighted_clusters>` option
/// allows for specification of multiple upstream clusters along with weights
/// that indicate the percentage of traffic to be forwarded to each cluster. The
/// router selects an upstream cluster based on the weights.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WeightedCluster {
    /// Specifies one or more upstream clusters associated with the route.
    #[prost(message, repeated, tag = "1")]
    pub clusters: ::prost::alloc::vec::Vec<weighted_cluster::ClusterWeight>,
    /// Specifies the total weight across all clusters. When a request matches the
    /// route, the choice of an upstream cluster is determined by its weight. The
    /// sum of weights across all entries in the clusters array must be greater
    /// than 0, and must not exceed uint32 maximal value (4294967295).
    #[deprecated]
    #[prost(message, optional, tag = "3")]
    pub total_weight: ::core::option::Option<u32>,
}
/// Nested message and enum types in `WeightedCluster`.
pub mod weighted_cluster {
    /// \[#next-free-field: 13\]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ClusterWeight {
        /// Only one of *name* and *cluster_header* may be specified.
        /// \[#next-major-version: Need to add back the validation rule: (validate.rules).string = {min_len: 1}\]
        /// Name of the upstream cluster. The cluster must exist in the
        /// :ref:`cluster manager configuration <config_cluster_manager>`.
        #[prost(string, tag = "1")]
        pub name: ::prost::alloc::string::String,
        /// An integer between 0 and :ref:`total_weight
        /// <envoy_v3_api_field_config.route.v3.WeightedCluster.total_weight>`. When
        /// a request matches the route, the choice of an upstream cluster is
        /// determined by its weight.
        #[prost(message, optional, tag = "2")]
        pub weight: ::core::option::Option<u32>,
        /// This field can be used to provide weighted cluster specific per filter
        /// config. The key should match the :ref:`filter config name
        /// <envoy_v3_api_field_extensions.filters.network.http_connection_manager.v3.HttpFilter.name>`.
        #[prost(map = "string, message", tag = "10")]
        pub typed_per_filter_config:
            ::std::collections::HashMap<::prost::alloc::string::String, ::prost_types::Any>,
    }
}
/// \[#next-free-field: 16\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteMatch {
    /// Indicates that prefix/path matching should be case sensitive. The default
    /// is true. Ignored for safe_regex matching.
    #[prost(message, optional, tag = "4")]
    pub case_sensitive: ::core::option::Option<bool>,
    /// Indicates that the route should additionally match on a runtime key. Every
    /// time the route is considered for a match, it must also fall under the
    /// percentage of matches indicated by this field.
    #[prost(message, optional, tag = "9")]
    pub runtime_fraction: ::core::option::Option<super::super::core::v3::RuntimeFractionalPercent>,
    /// Specifies a set of headers that the route should match on. The router will
    /// check the request’s headers against all the specified headers in the route
    /// config. A match will happen if all the headers in the route are present in
    /// the request with the same values (or based on presence if the value field
    /// is not in the config).
    #[prost(message, repeated, tag = "6")]
    pub headers: ::prost::alloc::vec::Vec<HeaderMatcher>,
    /// Specifies a set of URL query parameters on which the route should
    /// match. The router will check the query string from the *path* header
    /// against all the specified query parameters. If the number of specified
    /// query parameters is nonzero, they all must match the *path* header's
    /// query string for a match to occur.
    #[prost(message, repeated, tag = "7")]
    pub query_parameters: ::prost::alloc::vec::Vec<QueryParameterMatcher>,
    #[prost(oneof = "route_match::PathSpecifier", tags = "1, 2, 10, 12")]
    pub path_specifier: ::core::option::Option<route_match::PathSpecifier>,
}
/// Nested message and enum types in `RouteMatch`.
pub mod route_match {
    /// An extensible message for matching CONNECT requests.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ConnectMatcher {}
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum PathSpecifier {
        /// If specified, the route is a prefix rule meaning that the prefix must
        /// match the beginning of the *:path* header.
        #[prost(string, tag = "1")]
        Prefix(::prost::alloc::string::String),
        /// If specified, the route is an exact path rule meaning that the path must
        /// exactly match the *:path* header once the query string is removed.
        #[prost(string, tag = "2")]
        Path(::prost::alloc::string::String),
        /// If specified, the route is a regular expression rule meaning that the
        /// regex must match the *:path* header once the query string is removed.
        /// The entire path (without the query string) must match the regex.
        #[prost(message, tag = "10")]
        SafeRegex(super::super::super::super::kind::matcher::v3::RegexMatcher),
        /// If this is used as the matcher, the matcher will only match CONNECT
        /// requests.
        #[prost(message, tag = "12")]
        ConnectMatcher(ConnectMatcher),
    }
}
/// \[#next-free-field: 42\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteAction {
    /// Indicates that the route has a retry policy. Note that if this is set,
    /// it'll take precedence over the virtual host level retry policy entirely
    /// (e.g.: policies are not merged, most internal one becomes the enforced
    /// policy).
    #[prost(message, optional, tag = "9")]
    pub retry_policy: ::core::option::Option<RetryPolicy>,
    /// Specifies a list of hash policies to use for ring hash load balancing. Each
    /// hash policy is evaluated individually and the combined result is used to
    /// route the request. The method of combination is deterministic such that
    /// identical lists of hash policies will produce the same hash.
    #[prost(message, repeated, tag = "15")]
    pub hash_policy: ::prost::alloc::vec::Vec<route_action::HashPolicy>,
    /// Specifies the maximum stream duration for this route.
    #[prost(message, optional, tag = "36")]
    pub max_stream_duration: ::core::option::Option<route_action::MaxStreamDuration>,
    #[prost(oneof = "route_action::ClusterSpecifier", tags = "1, 2, 3, 37")]
    pub cluster_specifier: ::core::option::Option<route_action::ClusterSpecifier>,
    #[prost(oneof = "route_action::HostRewriteSpecifier", tags = "6, 7, 29")]
    pub host_rewrite_specifier: ::core::option::Option<route_action::HostRewriteSpecifier>,
}
/// Nested message and enum types in `RouteAction`.
pub mod route_action {
    /// Specifies the route's hashing policy if the upstream cluster uses a hashing
    /// :ref:`load balancer <arch_overview_load_balancing_types>`.
    /// \[#next-free-field: 7\]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct HashPolicy {
        /// The flag that short-circuits the hash computing. This field provides a
        /// 'fallback' style of configuration: "if a terminal policy doesn't work,
        /// fallback to rest of the policy list", it saves time when the terminal
        /// policy works.
        #[prost(bool, tag = "4")]
        pub terminal: bool,
        #[prost(oneof = "hash_policy::PolicySpecifier", tags = "1, 2, 3, 5, 6")]
        pub policy_specifier: ::core::option::Option<hash_policy::PolicySpecifier>,
    }
    /// Nested message and enum types in `HashPolicy`.
    pub mod hash_policy {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Header {
            /// The name of the request header that will be used to obtain the hash
            /// key. If the request header is not present, no hash will be produced.
            #[prost(string, tag = "1")]
            pub header_name: ::prost::alloc::string::String,
            /// If specified, the request header value will be rewritten and used
            /// to produce the hash key.
            #[prost(message, optional, tag = "2")]
            pub regex_rewrite: ::core::option::Option<
                super::super::super::super::super::kind::matcher::v3::RegexMatchAndSubstitute,
            >,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Cookie {
            /// The name of the cookie that will be used to obtain the hash key. If
            /// the cookie is not present and ttl below is not set, no hash will be
            /// produced.
            #[prost(string, tag = "1")]
            pub name: ::prost::alloc::string::String,
            /// If specified, a cookie with the TTL will be generated if the cookie
            /// is not present. If the TTL is present and zero, the generated cookie
            /// will be a session cookie.
            #[prost(message, optional, tag = "2")]
            pub ttl: ::core::option::Option<::prost_types::Duration>,
            /// The name of the path for the cookie. If no path is specified here,
            /// no path will be set for the cookie.
            #[prost(string, tag = "3")]
            pub path: ::prost::alloc::string::String,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ConnectionProperties {
            /// Hash on source IP address.
            #[prost(bool, tag = "1")]
            pub source_ip: bool,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct QueryParameter {
            /// The name of the URL query parameter that will be used to obtain the
            /// hash key. If the parameter is not present, no hash will be produced.
            /// Query parameter names are case-sensitive.
            #[prost(string, tag = "1")]
            pub name: ::prost::alloc::string::String,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct FilterState {
            /// The name of the Object in the per-request filterState, which is an
            /// Envoy::Hashable object. If there is no data associated with the key,
            /// or the stored object is not Envoy::Hashable, no hash will be produced.
            #[prost(string, tag = "1")]
            pub key: ::prost::alloc::string::String,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum PolicySpecifier {
            /// Header hash policy.
            #[prost(message, tag = "1")]
            Header(Header),
            /// Cookie hash policy.
            #[prost(message, tag = "2")]
            Cookie(Cookie),
            /// Connection properties hash policy.
            #[prost(message, tag = "3")]
            ConnectionProperties(ConnectionProperties),
            /// Query parameter hash policy.
            #[prost(message, tag = "5")]
            QueryParameter(QueryParameter),
            /// Filter state hash policy.
            #[prost(message, tag = "6")]
            FilterState(FilterState),
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MaxStreamDuration {
        /// Specifies the maximum duration allowed for streams on the route.
        #[prost(message, optional, tag = "1")]
        pub max_stream_duration: ::core::option::Option<::prost_types::Duration>,
        /// If present, and the request contains a `grpc-timeout header
        /// <https://github.com/grpc/grpc/blob/master/doc/PROTOCOL-HTTP2.md>`_, use
        /// that value as the *max_stream_duration*, but limit the applied timeout
        /// to the maximum value specified here.
        #[prost(message, optional, tag = "2")]
        pub grpc_timeout_header_max: ::core::option::Option<::prost_types::Duration>,
        /// If present, Envoy will adjust the timeout provided by the `grpc-timeout`
        /// header by subtracting the provided duration from the header.
        #[prost(message, optional, tag = "3")]
        pub grpc_timeout_header_offset: ::core::option::Option<::prost_types::Duration>,
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ClusterSpecifier {
        /// Indicates the upstream cluster to which the request should be routed
        /// to.
        #[prost(string, tag = "1")]
        Cluster(::prost::alloc::string::String),
        /// Envoy will determine the cluster to route to by reading the value of the
        /// HTTP header named by cluster_header from the request headers. If the
        /// header is not found or the referenced cluster does not exist, Envoy will
        /// return a 404 response.
        #[prost(string, tag = "2")]
        ClusterHeader(::prost::alloc::string::String),
        /// Multiple upstream clusters can be specified for a given route. The
        /// request is routed to one of the upstream clusters based on weights
        /// assigned to each cluster.
        #[prost(message, tag = "3")]
        WeightedClusters(super::WeightedCluster),
        /// Name of the cluster specifier plugin to use to determine the cluster
        /// for requests on this route. The cluster specifier plugin name must be
        /// defined in the associated :ref:`cluster specifier plugins
        /// <envoy_v3_api_field_config.route.v3.RouteConfiguration.cluster_specifier_plugins>`
        /// in the :ref:`name <envoy_v3_api_field_config.core.v3.TypedExtensionConfig.name>` field.
        #[prost(string, tag = "37")]
        ClusterSpecifierPlugin(::prost::alloc::string::String),
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum HostRewriteSpecifier {
        /// Indicates that during forwarding, the host header will be swapped with
        /// this value.
        #[prost(string, tag = "6")]
        HostRewriteLiteral(::prost::alloc::string::String),
        /// Indicates that during forwarding, the host header will be swapped with
        /// the hostname of the upstream host chosen by the cluster manager. This
        /// option is applicable only when the destination cluster for a route is
        /// of type *strict_dns* or *logical_dns*. Setting this to true with other
        /// cluster types has no effect.
        #[prost(message, tag = "7")]
        AutoHostRewrite(bool),
        /// Indicates that during forwarding, the host header will be swapped with
        /// the content of given downstream or :ref:`custom
        /// <config_http_conn_man_headers_custom_request_headers>` header.
        /// If header value is empty, host header is left intact.
        #[prost(string, tag = "29")]
        HostRewriteHeader(::prost::alloc::string::String),
    }
}
/// HTTP retry :ref:`architecture overview <arch_overview_http_routing_retry>`.
/// \[#next-free-field: 14\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RetryPolicy {
    /// Specifies the conditions under which retry takes place. These are the same
    /// conditions documented for :ref:`config_http_filters_router_x-envoy-retry-on`
    /// and :ref:`config_http_filters_router_x-envoy-retry-grpc-on`.
    #[prost(string, tag = "1")]
    pub retry_on: ::prost::alloc::string::String,
    /// Specifies the allowed number of retries. This parameter is optional and
    /// defaults to 1.
    #[prost(message, optional, tag = "2")]
    pub num_retries: ::core::option::Option<u32>,
    /// Specifies parameters that control exponential retry back off. This
    /// parameter is optional, in which case the default base interval is 25
    /// milliseconds or, if set, the current value of the
    /// `upstream.base_retry_backoff_ms` runtime parameter. The default maximum
    /// interval is 10 times the base interval.
    #[prost(message, optional, tag = "8")]
    pub retry_back_off: ::core::option::Option<retry_policy::RetryBackOff>,
}
/// Nested message and enum types in `RetryPolicy`.
pub mod retry_policy {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct RetryBackOff {
        /// Specifies the base interval between retries. This parameter is required
        /// and must be greater than zero. Values less than 1 ms are rounded up to
        /// 1 ms.
        #[prost(message, optional, tag = "1")]
        pub base_interval: ::core::option::Option<::prost_types::Duration>,
        /// Specifies the maximum interval between retries. This parameter is
        /// optional, but must be greater than or equal to the *base_interval* if
        /// set. The default is 10 times the *base_interval*.
        #[prost(message, optional, tag = "2")]
        pub max_interval: ::core::option::Option<::prost_types::Duration>,
    }
}
/// \[#next-free-field: 15\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RedirectAction {
    /// The host portion of the URL will be swapped with this value.
    #[prost(string, tag = "1")]
    pub host_redirect: ::prost::alloc::string::String,
    /// The path portion of the URL will be swapped with this value.
    #[prost(string, tag = "2")]
    pub path_redirect: ::prost::alloc::string::String,
}
/// \[#next-free-field: 5\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DirectResponseAction {
    /// Specifies the HTTP response status to be returned.
    #[prost(uint32, tag = "1")]
    pub status: u32,
}
/// \[#not-implemented-hide:\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NonForwardingAction {}
/// A filter-defined action type.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilterAction {
    #[prost(message, optional, tag = "1")]
    pub action: ::core::option::Option<::prost_types::Any>,
}
/// Query parameter matching treats the query string of a request's *path*
/// header as an ampersand-separated list of keys and/or key=value elements.
/// \[#next-free-field: 7\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryParameterMatcher {
    /// Specifies the name of a key that must be present in the requested
    /// *path*'s query string.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(oneof = "query_parameter_matcher::QueryParameterMatchSpecifier", tags = "5, 6")]
    pub query_parameter_match_specifier:
        ::core::option::Option<query_parameter_matcher::QueryParameterMatchSpecifier>,
}
/// Nested message and enum types in `QueryParameterMatcher`.
pub mod query_parameter_matcher {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum QueryParameterMatchSpecifier {
        /// Specifies whether a query parameter value should match against a string.
        #[prost(message, tag = "5")]
        StringMatch(super::super::super::super::kind::matcher::v3::StringMatcher),
        /// Specifies whether a query parameter should be present.
        #[prost(bool, tag = "6")]
        PresentMatch(bool),
    }
}
/// \[#next-free-field: 14\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HeaderMatcher {
    /// Specifies the name of the header in the request.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// If specified, the match result will be inverted before checking. Defaults
    /// to false.
    ///
    /// Examples:
    ///
    /// * The regex ``\d{3}`` does not match the value *1234*, so it will match
    /// when inverted.
    /// * The range [-10,0) will match the value -1, so it will not match when
    /// inverted.
    #[prost(bool, tag = "8")]
    pub invert_match: bool,
    /// Specifies how the header match will be performed to route the request.
    #[prost(
        oneof = "header_matcher::HeaderMatchSpecifier",
        tags = "4, 11, 6, 7, 9, 10, 12, 13"
    )]
    pub header_match_specifier: ::core::option::Option<header_matcher::HeaderMatchSpecifier>,
}
/// Nested message and enum types in `HeaderMatcher`.
pub mod header_matcher {
    /// Specifies how the header match will be performed to route the request.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum HeaderMatchSpecifier {
        /// If specified, header match will be performed based on the value of the
        /// header. This field is deprecated. Please use :ref:`string_match
        /// <envoy_v3_api_field_config.route.v3.HeaderMatcher.string_match>`.
        #[prost(string, tag = "4")]
        ExactMatch(::prost::alloc::string::String),
        /// If specified, this regex string is a regular expression rule which
        /// implies the entire request header value must match the regex. The rule
        /// will not match if only a subsequence of the request header value matches
        /// the regex. This field is deprecated. Please use :ref:`string_match
        /// <envoy_v3_api_field_config.route.v3.HeaderMatcher.string_match>`.
        #[prost(message, tag = "11")]
        SafeRegexMatch(super::super::super::super::kind::matcher::v3::RegexMatcher),
        /// If specified, header match will be performed based on range.
        /// The rule will match if the request header value is within this range.
        /// The entire request header value must represent an integer in base 10
        /// notation: consisting of an optional plus or minus sign followed by a
        /// sequence of digits. The rule will not match if the header value does not
        /// represent an integer. Match will fail for empty values, floating point
        /// numbers or if only a subsequence of the header value is an integer.
        #[prost(message, tag = "6")]
        RangeMatch(super::super::super::super::kind::v3::Int64Range),
        /// If specified as true, header match will be performed based on whether the
        /// header is in the request. If specified as false, header match will be
        /// performed based on whether the header is absent.
        #[prost(bool, tag = "7")]
        PresentMatch(bool),
        /// If specified, header match will be performed based on the prefix of the
        /// header value. Note: empty prefix is not allowed, please use present_match
        /// instead. This field is deprecated. Please use :ref:`string_match
        /// <envoy_v3_api_field_config.route.v3.HeaderMatcher.string_match>`.
        #[prost(string, tag = "9")]
        PrefixMatch(::prost::alloc::string::String),
        /// If specified, header match will be performed based on the suffix of the
        /// header value. Note: empty suffix is not allowed, please use present_match
        /// instead. This field is deprecated. Please use :ref:`string_match
        /// <envoy_v3_api_field_config.route.v3.HeaderMatcher.string_match>`.
        #[prost(string, tag = "10")]
        SuffixMatch(::prost::alloc::string::String),
        /// If specified, header match will be performed based on whether the header
        /// value contains the given value or not. Note: empty contains match is not
        /// allowed, please use present_match instead. This field is deprecated.
        /// Please use :ref:`string_match
        /// <envoy_v3_api_field_config.route.v3.HeaderMatcher.string_match>`.
        #[prost(string, tag = "12")]
        ContainsMatch(::prost::alloc::string::String),
        /// If specified, header match will be performed based on the string match
        /// of the header value.
        #[prost(message, tag = "13")]
        StringMatch(super::super::super::super::kind::matcher::v3::StringMatcher),
    }
}
/// A simple wrapper for an HTTP filter config. This is intended to be used as
/// a wrapper for the map value in
/// :ref:`VirtualHost.typed_per_filter_config<envoy_v3_api_field_config.route.v3.VirtualHost.typed_per_filter_config>`,
/// :ref:`Route.typed_per_filter_config<envoy_v3_api_field_config.route.v3.Route.typed_per_filter_config>`,
/// or :ref:`WeightedCluster.ClusterWeight.typed_per_filter_config<envoy_v3_api_field_config.route.v3.WeightedCluster.ClusterWeight.typed_per_filter_config>`
/// to add additional flags to the filter.
/// \[#not-implemented-hide:\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilterConfig {
    /// The filter config.
    #[prost(message, optional, tag = "1")]
    pub config: ::core::option::Option<::prost_types::Any>,
    /// If true, the filter is optional, meaning that if the client does
    /// not support the specified filter, it may ignore the map entry rather
    /// than rejecting the config.
    #[prost(bool, tag = "2")]
    pub is_optional: bool,
}
