/// Configuration for the Route Lookup Service based cluster specifier plugin.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteLookupClusterSpecifier {
    /// The RLS config for this cluster specifier plugin instance.
    #[prost(message, optional, tag = "1")]
    pub route_lookup_config: ::core::option::Option<RouteLookupConfig>,
}
/// \[#next-free-field: 10\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteLookupConfig {
    /// The name of the lookup service as a gRPC URI, typically in the form
    /// of "dns:///service_name:port". This value is mandatory.
    #[prost(string, tag = "3")]
    pub lookup_service: ::prost::alloc::string::String,
    /// The maximum size of the cache that stores data fetched from the RLS
    /// server. This value is mandatory.
    #[prost(int64, tag = "7")]
    pub cache_size_bytes: i64,
    /// This is a list of all the possible targets that can be returned by the
    /// lookup service. If a target not on this list is returned, it will be
    /// treated the same as an unhealthy target.
    #[prost(string, repeated, tag = "8")]
    pub valid_targets: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// This value provides a default target to use if needed. If set, it will
    /// be used if RLS returns an error, times out, or returns an invalid
    /// response. Note that requests can be routed only to a subdomain of the
    /// original target, e.g. "us_east_1.cloudbigtable.googleapis.com".
    #[prost(string, tag = "9")]
    pub default_target: ::prost::alloc::string::String,
}
