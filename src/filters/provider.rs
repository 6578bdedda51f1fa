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

/// An owned pointer to a dynamic [`FilterProvider`] instance.
pub type DynFilterProvider = Box<dyn FilterProvider>;

/// A parsed filter configuration, as stored in the route table.
///
/// The payload is the provider's own JSON representation of its
/// configuration; the route parser carries it into the output tree
/// unmodified.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterConfig {
    /// The canonical type URL of the filter the config belongs to.
    pub type_url: &'static str,
    pub config: serde_json::Value,
}

/// Raw configuration handed to a provider, after the route parser has
/// stripped any `FilterConfig` wrapper and `TypedStruct` envelope.
#[derive(Clone, Debug, PartialEq)]
pub enum RawConfig {
    /// Binary protobuf configuration, delivered directly as an `Any`.
    Proto(prost_types::Any),
    /// JSON configuration, recovered from a `TypedStruct` envelope.
    Json(serde_json::Value),
}

/// Provides parsing for one kind of HTTP filter configuration.
///
/// Implementations are registered in the
/// [`FilterRegistry`][crate::filters::FilterRegistry] at program init and are
/// consulted by the route parser whenever a `typed_per_filter_config` entry
/// resolves to one of their type URLs.
pub trait FilterProvider: Send + Sync {
    /// The type URLs of the configuration messages this provider handles.
    /// The first entry is the canonical URL; any others are accepted
    /// alternates.
    fn type_urls(&self) -> &'static [&'static str];

    /// Returns the JSON schema for the provider's parsed configuration.
    fn config_schema(&self) -> schemars::schema::RootSchema;

    /// Parses a per-virtual-host, per-route or per-cluster-weight config
    /// override.
    ///
    /// The returned error detail is wrapped by the caller with the filter
    /// instance name.
    fn parse_config_override(&self, config: RawConfig) -> Result<FilterConfig, String>;
}
