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

//! Cluster-specifier plugins.
//!
//! A cluster-specifier plugin picks the upstream cluster for a request at
//! request time instead of naming it statically in the route. The route
//! parser resolves the plugin declarations of a `RouteConfiguration` through
//! a [`ClusterSpecifierPlugin`] looked up in the
//! [`ClusterSpecifierPluginRegistry`].

mod registry;

pub mod route_lookup;

pub use self::{registry::ClusterSpecifierPluginRegistry, route_lookup::RouteLookup};

use std::{iter::FromIterator, sync::Arc};

use crate::filters::RawConfig;

/// An owned pointer to a dynamic [`ClusterSpecifierPlugin`] instance.
pub type DynClusterSpecifierPlugin = Box<dyn ClusterSpecifierPlugin>;

/// A parsed plugin configuration.
///
/// Like [`crate::filters::FilterConfig`], the payload is the plugin's own
/// JSON representation of its configuration and round-trips into the route
/// table unmodified.
#[derive(Clone, Debug, PartialEq)]
pub struct PluginConfig {
    /// The canonical type URL of the plugin the config belongs to.
    pub type_url: &'static str,
    pub config: serde_json::Value,
}

/// A plugin configuration together with the name it was declared under in
/// the `RouteConfiguration`.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedPluginConfig {
    pub name: String,
    pub config: PluginConfig,
}

/// Parses the configuration of one kind of cluster-specifier plugin.
pub trait ClusterSpecifierPlugin: Send + Sync {
    /// The type URLs of the configuration messages this plugin handles. The
    /// first entry is the canonical URL; any others are accepted alternates.
    fn type_urls(&self) -> &'static [&'static str];

    /// Returns the JSON schema for the plugin's parsed configuration.
    fn config_schema(&self) -> schemars::schema::RootSchema;

    /// Parses the plugin's configuration.
    ///
    /// The returned error detail is surfaced verbatim as the resource
    /// rejection reason.
    fn parse_plugin(&self, config: RawConfig) -> Result<PluginConfig, String>;
}

/// A map of [`ClusterSpecifierPlugin::type_urls`] entries to
/// [`DynClusterSpecifierPlugin`] values.
pub type PluginMap = std::collections::HashMap<&'static str, Arc<DynClusterSpecifierPlugin>>;

/// A set of plugins to be registered with a
/// [`ClusterSpecifierPluginRegistry`].
///
/// Current default plugins:
/// - [`route_lookup`]
#[derive(Clone, Default)]
pub struct PluginSet(PluginMap);

impl PluginSet {
    /// Returns a `PluginSet` with the plugins supplied through `plugins` in
    /// addition to the defaults. Any plugin supplied by `plugins` will
    /// override a default claiming the same type URL.
    pub fn default_with(plugins: impl IntoIterator<Item = DynClusterSpecifierPlugin>) -> Self {
        Self::with([RouteLookup::plugin()].into_iter().chain(plugins))
    }

    /// Creates a new [`PluginSet`] with the given plugins and no defaults.
    pub fn with(plugins: impl IntoIterator<Item = DynClusterSpecifierPlugin>) -> Self {
        Self::from_iter(plugins)
    }

    /// Returns the plugin registered for `type_url`, if any.
    pub fn get(&self, type_url: &str) -> Option<&Arc<DynClusterSpecifierPlugin>> {
        self.0.get(type_url)
    }

    /// Inserts a plugin under each of its type URLs, displacing any
    /// previously registered plugin claiming the same URL.
    pub fn insert(&mut self, plugin: DynClusterSpecifierPlugin) {
        let plugin = Arc::new(plugin);
        for url in plugin.type_urls().iter().copied() {
            self.0.insert(url, Arc::clone(&plugin));
        }
    }
}

impl FromIterator<DynClusterSpecifierPlugin> for PluginSet {
    fn from_iter<I: IntoIterator<Item = DynClusterSpecifierPlugin>>(iter: I) -> Self {
        let mut set = Self(Default::default());

        for plugin in iter {
            set.insert(plugin);
        }

        set
    }
}

impl From<PluginSet> for PluginMap {
    fn from(set: PluginSet) -> Self {
        set.0
    }
}
