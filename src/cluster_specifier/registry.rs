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

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;

use crate::cluster_specifier::{DynClusterSpecifierPlugin, PluginSet};

static REGISTRY: Lazy<ArcSwap<PluginSet>> =
    Lazy::new(|| ArcSwap::new(std::sync::Arc::new(PluginSet::default_with([]))));

/// Process-wide registry of the
/// [`ClusterSpecifierPlugin`][super::ClusterSpecifierPlugin]s the route
/// parser can resolve plugin declarations against.
#[derive(Debug)]
pub struct ClusterSpecifierPluginRegistry;

impl ClusterSpecifierPluginRegistry {
    /// Loads the provided plugins into the registry, in addition to any
    /// already present.
    pub fn register(plugins: impl IntoIterator<Item = DynClusterSpecifierPlugin>) {
        let mut registry = PluginSet::clone(&REGISTRY.load_full());
        for plugin in plugins {
            registry.insert(plugin);
        }

        REGISTRY.store(std::sync::Arc::from(registry));
    }

    /// Returns the current set of registered plugins.
    pub fn load() -> std::sync::Arc<PluginSet> {
        REGISTRY.load_full()
    }
}
