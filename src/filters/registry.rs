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

use crate::filters::{DynFilterProvider, FilterSet};

static REGISTRY: Lazy<ArcSwap<FilterSet>> =
    Lazy::new(|| ArcSwap::new(std::sync::Arc::new(FilterSet::default_with([]))));

/// Process-wide registry of the [`FilterProvider`][super::FilterProvider]s
/// the route parser can resolve filter configurations against.
#[derive(Debug)]
pub struct FilterRegistry;

impl FilterRegistry {
    /// Loads the provided providers into the registry, in addition to any
    /// already present.
    pub fn register(providers: impl IntoIterator<Item = DynFilterProvider>) {
        let mut registry = FilterSet::clone(&REGISTRY.load_full());
        for provider in providers {
            registry.insert(provider);
        }

        REGISTRY.store(std::sync::Arc::from(registry));
    }

    /// Returns the current set of registered providers.
    ///
    /// The snapshot is stable for the duration of a parse; concurrent
    /// [`register`][Self::register] calls produce a new set instead of
    /// mutating it.
    pub fn load() -> std::sync::Arc<FilterSet> {
        REGISTRY.load_full()
    }
}
