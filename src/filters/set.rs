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

use std::{iter::FromIterator, sync::Arc};

use crate::filters::{DynFilterProvider, Router};

#[cfg(doc)]
use crate::filters::{FilterProvider, FilterRegistry};

/// A map of [`FilterProvider::type_urls`] entries to [`DynFilterProvider`]
/// values.
pub type FilterMap = std::collections::HashMap<&'static str, Arc<DynFilterProvider>>;

/// A set of filter providers to be registered with a [`FilterRegistry`].
///
/// Current default providers:
/// - [`router`][crate::filters::router]
#[derive(Clone, Default)]
pub struct FilterSet(FilterMap);

impl FilterSet {
    /// Returns a `FilterSet` with the providers supplied through `filters`
    /// in addition to the defaults. Any provider supplied by `filters` will
    /// override a default claiming the same type URL.
    pub fn default_with(filters: impl IntoIterator<Item = DynFilterProvider>) -> Self {
        Self::with([Router::provider()].into_iter().chain(filters))
    }

    /// Creates a new [`FilterSet`] with the given providers and no defaults.
    pub fn with(filters: impl IntoIterator<Item = DynFilterProvider>) -> Self {
        Self::from_iter(filters)
    }

    /// Returns the provider registered for `type_url`, if any.
    pub fn get(&self, type_url: &str) -> Option<&Arc<DynFilterProvider>> {
        self.0.get(type_url)
    }

    /// Inserts a provider under each of its type URLs, displacing any
    /// previously registered provider claiming the same URL.
    pub fn insert(&mut self, provider: DynFilterProvider) {
        let provider = Arc::new(provider);
        for url in provider.type_urls().iter().copied() {
            self.0.insert(url, Arc::clone(&provider));
        }
    }
}

impl FromIterator<DynFilterProvider> for FilterSet {
    fn from_iter<I: IntoIterator<Item = DynFilterProvider>>(iter: I) -> Self {
        let mut set = Self(Default::default());

        for provider in iter {
            set.insert(provider);
        }

        set
    }
}

impl From<FilterSet> for FilterMap {
    fn from(set: FilterSet) -> Self {
        set.0
    }
}
