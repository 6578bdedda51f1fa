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

//! HTTP filters referenced from route configurations.
//!
//! A filter is identified by the type URL of its protobuf configuration. The
//! route parser resolves per-virtual-host, per-route and per-cluster-weight
//! config overrides through a [`FilterProvider`] looked up in the
//! [`FilterRegistry`].

mod provider;
mod registry;
mod set;

pub mod router;

pub use self::{
    provider::{DynFilterProvider, FilterConfig, FilterProvider, RawConfig},
    registry::FilterRegistry,
    router::Router,
    set::{FilterMap, FilterSet},
};
