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

//! Parsing and validation of `envoy.config.route.v3.RouteConfiguration`
//! resources delivered over xDS (RDS).
//!
//! The entry point is [`xds::route::parse`], which turns a decoded
//! `RouteConfiguration` protobuf into an immutable [`route::RouteTableUpdate`]
//! that a request-routing layer can execute against. Parsing is synchronous,
//! performs no I/O, and either returns a fully built route table or rejects
//! the whole resource with a single [`xds::ResourceInvalid`] error; a partial
//! update is never produced.
//!
//! HTTP filter configurations and cluster-specifier plugins are resolved
//! through the [`filters`] and [`cluster_specifier`] registries, which are
//! populated at program init and may be extended with custom providers.

pub mod cluster_specifier;
pub mod filters;
pub mod generated;
pub mod matchers;
pub(crate) mod prost;
pub mod route;
pub mod xds;

#[doc(inline)]
pub use self::{
    route::RouteTableUpdate,
    xds::{ParseArgs, ResourceInvalid, ServerInfo},
};
