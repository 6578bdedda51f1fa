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

/// Error rejecting an entire xDS resource.
///
/// The detail string carries a prefix for each nesting level the fault
/// bubbled through (virtual host, route, cluster weight, filter instance),
/// and becomes the `error_detail` of the NACK the transport sends back.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{detail}")]
pub struct ResourceInvalid {
    detail: String,
}

impl ResourceInvalid {
    pub(crate) fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// The full failure detail.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<ResourceInvalid> for tonic::Status {
    fn from(error: ResourceInvalid) -> Self {
        tonic::Status::invalid_argument(error.to_string())
    }
}
