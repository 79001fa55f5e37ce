// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scrape pipeline and per-target collector registry.
//!
//! This crate owns everything with HTTP concurrency and mutable state: the
//! [`registry::Registry`] that constructs and caches one
//! [`collector::Collector`] per target, the [`pipeline`] that fans a scrape
//! out across resource groups, and the `workers` that build samples for
//! each group against the pure-data types in `redfish-exporter-core`.

pub mod collector;
pub mod error;
pub mod health;
pub mod pipeline;
pub mod registry;
pub mod workers;

pub use collector::Collector;
pub use error::CollectorError;
pub use registry::Registry;
