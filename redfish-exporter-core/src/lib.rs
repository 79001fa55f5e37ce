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

//! Resource model, metric schema and exposition formatter shared by the
//! Redfish client and the scrape pipeline.
//!
//! This crate has no knowledge of HTTP, sessions, or concurrency — it is
//! the pure-data half of the exporter: decoding Redfish JSON payloads
//! tolerantly (`model`, `xstring`), describing the closed set of metric
//! families the exporter ever emits (`metrics`), and turning samples built
//! against those descriptors into the text exposition format (`format`).

pub mod format;
pub mod metrics;
pub mod model;
pub mod sample;
pub mod timestamp;
pub mod vendor;
pub mod xstring;

pub use format::format_exposition;
pub use sample::{MetricKind, Sample};
pub use timestamp::EventTimestamp;
pub use vendor::Vendor;
pub use xstring::XString;
