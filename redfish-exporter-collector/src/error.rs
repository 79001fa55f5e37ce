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

//! Errors produced by the target registry (§7).
//!
//! A scrape that reaches a [`crate::collector::Collector`] always produces
//! exposition text, even if individual resource groups failed along the
//! way (those failures are counted, not propagated). Only the steps before
//! that point - resolving a target's credentials and constructing its
//! client - can fail the whole request.

use std::fmt;

#[derive(Debug)]
pub enum CollectorError {
    /// `target` has no explicit host entry and no `default` fallback.
    UnknownTarget(String),
    /// Client construction has failed `retries` times in a row; construction
    /// is refused until the target is reset.
    HostUnreachable { target: String, retries: u32 },
}

impl fmt::Display for CollectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTarget(target) => {
                write!(f, "no host configuration for target {target}")
            }
            Self::HostUnreachable { target, retries } => {
                write!(f, "host {target} unreachable after {retries} retries")
            }
        }
    }
}

impl std::error::Error for CollectorError {}
