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

//! Shared HTTP state and routes for the exporter daemon, split into a
//! library target so the route handlers can be exercised by integration
//! tests without spawning the CLI binary.

pub mod http;
pub mod shutdown;

use redfish_exporter_collector::Registry;
use redfish_exporter_config::model::Config;

/// Shared HTTP handler state.
pub struct AppState {
    pub config: Config,
    pub registry: Registry,
}
