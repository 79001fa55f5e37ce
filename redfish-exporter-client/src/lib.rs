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

//! Session-aware Redfish HTTP client: transport setup, `X-Auth-Token`
//! session management with basic-auth fallback, and endpoint discovery
//! with vendor-specific path overrides.

pub mod credentials;
pub mod discovery;
pub mod error;
pub mod redfish;
pub mod session;
pub mod transport;

pub use credentials::HostCredentials;
pub use discovery::{discover, EndpointPaths};
pub use error::ClientError;
pub use redfish::RedfishClient;
pub use transport::ClientParams;
