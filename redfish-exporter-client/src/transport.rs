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

//! Builds the shared `reqwest::Client` used for every target (§4.B).
//!
//! BMC management interfaces routinely present self-signed certificates, so
//! certificate verification is disabled unconditionally rather than exposed
//! as a knob — every target in this exporter's domain needs it off.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ClientParams {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    pub max_redirects: usize,
    pub tcp_keepalive: Duration,
    pub pool_idle_timeout: Duration,
    pub pool_max_idle_per_host: usize,
}

impl Default for ClientParams {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
            user_agent: "redfish-exporter/0.1".to_string(),
            max_redirects: 5,
            tcp_keepalive: Duration::from_secs(60),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 1,
        }
    }
}

impl ClientParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

/// Builds a `reqwest::Client` configured for talking to a Redfish service:
/// proxy settings taken from the environment, TLS certificate verification
/// disabled, and a bounded connection pool.
#[allow(clippy::missing_errors_doc)]
pub fn build_client(params: &ClientParams) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .danger_accept_invalid_certs(true)
        .timeout(params.timeout)
        .connect_timeout(params.connect_timeout)
        .user_agent(params.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(params.max_redirects))
        .tcp_keepalive(params.tcp_keepalive)
        .pool_idle_timeout(params.pool_idle_timeout)
        .pool_max_idle_per_host(params.pool_max_idle_per_host)
        .build()
}
