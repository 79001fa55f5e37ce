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

//! Raw (as-parsed) and validated (immutable snapshot) configuration shapes
//! (§6.2, §3 `HostCredentials`).

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Ok = 0,
    Warning = 1,
    Critical = 2,
}

impl Severity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "ok" => Some(Self::Ok),
            "warning" => Some(Self::Warning),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectConfig {
    pub system: bool,
    pub sensors: bool,
    pub events: bool,
    pub power: bool,
    pub storage: bool,
    pub memory: bool,
    pub network: bool,
    pub processors: bool,
    pub extra: bool,
    pub firmware: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct EventConfig {
    pub severity_level: Severity,
    pub max_age_seconds: f64,
}

#[derive(Debug, Clone, Default)]
pub struct TlsConfig {
    pub enabled: bool,
    pub cert_file: String,
    pub key_file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "http" => Some(Self::Http),
            "https" => Some(Self::Https),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

/// Resolved per-target credentials and connection parameters (§3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCredentials {
    pub scheme: Scheme,
    pub hostname: String,
    pub port: Option<u16>,
    pub username: String,
    pub password: String,
    pub basic_auth_only: bool,
}

impl HostCredentials {
    #[must_use]
    pub fn base_url(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{port}", self.scheme.as_str(), self.hostname),
            None => format!("{}://{}", self.scheme.as_str(), self.hostname),
        }
    }
}

/// The validated, immutable configuration snapshot the rest of the exporter
/// consumes. Hot reload publishes a new snapshot rather than mutating this
/// one (§5 shared-resource policy).
#[derive(Debug, Clone)]
pub struct Config {
    pub address: String,
    pub port: u16,
    pub timeout_seconds: u64,
    pub metrics_prefix: String,
    pub https_proxy: String,
    pub retries: u32,
    pub tls: TlsConfig,
    pub collect: CollectConfig,
    pub event: EventConfig,
    hosts: HashMap<String, HostCredentials>,
    default_host: Option<HostCredentials>,
}

impl Config {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        address: String,
        port: u16,
        timeout_seconds: u64,
        metrics_prefix: String,
        https_proxy: String,
        retries: u32,
        tls: TlsConfig,
        collect: CollectConfig,
        event: EventConfig,
        hosts: HashMap<String, HostCredentials>,
    ) -> Self {
        let default_host = hosts.get("default").cloned();
        Self {
            address,
            port,
            timeout_seconds,
            metrics_prefix,
            https_proxy,
            retries,
            tls,
            collect,
            event,
            hosts,
            default_host,
        }
    }

    /// Resolves credentials for `target`, falling back to the `default`
    /// host entry when no explicit entry exists (§3 `HostCredentials`).
    #[must_use]
    pub fn host(&self, target: &str) -> Option<HostCredentials> {
        if let Some(explicit) = self.hosts.get(target) {
            return Some(explicit.clone());
        }
        self.default_host.as_ref().map(|default| HostCredentials {
            scheme: default.scheme,
            hostname: target.to_string(),
            port: default.port,
            username: default.username.clone(),
            password: default.password.clone(),
            basic_auth_only: default.basic_auth_only,
        })
    }

    /// Configured targets other than `default`, for `/discover` (§6.1).
    #[must_use]
    pub fn discoverable_targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = self
            .hosts
            .keys()
            .filter(|k| k.as_str() != "default")
            .map(String::as_str)
            .collect();
        targets.sort_unstable();
        targets
    }
}

pub mod raw {
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, Default, Deserialize)]
    pub struct RawHostEntry {
        pub scheme: Option<String>,
        pub port: Option<u16>,
        pub username: Option<String>,
        pub password: Option<String>,
        pub auth: Option<String>,
        #[serde(default)]
        pub basic_auth_only: bool,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct RawCollectConfig {
        #[serde(default)]
        pub all: bool,
        #[serde(default)]
        pub system: bool,
        #[serde(default)]
        pub sensors: bool,
        #[serde(default)]
        pub events: bool,
        #[serde(default)]
        pub power: bool,
        #[serde(default)]
        pub storage: bool,
        #[serde(default)]
        pub memory: bool,
        #[serde(default)]
        pub network: bool,
        #[serde(default)]
        pub processors: bool,
        #[serde(default)]
        pub extra: bool,
        #[serde(default)]
        pub firmware: bool,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct RawEventConfig {
        pub severity: Option<String>,
        pub maxage: Option<String>,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct RawTlsConfig {
        #[serde(default)]
        pub enabled: bool,
        #[serde(default)]
        pub cert_file: String,
        #[serde(default)]
        pub key_file: String,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct RawConfig {
        pub address: Option<String>,
        pub port: Option<u16>,
        pub timeout: Option<u64>,
        pub metrics_prefix: Option<String>,
        pub https_proxy: Option<String>,
        pub retries: Option<u32>,
        #[serde(default)]
        pub tls: RawTlsConfig,
        #[serde(default)]
        pub metrics: RawCollectConfig,
        #[serde(default)]
        pub events: RawEventConfig,
        #[serde(default)]
        pub hosts: HashMap<String, RawHostEntry>,
        #[serde(default)]
        pub auths: HashMap<String, RawHostEntry>,
    }
}
