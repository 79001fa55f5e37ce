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

//! Loads, expands, overlays and validates the exporter's YAML configuration
//! (§6.2) into an immutable [`Config`] snapshot.

pub mod duration;
pub mod env;
pub mod error;
pub mod expand;
pub mod model;

use error::ConfigError;
use model::raw::{RawConfig, RawHostEntry};
use model::{CollectConfig, Config, EventConfig, HostCredentials, Scheme, Severity, TlsConfig};
use std::collections::HashMap;

const DEFAULT_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 9348;
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_METRICS_PREFIX: &str = "idrac";
const DEFAULT_MAX_AGE: &str = "7d";
const DEFAULT_RETRIES: u32 = 1;

/// Reads `path`, expands `${VAR}` references, parses YAML, applies the
/// `CONFIG_*` environment overlay, and validates the result.
#[allow(clippy::missing_errors_doc)]
pub fn load(path: &str) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    let expanded = expand::expand_env(&text);
    let mut raw: RawConfig = serde_yaml::from_str(&expanded)?;
    env::apply(&mut raw);
    validate(raw)
}

fn validate(mut raw: RawConfig) -> Result<Config, ConfigError> {
    let address = raw.address.unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
    let port = raw.port.unwrap_or(DEFAULT_PORT);
    let timeout_seconds = raw.timeout.unwrap_or(DEFAULT_TIMEOUT_SECONDS);
    let metrics_prefix = raw.metrics_prefix.unwrap_or_else(|| DEFAULT_METRICS_PREFIX.to_string());
    let https_proxy = raw.https_proxy.unwrap_or_default();
    let retries = match raw.retries {
        Some(0) | None => DEFAULT_RETRIES,
        Some(n) => n,
    };

    if raw.metrics.all {
        raw.metrics.system = true;
        raw.metrics.sensors = true;
        raw.metrics.events = true;
        raw.metrics.power = true;
        raw.metrics.storage = true;
        raw.metrics.memory = true;
        raw.metrics.network = true;
        raw.metrics.processors = true;
        raw.metrics.extra = true;
        raw.metrics.firmware = true;
    }
    let collect = CollectConfig {
        system: raw.metrics.system,
        sensors: raw.metrics.sensors,
        events: raw.metrics.events,
        power: raw.metrics.power,
        storage: raw.metrics.storage,
        memory: raw.metrics.memory,
        network: raw.metrics.network,
        processors: raw.metrics.processors,
        extra: raw.metrics.extra,
        firmware: raw.metrics.firmware,
    };

    let severity_level = match raw.events.severity.as_deref() {
        Some(s) => Severity::parse(s).ok_or_else(|| ConfigError::InvalidSeverity(s.to_string()))?,
        None => Severity::Ok,
    };
    let maxage = raw.events.maxage.unwrap_or_else(|| DEFAULT_MAX_AGE.to_string());
    let max_age_seconds = duration::parse_seconds(&maxage)?;
    let event = EventConfig {
        severity_level,
        max_age_seconds,
    };

    let tls = TlsConfig {
        enabled: raw.tls.enabled,
        cert_file: raw.tls.cert_file,
        key_file: raw.tls.key_file,
    };

    if raw.hosts.is_empty() {
        return Err(ConfigError::MissingSection("hosts"));
    }

    let hosts = resolve_hosts(raw.hosts, &raw.auths)?;

    Ok(Config::new(
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
    ))
}

fn resolve_hosts(
    entries: HashMap<String, RawHostEntry>,
    auths: &HashMap<String, RawHostEntry>,
) -> Result<HashMap<String, HostCredentials>, ConfigError> {
    let mut resolved = HashMap::with_capacity(entries.len());
    for (name, mut entry) in entries {
        if let Some(profile_name) = &entry.auth {
            let profile = auths
                .get(profile_name)
                .ok_or_else(|| ConfigError::MissingCredentials {
                    host: name.clone(),
                    field: "auth profile",
                })?;
            if entry.username.is_none() {
                entry.username = profile.username.clone();
            }
            if entry.password.is_none() {
                entry.password = profile.password.clone();
            }
            if entry.scheme.is_none() {
                entry.scheme = profile.scheme.clone();
            }
        }

        let username = entry.username.ok_or_else(|| ConfigError::MissingCredentials {
            host: name.clone(),
            field: "username",
        })?;
        let password = entry.password.ok_or_else(|| ConfigError::MissingCredentials {
            host: name.clone(),
            field: "password",
        })?;
        let scheme_str = entry.scheme.unwrap_or_else(|| "https".to_string());
        let scheme = Scheme::parse(&scheme_str).ok_or_else(|| ConfigError::UnknownScheme {
            host: name.clone(),
            scheme: scheme_str,
        })?;

        resolved.insert(
            name.clone(),
            HostCredentials {
                scheme,
                hostname: name,
                port: entry.port,
                username,
                password,
                basic_auth_only: entry.basic_auth_only,
            },
        );
    }
    Ok(resolved)
}
