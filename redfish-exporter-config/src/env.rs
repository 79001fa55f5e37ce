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

//! `CONFIG_*` environment overlay, applied after YAML parsing (§6.2),
//! field-by-field as the original's `readConfigEnv` does.

use crate::model::raw::{RawConfig, RawHostEntry};

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_u16(name: &str) -> Option<u16> {
    env_string(name).and_then(|v| v.parse().ok())
}

fn env_u64(name: &str) -> Option<u64> {
    env_string(name).and_then(|v| v.parse().ok())
}

fn env_u32(name: &str) -> Option<u32> {
    env_string(name).and_then(|v| v.parse().ok())
}

fn env_bool(name: &str) -> Option<bool> {
    env_string(name).map(|v| !matches!(v.to_ascii_lowercase().as_str(), "0" | "false"))
}

pub fn apply(config: &mut RawConfig) {
    if let Some(v) = env_string("CONFIG_ADDRESS") {
        config.address = Some(v);
    }
    if let Some(v) = env_u16("CONFIG_PORT") {
        config.port = Some(v);
    }
    if let Some(v) = env_u64("CONFIG_TIMEOUT") {
        config.timeout = Some(v);
    }
    if let Some(v) = env_u32("CONFIG_RETRIES") {
        config.retries = Some(v);
    }
    if let Some(v) = env_string("CONFIG_METRICS_PREFIX") {
        config.metrics_prefix = Some(v);
    }
    if let Some(v) = env_string("CONFIG_EVENTS_SEVERITY") {
        config.events.severity = Some(v);
    }
    if let Some(v) = env_string("CONFIG_EVENTS_MAXAGE") {
        config.events.maxage = Some(v);
    }

    if let Some(v) = env_bool("CONFIG_METRICS_SYSTEM") {
        config.metrics.system = v;
    }
    if let Some(v) = env_bool("CONFIG_METRICS_SENSORS") {
        config.metrics.sensors = v;
    }
    if let Some(v) = env_bool("CONFIG_METRICS_EVENTS") {
        config.metrics.events = v;
    }
    if let Some(v) = env_bool("CONFIG_METRICS_POWER") {
        config.metrics.power = v;
    }
    if let Some(v) = env_bool("CONFIG_METRICS_STORAGE") {
        config.metrics.storage = v;
    }
    if let Some(v) = env_bool("CONFIG_METRICS_MEMORY") {
        config.metrics.memory = v;
    }
    if let Some(v) = env_bool("CONFIG_METRICS_NETWORK") {
        config.metrics.network = v;
    }

    let username = env_string("CONFIG_DEFAULT_USERNAME");
    let password = env_string("CONFIG_DEFAULT_PASSWORD");
    if username.is_some() || password.is_some() {
        let default = config.hosts.entry("default".to_string()).or_insert_with(RawHostEntry::default);
        if let Some(username) = username {
            default.username = Some(username);
        }
        if let Some(password) = password {
            default.password = Some(password);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_creates_default_host_from_env_credentials() {
        std::env::set_var("CONFIG_DEFAULT_USERNAME", "root");
        std::env::set_var("CONFIG_DEFAULT_PASSWORD", "swordfish");
        let mut config = RawConfig::default();
        apply(&mut config);
        let default = config.hosts.get("default").unwrap();
        assert_eq!(default.username.as_deref(), Some("root"));
        assert_eq!(default.password.as_deref(), Some("swordfish"));
        std::env::remove_var("CONFIG_DEFAULT_USERNAME");
        std::env::remove_var("CONFIG_DEFAULT_PASSWORD");
    }

    #[test]
    fn overlay_leaves_unset_fields_untouched() {
        std::env::remove_var("CONFIG_ADDRESS");
        let mut config = RawConfig {
            address: Some("10.0.0.1".to_string()),
            ..RawConfig::default()
        };
        apply(&mut config);
        assert_eq!(config.address.as_deref(), Some("10.0.0.1"));
    }
}
