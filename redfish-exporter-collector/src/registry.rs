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

//! Per-target collector registry (§5, §7).
//!
//! Mirrors the original implementation's `GetCollector`: one entry per
//! target, constructed lazily on first request. A failed construction
//! increments that target's retry count rather than failing the whole
//! registry; once the count reaches the configured `retries`, every later
//! request is refused without even attempting to contact the host, until
//! `reset` drops the entry and lets it start over from zero.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use redfish_exporter_client::credentials::HostCredentials as ClientCredentials;
use redfish_exporter_client::{discover, ClientError, ClientParams, EndpointPaths, RedfishClient};
use redfish_exporter_config::model::{Config, HostCredentials};
use tokio::sync::Mutex;

use crate::collector::Collector;
use crate::error::CollectorError;

struct TargetState {
    collector: Option<Arc<Collector>>,
    retries: u32,
}

impl Default for TargetState {
    fn default() -> Self {
        Self {
            collector: None,
            retries: 0,
        }
    }
}

#[derive(Default)]
pub struct Registry {
    targets: Mutex<HashMap<String, Arc<Mutex<TargetState>>>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn slot(&self, target: &str) -> Arc<Mutex<TargetState>> {
        let mut targets = self.targets.lock().await;
        Arc::clone(
            targets
                .entry(target.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(TargetState::default()))),
        )
    }

    /// Returns the target's collector, constructing it on first use.
    #[allow(clippy::missing_errors_doc)]
    pub async fn get(&self, target: &str, config: &Config) -> Result<Arc<Collector>, CollectorError> {
        let slot = self.slot(target).await;
        let mut state = slot.lock().await;

        if let Some(collector) = &state.collector {
            return Ok(Arc::clone(collector));
        }
        if state.retries >= config.retries {
            return Err(CollectorError::HostUnreachable {
                target: target.to_string(),
                retries: state.retries,
            });
        }

        let host = config
            .host(target)
            .ok_or_else(|| CollectorError::UnknownTarget(target.to_string()))?;

        let timeout = Duration::from_secs(config.timeout_seconds);
        match build_and_discover(target, &host, timeout, config.collect.events).await {
            Ok((client, paths)) => {
                let collector = Arc::new(Collector::new(
                    target.to_string(),
                    Arc::new(client),
                    paths,
                    host.basic_auth_only,
                ));
                state.collector = Some(Arc::clone(&collector));
                Ok(collector)
            }
            Err(e) => {
                state.retries += 1;
                tracing::warn!(target = %target, error = %e, retries = state.retries, "client construction failed");
                Err(CollectorError::HostUnreachable {
                    target: target.to_string(),
                    retries: state.retries,
                })
            }
        }
    }

    /// Renders exposition text for `target`, constructing its collector if
    /// needed.
    #[allow(clippy::missing_errors_doc)]
    pub async fn gather(&self, target: &str, config: &Config) -> Result<String, CollectorError> {
        let collector = self.get(target, config).await?;
        Ok(collector.gather(&config.metrics_prefix, config.collect, config.event).await)
    }

    /// Drops `target`'s collector and retry count, so the next request
    /// starts construction from scratch.
    pub async fn reset(&self, target: &str) {
        self.targets.lock().await.remove(target);
    }

    /// Resets every tracked target whose resolved [`HostCredentials`]
    /// differ between `old` and `new` (§3 Lifecycles, §5): a configuration
    /// reload that leaves a target's credentials unchanged must not disturb
    /// its live Collector, but a credential change must force a fresh
    /// client and session on the next scrape.
    pub async fn apply_snapshot(&self, old: &Config, new: &Config) {
        let targets: Vec<String> = self.targets.lock().await.keys().cloned().collect();
        for target in targets {
            if old.host(&target) != new.host(&target) {
                self.reset(&target).await;
            }
        }
    }
}

async fn build_and_discover(
    target: &str,
    host: &HostCredentials,
    timeout: Duration,
    collect_events: bool,
) -> Result<(RedfishClient, EndpointPaths), ClientError> {
    let params = ClientParams::new().timeout(timeout);
    let credentials = ClientCredentials::new(host.username.clone(), host.password.clone());
    let client = RedfishClient::with_params(host.base_url(), credentials, params)?;
    let paths = discover(&client, collect_events).await?;
    tracing::info!(target = %target, vendor = %paths.vendor, "discovered endpoints");
    Ok((client, paths))
}
