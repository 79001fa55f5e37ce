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

//! The per-target collector (§5, §7): owns one [`RedfishClient`] and
//! serialises concurrent scrapes of the same target into a single in-flight
//! request, mirroring `collector.collected` in the original implementation
//! (a condition variable guarding `Gather`) with a `tokio::sync::watch`
//! channel instead.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use redfish_exporter_client::{EndpointPaths, RedfishClient};
use redfish_exporter_config::model::{CollectConfig, EventConfig};
use redfish_exporter_core::format_exposition;
use redfish_exporter_core::metrics::families;
use redfish_exporter_core::sample::Sample;
use tokio::sync::{watch, Mutex};

use crate::pipeline;

pub struct Collector {
    target: String,
    client: Arc<RedfishClient>,
    paths: Arc<EndpointPaths>,
    basic_auth_only: bool,
    scrape_errors_total: AtomicU64,
    inflight: Mutex<Option<watch::Receiver<Option<String>>>>,
}

impl Collector {
    #[must_use]
    pub fn new(
        target: String,
        client: Arc<RedfishClient>,
        paths: EndpointPaths,
        basic_auth_only: bool,
    ) -> Self {
        Self {
            target,
            client,
            paths: Arc::new(paths),
            basic_auth_only,
            scrape_errors_total: AtomicU64::new(0),
            inflight: Mutex::new(None),
        }
    }

    /// Renders exposition text for this target, de-duplicating concurrent
    /// callers (§5): the first caller runs the scrape, everyone else waits
    /// for it and receives the identical output.
    pub async fn gather(&self, prefix: &str, collect: CollectConfig, event: EventConfig) -> String {
        let mut guard = self.inflight.lock().await;
        if let Some(rx) = guard.as_ref() {
            let mut rx = rx.clone();
            drop(guard);
            loop {
                if let Some(text) = rx.borrow().clone() {
                    return text;
                }
                if rx.changed().await.is_err() {
                    return String::new();
                }
            }
        }

        let (tx, rx) = watch::channel(None);
        *guard = Some(rx);
        drop(guard);

        let text = self.run_scrape(prefix, collect, event).await;

        let _ = tx.send(Some(text.clone()));
        *self.inflight.lock().await = None;
        text
    }

    async fn run_scrape(&self, prefix: &str, collect: CollectConfig, event: EventConfig) -> String {
        if !self.basic_auth_only {
            self.client.refresh_session().await;
        }

        let outcome = pipeline::run(Arc::clone(&self.client), Arc::clone(&self.paths), collect, event).await;
        self.scrape_errors_total
            .fetch_add(outcome.errors, Ordering::Relaxed);

        let mut samples = outcome.samples;
        samples.push(Sample::new(&families::BUILD_INFO, 1.0));
        samples.push(Sample::new(
            &families::SCRAPE_ERRORS_TOTAL,
            self.scrape_errors_total.load(Ordering::Relaxed) as f64,
        ));

        tracing::debug!(
            target = %self.target,
            samples = samples.len(),
            errors = outcome.errors,
            "scrape complete"
        );

        format_exposition(prefix, &samples)
    }
}
