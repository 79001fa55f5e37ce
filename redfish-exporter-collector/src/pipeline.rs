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

//! Concurrent resource-group fan-out (§4.D, §7, §5): each enabled group
//! runs as its own `tokio::spawn`ed task, so one group's failure - or
//! panic - does not cancel the others; it is only counted toward
//! `scrape_errors_total`.

use std::sync::Arc;

use redfish_exporter_client::{EndpointPaths, RedfishClient};
use redfish_exporter_config::model::{CollectConfig, EventConfig};
use redfish_exporter_core::sample::Sample;
use time::OffsetDateTime;
use tokio::task::JoinHandle;

use crate::workers;

pub struct PipelineResult {
    pub samples: Vec<Sample>,
    pub errors: u64,
}

type GroupHandle = JoinHandle<Option<Vec<Sample>>>;

pub async fn run(
    client: Arc<RedfishClient>,
    paths: Arc<EndpointPaths>,
    collect: CollectConfig,
    event: EventConfig,
) -> PipelineResult {
    let now = OffsetDateTime::now_utc();
    let mut handles: Vec<GroupHandle> = Vec::new();

    if collect.system {
        let (client, paths) = (Arc::clone(&client), Arc::clone(&paths));
        handles.push(tokio::spawn(async move { workers::system::run(&client, &paths).await }));
    }
    if collect.sensors {
        let (client, paths) = (Arc::clone(&client), Arc::clone(&paths));
        handles.push(tokio::spawn(async move { workers::sensors::run(&client, &paths).await }));
    }
    if collect.power {
        let (client, paths) = (Arc::clone(&client), Arc::clone(&paths));
        handles.push(tokio::spawn(async move { workers::power::run(&client, &paths).await }));
    }
    if collect.storage {
        let (client, paths) = (Arc::clone(&client), Arc::clone(&paths));
        handles.push(tokio::spawn(async move { workers::storage::run(&client, &paths).await }));
    }
    if collect.memory {
        let (client, paths) = (Arc::clone(&client), Arc::clone(&paths));
        handles.push(tokio::spawn(async move { workers::memory::run(&client, &paths).await }));
    }
    if collect.network {
        let (client, paths) = (Arc::clone(&client), Arc::clone(&paths));
        handles.push(tokio::spawn(async move { workers::network::run(&client, &paths).await }));
    }
    if collect.processors {
        let (client, paths) = (Arc::clone(&client), Arc::clone(&paths));
        handles.push(tokio::spawn(async move { workers::processors::run(&client, &paths).await }));
    }
    if collect.firmware {
        let (client, paths) = (Arc::clone(&client), Arc::clone(&paths));
        handles.push(tokio::spawn(async move { workers::firmware::run(&client, &paths).await }));
    }
    if collect.events {
        let (client, paths) = (Arc::clone(&client), Arc::clone(&paths));
        handles.push(tokio::spawn(async move { workers::events::run(&client, &paths, event, now).await }));
    }
    if collect.extra {
        let (client, paths) = (Arc::clone(&client), Arc::clone(&paths));
        handles.push(tokio::spawn(async move { workers::vendor_extra::run(&client, &paths).await }));
    }

    let mut samples = Vec::new();
    let mut errors = 0u64;
    for handle in handles {
        match handle.await {
            Ok(Some(group_samples)) => samples.extend(group_samples),
            Ok(None) => errors += 1,
            Err(e) => {
                tracing::error!(error = %e, "resource-group worker task panicked");
                errors += 1;
            }
        }
    }

    PipelineResult { samples, errors }
}
