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

//! Processor group (§4.D): one entry per populated CPU socket, with
//! per-vendor OEM readings for voltage and current clock speed.

use redfish_exporter_client::{EndpointPaths, RedfishClient};
use redfish_exporter_core::metrics::families;
use redfish_exporter_core::model::{MemberCollection, Processor};
use redfish_exporter_core::sample::Sample;

use crate::health::health_value;

pub async fn run(client: &RedfishClient, paths: &EndpointPaths) -> Option<Vec<Sample>> {
    if paths.processors.is_empty() {
        return Some(Vec::new());
    }

    let collection: MemberCollection = client.get(&paths.processors).await.ok()?;
    let mut samples = Vec::new();

    for link in collection.members.links() {
        let cpu: Processor = client.get(&link).await.ok()?;
        if cpu.status.state.as_str() == "Absent" {
            continue;
        }

        samples.push(Sample::with_labels(
            &families::CPU_INFO,
            1.0,
            vec![
                cpu.id.clone(),
                cpu.socket.clone(),
                cpu.manufacturer.clone(),
                cpu.model.clone(),
                cpu.processor_architecture.as_str().to_string(),
            ],
        ));
        let health = cpu.status.health.as_str().to_string();
        if !health.is_empty() {
            samples.push(Sample::with_labels(
                &families::CPU_HEALTH,
                health_value(&health),
                vec![cpu.id.clone(), health],
            ));
        }
        if let Some(voltage) = cpu.voltage() {
            samples.push(Sample::with_labels(&families::CPU_VOLTAGE, voltage, vec![cpu.id.clone()]));
        }
        if let Some(max_speed) = cpu.max_speed_mhz {
            samples.push(Sample::with_labels(
                &families::CPU_MAX_SPEED_MHZ,
                max_speed as f64,
                vec![cpu.id.clone()],
            ));
        }
        if let Some(current_speed) = cpu.current_speed_mhz() {
            samples.push(Sample::with_labels(
                &families::CPU_CURRENT_SPEED_MHZ,
                current_speed as f64,
                vec![cpu.id.clone()],
            ));
        }
        samples.push(Sample::with_labels(
            &families::CPU_TOTAL_CORES,
            cpu.total_cores as f64,
            vec![cpu.id.clone()],
        ));
        samples.push(Sample::with_labels(
            &families::CPU_TOTAL_THREADS,
            cpu.total_threads as f64,
            vec![cpu.id],
        ));
    }

    Some(samples)
}
