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

//! System group (§4.D): power state, health, indicator LED, memory and CPU
//! summaries, BIOS version, machine identity.

use redfish_exporter_client::{EndpointPaths, RedfishClient};
use redfish_exporter_core::metrics::families;
use redfish_exporter_core::model::SystemResponse;
use redfish_exporter_core::sample::Sample;

use crate::health::health_value;

pub async fn run(client: &RedfishClient, paths: &EndpointPaths) -> Option<Vec<Sample>> {
    let system: SystemResponse = client.get(&paths.system).await.ok()?;
    let mut samples = Vec::new();

    let power_on = if system.power_state == "On" { 1.0 } else { 0.0 };
    samples.push(Sample::new(&families::SYSTEM_POWER_ON, power_on));

    let health = system.status.health.as_str();
    if !health.is_empty() {
        samples.push(Sample::with_labels(
            &families::SYSTEM_HEALTH,
            health_value(health),
            vec![health.to_string()],
        ));
    }

    let indicator_led = system.indicator_led().to_string();
    let led_on = if !indicator_led.is_empty() && indicator_led != "Off" {
        1.0
    } else {
        0.0
    };
    samples.push(Sample::with_labels(
        &families::SYSTEM_INDICATOR_LED_ON,
        led_on,
        vec![indicator_led],
    ));

    if let Some(active) = system.location_indicator_active {
        samples.push(Sample::new(
            &families::SYSTEM_INDICATOR_ACTIVE,
            if active { 1.0 } else { 0.0 },
        ));
    }

    if let Some(mem) = &system.memory_summary {
        samples.push(Sample::new(
            &families::SYSTEM_MEMORY_SIZE_BYTES,
            mem.total_system_memory_gib * 1_073_741_824.0,
        ));
    }

    if let Some(cpu) = &system.processor_summary {
        samples.push(Sample::with_labels(
            &families::SYSTEM_CPU_COUNT,
            cpu.count as f64,
            vec![cpu.model.clone()],
        ));
    }

    if !system.bios_version.is_empty() {
        samples.push(Sample::with_labels(
            &families::SYSTEM_BIOS_INFO,
            1.0,
            vec![system.bios_version.clone()],
        ));
    }

    samples.push(Sample::with_labels(
        &families::SYSTEM_MACHINE_INFO,
        1.0,
        vec![
            system.manufacturer.clone(),
            system.model.clone(),
            system.serial_number.clone(),
            system.sku.clone(),
            system.host_name.clone(),
        ],
    ));

    Some(samples)
}
