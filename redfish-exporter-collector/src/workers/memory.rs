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

//! Memory group (§4.D, §4.F): DIMMs, with the HPE iLO 4 legacy field shape
//! folded into the standard one before emission.

use redfish_exporter_client::{EndpointPaths, RedfishClient};
use redfish_exporter_core::metrics::families;
use redfish_exporter_core::model::{MemberCollection, Memory};
use redfish_exporter_core::sample::Sample;
use redfish_exporter_core::Vendor;

use crate::health::health_value;

pub async fn run(client: &RedfishClient, paths: &EndpointPaths) -> Option<Vec<Sample>> {
    let collection: MemberCollection = client.get(&paths.memory).await.ok()?;
    let mut samples = Vec::new();

    for link in collection.members.links() {
        let mut module: Memory = client.get(&link).await.ok()?;
        if paths.vendor == Vendor::Hpe && paths.version == 4 {
            module.apply_ilo4_shape();
        }

        if module.status.state.as_str() == "Absent" || module.id.is_empty() {
            continue;
        }

        samples.push(Sample::with_labels(
            &families::MEMORY_MODULE_INFO,
            1.0,
            vec![
                module.id.clone(),
                module.error_correction.clone(),
                module.manufacturer.trim().to_string(),
                module.memory_device_type.clone(),
                module.name.clone(),
                module.serial_number.clone(),
                module.rank_count.to_string(),
            ],
        ));
        let health = module.status.health.as_str().to_string();
        if !health.is_empty() {
            samples.push(Sample::with_labels(
                &families::MEMORY_MODULE_HEALTH,
                health_value(&health),
                vec![module.id.clone(), health],
            ));
        }
        if module.capacity_bytes() != 0 {
            samples.push(Sample::with_labels(
                &families::MEMORY_MODULE_CAPACITY_BYTES,
                module.capacity_bytes() as f64,
                vec![module.id.clone()],
            ));
        }
        if module.operating_speed_mhz != 0 {
            samples.push(Sample::with_labels(
                &families::MEMORY_MODULE_SPEED_MHZ,
                module.operating_speed_mhz as f64,
                vec![module.id.clone()],
            ));
        }
    }

    Some(samples)
}
