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

//! Vendor OEM extras group (§4.D, §4.F): system-level Dell OEM readings
//! that live outside the standard System resource. Controller battery
//! health (also Dell OEM) is emitted from the storage group instead, since
//! it is only reachable by walking each storage controller.

use redfish_exporter_client::{EndpointPaths, RedfishClient};
use redfish_exporter_core::metrics::families;
use redfish_exporter_core::model::{DellSystem, DELL_SYSTEM_PATH};
use redfish_exporter_core::sample::Sample;
use redfish_exporter_core::Vendor;

use crate::health::health_value;

pub async fn run(client: &RedfishClient, paths: &EndpointPaths) -> Option<Vec<Sample>> {
    if paths.vendor != Vendor::Dell {
        return Some(Vec::new());
    }

    let dell: DellSystem = client.get(DELL_SYSTEM_PATH).await.ok()?;
    let mut samples = Vec::new();

    if !dell.battery_rollup_status.is_empty() {
        samples.push(Sample::with_labels(
            &families::DELL_BATTERY_ROLLUP_HEALTH,
            health_value(&dell.battery_rollup_status),
            vec![dell.battery_rollup_status],
        ));
    }
    samples.push(Sample::new(
        &families::DELL_ESTIMATED_SYSTEM_AIRFLOW_CFM,
        dell.estimated_system_airflow_cfm as f64,
    ));

    Some(samples)
}
