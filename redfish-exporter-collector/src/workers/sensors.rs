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

//! Sensors group (§4.D): chassis temperatures and fans.

use redfish_exporter_client::{EndpointPaths, RedfishClient};
use redfish_exporter_core::metrics::families;
use redfish_exporter_core::model::ThermalResponse;
use redfish_exporter_core::sample::Sample;

use crate::health::health_value;

pub async fn run(client: &RedfishClient, paths: &EndpointPaths) -> Option<Vec<Sample>> {
    let thermal: ThermalResponse = client.get(&paths.thermal).await.ok()?;
    let mut samples = Vec::new();

    for (n, temperature) in thermal.temperatures.iter().enumerate() {
        if temperature.status.state.as_str() != "Enabled" {
            continue;
        }
        if temperature.reading_celsius < 0.0 {
            continue;
        }
        samples.push(Sample::with_labels(
            &families::SENSORS_TEMPERATURE,
            temperature.reading_celsius,
            vec![temperature.id(n), temperature.name.clone(), "celsius".to_string()],
        ));
    }

    for (n, fan) in thermal.fans.iter().enumerate() {
        if fan.status.state.as_str() != "Enabled" {
            continue;
        }
        let name = fan.name().to_string();
        if name.is_empty() {
            continue;
        }
        let units = fan.units().to_string();
        if units.is_empty() {
            continue;
        }
        let id = fan.id(n);
        samples.push(Sample::with_labels(
            &families::SENSORS_FAN_HEALTH,
            health_value(fan.status.health.as_str()),
            vec![id.clone(), name.clone(), fan.status.health.as_str().to_string()],
        ));
        samples.push(Sample::with_labels(
            &families::SENSORS_FAN_SPEED,
            fan.reading(),
            vec![id, name, units.to_ascii_lowercase()],
        ));
    }

    Some(samples)
}
