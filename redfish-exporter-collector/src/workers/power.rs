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

//! Power group (§4.D, §4.F): power supplies and the chassis power-control
//! readings, with the Inventec missing-status and iLO 4 "0.00" firmware
//! workarounds applied before filtering.

use redfish_exporter_client::{EndpointPaths, RedfishClient};
use redfish_exporter_core::metrics::families;
use redfish_exporter_core::model::PowerResponse;
use redfish_exporter_core::sample::Sample;
use redfish_exporter_core::Vendor;

use crate::health::health_value;

pub async fn run(client: &RedfishClient, paths: &EndpointPaths) -> Option<Vec<Sample>> {
    let power: PowerResponse = client.get(&paths.power).await.ok()?;
    let mut samples = Vec::new();

    for (i, psu) in power.power_supplies.iter().enumerate() {
        let mut psu = psu.clone();
        if paths.vendor == Vendor::Inventec {
            psu.apply_inventec_shape();
        }
        if paths.vendor == Vendor::Hpe && paths.version == 4 && psu.firmware_version == "0.00" {
            continue;
        }
        if psu.status.state.as_str() != "Enabled" {
            continue;
        }

        let id = i.to_string();
        samples.push(Sample::with_labels(
            &families::POWER_SUPPLY_HEALTH,
            health_value(psu.status.health.as_str()),
            vec![id.clone(), psu.status.health.as_str().to_string()],
        ));
        samples.push(Sample::with_labels(
            &families::POWER_SUPPLY_INPUT_WATTS,
            psu.power_input_watts,
            vec![id.clone()],
        ));
        samples.push(Sample::with_labels(
            &families::POWER_SUPPLY_INPUT_VOLTAGE,
            psu.line_input_voltage,
            vec![id.clone()],
        ));
        samples.push(Sample::with_labels(
            &families::POWER_SUPPLY_OUTPUT_WATTS,
            psu.output_power(),
            vec![id.clone()],
        ));
        samples.push(Sample::with_labels(
            &families::POWER_SUPPLY_CAPACITY_WATTS,
            psu.power_capacity_watts,
            vec![id.clone()],
        ));
        samples.push(Sample::with_labels(
            &families::POWER_SUPPLY_EFFICIENCY_PERCENT,
            psu.efficiency_percent,
            vec![id],
        ));
    }

    for (i, control) in power.power_control.iter().enumerate() {
        let id = i.to_string();
        samples.push(Sample::with_labels(
            &families::POWER_CONTROL_CONSUMED_WATTS,
            control.power_consumed_watts,
            vec![id.clone(), control.name.clone()],
        ));
        samples.push(Sample::with_labels(
            &families::POWER_CONTROL_CAPACITY_WATTS,
            control.power_capacity_watts,
            vec![id.clone(), control.name.clone()],
        ));

        let Some(metrics) = &control.power_metrics else {
            continue;
        };
        samples.push(Sample::with_labels(
            &families::POWER_CONTROL_MIN_CONSUMED_WATTS,
            metrics.min_consumed_watts,
            vec![id.clone(), control.name.clone()],
        ));
        samples.push(Sample::with_labels(
            &families::POWER_CONTROL_MAX_CONSUMED_WATTS,
            metrics.max_consumed_watts,
            vec![id.clone(), control.name.clone()],
        ));
        samples.push(Sample::with_labels(
            &families::POWER_CONTROL_AVG_CONSUMED_WATTS,
            metrics.avg_consumed_watts,
            vec![id.clone(), control.name.clone()],
        ));
        samples.push(Sample::with_labels(
            &families::POWER_CONTROL_INTERVAL_IN_MINUTES,
            metrics.interval_in_minutes as f64,
            vec![id, control.name.clone()],
        ));
    }

    Some(samples)
}
