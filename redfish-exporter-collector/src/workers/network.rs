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

//! Network group (§4.D, §4.F): adapters and their ports, with the Dell
//! port-id collision workaround applied before emission.

use redfish_exporter_client::discovery::dell_port_id_fix;
use redfish_exporter_client::{EndpointPaths, RedfishClient};
use redfish_exporter_core::metrics::families;
use redfish_exporter_core::model::{MemberCollection, NetworkAdapter, NetworkPort};
use redfish_exporter_core::sample::Sample;
use redfish_exporter_core::Vendor;

use crate::health::health_value;

pub async fn run(client: &RedfishClient, paths: &EndpointPaths) -> Option<Vec<Sample>> {
    let collection: MemberCollection = client.get(&paths.network).await.ok()?;
    let mut samples = Vec::new();

    for link in collection.members.links() {
        let adapter: NetworkAdapter = client.get(&link).await.ok()?;
        if adapter.status.state.as_str() != "Enabled" {
            continue;
        }

        samples.push(Sample::with_labels(
            &families::NETWORK_ADAPTER_INFO,
            1.0,
            vec![
                adapter.id.clone(),
                adapter.manufacturer.clone(),
                adapter.model.clone(),
                adapter.serial_number.clone(),
            ],
        ));
        let adapter_health = adapter.status.health.as_str().to_string();
        if !adapter_health.is_empty() {
            samples.push(Sample::with_labels(
                &families::NETWORK_ADAPTER_HEALTH,
                health_value(&adapter_health),
                vec![adapter.id.clone(), adapter_health],
            ));
        }

        let ports_path = adapter.ports_path().to_string();
        if ports_path.is_empty() {
            continue;
        }
        let ports: MemberCollection = client.get(&ports_path).await.ok()?;

        for port_link in ports.members.links() {
            let mut port: NetworkPort = client.get(&port_link).await.ok()?;
            if paths.vendor == Vendor::Dell {
                port.id = dell_port_id_fix(&adapter.id, &port.id, &port_link);
            }

            let port_health = port.status.health.as_str().to_string();
            if !port_health.is_empty() {
                samples.push(Sample::with_labels(
                    &families::NETWORK_PORT_HEALTH,
                    health_value(&port_health),
                    vec![port.id.clone(), port_health],
                ));
            }
            samples.push(Sample::with_labels(
                &families::NETWORK_PORT_CURRENT_SPEED_MBPS,
                port.current_speed_mbps(),
                vec![port.id.clone()],
            ));
            samples.push(Sample::with_labels(
                &families::NETWORK_PORT_MAX_SPEED_MBPS,
                port.max_speed_mbps(),
                vec![port.id.clone()],
            ));
            samples.push(Sample::with_labels(
                &families::NETWORK_PORT_LINK_UP,
                if port.link_up() { 1.0 } else { 0.0 },
                vec![port.id, adapter.id.clone(), port.link_status],
            ));
        }
    }

    Some(samples)
}
