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

//! Firmware group (§4.D, §4.F): installed firmware inventory, decoded
//! entirely from each member's URI rather than its body.

use redfish_exporter_client::{EndpointPaths, RedfishClient};
use redfish_exporter_core::metrics::families;
use redfish_exporter_core::model::{FirmwareEntry, MemberCollection, UpdateServiceResponse};
use redfish_exporter_core::sample::Sample;

pub async fn run(client: &RedfishClient, paths: &EndpointPaths) -> Option<Vec<Sample>> {
    if paths.update_service.is_empty() {
        return Some(Vec::new());
    }

    let update_service: UpdateServiceResponse = client.get(&paths.update_service).await.ok()?;
    if update_service.firmware_inventory.odata_id.is_empty() {
        return Some(Vec::new());
    }

    let collection: MemberCollection = client.get(&update_service.firmware_inventory.odata_id).await.ok()?;
    let mut samples = Vec::new();

    for link in collection.members.links() {
        if let Some(entry) = FirmwareEntry::parse_from_uri(&link) {
            samples.push(Sample::with_labels(
                &families::FIRMWARE_INFO,
                1.0,
                vec![entry.name, entry.version, entry.state],
            ));
        }
    }

    Some(samples)
}
