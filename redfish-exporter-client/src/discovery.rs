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

//! Endpoint discovery and vendor path overrides (§4.F).
//!
//! `discover` performs the ordered sequence of GETs the original traversal
//! requires (service root, systems collection, chassis collection, first
//! chassis, first system) and derives the vendor tag from the system
//! payload, applying the vendor-specific overrides verbatim.

use crate::error::ClientError;
use crate::redfish::RedfishClient;
use redfish_exporter_core::model::{ChassisResponse, MemberCollection, ServiceRoot, SystemResponse};
use redfish_exporter_core::Vendor;

#[derive(Debug, Clone, Default)]
pub struct EndpointPaths {
    pub system: String,
    pub thermal: String,
    pub power: String,
    pub storage: String,
    pub memory: String,
    pub network: String,
    pub processors: String,
    pub event_log: String,
    pub update_service: String,
    pub vendor: Vendor,
    /// Set to 4 for the HPE iLO 4 legacy resource layout, 0 otherwise.
    pub version: u8,
}

/// Runs discovery against `client` and returns the resolved endpoint paths.
///
/// Any required GET failing aborts discovery with the error from that GET.
#[allow(clippy::missing_errors_doc)]
pub async fn discover(
    client: &RedfishClient,
    collect_events: bool,
) -> Result<EndpointPaths, ClientError> {
    let root: ServiceRoot = client.get("/redfish/v1").await?;

    let systems: MemberCollection = client.get(&root.systems.odata_id).await?;
    let system_path = systems
        .members
        .links()
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::UnexpectedStatus {
            path: root.systems.odata_id.clone(),
            status: 0,
        })?;

    let chassis_collection: MemberCollection = client.get(&root.chassis.odata_id).await?;
    let chassis_path = chassis_collection
        .members
        .links()
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::UnexpectedStatus {
            path: root.chassis.odata_id.clone(),
            status: 0,
        })?;

    let chassis: ChassisResponse = client.get(&chassis_path).await?;
    let system: SystemResponse = client.get(&system_path).await?;

    let mut paths = EndpointPaths {
        system: system_path,
        thermal: chassis.thermal.odata_id,
        power: chassis.power.odata_id,
        storage: system.storage.odata_id,
        memory: system.memory.odata_id,
        network: system.network_interfaces.odata_id,
        processors: system.processors.odata_id,
        event_log: String::new(),
        update_service: root.update_service.odata_id,
        vendor: Vendor::detect(&system.manufacturer),
        version: 0,
    };

    if collect_events {
        paths.event_log = match paths.vendor {
            Vendor::Dell => "/redfish/v1/Managers/iDRAC.Embedded.1/LogServices/Sel/Entries".to_string(),
            Vendor::Lenovo => {
                if client
                    .exists("/redfish/v1/Systems/1/LogServices/PlatformLog/Entries")
                    .await
                {
                    "/redfish/v1/Systems/1/LogServices/PlatformLog/Entries".to_string()
                } else if client
                    .exists("/redfish/v1/Systems/1/LogServices/StandardLog/Entries")
                    .await
                {
                    "/redfish/v1/Systems/1/LogServices/StandardLog/Entries".to_string()
                } else {
                    String::new()
                }
            }
            Vendor::Hpe => "/redfish/v1/Systems/1/LogServices/IML/Entries".to_string(),
            _ => String::new(),
        };
    }

    // Inspur ships a misspelled collection name.
    if paths.vendor == Vendor::Inspur {
        paths.storage = paths.storage.replace("Storages", "Storage");
    }

    // HPE iLO 4 legacy resource layout.
    if paths.vendor == Vendor::Hpe && Vendor::is_ilo4(&root.name) {
        paths.memory = "/redfish/v1/Systems/1/Memory/".to_string();
        paths.storage = "/redfish/v1/Systems/1/SmartStorage/ArrayControllers/".to_string();
        paths.event_log = String::new();
        paths.version = 4;
    }

    Ok(paths)
}

/// Dell's network port ids sometimes collide with their parent adapter's id;
/// re-derive the port id from the last URI segment in that case (§4.F).
#[must_use]
pub fn dell_port_id_fix(adapter_id: &str, port_id: &str, port_uri: &str) -> String {
    if adapter_id == port_id {
        port_uri
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(port_id)
            .to_string()
    } else {
        port_id.to_string()
    }
}
