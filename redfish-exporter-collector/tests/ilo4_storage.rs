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

//! HPE iLO 4 reports no `Storage` parent resource: the storage path points
//! straight at `SmartStorage/ArrayControllers`, and each controller's
//! drives live under its own `DiskDrives/` sub-collection rather than a
//! shared `Drives` link.

use redfish_exporter_client::credentials::HostCredentials;
use redfish_exporter_client::discovery::EndpointPaths;
use redfish_exporter_client::{ClientParams, RedfishClient};
use redfish_exporter_collector::workers::storage;
use redfish_exporter_core::Vendor;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn ilo4_layout_walks_array_controllers_and_disk_drives() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Systems/1/SmartStorage/ArrayControllers/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Members": [{"@odata.id": "/redfish/v1/Systems/1/SmartStorage/ArrayControllers/0/"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Systems/1/SmartStorage/ArrayControllers/0/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Id": "0",
            "Name": "Smart Array P440ar",
            "Manufacturer": "HPE",
            "Model": "Smart Array P440ar",
            "SpeedGbps": 12.0,
            "Status": {"Health": "OK", "State": "Enabled"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Systems/1/SmartStorage/ArrayControllers/0/DiskDrives/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Members": [{"@odata.id": "/redfish/v1/Systems/1/SmartStorage/ArrayControllers/0/DiskDrives/0/"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Systems/1/SmartStorage/ArrayControllers/0/DiskDrives/0/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Id": "0",
            "Name": "Drive 0",
            "Manufacturer": "HPE",
            "Model": "EG0900JFCKA",
            "CapacityMiB": 858_306,
            "InterfaceType": "SAS",
            "Status": {"Health": "OK", "State": "Enabled"},
            "SerialNumber": "SN0"
        })))
        .mount(&server)
        .await;

    let credentials = HostCredentials::new("Administrator".to_string(), "password".to_string());
    let client = RedfishClient::with_params(
        server.uri(),
        credentials,
        ClientParams::new().timeout(Duration::from_secs(5)),
    )
    .unwrap();

    let paths = EndpointPaths {
        storage: "/redfish/v1/Systems/1/SmartStorage/ArrayControllers/".to_string(),
        vendor: Vendor::Hpe,
        version: 4,
        ..EndpointPaths::default()
    };

    let samples = storage::run(&client, &paths).await.expect("ilo4 storage group should succeed");

    let controller_info = samples
        .iter()
        .find(|s| s.family.name == "info" && s.label_values.first().map(String::as_str) == Some("0") && s.family.subsystem == "storage_controller")
        .expect("controller info sample");
    assert_eq!(controller_info.label_values[2], "HPE");

    let drive_info = samples
        .iter()
        .find(|s| s.family.subsystem == "storage_drive" && s.family.name == "info")
        .expect("drive info sample");
    assert_eq!(drive_info.label_values[0], "0");
    assert_eq!(drive_info.label_values[6], "SAS"); // protocol folded from InterfaceType

    let capacity = samples
        .iter()
        .find(|s| s.family.subsystem == "storage_drive" && s.family.name == "capacity_bytes")
        .expect("drive capacity sample");
    assert_eq!(capacity.value, 858_306.0 * 1024.0 * 1024.0);
}
