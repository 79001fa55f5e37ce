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

//! End-to-end scrape against a Dell-flavoured mock service: service root
//! through system, storage (with the Dell controller battery OEM extra)
//! and network (with the Dell port-id collision workaround).

use redfish_exporter_client::credentials::HostCredentials;
use redfish_exporter_client::discovery::discover;
use redfish_exporter_client::{ClientParams, RedfishClient};
use redfish_exporter_collector::collector::Collector;
use redfish_exporter_config::model::{CollectConfig, EventConfig, Severity};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_dell_fixture(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/redfish/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Name": "Root Service",
            "Systems": {"@odata.id": "/redfish/v1/Systems"},
            "Chassis": {"@odata.id": "/redfish/v1/Chassis"},
            "UpdateService": {"@odata.id": "/redfish/v1/UpdateService"}
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Systems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Members": [{"@odata.id": "/redfish/v1/Systems/System.Embedded.1"}]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Chassis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Members": [{"@odata.id": "/redfish/v1/Chassis/System.Embedded.1"}]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Chassis/System.Embedded.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Name": "Chassis",
            "Thermal": {"@odata.id": "/redfish/v1/Chassis/System.Embedded.1/Thermal"},
            "Power": {"@odata.id": "/redfish/v1/Chassis/System.Embedded.1/Power"}
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Systems/System.Embedded.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Manufacturer": "Dell Inc.",
            "Model": "PowerEdge R740",
            "SerialNumber": "ABC123",
            "SKU": "SKU1",
            "HostName": "bmc-01",
            "PowerState": "On",
            "BiosVersion": "2.1.0",
            "Status": {"Health": "OK", "State": "Enabled"},
            "Storage": {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/Storage"},
            "Memory": {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/Memory"},
            "NetworkInterfaces": {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/NetworkInterfaces"},
            "Processors": {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/Processors"}
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Systems/System.Embedded.1/Storage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Members": [{"@odata.id": "/redfish/v1/Systems/System.Embedded.1/Storage/RAID.Integrated.1-1"}]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Systems/System.Embedded.1/Storage/RAID.Integrated.1-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Id": "RAID.Integrated.1-1",
            "Name": "Integrated RAID Controller",
            "Status": {"Health": "OK", "State": "Enabled"},
            "Drives": [],
            "Controllers": {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/Storage/RAID.Integrated.1-1/Controllers"},
            "Volumes": {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/Storage/RAID.Integrated.1-1/Volumes"}
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Systems/System.Embedded.1/Storage/RAID.Integrated.1-1/Controllers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Members": [{"@odata.id": "/redfish/v1/Systems/System.Embedded.1/Storage/RAID.Integrated.1-1/Controllers/RAID.Integrated.1-1"}]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Systems/System.Embedded.1/Storage/RAID.Integrated.1-1/Controllers/RAID.Integrated.1-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Id": "RAID.Integrated.1-1",
            "Name": "PERC H730P Mini",
            "Manufacturer": "DELL",
            "Model": "PERC H730P Mini",
            "SpeedGbps": 12.0,
            "Status": {"Health": "OK", "State": "Enabled"},
            "Oem": {"Dell": {"DellControllerBattery": {"PrimaryStatus": "OK"}}}
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Systems/System.Embedded.1/Storage/RAID.Integrated.1-1/Volumes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"Members": []})))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Systems/System.Embedded.1/NetworkInterfaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Members": [{"@odata.id": "/redfish/v1/Systems/System.Embedded.1/NetworkInterfaces/NIC.1"}]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Systems/System.Embedded.1/NetworkInterfaces/NIC.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Id": "NIC.1",
            "Manufacturer": "Broadcom",
            "Model": "BCM57414",
            "SerialNumber": "SN1",
            "Status": {"Health": "OK", "State": "Enabled"},
            "Ports": {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/NetworkInterfaces/NIC.1/NetworkPorts"}
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Systems/System.Embedded.1/NetworkInterfaces/NIC.1/NetworkPorts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Members": [{"@odata.id": "/redfish/v1/Systems/System.Embedded.1/NetworkInterfaces/NIC.1/NetworkPorts/NIC.1.1"}]
        })))
        .mount(server)
        .await;

    // Dell port collision: the port resource reports its own Id as "NIC.1",
    // colliding with the adapter id, so the real port id must come from the URI.
    Mock::given(method("GET"))
        .and(path("/redfish/v1/Systems/System.Embedded.1/NetworkInterfaces/NIC.1/NetworkPorts/NIC.1.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Id": "NIC.1",
            "LinkStatus": "LinkUp",
            "CurrentLinkSpeedMbps": 25000,
            "MaxSpeedGbps": 25,
            "Status": {"Health": "OK", "State": "Enabled"}
        })))
        .mount(server)
        .await;
}

fn all_but_expensive_groups() -> CollectConfig {
    CollectConfig {
        system: true,
        sensors: false,
        events: false,
        power: false,
        storage: true,
        memory: false,
        network: true,
        processors: false,
        extra: false,
        firmware: false,
    }
}

#[tokio::test]
async fn healthy_dell_scrape_emits_storage_and_network_samples() {
    let server = MockServer::start().await;
    mount_dell_fixture(&server).await;

    let credentials = HostCredentials::new("root".to_string(), "calvin".to_string());
    let client = RedfishClient::with_params(
        server.uri(),
        credentials,
        ClientParams::new().timeout(Duration::from_secs(5)),
    )
    .unwrap();
    let paths = discover(&client, false).await.unwrap();
    assert_eq!(paths.vendor.to_string(), "dell");

    let collector = Collector::new(
        "bmc-01".to_string(),
        Arc::new(client),
        paths,
        true, // basic auth only: skip session negotiation against the mock
    );

    let event = EventConfig {
        severity_level: Severity::Ok,
        max_age_seconds: 0.0,
    };
    let text = collector.gather("idrac", all_but_expensive_groups(), event).await;

    assert!(text.contains("idrac_system_machine_info{manufacturer=\"Dell Inc.\""));
    assert!(text.contains("idrac_storage_controller_info{id=\"RAID.Integrated.1-1\""));
    assert!(text.contains("idrac_dell_controller_battery_health{id=\"RAID.Integrated.1-1\",status=\"OK\"} 0"));
    assert!(text.contains("idrac_network_port_link_up{id=\"NIC.1.1\",interface_id=\"NIC.1\",status=\"LinkUp\"} 1"));
    assert!(text.contains("idrac_exporter_build_info 1"));
    assert!(text.contains("idrac_exporter_scrape_errors_total 0"));
}
