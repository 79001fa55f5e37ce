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

//! Concurrent scrapes of the same target must collapse into a single
//! in-flight request: every caller gets the same exposition text, and the
//! backing System resource is hit exactly once.

use redfish_exporter_client::credentials::HostCredentials;
use redfish_exporter_client::discovery::EndpointPaths;
use redfish_exporter_client::{ClientParams, RedfishClient};
use redfish_exporter_collector::collector::Collector;
use redfish_exporter_config::model::{CollectConfig, EventConfig, Severity};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn concurrent_gather_calls_deduplicate_into_one_scrape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/redfish/v1/Systems/System.Embedded.1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(150))
                .set_body_json(serde_json::json!({
                    "Manufacturer": "Dell Inc.",
                    "Model": "PowerEdge R640",
                    "PowerState": "On",
                    "Status": {"Health": "OK", "State": "Enabled"}
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let credentials = HostCredentials::new("root".to_string(), "calvin".to_string());
    let client = RedfishClient::with_params(
        server.uri(),
        credentials,
        ClientParams::new().timeout(Duration::from_secs(5)),
    )
    .unwrap();

    let paths = EndpointPaths {
        system: "/redfish/v1/Systems/System.Embedded.1".to_string(),
        ..EndpointPaths::default()
    };

    let collector = Arc::new(Collector::new("bmc-02".to_string(), Arc::new(client), paths, true));

    let collect = CollectConfig {
        system: true,
        ..CollectConfig::default()
    };
    let event = EventConfig {
        severity_level: Severity::Ok,
        max_age_seconds: 0.0,
    };

    let (a, b, c) = tokio::join!(
        collector.gather("idrac", collect, event),
        collector.gather("idrac", collect, event),
        collector.gather("idrac", collect, event),
    );

    assert_eq!(a, b);
    assert_eq!(b, c);
    assert!(a.contains("idrac_system_power_on 1"));
    server.verify().await;
}
