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

//! Event log group (§4.D, §4.F): filtered by minimum severity and maximum
//! age before being turned into counter samples keyed by event id.

use redfish_exporter_client::{EndpointPaths, RedfishClient};
use redfish_exporter_config::model::EventConfig;
use redfish_exporter_core::metrics::families;
use redfish_exporter_core::model::EventLogResponse;
use redfish_exporter_core::sample::Sample;
use redfish_exporter_core::EventTimestamp;
use time::OffsetDateTime;

use crate::health::health_value;

pub async fn run(client: &RedfishClient, paths: &EndpointPaths, event: EventConfig, now: OffsetDateTime) -> Option<Vec<Sample>> {
    if paths.event_log.is_empty() {
        return Some(Vec::new());
    }

    let log: EventLogResponse = client.get(&paths.event_log).await.ok()?;
    let mut samples = Vec::new();
    let min_severity = health_value_for_severity(event.severity_level);

    for entry in &log.members {
        let Ok(timestamp) = entry.created.parse::<EventTimestamp>() else {
            continue;
        };
        if timestamp.age_seconds(now) > event.max_age_seconds {
            continue;
        }
        if health_value(&entry.severity) < min_severity {
            continue;
        }

        samples.push(Sample::with_timestamp(
            &families::EVENTS_LOG_ENTRY,
            vec![entry.id.clone(), entry.message.clone(), entry.severity.clone()],
            timestamp,
        ));
    }

    Some(samples)
}

fn health_value_for_severity(severity: redfish_exporter_config::model::Severity) -> f64 {
    use redfish_exporter_config::model::Severity;
    match severity {
        Severity::Ok => 0.0,
        Severity::Warning => 1.0,
        Severity::Critical => 2.0,
    }
}
