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

use redfish_exporter_core::metrics::families;
use redfish_exporter_core::{format_exposition, Sample};

/// A healthy Dell system (spec §8 scenario 1): exercises the model decode,
/// sample construction, and exposition formatting across family boundaries
/// in one pass.
#[test]
fn healthy_dell_system_exposition() {
    let samples = vec![
        Sample::new(&families::SYSTEM_POWER_ON, 1.0),
        Sample::new(&families::SYSTEM_MEMORY_SIZE_BYTES, 137_438_953_472.0),
        Sample::with_labels(&families::SYSTEM_CPU_COUNT, 2.0, vec!["Xeon".to_string()]),
        Sample::with_labels(
            &families::SENSORS_FAN_SPEED,
            8400.0,
            vec!["0".to_string(), "Fan1".to_string(), "rpm".to_string()],
        ),
        Sample::new(&families::SCRAPE_ERRORS_TOTAL, 0.0),
    ];

    let text = format_exposition("idrac", &samples);

    assert!(text.contains("idrac_system_power_on 1"));
    assert!(text.contains("idrac_system_memory_size_bytes 137438953472"));
    assert!(text.contains(r#"idrac_system_cpu_count{model="Xeon"} 2"#));
    assert!(text.contains(r#"idrac_sensors_fan_speed{id="0",name="Fan1",units="rpm"} 8400"#));
    assert!(text.contains("idrac_exporter_scrape_errors_total 0"));
}

#[test]
fn vendor_detection_from_manufacturer_string() {
    use redfish_exporter_core::Vendor;
    assert_eq!(Vendor::detect("Dell Inc."), Vendor::Dell);
}
