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

//! The closed metric schema (§4.D): one static descriptor per family,
//! grouped by resource category. Workers in `redfish-exporter-collector`
//! build [`crate::sample::Sample`]s against these descriptors; nothing
//! outside this module may introduce a new family name at runtime.

use crate::sample::MetricKind;

/// A metric family descriptor: its name components, help text, exposition
/// kind, and the label names a [`crate::sample::Sample`] built against it
/// must supply, in order.
#[derive(Debug, Clone, Copy)]
pub struct MetricFamily {
    pub subsystem: &'static str,
    pub name: &'static str,
    pub help: &'static str,
    pub kind: MetricKind,
    pub labels: &'static [&'static str],
}

impl MetricFamily {
    /// The fully-qualified exposition name: `<prefix>_<subsystem>_<name>`.
    #[must_use]
    pub fn fq_name(&self, prefix: &str) -> String {
        format!("{prefix}_{}_{}", self.subsystem, self.name)
    }
}

macro_rules! family {
    ($ident:ident, $subsystem:expr, $name:expr, $help:expr, $kind:expr, [$($label:expr),* $(,)?]) => {
        pub static $ident: MetricFamily = MetricFamily {
            subsystem: $subsystem,
            name: $name,
            help: $help,
            kind: $kind,
            labels: &[$($label),*],
        };
    };
}

pub mod families {
    use super::{MetricFamily, MetricKind};

    // Exporter
    family!(BUILD_INFO, "exporter", "build_info", "Build information about the exporter", MetricKind::Info, []);
    family!(SCRAPE_ERRORS_TOTAL, "exporter", "scrape_errors_total", "Total number of failed resource refreshers since collector creation", MetricKind::Counter, []);

    // System
    family!(SYSTEM_POWER_ON, "system", "power_on", "Power state of the system", MetricKind::Gauge, []);
    family!(SYSTEM_HEALTH, "system", "health", "Health status of the system", MetricKind::Gauge, ["status"]);
    family!(SYSTEM_INDICATOR_LED_ON, "system", "indicator_led_on", "Indicator LED state of the system", MetricKind::Gauge, ["state"]);
    family!(SYSTEM_INDICATOR_ACTIVE, "system", "indicator_active", "Whether the system's location indicator is active", MetricKind::Gauge, []);
    family!(SYSTEM_MEMORY_SIZE_BYTES, "system", "memory_size_bytes", "Total memory size of the system in bytes", MetricKind::Gauge, []);
    family!(SYSTEM_CPU_COUNT, "system", "cpu_count", "Total number of CPUs in the system", MetricKind::Gauge, ["model"]);
    family!(SYSTEM_BIOS_INFO, "system", "bios_info", "Information about the BIOS", MetricKind::Info, ["version"]);
    family!(SYSTEM_MACHINE_INFO, "system", "machine_info", "Information about the machine", MetricKind::Info, ["manufacturer", "model", "serial", "sku", "hostname"]);

    // Sensors
    family!(SENSORS_TEMPERATURE, "sensors", "temperature", "Sensors reporting temperature measurements", MetricKind::Gauge, ["id", "name", "units"]);
    family!(SENSORS_FAN_HEALTH, "sensors", "fan_health", "Health status for fans", MetricKind::Gauge, ["id", "name", "status"]);
    family!(SENSORS_FAN_SPEED, "sensors", "fan_speed", "Sensors reporting fan speed measurements", MetricKind::Gauge, ["id", "name", "units"]);

    // Power supply
    family!(POWER_SUPPLY_HEALTH, "power_supply", "health", "Health status for power supplies", MetricKind::Gauge, ["id", "status"]);
    family!(POWER_SUPPLY_INPUT_WATTS, "power_supply", "input_watts", "Power supply input in watts", MetricKind::Gauge, ["id"]);
    family!(POWER_SUPPLY_OUTPUT_WATTS, "power_supply", "output_watts", "Power supply output in watts", MetricKind::Gauge, ["id"]);
    family!(POWER_SUPPLY_CAPACITY_WATTS, "power_supply", "capacity_watts", "Power supply capacity in watts", MetricKind::Gauge, ["id"]);
    family!(POWER_SUPPLY_INPUT_VOLTAGE, "power_supply", "input_voltage", "Power supply input voltage", MetricKind::Gauge, ["id"]);
    family!(POWER_SUPPLY_EFFICIENCY_PERCENT, "power_supply", "efficiency_percent", "Power supply efficiency in percentage", MetricKind::Gauge, ["id"]);

    // Power control
    family!(POWER_CONTROL_CONSUMED_WATTS, "power_control", "consumed_watts", "Consumption of power control system in watts", MetricKind::Gauge, ["id", "name"]);
    family!(POWER_CONTROL_CAPACITY_WATTS, "power_control", "capacity_watts", "Capacity of power control system in watts", MetricKind::Gauge, ["id", "name"]);
    family!(POWER_CONTROL_MIN_CONSUMED_WATTS, "power_control", "min_consumed_watts", "Minimum consumption of power control system during the reported interval", MetricKind::Gauge, ["id", "name"]);
    family!(POWER_CONTROL_MAX_CONSUMED_WATTS, "power_control", "max_consumed_watts", "Maximum consumption of power control system during the reported interval", MetricKind::Gauge, ["id", "name"]);
    family!(POWER_CONTROL_AVG_CONSUMED_WATTS, "power_control", "avg_consumed_watts", "Average consumption of power control system during the reported interval", MetricKind::Gauge, ["id", "name"]);
    family!(POWER_CONTROL_INTERVAL_IN_MINUTES, "power_control", "interval_in_minutes", "Interval for measurements of power control system", MetricKind::Gauge, ["id", "name"]);

    // Events
    family!(EVENTS_LOG_ENTRY, "events", "log_entry", "Entry from the system event log", MetricKind::Counter, ["id", "message", "severity"]);

    // Storage
    family!(STORAGE_INFO, "storage", "info", "Information about storage controllers' parent resource", MetricKind::Info, ["id", "name"]);
    family!(STORAGE_HEALTH, "storage", "health", "Health status for storage", MetricKind::Gauge, ["id", "status"]);
    family!(STORAGE_DRIVE_INFO, "storage_drive", "info", "Information about disk drives", MetricKind::Info, ["id", "storage_id", "manufacturer", "mediatype", "model", "name", "protocol", "serial", "slot"]);
    family!(STORAGE_DRIVE_HEALTH, "storage_drive", "health", "Health status for disk drives", MetricKind::Gauge, ["id", "status"]);
    family!(STORAGE_DRIVE_CAPACITY_BYTES, "storage_drive", "capacity_bytes", "Capacity of disk drives in bytes", MetricKind::Gauge, ["id"]);
    family!(STORAGE_DRIVE_LIFE_LEFT_PERCENT, "storage_drive", "life_left_percent", "Predicted remaining life of disk drives in percent", MetricKind::Gauge, ["id"]);
    family!(STORAGE_DRIVE_INDICATOR_ACTIVE, "storage_drive", "indicator_active", "Whether a disk drive's location indicator is active", MetricKind::Gauge, ["id"]);
    family!(STORAGE_CONTROLLER_INFO, "storage_controller", "info", "Information about storage controllers", MetricKind::Info, ["id", "storage_id", "manufacturer", "model", "name"]);
    family!(STORAGE_CONTROLLER_HEALTH, "storage_controller", "health", "Health status for storage controllers", MetricKind::Gauge, ["id", "status"]);
    family!(STORAGE_CONTROLLER_SPEED_MBPS, "storage_controller", "speed_mbps", "Interface speed of storage controllers in Mbps", MetricKind::Gauge, ["id"]);
    family!(STORAGE_VOLUME_INFO, "storage_volume", "info", "Information about storage volumes", MetricKind::Info, ["id", "storage_id", "name"]);
    family!(STORAGE_VOLUME_HEALTH, "storage_volume", "health", "Health status for storage volumes", MetricKind::Gauge, ["id", "status"]);
    family!(STORAGE_VOLUME_MEDIA_SPAN_COUNT, "storage_volume", "media_span_count", "Number of media elements backing a storage volume", MetricKind::Gauge, ["id"]);
    family!(STORAGE_VOLUME_CAPACITY_BYTES, "storage_volume", "capacity_bytes", "Capacity of storage volumes in bytes", MetricKind::Gauge, ["id"]);

    // Memory module
    family!(MEMORY_MODULE_INFO, "memory_module", "info", "Information about memory modules", MetricKind::Info, ["id", "ecc", "manufacturer", "type", "name", "serial", "rank"]);
    family!(MEMORY_MODULE_HEALTH, "memory_module", "health", "Health status for memory modules", MetricKind::Gauge, ["id", "status"]);
    family!(MEMORY_MODULE_CAPACITY_BYTES, "memory_module", "capacity_bytes", "Capacity of memory modules in bytes", MetricKind::Gauge, ["id"]);
    family!(MEMORY_MODULE_SPEED_MHZ, "memory_module", "speed_mhz", "Speed of memory modules in MHz", MetricKind::Gauge, ["id"]);

    // Network
    family!(NETWORK_ADAPTER_INFO, "network_adapter", "info", "Information about network adapters", MetricKind::Info, ["id", "manufacturer", "model", "serial"]);
    family!(NETWORK_ADAPTER_HEALTH, "network_adapter", "health", "Health status for network adapters", MetricKind::Gauge, ["id", "status"]);
    family!(NETWORK_PORT_HEALTH, "network_port", "health", "Health status for network ports", MetricKind::Gauge, ["id", "status"]);
    family!(NETWORK_PORT_CURRENT_SPEED_MBPS, "network_port", "current_speed_mbps", "Current link speed of a network port in Mbps", MetricKind::Gauge, ["id"]);
    family!(NETWORK_PORT_MAX_SPEED_MBPS, "network_port", "max_speed_mbps", "Maximum supported link speed of a network port in Mbps", MetricKind::Gauge, ["id"]);
    family!(NETWORK_PORT_LINK_UP, "network_port", "link_up", "Whether a network port's link is up", MetricKind::Gauge, ["id", "interface_id", "status"]);

    // CPU
    family!(CPU_INFO, "cpu", "info", "Information about processors", MetricKind::Info, ["id", "socket", "manufacturer", "model", "arch"]);
    family!(CPU_HEALTH, "cpu", "health", "Health status for processors", MetricKind::Gauge, ["id", "status"]);
    family!(CPU_VOLTAGE, "cpu", "voltage", "Processor voltage in volts", MetricKind::Gauge, ["id"]);
    family!(CPU_MAX_SPEED_MHZ, "cpu", "max_speed_mhz", "Maximum processor speed in MHz", MetricKind::Gauge, ["id"]);
    family!(CPU_CURRENT_SPEED_MHZ, "cpu", "current_speed_mhz", "Current processor speed in MHz", MetricKind::Gauge, ["id"]);
    family!(CPU_TOTAL_CORES, "cpu", "total_cores", "Total number of processor cores", MetricKind::Gauge, ["id"]);
    family!(CPU_TOTAL_THREADS, "cpu", "total_threads", "Total number of processor threads", MetricKind::Gauge, ["id"]);

    // Firmware
    family!(FIRMWARE_INFO, "firmware", "info", "Information about installed firmware", MetricKind::Info, ["name", "version", "state"]);

    // Vendor: Dell OEM
    family!(DELL_BATTERY_ROLLUP_HEALTH, "dell", "battery_rollup_health", "Rollup health status of the system battery (Dell OEM)", MetricKind::Gauge, ["status"]);
    family!(DELL_ESTIMATED_SYSTEM_AIRFLOW_CFM, "dell", "estimated_system_airflow_cfm", "Estimated system airflow in cubic feet per minute (Dell OEM)", MetricKind::Gauge, []);
    family!(DELL_CONTROLLER_BATTERY_HEALTH, "dell", "controller_battery_health", "Health status of a storage controller's battery (Dell OEM)", MetricKind::Gauge, ["id", "status"]);
}

#[cfg(test)]
mod tests {
    use super::families::*;
    use super::*;

    #[test]
    fn fq_name_joins_prefix_subsystem_and_name() {
        assert_eq!(SYSTEM_POWER_ON.fq_name("idrac"), "idrac_system_power_on");
        assert_eq!(
            SCRAPE_ERRORS_TOTAL.fq_name("idrac"),
            "idrac_exporter_scrape_errors_total"
        );
    }

    #[test]
    fn counter_families_expose_counter_type() {
        assert_eq!(EVENTS_LOG_ENTRY.kind.exposition_type(), "counter");
        assert_eq!(SCRAPE_ERRORS_TOTAL.kind.exposition_type(), "counter");
    }

    #[test]
    fn info_families_expose_gauge_exposition_type() {
        assert_eq!(BUILD_INFO.kind.exposition_type(), "gauge");
        assert_eq!(SYSTEM_MACHINE_INFO.kind.exposition_type(), "gauge");
    }

    #[test]
    fn label_arities_match_documented_label_sets() {
        assert_eq!(SYSTEM_MACHINE_INFO.labels.len(), 5);
        assert_eq!(STORAGE_DRIVE_INFO.labels.len(), 9);
        assert_eq!(NETWORK_PORT_LINK_UP.labels.len(), 3);
    }
}
