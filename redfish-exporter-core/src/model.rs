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

//! Resource model (§4.C)
//!
//! These records mirror the subset of the Redfish JSON schema this exporter
//! reads. Fields that a given BMC may simply not populate are `Option`,
//! `Default`-derived, or otherwise structured so that absence decodes
//! cleanly instead of failing the whole payload: one unfamiliar or missing
//! field in a 200-field resource must never prevent every other field in
//! that resource from being read.

use crate::xstring::XString;
use serde::Deserialize;

fn default_status() -> Status {
    Status::default()
}

/// Common `Health`/`HealthRollup`/`State` triad attached to most resources.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Status {
    #[serde(default, rename = "Health")]
    pub health: XString,
    #[serde(default, rename = "HealthRollup")]
    pub health_rollup: XString,
    #[serde(default, rename = "State")]
    pub state: XString,
}

/// One `@odata`-shaped link to another resource.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Odata {
    #[serde(default, rename = "@odata.id")]
    pub odata_id: String,
}

/// A `Members` array of [`Odata`] links, deduplicated in first-occurrence
/// order per §4.C.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct OdataSlice(pub Vec<Odata>);

impl OdataSlice {
    /// Distinct, non-empty link targets, in first-occurrence order.
    #[must_use]
    pub fn links(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for entry in &self.0 {
            if entry.odata_id.is_empty() {
                continue;
            }
            if seen.insert(entry.odata_id.clone()) {
                out.push(entry.odata_id.clone());
            }
        }
        out
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Redundancy {
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "Mode")]
    pub mode: XString,
    #[serde(default, rename = "RedundancyEnabled")]
    pub redundancy_enabled: bool,
    #[serde(default, rename = "Status")]
    pub status: Status,
}

/// Response body of `GET /redfish/v1`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceRoot {
    #[serde(default, rename = "RedfishVersion")]
    pub redfish_version: String,
    #[serde(default, rename = "Product")]
    pub product: String,
    #[serde(default, rename = "Vendor")]
    pub vendor: String,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "Systems")]
    pub systems: Odata,
    #[serde(default, rename = "Chassis")]
    pub chassis: Odata,
    #[serde(default, rename = "UpdateService")]
    pub update_service: Odata,
    #[serde(default, rename = "EventService")]
    pub event_service: Odata,
}

/// Response body of `GET <UpdateService>`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateServiceResponse {
    #[serde(default, rename = "FirmwareInventory")]
    pub firmware_inventory: Odata,
}

/// A `/Systems` or `/Chassis` collection response, used only for its
/// `Members` link list during discovery.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberCollection {
    #[serde(default, rename = "Members")]
    pub members: OdataSlice,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChassisResponse {
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(default, rename = "Model")]
    pub model: String,
    #[serde(default, rename = "SerialNumber")]
    pub serial_number: String,
    #[serde(default, rename = "SKU")]
    pub sku: String,
    #[serde(default, rename = "Status")]
    pub status: Status,
    #[serde(default, rename = "Thermal")]
    pub thermal: Odata,
    #[serde(default, rename = "ThermalSubsystem")]
    pub thermal_subsystem: Odata,
    #[serde(default, rename = "Power")]
    pub power: Odata,
    #[serde(default, rename = "PowerSubsystem")]
    pub power_subsystem: Odata,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThermalResponse {
    #[serde(default, rename = "Fans")]
    pub fans: Vec<Fan>,
    #[serde(default, rename = "Temperatures")]
    pub temperatures: Vec<Temperature>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fan {
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "FanName")]
    pub fan_name: String,
    #[serde(default, rename = "MemberId")]
    pub member_id: String,
    #[serde(default, rename = "Reading")]
    pub reading: f64,
    #[serde(default, rename = "CurrentReading")]
    pub current_reading: f64,
    #[serde(default, rename = "Units")]
    pub units: String,
    #[serde(default, rename = "ReadingUnits")]
    pub reading_units: String,
    #[serde(default = "default_status", rename = "Status")]
    pub status: Status,
}

impl Fan {
    #[must_use]
    pub fn name(&self) -> &str {
        if !self.fan_name.is_empty() {
            &self.fan_name
        } else {
            &self.name
        }
    }

    #[must_use]
    pub fn reading(&self) -> f64 {
        if self.reading > 0.0 {
            self.reading
        } else {
            self.current_reading
        }
    }

    #[must_use]
    pub fn units(&self) -> &str {
        if !self.reading_units.is_empty() {
            &self.reading_units
        } else {
            &self.units
        }
    }

    #[must_use]
    pub fn id(&self, fallback: usize) -> String {
        if !self.member_id.is_empty() {
            self.member_id.clone()
        } else {
            fallback.to_string()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Temperature {
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "Number")]
    pub number: i64,
    #[serde(default, rename = "MemberId")]
    pub member_id: String,
    #[serde(default, rename = "ReadingCelsius")]
    pub reading_celsius: f64,
    #[serde(default = "default_status", rename = "Status")]
    pub status: Status,
}

impl Temperature {
    #[must_use]
    pub fn id(&self, fallback: usize) -> String {
        if !self.member_id.is_empty() {
            self.member_id.clone()
        } else if self.number > 0 {
            self.number.to_string()
        } else {
            fallback.to_string()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Storage {
    #[serde(default, rename = "Id")]
    pub id: String,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "Drives")]
    pub drives: OdataSlice,
    #[serde(default, rename = "Controllers")]
    pub controllers: Odata,
    #[serde(default, rename = "Volumes")]
    pub volumes: Odata,
    #[serde(default = "default_status", rename = "Status")]
    pub status: Status,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageController {
    #[serde(default, rename = "Id")]
    pub id: String,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(default, rename = "Model")]
    pub model: String,
    #[serde(default, rename = "SpeedGbps")]
    pub speed_gbps: f64,
    #[serde(default = "default_status", rename = "Status")]
    pub status: Status,
    #[serde(default, rename = "Oem")]
    pub oem: StorageOem,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartLocation {
    #[serde(default, rename = "LocationOrdinalValue")]
    pub location_ordinal_value: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhysicalLocation {
    #[serde(default, rename = "PartLocation")]
    pub part_location: Option<PartLocation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageDrive {
    #[serde(default, rename = "Id")]
    pub id: String,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "IndicatorLED")]
    pub indicator_led: String,
    #[serde(default, rename = "LocationIndicatorActive")]
    pub location_indicator_active: Option<bool>,
    #[serde(default, rename = "MediaType")]
    pub media_type: String,
    #[serde(default, rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(default, rename = "Model")]
    pub model: String,
    #[serde(default, rename = "CapacityBytes")]
    pub capacity_bytes: i64,
    #[serde(default, rename = "Status")]
    pub status: Status,
    #[serde(default, rename = "SerialNumber")]
    pub serial_number: String,
    #[serde(default, rename = "Protocol")]
    pub protocol: String,
    #[serde(default, rename = "PredictedMediaLifeLeftPercent")]
    pub predicted_life_left: f64,
    #[serde(default, rename = "RotationSpeedRPM")]
    pub rotation_speed_rpm: f64,
    #[serde(default, rename = "PhysicalLocation")]
    pub physical_location: Option<PhysicalLocation>,
    // HPE iLO 4 shape: reported in MiB rather than CapacityBytes, interface
    // type rather than Protocol, and endurance-used rather than life-left.
    #[serde(default, rename = "CapacityMiB")]
    pub capacity_mib: i64,
    #[serde(default, rename = "InterfaceType")]
    pub interface_type: String,
    #[serde(default, rename = "SSDEnduranceUtilizationPercentage")]
    pub ssd_endurance_utilization_percentage: f64,
}

impl StorageDrive {
    /// Folds the iLO 4 drive shape into the standard one (§4.F): MiB to
    /// bytes, interface type to protocol, endurance used to life left.
    pub fn apply_ilo4_shape(&mut self) {
        if self.capacity_mib > 0 {
            self.capacity_bytes = self.capacity_mib * 1024 * 1024;
        }
        if !self.interface_type.is_empty() {
            self.protocol = self.interface_type.clone();
        }
        if self.ssd_endurance_utilization_percentage > 0.0 {
            self.predicted_life_left = 100.0 - self.ssd_endurance_utilization_percentage;
        }
    }

    /// Slot ordinal from `PhysicalLocation.PartLocation`, or empty when absent.
    #[must_use]
    pub fn slot(&self) -> String {
        self.physical_location
            .as_ref()
            .and_then(|p| p.part_location.as_ref())
            .map(|p| p.location_ordinal_value.to_string())
            .unwrap_or_default()
    }

    /// Whether life-left should be suppressed: zero on rotating media (§4.D).
    #[must_use]
    pub fn suppress_life_left(&self) -> bool {
        self.predicted_life_left == 0.0 && self.rotation_speed_rpm > 0.0
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageVolume {
    #[serde(default, rename = "Id")]
    pub id: String,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "CapacityBytes")]
    pub capacity_bytes: i64,
    #[serde(default, rename = "MediaSpanCount")]
    pub media_span_count: i64,
    #[serde(default = "default_status", rename = "Status")]
    pub status: Status,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Memory {
    #[serde(default, rename = "Id")]
    pub id: String,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(default, rename = "ErrorCorrection")]
    pub error_correction: String,
    #[serde(default, rename = "MemoryDeviceType")]
    pub memory_device_type: String,
    #[serde(default, rename = "OperatingSpeedMhz")]
    pub operating_speed_mhz: i64,
    #[serde(default, rename = "CapacityMiB")]
    pub capacity_mib: i64,
    #[serde(default, rename = "SerialNumber")]
    pub serial_number: String,
    #[serde(default, rename = "RankCount")]
    pub rank_count: i64,
    #[serde(default = "default_status", rename = "Status")]
    pub status: Status,
    // HPE iLO 4 shape.
    #[serde(default, rename = "HPMemoryType")]
    pub hp_memory_type: String,
    #[serde(default, rename = "DIMMStatus")]
    pub dimm_status: String,
    #[serde(default, rename = "DIMMType")]
    pub dimm_type: String,
    #[serde(default, rename = "MaximumFrequencyMHz")]
    pub maximum_frequency_mhz: i64,
    #[serde(default, rename = "Rank")]
    pub rank: i64,
    #[serde(default, rename = "SizeMB")]
    pub size_mb: i64,
}

impl Memory {
    /// Folds the iLO 4 module shape into the standard one (§4.F).
    pub fn apply_ilo4_shape(&mut self) {
        if !self.hp_memory_type.is_empty() {
            self.memory_device_type = self.hp_memory_type.clone();
        }
        if !self.dimm_type.is_empty() && self.error_correction.is_empty() {
            self.error_correction = self.dimm_type.clone();
        }
        if self.maximum_frequency_mhz > 0 {
            self.operating_speed_mhz = self.maximum_frequency_mhz;
        }
        if self.rank > 0 {
            self.rank_count = self.rank;
        }
        if self.size_mb > 0 {
            self.capacity_mib = self.size_mb;
        }
        if !self.dimm_status.is_empty() {
            self.status.health = XString(self.dimm_status.clone());
        }
    }

    #[must_use]
    pub fn capacity_bytes(&self) -> i64 {
        self.capacity_mib * 1024 * 1024
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkAdapter {
    #[serde(default, rename = "Id")]
    pub id: String,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(default, rename = "Model")]
    pub model: String,
    #[serde(default, rename = "SerialNumber")]
    pub serial_number: String,
    #[serde(default = "default_status", rename = "Status")]
    pub status: Status,
    #[serde(default, rename = "NetworkPorts")]
    pub network_ports: Odata,
    #[serde(default, rename = "Ports")]
    pub ports: Odata,
}

impl NetworkAdapter {
    #[must_use]
    pub fn ports_path(&self) -> &str {
        if !self.ports.odata_id.is_empty() {
            &self.ports.odata_id
        } else {
            &self.network_ports.odata_id
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkPort {
    #[serde(default, rename = "Id")]
    pub id: String,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "LinkStatus")]
    pub link_status: String,
    #[serde(default, rename = "CurrentLinkSpeedMbps")]
    pub current_link_speed_mbps: f64,
    #[serde(default, rename = "CurrentSpeedGbps")]
    pub current_speed_gbps: f64,
    #[serde(default, rename = "MaxSpeedGbps")]
    pub max_speed_gbps: f64,
    #[serde(default = "default_status", rename = "Status")]
    pub status: Status,
}

impl NetworkPort {
    #[must_use]
    pub fn link_up(&self) -> bool {
        matches!(self.link_status.as_str(), "Up" | "LinkUp")
    }

    #[must_use]
    pub fn current_speed_mbps(&self) -> f64 {
        if self.current_link_speed_mbps > 0.0 {
            self.current_link_speed_mbps
        } else {
            self.current_speed_gbps * 1000.0
        }
    }

    #[must_use]
    pub fn max_speed_mbps(&self) -> f64 {
        self.max_speed_gbps * 1000.0
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemorySummary {
    #[serde(default, rename = "TotalSystemMemoryGiB")]
    pub total_system_memory_gib: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessorSummary {
    #[serde(default, rename = "Count")]
    pub count: i64,
    #[serde(default, rename = "Model")]
    pub model: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HpeSystemOem {
    #[serde(default, rename = "IndicatorLED")]
    pub indicator_led: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemOem {
    #[serde(default, rename = "Hpe")]
    pub hpe: HpeSystemOem,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemResponse {
    #[serde(default, rename = "IndicatorLED")]
    pub indicator_led: String,
    #[serde(default, rename = "LocationIndicatorActive")]
    pub location_indicator_active: Option<bool>,
    #[serde(default, rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(default, rename = "AssetTag")]
    pub asset_tag: String,
    #[serde(default, rename = "PartNumber")]
    pub part_number: String,
    #[serde(default, rename = "HostName")]
    pub host_name: String,
    #[serde(default, rename = "PowerState")]
    pub power_state: String,
    #[serde(default, rename = "BiosVersion")]
    pub bios_version: String,
    #[serde(default, rename = "Model")]
    pub model: String,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "SKU")]
    pub sku: String,
    #[serde(default, rename = "SerialNumber")]
    pub serial_number: String,
    #[serde(default = "default_status", rename = "Status")]
    pub status: Status,
    #[serde(default, rename = "Processors")]
    pub processors: Odata,
    #[serde(default, rename = "Memory")]
    pub memory: Odata,
    #[serde(default, rename = "Storage")]
    pub storage: Odata,
    #[serde(default, rename = "NetworkInterfaces")]
    pub network_interfaces: Odata,
    #[serde(default, rename = "MemorySummary")]
    pub memory_summary: Option<MemorySummary>,
    #[serde(default, rename = "ProcessorSummary")]
    pub processor_summary: Option<ProcessorSummary>,
    #[serde(default, rename = "Oem")]
    pub oem: SystemOem,
}

impl SystemResponse {
    #[must_use]
    pub fn indicator_led(&self) -> &str {
        if !self.indicator_led.is_empty() {
            &self.indicator_led
        } else {
            &self.oem.hpe.indicator_led
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LenovoProcessorOem {
    #[serde(default, rename = "CurrentClockSpeedMHz")]
    pub current_clock_speed_mhz: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HpeProcessorOem {
    #[serde(default, rename = "VoltageVoltsX10")]
    pub voltage_volts_x10: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DellProcessorDetail {
    #[serde(default, rename = "Volts")]
    pub volts: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DellProcessorOem {
    #[serde(default, rename = "DellProcessor")]
    pub dell_processor: DellProcessorDetail,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessorOem {
    #[serde(default, rename = "Lenovo")]
    pub lenovo: Option<LenovoProcessorOem>,
    #[serde(default, rename = "Hpe")]
    pub hpe: Option<HpeProcessorOem>,
    #[serde(default, rename = "Dell")]
    pub dell: Option<DellProcessorOem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Processor {
    #[serde(default, rename = "Id")]
    pub id: String,
    #[serde(default, rename = "Socket")]
    pub socket: String,
    #[serde(default, rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(default, rename = "Model")]
    pub model: String,
    #[serde(default, rename = "ProcessorArchitecture")]
    pub processor_architecture: XString,
    #[serde(default, rename = "MaxSpeedMHz")]
    pub max_speed_mhz: Option<i64>,
    #[serde(default, rename = "OperatingSpeedMHz")]
    pub operating_speed_mhz: Option<i64>,
    #[serde(default, rename = "TotalCores")]
    pub total_cores: i64,
    #[serde(default, rename = "TotalThreads")]
    pub total_threads: i64,
    #[serde(default = "default_status", rename = "Status")]
    pub status: Status,
    #[serde(default, rename = "Oem")]
    pub oem: ProcessorOem,
}

impl Processor {
    /// Voltage reading scraped from whichever vendor OEM block is present,
    /// in volts, or `None` if no vendor reports it.
    #[must_use]
    pub fn voltage(&self) -> Option<f64> {
        if let Some(hpe) = &self.oem.hpe {
            if hpe.voltage_volts_x10 > 0 {
                return Some(f64::from(hpe.voltage_volts_x10 as i32) / 10.0);
            }
        }
        if let Some(dell) = &self.oem.dell {
            if let Ok(v) = dell.dell_processor.volts.parse::<f64>() {
                return Some(v);
            }
        }
        None
    }

    #[must_use]
    pub fn current_speed_mhz(&self) -> Option<i64> {
        if let Some(lenovo) = &self.oem.lenovo {
            if lenovo.current_clock_speed_mhz > 0 {
                return Some(lenovo.current_clock_speed_mhz);
            }
        }
        self.operating_speed_mhz
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PowerMetrics {
    #[serde(default, rename = "AverageConsumedWatts")]
    pub avg_consumed_watts: f64,
    #[serde(default, rename = "MaxConsumedWatts")]
    pub max_consumed_watts: f64,
    #[serde(default, rename = "MinConsumedWatts")]
    pub min_consumed_watts: f64,
    #[serde(default, rename = "IntervalInMin")]
    pub interval_in_minutes: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PowerControlUnit {
    #[serde(default, rename = "Id")]
    pub id: String,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "PowerCapacityWatts")]
    pub power_capacity_watts: f64,
    #[serde(default, rename = "PowerConsumedWatts")]
    pub power_consumed_watts: f64,
    #[serde(default, rename = "PowerMetrics")]
    pub power_metrics: Option<PowerMetrics>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FujitsuChassisPowerConsumption {
    #[serde(default, rename = "CurrentPowerConsumptionW")]
    pub current_power_consumption_w: f64,
    #[serde(default, rename = "MinimumPowerW")]
    pub minimum_power_w: f64,
    #[serde(default, rename = "PeakPowerW")]
    pub peak_power_w: f64,
    #[serde(default, rename = "AveragePowerW")]
    pub average_power_w: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FujitsuChassisPowerSensor {
    #[serde(default, rename = "EntityId")]
    pub entity_id: String,
    #[serde(default, rename = "CurrentPowerConsumptionW")]
    pub current_power_consumption_w: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FujitsuPowerOem {
    #[serde(default, rename = "ChassisPowerConsumption")]
    pub chassis_power_consumption: Option<FujitsuChassisPowerConsumption>,
    #[serde(default, rename = "ChassisPowerSensors")]
    pub chassis_power_sensors: Vec<FujitsuChassisPowerSensor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PowerOem {
    #[serde(default, rename = "ts_fujitsu")]
    pub ts_fujitsu: Option<FujitsuPowerOem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PowerSupplyUnit {
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "FirmwareVersion")]
    pub firmware_version: String,
    #[serde(default, rename = "EfficiencyPercent")]
    pub efficiency_percent: f64,
    #[serde(default, rename = "PowerOutputWatts")]
    pub power_output_watts: f64,
    #[serde(default, rename = "LastPowerOutputWatts")]
    pub last_power_output_watts: f64,
    #[serde(default, rename = "PowerInputWatts")]
    pub power_input_watts: f64,
    #[serde(default, rename = "PowerCapacityWatts")]
    pub power_capacity_watts: f64,
    #[serde(default, rename = "LineInputVoltage")]
    pub line_input_voltage: f64,
    #[serde(default, rename = "Status")]
    pub status: Status,
}

impl PowerSupplyUnit {
    /// `GetOutputPower` precedence per §9: `PowerOutputWatts` wins when
    /// non-zero, otherwise `LastPowerOutputWatts`.
    #[must_use]
    pub fn output_power(&self) -> f64 {
        if self.power_output_watts > 0.0 {
            self.power_output_watts
        } else {
            self.last_power_output_watts
        }
    }

    /// Marks the PSU Enabled when its firmware omits Status entirely but
    /// other fields are populated (Inventec workaround, §4.F).
    pub fn apply_inventec_shape(&mut self) {
        if self.status.state.is_empty() && !self.firmware_version.is_empty() {
            self.status.state = XString("Enabled".to_string());
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PowerResponse {
    #[serde(default, rename = "PowerControl")]
    pub power_control: Vec<PowerControlUnit>,
    #[serde(default, rename = "PowerSupplies")]
    pub power_supplies: Vec<PowerSupplyUnit>,
    #[serde(default, rename = "Oem")]
    pub oem: PowerOem,
}

/// One member of `/EventLog/Entries`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventLogEntry {
    #[serde(default, rename = "Id")]
    pub id: String,
    #[serde(default, rename = "Created")]
    pub created: String,
    #[serde(default, rename = "Message")]
    pub message: String,
    #[serde(default, rename = "Severity")]
    pub severity: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventLogResponse {
    #[serde(default, rename = "Members")]
    pub members: Vec<EventLogEntry>,
}

/// One member of `/UpdateService/FirmwareInventory`, after the
/// state/version/name have been parsed out of its member URI (§4.F).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirmwareEntry {
    pub state: String,
    pub version: String,
    pub name: String,
}

fn firmware_uri_pattern() -> &'static regex::Regex {
    static PATTERN: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
    PATTERN.get_or_init(|| {
        regex::Regex::new(r"(?i)(?P<state>\w*)-(\d+)-(?P<version>[\w.]+)__(?P<name>[\w.\-:]+)")
            .expect("firmware uri pattern is a valid regex")
    })
}

impl FirmwareEntry {
    /// Parses a `FirmwareInventory` member URI into its state/version/name
    /// components, skipping entries whose state begins with `previous`
    /// (those describe the rollback image rather than the active one).
    #[must_use]
    pub fn parse_from_uri(uri: &str) -> Option<Self> {
        let segment = uri.rsplit('/').find(|s| !s.is_empty())?;
        let captures = firmware_uri_pattern().captures(segment)?;
        let state = captures.name("state")?.as_str().to_string();
        if state.to_ascii_lowercase().starts_with("previous") {
            return None;
        }
        Some(Self {
            state,
            version: captures.name("version")?.as_str().to_string(),
            name: captures.name("name")?.as_str().to_string(),
        })
    }
}

/// Dell OEM system record at `DellSystemPath`.
pub const DELL_SYSTEM_PATH: &str =
    "/redfish/v1/Systems/System.Embedded.1/Oem/Dell/DellSystem/System.Embedded.1";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DellSystem {
    #[serde(default, rename = "BatteryRollupStatus")]
    pub battery_rollup_status: String,
    #[serde(default, rename = "EstimatedSystemAirflowCFM")]
    pub estimated_system_airflow_cfm: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DellControllerBattery {
    #[serde(default, rename = "PrimaryStatus")]
    pub primary_status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DellStorageOem {
    #[serde(default, rename = "DellControllerBattery")]
    pub dell_controller_battery: Option<DellControllerBattery>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageOem {
    #[serde(default, rename = "Dell")]
    pub dell: Option<DellStorageOem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odata_slice_dedupes_in_first_occurrence_order() {
        let slice: OdataSlice = serde_json::from_str(
            r#"[{"@odata.id": "/a"}, {"@odata.id": "/b"}, {"@odata.id": "/a"}]"#,
        )
        .unwrap();
        assert_eq!(slice.links(), vec!["/a".to_string(), "/b".to_string()]);
    }

    #[test]
    fn odata_slice_skips_empty_links() {
        let slice: OdataSlice = serde_json::from_str(r#"[{"@odata.id": ""}]"#).unwrap();
        assert!(slice.links().is_empty());
    }

    #[test]
    fn fan_prefers_fan_name_and_current_reading_fallback() {
        let fan: Fan = serde_json::from_str(
            r#"{"Name": "System Fan", "FanName": "Fan1", "Reading": 0, "CurrentReading": 7500}"#,
        )
        .unwrap();
        assert_eq!(fan.name(), "Fan1");
        assert_eq!(fan.reading(), 7500.0);
    }

    #[test]
    fn fan_id_falls_back_to_index_when_member_id_absent() {
        let fan: Fan = serde_json::from_str(r#"{"Name": "Fan1"}"#).unwrap();
        assert_eq!(fan.id(3), "3");
    }

    #[test]
    fn storage_drive_ilo4_shape_converts_units() {
        let mut drive: StorageDrive = serde_json::from_str(
            r#"{"CapacityMiB": 512000, "InterfaceType": "SAS", "SSDEnduranceUtilizationPercentage": 20}"#,
        )
        .unwrap();
        drive.apply_ilo4_shape();
        assert_eq!(drive.capacity_bytes, 536_870_912_000);
        assert_eq!(drive.protocol, "SAS");
        assert_eq!(drive.predicted_life_left, 80.0);
    }

    #[test]
    fn power_supply_unit_prefers_power_output_watts() {
        let psu: PowerSupplyUnit =
            serde_json::from_str(r#"{"PowerOutputWatts": 450, "LastPowerOutputWatts": 10}"#)
                .unwrap();
        assert_eq!(psu.output_power(), 450.0);
    }

    #[test]
    fn power_supply_unit_falls_back_when_power_output_watts_zero() {
        let psu: PowerSupplyUnit =
            serde_json::from_str(r#"{"PowerOutputWatts": 0, "LastPowerOutputWatts": 230}"#)
                .unwrap();
        assert_eq!(psu.output_power(), 230.0);
    }

    #[test]
    fn network_port_link_up_matches_known_values() {
        let up: NetworkPort = serde_json::from_str(r#"{"LinkStatus": "LinkUp"}"#).unwrap();
        let down: NetworkPort = serde_json::from_str(r#"{"LinkStatus": "Down"}"#).unwrap();
        assert!(up.link_up());
        assert!(!down.link_up());
    }

    #[test]
    fn system_response_falls_back_to_hpe_oem_indicator_led() {
        let sys: SystemResponse =
            serde_json::from_str(r#"{"Oem": {"Hpe": {"IndicatorLED": "Lit"}}}"#).unwrap();
        assert_eq!(sys.indicator_led(), "Lit");
    }

    #[test]
    fn processor_voltage_reads_hpe_tenths_of_a_volt() {
        let cpu: Processor =
            serde_json::from_str(r#"{"Oem": {"Hpe": {"VoltageVoltsX10": 12}}}"#).unwrap();
        assert_eq!(cpu.voltage(), Some(1.2));
    }

    #[test]
    fn firmware_entry_parses_state_version_and_name() {
        let entry = FirmwareEntry::parse_from_uri(
            "/redfish/v1/UpdateService/FirmwareInventory/Installed-1-2.10.5__BIOS",
        )
        .unwrap();
        assert_eq!(entry.state, "Installed");
        assert_eq!(entry.version, "2.10.5");
        assert_eq!(entry.name, "BIOS");
    }

    #[test]
    fn firmware_entry_skips_previous_state() {
        let entry = FirmwareEntry::parse_from_uri(
            "/redfish/v1/UpdateService/FirmwareInventory/Previous-1-2.10.4__BIOS",
        );
        assert!(entry.is_none());
    }

    #[test]
    fn firmware_entry_returns_none_for_unmatched_uri() {
        assert!(FirmwareEntry::parse_from_uri("/redfish/v1/UpdateService/FirmwareInventory/x").is_none());
    }
}
