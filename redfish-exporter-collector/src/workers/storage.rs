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

//! Storage group (§4.D, §4.F): storage subsystems, their controllers,
//! drives and volumes.
//!
//! The HPE iLO 4 legacy layout has no `Storage` parent resource at all -
//! `client.paths.storage` already points at the `ArrayControllers`
//! collection, whose members are controllers with their own `DiskDrives`
//! link - so that layout is walked with a separate branch rather than
//! forced through the modern `Storage`/`Controllers`/`Drives` shape.

use redfish_exporter_client::{EndpointPaths, RedfishClient};
use redfish_exporter_core::metrics::families;
use redfish_exporter_core::model::{MemberCollection, Storage, StorageController, StorageDrive, StorageVolume};
use redfish_exporter_core::sample::Sample;
use redfish_exporter_core::Vendor;

use crate::health::health_value;

pub async fn run(client: &RedfishClient, paths: &EndpointPaths) -> Option<Vec<Sample>> {
    if paths.storage.is_empty() {
        return Some(Vec::new());
    }

    if paths.vendor == Vendor::Hpe && paths.version == 4 {
        return run_ilo4(client, paths).await;
    }

    let collection: MemberCollection = client.get(&paths.storage).await.ok()?;
    let mut samples = Vec::new();

    for storage_link in collection.members.links() {
        let storage: Storage = client.get(&storage_link).await.ok()?;
        let storage_id = if !storage.id.is_empty() {
            storage.id.clone()
        } else {
            storage_link.clone()
        };

        samples.push(Sample::with_labels(
            &families::STORAGE_INFO,
            1.0,
            vec![storage_id.clone(), storage.name.clone()],
        ));
        let storage_health = storage.status.health.as_str().to_string();
        if !storage_health.is_empty() {
            samples.push(Sample::with_labels(
                &families::STORAGE_HEALTH,
                health_value(&storage_health),
                vec![storage_id.clone(), storage_health],
            ));
        }

        if !storage.controllers.odata_id.is_empty() {
            let controllers: MemberCollection = client.get(&storage.controllers.odata_id).await.ok()?;
            for link in controllers.members.links() {
                let controller: StorageController = client.get(&link).await.ok()?;
                push_controller(&mut samples, &storage_id, &controller);
            }
        }

        if !storage.volumes.odata_id.is_empty() {
            let volumes: MemberCollection = client.get(&storage.volumes.odata_id).await.ok()?;
            for link in volumes.members.links() {
                let volume: StorageVolume = client.get(&link).await.ok()?;
                push_volume(&mut samples, &storage_id, &volume);
            }
        }

        for drive_link in storage.drives.links() {
            let drive: StorageDrive = client.get(&drive_link).await.ok()?;
            push_drive(&mut samples, &storage_id, drive);
        }
    }

    Some(samples)
}

/// HPE iLO 4: `paths.storage` is the `ArrayControllers` collection; each
/// member is a controller whose drives live under its own `DiskDrives/`.
async fn run_ilo4(client: &RedfishClient, paths: &EndpointPaths) -> Option<Vec<Sample>> {
    let controllers: MemberCollection = client.get(&paths.storage).await.ok()?;
    let mut samples = Vec::new();

    for link in controllers.members.links() {
        let controller: StorageController = client.get(&link).await.ok()?;
        push_controller(&mut samples, "", &controller);

        let drives_path = format!("{}/DiskDrives/", link.trim_end_matches('/'));
        let Ok(drives) = client.get::<MemberCollection>(&drives_path).await else {
            continue;
        };
        for drive_link in drives.members.links() {
            let mut drive: StorageDrive = match client.get(&drive_link).await {
                Ok(d) => d,
                Err(_) => continue,
            };
            drive.apply_ilo4_shape();
            push_drive(&mut samples, "", drive);
        }
    }

    Some(samples)
}

fn push_controller(samples: &mut Vec<Sample>, storage_id: &str, controller: &StorageController) {
    samples.push(Sample::with_labels(
        &families::STORAGE_CONTROLLER_INFO,
        1.0,
        vec![
            controller.id.clone(),
            storage_id.to_string(),
            controller.manufacturer.clone(),
            controller.model.clone(),
            controller.name.clone(),
        ],
    ));
    let health = controller.status.health.as_str().to_string();
    if !health.is_empty() {
        samples.push(Sample::with_labels(
            &families::STORAGE_CONTROLLER_HEALTH,
            health_value(&health),
            vec![controller.id.clone(), health],
        ));
    }
    samples.push(Sample::with_labels(
        &families::STORAGE_CONTROLLER_SPEED_MBPS,
        controller.speed_gbps * 1000.0,
        vec![controller.id.clone()],
    ));

    if let Some(dell) = &controller.oem.dell {
        if let Some(battery) = &dell.dell_controller_battery {
            samples.push(Sample::with_labels(
                &families::DELL_CONTROLLER_BATTERY_HEALTH,
                health_value(&battery.primary_status),
                vec![controller.id.clone(), battery.primary_status.clone()],
            ));
        }
    }
}

fn push_volume(samples: &mut Vec<Sample>, storage_id: &str, volume: &StorageVolume) {
    samples.push(Sample::with_labels(
        &families::STORAGE_VOLUME_INFO,
        1.0,
        vec![volume.id.clone(), storage_id.to_string(), volume.name.clone()],
    ));
    let health = volume.status.health.as_str().to_string();
    if !health.is_empty() {
        samples.push(Sample::with_labels(
            &families::STORAGE_VOLUME_HEALTH,
            health_value(&health),
            vec![volume.id.clone(), health],
        ));
    }
    samples.push(Sample::with_labels(
        &families::STORAGE_VOLUME_MEDIA_SPAN_COUNT,
        volume.media_span_count as f64,
        vec![volume.id.clone()],
    ));
    samples.push(Sample::with_labels(
        &families::STORAGE_VOLUME_CAPACITY_BYTES,
        volume.capacity_bytes as f64,
        vec![volume.id.clone()],
    ));
}

fn push_drive(samples: &mut Vec<Sample>, storage_id: &str, drive: StorageDrive) {
    if drive.status.state.as_str() == "Absent" {
        return;
    }

    samples.push(Sample::with_labels(
        &families::STORAGE_DRIVE_INFO,
        1.0,
        vec![
            drive.id.clone(),
            storage_id.to_string(),
            drive.manufacturer.clone(),
            drive.media_type.clone(),
            drive.model.clone(),
            drive.name.clone(),
            drive.protocol.clone(),
            drive.serial_number.clone(),
            drive.slot(),
        ],
    ));
    let health = drive.status.health.as_str().to_string();
    if !health.is_empty() {
        samples.push(Sample::with_labels(
            &families::STORAGE_DRIVE_HEALTH,
            health_value(&health),
            vec![drive.id.clone(), health],
        ));
    }
    samples.push(Sample::with_labels(
        &families::STORAGE_DRIVE_CAPACITY_BYTES,
        drive.capacity_bytes as f64,
        vec![drive.id.clone()],
    ));
    if !drive.suppress_life_left() {
        samples.push(Sample::with_labels(
            &families::STORAGE_DRIVE_LIFE_LEFT_PERCENT,
            drive.predicted_life_left,
            vec![drive.id.clone()],
        ));
    }
    if let Some(active) = drive.location_indicator_active {
        samples.push(Sample::with_labels(
            &families::STORAGE_DRIVE_INDICATOR_ACTIVE,
            if active { 1.0 } else { 0.0 },
            vec![drive.id],
        ));
    }
}
