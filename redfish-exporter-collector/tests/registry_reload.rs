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

//! `Registry::apply_snapshot` resets exactly the targets whose resolved
//! credentials changed between two configuration snapshots.

use redfish_exporter_collector::{CollectorError, Registry};

fn write_temp_config(contents: &str) -> tempfile_path::TempPath {
    tempfile_path::TempPath::with_contents(contents)
}

mod tempfile_path {
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    pub struct TempPath(PathBuf);

    impl TempPath {
        pub fn with_contents(contents: &str) -> Self {
            let mut path = std::env::temp_dir();
            let n = COUNTER.fetch_add(1, Ordering::Relaxed);
            path.push(format!("redfish-exporter-collector-reload-test-{}-{n}.yaml", std::process::id()));
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(contents.as_bytes()).unwrap();
            Self(path)
        }
    }

    impl AsRef<Path> for TempPath {
        fn as_ref(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for TempPath {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }
}

fn config_with_password(password: &str) -> String {
    format!(
        r#"
timeout: 1
retries: 2
hosts:
  default:
    scheme: http
    username: root
    password: {password}
    basic_auth_only: true
"#
    )
}

#[tokio::test]
async fn credential_change_resets_target_but_unchanged_snapshot_does_not() {
    let target = "127.0.0.1:1";
    let registry = Registry::new();

    let path_a = write_temp_config(&config_with_password("calvin"));
    let config_a = redfish_exporter_config::load(path_a.as_ref().to_str().unwrap()).unwrap();

    // Exhaust the two-attempt retry budget against the unreachable target.
    let first = registry.gather(target, &config_a).await;
    assert!(matches!(first, Err(CollectorError::HostUnreachable { retries: 1, .. })));
    let exhausted = registry.gather(target, &config_a).await;
    assert!(matches!(exhausted, Err(CollectorError::HostUnreachable { retries: 2, .. })));

    // Reloading with identical credentials must not reset the exhausted target:
    // the retry count stays pinned at the budget rather than dropping back.
    let path_same = write_temp_config(&config_with_password("calvin"));
    let config_same = redfish_exporter_config::load(path_same.as_ref().to_str().unwrap()).unwrap();
    registry.apply_snapshot(&config_a, &config_same).await;
    let still_exhausted = registry.gather(target, &config_same).await;
    assert!(matches!(still_exhausted, Err(CollectorError::HostUnreachable { retries: 2, .. })));

    // Reloading with a changed password must reset it, so the next attempt
    // starts its retry count from zero again.
    let path_b = write_temp_config(&config_with_password("vagrant"));
    let config_b = redfish_exporter_config::load(path_b.as_ref().to_str().unwrap()).unwrap();
    registry.apply_snapshot(&config_same, &config_b).await;
    let fresh_attempt = registry.gather(target, &config_b).await;
    assert!(matches!(fresh_attempt, Err(CollectorError::HostUnreachable { retries: 1, .. })));
}
