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

//! A target whose discovery never succeeds exhausts its retry budget and
//! is then refused outright, without a fresh construction attempt.

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
            path.push(format!("redfish-exporter-collector-test-{}-{n}.yaml", std::process::id()));
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

#[tokio::test]
async fn exhausted_target_is_refused_without_reattempting() {
    let path = write_temp_config(
        r#"
timeout: 1
retries: 2
hosts:
  default:
    scheme: http
    username: root
    password: calvin
    basic_auth_only: true
"#,
    );
    let config = redfish_exporter_config::load(path.as_ref().to_str().unwrap()).unwrap();

    // Port 1 refuses the TCP connection immediately on any host.
    let target = "127.0.0.1:1";
    let registry = Registry::new();

    let first = registry.gather(target, &config).await;
    assert!(matches!(first, Err(CollectorError::HostUnreachable { retries: 1, .. })));

    let second = registry.gather(target, &config).await;
    assert!(matches!(second, Err(CollectorError::HostUnreachable { retries: 2, .. })));

    // Budget exhausted: refused without incrementing further.
    let third = registry.gather(target, &config).await;
    assert!(matches!(third, Err(CollectorError::HostUnreachable { retries: 2, .. })));

    registry.reset(target).await;
    let after_reset = registry.gather(target, &config).await;
    assert!(matches!(after_reset, Err(CollectorError::HostUnreachable { retries: 1, .. })));
}

#[tokio::test]
async fn unknown_target_without_default_host_is_rejected() {
    let path = write_temp_config(
        r#"
hosts:
  bmc-only:
    scheme: https
    username: root
    password: calvin
"#,
    );
    let config = redfish_exporter_config::load(path.as_ref().to_str().unwrap()).unwrap();

    let registry = Registry::new();
    let result = registry.gather("not-configured", &config).await;
    assert!(matches!(result, Err(CollectorError::UnknownTarget(t)) if t == "not-configured"));
}
