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

fn write_temp_config(contents: &str) -> tempfile_path::TempPath {
    tempfile_path::TempPath::with_contents(contents)
}

mod tempfile_path {
    use std::io::Write;
    use std::path::{Path, PathBuf};

    pub struct TempPath(PathBuf);

    impl TempPath {
        pub fn with_contents(contents: &str) -> Self {
            let mut path = std::env::temp_dir();
            path.push(format!("redfish-exporter-config-test-{}.yaml", std::process::id()));
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

#[test]
fn loads_minimal_valid_configuration() {
    let path = write_temp_config(
        r#"
metrics:
  system: true
hosts:
  default:
    scheme: https
    username: root
    password: swordfish
"#,
    );

    let config = redfish_exporter_config::load(path.as_ref().to_str().unwrap()).unwrap();
    assert_eq!(config.port, 9348);
    assert_eq!(config.metrics_prefix, "idrac");
    assert!(config.collect.system);
    assert!(!config.collect.sensors);

    let host = config.host("bmc-01.example.com").unwrap();
    assert_eq!(host.username, "root");
    assert_eq!(host.hostname, "bmc-01.example.com");
}

#[test]
fn metrics_all_forces_every_flag() {
    let path = write_temp_config(
        r#"
metrics:
  all: true
hosts:
  default:
    scheme: https
    username: root
    password: swordfish
"#,
    );

    let config = redfish_exporter_config::load(path.as_ref().to_str().unwrap()).unwrap();
    assert!(config.collect.system);
    assert!(config.collect.firmware);
    assert!(config.collect.extra);
}

#[test]
fn retries_defaults_to_one() {
    let path = write_temp_config(
        r#"
hosts:
  default:
    scheme: https
    username: root
    password: swordfish
"#,
    );

    let config = redfish_exporter_config::load(path.as_ref().to_str().unwrap()).unwrap();
    assert_eq!(config.retries, 1);
}

#[test]
fn missing_hosts_section_is_an_error() {
    let path = write_temp_config("address: 0.0.0.0\n");
    let result = redfish_exporter_config::load(path.as_ref().to_str().unwrap());
    assert!(result.is_err());
}

#[test]
fn expands_env_var_references_before_parsing() {
    std::env::set_var("REDFISH_EXPORTER_CONFIG_TEST_PASSWORD", "s3cret");
    let path = write_temp_config(
        r#"
hosts:
  default:
    scheme: https
    username: root
    password: ${REDFISH_EXPORTER_CONFIG_TEST_PASSWORD}
"#,
    );

    let config = redfish_exporter_config::load(path.as_ref().to_str().unwrap()).unwrap();
    let host = config.host("default").unwrap();
    assert_eq!(host.password, "s3cret");
    std::env::remove_var("REDFISH_EXPORTER_CONFIG_TEST_PASSWORD");
}
