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

//! Configuration-error taxonomy entry (§7.1): invalid YAML, missing
//! credentials, unknown scheme, unparseable duration. All fatal at startup.

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    MissingSection(&'static str),
    MissingCredentials { host: String, field: &'static str },
    UnknownScheme { host: String, scheme: String },
    InvalidDuration(String),
    InvalidSeverity(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(value: serde_yaml::Error) -> Self {
        Self::Yaml(value)
    }
}

#[allow(clippy::absolute_paths)]
impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read configuration file: {e}"),
            Self::Yaml(e) => write!(f, "invalid configuration file: {e}"),
            Self::MissingSection(name) => write!(f, "invalid configuration: empty section: {name}"),
            Self::MissingCredentials { host, field } => {
                write!(f, "invalid configuration: missing {field} for host: {host}")
            }
            Self::UnknownScheme { host, scheme } => {
                write!(f, "invalid configuration: unknown scheme {scheme:?} for host: {host}")
            }
            Self::InvalidDuration(s) => write!(f, "invalid duration string: {s:?}"),
            Self::InvalidSeverity(s) => write!(f, "invalid severity level: {s:?}"),
        }
    }
}

#[allow(clippy::absolute_paths)]
impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Yaml(e) => Some(e),
            _ => None,
        }
    }
}
