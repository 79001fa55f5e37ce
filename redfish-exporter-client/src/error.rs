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

//! Errors produced while talking to a BMC (§4.B, §4.F).

#[derive(Debug)]
pub enum ClientError {
    /// The underlying HTTP transport failed (connect, TLS, timeout, ...).
    Transport(reqwest::Error),
    /// The response body did not decode into the expected shape.
    Decode(serde_path_to_error::Error<serde_json::Error>),
    /// The server returned a non-success status code.
    UnexpectedStatus { path: String, status: u16 },
    /// `path` was not rooted at `/redfish/v1`, so no request was sent.
    PathNotRooted(String),
    /// Session authentication was permanently disabled for this target
    /// after a failed refresh, per §4.F.
    SessionDisabled,
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

#[allow(clippy::absolute_paths)]
impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "HTTP transport error: {e}"),
            Self::Decode(e) => write!(
                f,
                "JSON decode error at line {} column {} path {}: {e}",
                e.inner().line(),
                e.inner().column(),
                e.path(),
            ),
            Self::UnexpectedStatus { path, status } => {
                write!(f, "unexpected status {status} from {path}")
            }
            Self::PathNotRooted(path) => {
                write!(f, "path {path} is not rooted at /redfish/v1")
            }
            Self::SessionDisabled => write!(f, "session authentication disabled for this target"),
        }
    }
}

#[allow(clippy::absolute_paths)]
impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            Self::Decode(e) => Some(e.inner()),
            Self::UnexpectedStatus { .. } | Self::PathNotRooted(_) | Self::SessionDisabled => None,
        }
    }
}
