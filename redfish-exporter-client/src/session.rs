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

//! Request/response shape of `SessionService/Sessions` and the client-side
//! state tracked for a single target (§4.B).

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SessionPayload {
    #[serde(rename = "UserName", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "@odata.id", default, skip_serializing_if = "String::is_empty")]
    pub odata_id: String,
}

/// Authentication state held per target. Either `X-Auth-Token` session
/// authentication is active, or `disabled` is set and every request falls
/// back to HTTP basic auth, per §4.F.
#[derive(Debug, Default)]
pub struct SessionState {
    pub id: String,
    pub token: String,
    pub disabled: bool,
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn clear(&mut self) {
        self.id.clear();
        self.token.clear();
    }
}
