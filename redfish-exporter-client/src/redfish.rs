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

//! Session-aware Redfish transport (§4.B): `CreateSession`/`DeleteSession`/
//! `RefreshSession`/`Get`/`Exists`.

use crate::credentials::HostCredentials;
use crate::error::ClientError;
use crate::session::{SessionPayload, SessionState};
use crate::transport::{build_client, ClientParams};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use url::Url;

const REDFISH_ROOT_PATH: &str = "/redfish/v1";

pub struct RedfishClient {
    http: reqwest::Client,
    base_url: String,
    credentials: HostCredentials,
    session: Mutex<SessionState>,
}

impl RedfishClient {
    #[allow(clippy::missing_errors_doc)]
    pub fn new(base_url: String, credentials: HostCredentials) -> Result<Self, reqwest::Error> {
        Self::with_params(base_url, credentials, ClientParams::default())
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn with_params(
        base_url: String,
        credentials: HostCredentials,
        params: ClientParams,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: build_client(&params)?,
            base_url,
            credentials,
            session: Mutex::new(SessionState::default()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POSTs credentials to `SessionService/Sessions`, falling back to the
    /// legacy `/redfish/v1/Sessions` path on HTTP 405.
    pub async fn create_session(&self) -> bool {
        let body = SessionPayload {
            username: Some(self.credentials.username.clone()),
            password: Some(self.credentials.password().to_string()),
            odata_id: String::new(),
        };

        let primary = self.url(&format!("{REDFISH_ROOT_PATH}/SessionService/Sessions"));
        let response = match self.http.post(&primary).json(&body).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(url = %primary, error = %e, "failed to create session");
                return false;
            }
        };

        let response = if response.status() == reqwest::StatusCode::METHOD_NOT_ALLOWED {
            let legacy = self.url(&format!("{REDFISH_ROOT_PATH}/Sessions"));
            match self.http.post(&legacy).json(&body).send().await {
                Ok(resp) => resp,
                Err(e) => {
                    tracing::error!(url = %legacy, error = %e, "failed to create legacy session");
                    return false;
                }
            }
        } else {
            response
        };

        if response.status() != reqwest::StatusCode::CREATED {
            tracing::error!(status = %response.status(), "unexpected status creating session");
            return false;
        }

        let token = response
            .headers()
            .get("X-Auth-Token")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let location = response
            .headers()
            .get("Location")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let payload: SessionPayload = match response.json().await {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "failed to decode session response");
                return false;
            }
        };

        let mut id = payload.odata_id;
        // iLO 4 omits `@odata.id` on the session resource and relies on Location.
        if id.is_empty() {
            if let Some(location) = location {
                id = Url::parse(&location)
                    .map(|u| u.path().to_string())
                    .unwrap_or(location);
            }
        }

        let mut session = self.session.lock().await;
        session.id = id;
        session.token = token;
        tracing::debug!(session_id = %session.id, "created session");
        true
    }

    pub async fn delete_session(&self) -> bool {
        let (id, token) = {
            let session = self.session.lock().await;
            (session.id.clone(), session.token.clone())
        };

        if token.is_empty() {
            return true;
        }

        let url = self.url(&id);
        let response = match self
            .http
            .delete(&url)
            .header("Accept", "application/json")
            .header("X-Auth-Token", &token)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(url = %url, error = %e, "failed to delete session");
                return false;
            }
        };

        if response.status() != reqwest::StatusCode::OK
            && response.status() != reqwest::StatusCode::NO_CONTENT
        {
            tracing::error!(status = %response.status(), "unexpected status deleting session");
            return false;
        }

        let mut session = self.session.lock().await;
        session.clear();
        true
    }

    /// Refreshes session auth, creating a new session if none is held and
    /// re-creating it if the held one has expired. Marks the session
    /// permanently disabled (falling back to basic auth) on repeated
    /// failure, per §4.F.
    pub async fn refresh_session(&self) -> bool {
        {
            let session = self.session.lock().await;
            if session.disabled {
                return false;
            }
        }

        let token = {
            let session = self.session.lock().await;
            session.token.clone()
        };

        if token.is_empty() {
            let ok = self.create_session().await;
            if !ok {
                self.session.lock().await.disabled = true;
                tracing::info!("session authentication disabled due to failed refresh");
            }
            return ok;
        }

        let id = {
            let session = self.session.lock().await;
            session.id.clone()
        };
        let url = self.url(&id);
        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .header("X-Auth-Token", &token)
            .send()
            .await;

        let response = match response {
            Ok(resp) => resp,
            Err(_) => return false,
        };

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            if self.create_session().await {
                return true;
            }
            let mut session = self.session.lock().await;
            session.disabled = true;
            session.clear();
            tracing::info!("session authentication disabled due to failed refresh");
            return false;
        }

        true
    }

    /// Issues a GET against `path`, decoding the JSON body into `T`.
    ///
    /// `path` must be rooted at `/redfish/v1`.
    #[allow(clippy::missing_errors_doc)]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        if !path.starts_with(REDFISH_ROOT_PATH) {
            return Err(ClientError::PathNotRooted(path.to_string()));
        }

        let url = self.url(path);
        let request = self.http.get(&url).header("Accept", "application/json");
        let request = self.authenticate(request).await;

        tracing::debug!(url = %url, "querying");
        let response = request.send().await?;
        if response.status() != reqwest::StatusCode::OK {
            return Err(ClientError::UnexpectedStatus {
                path: path.to_string(),
                status: response.status().as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let deserializer = &mut serde_json::Deserializer::from_slice(&bytes);
        serde_path_to_error::deserialize(deserializer).map_err(ClientError::Decode)
    }

    /// Issues a HEAD against `path`; any 4xx is treated as absent.
    pub async fn exists(&self, path: &str) -> bool {
        if !path.starts_with(REDFISH_ROOT_PATH) {
            return false;
        }

        let url = self.url(path);
        let request = self.http.head(&url).header("Accept", "application/json");
        let request = self.authenticate(request).await;

        match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                !(400..=499).contains(&status)
            }
            Err(_) => false,
        }
    }

    async fn authenticate(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = {
            let session = self.session.lock().await;
            session.token.clone()
        };
        if token.is_empty() {
            request.basic_auth(&self.credentials.username, Some(self.credentials.password()))
        } else {
            request.header("X-Auth-Token", token)
        }
    }
}
