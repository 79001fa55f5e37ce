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

//! `/metrics`, `/discover`, `/health`, `/reset` and `/` (§6.1).

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Deserialize;
use std::io::Write;
use std::sync::Arc;

use crate::AppState;

const LANDING_PAGE: &str = concat!(
    "<html lang=\"en\">\n",
    "<head><title>Redfish Exporter</title></head>\n",
    "<body style=\"font-family: sans-serif\">\n",
    "<h2>Redfish Exporter</h2>\n",
    "<div>Build information: version=",
    env!("CARGO_PKG_VERSION"),
    "</div>\n",
    "<ul>\n",
    "<li><a href=\"/metrics\">Metrics</a> (needs <code>target</code> parameter)</li>\n",
    "<li><a href=\"/discover\">Discover</a></li>\n",
    "<li><a href=\"/health\">Health</a></li>\n",
    "</ul>\n",
    "</body>\n</html>\n",
);

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/metrics", get(metrics))
        .route("/discover", get(discover))
        .route("/health", get(health))
        .route("/reset", get(reset))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

#[derive(Deserialize)]
struct TargetQuery {
    target: Option<String>,
}

async fn root() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

async fn health() -> &'static str {
    "OK"
}

async fn discover(State(state): State<Arc<AppState>>) -> Response {
    let items: Vec<DiscoverItem> = state
        .config
        .discoverable_targets()
        .into_iter()
        .map(|target| DiscoverItem {
            targets: vec![target.to_string()],
            labels: std::collections::HashMap::new(),
        })
        .collect();

    axum::Json(items).into_response()
}

#[derive(serde::Serialize)]
struct DiscoverItem {
    targets: Vec<String>,
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    labels: std::collections::HashMap<String, String>,
}

async fn reset(State(state): State<Arc<AppState>>, Query(query): Query<TargetQuery>) -> Response {
    let Some(target) = query.target.filter(|t| !t.is_empty()) else {
        tracing::error!("received reset request without 'target' parameter");
        return (StatusCode::BAD_REQUEST, "Query parameter 'target' is mandatory").into_response();
    };

    tracing::debug!(target = %target, "handling reset request");
    state.registry.reset(&target).await;
    StatusCode::OK.into_response()
}

async fn metrics(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TargetQuery>,
    headers: HeaderMap,
) -> Response {
    let Some(target) = query.target.filter(|t| !t.is_empty()) else {
        tracing::error!("received metrics request without 'target' parameter");
        return (StatusCode::BAD_REQUEST, "Query parameter 'target' is mandatory").into_response();
    };

    tracing::debug!(target = %target, "collecting metrics");
    let body = match state.registry.gather(&target, &state.config).await {
        Ok(body) => body,
        Err(e) => {
            let msg = format!("Error instantiating metrics collector for host {target}: {e}\n");
            tracing::error!("{msg}");
            return (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response();
        }
    };
    tracing::debug!(target = %target, "metrics collected");

    if gzip_accepted(&headers) {
        match gzip_compress(body.as_bytes()) {
            Ok(compressed) => (
                [
                    (header::CONTENT_TYPE, "text/plain; version=0.0.4"),
                    (header::CONTENT_ENCODING, "gzip"),
                ],
                compressed,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "gzip compression failed");
                ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body).into_response()
            }
        }
    } else {
        ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body).into_response()
    }
}

/// Mirrors the official Prometheus client's `Accept-Encoding` negotiation:
/// a bare `gzip` token or a `gzip;q=...` token anywhere in the header.
fn gzip_accepted(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::ACCEPT_ENCODING).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    value
        .split(',')
        .map(str::trim)
        .any(|part| part == "gzip" || part.starts_with("gzip;"))
}

fn gzip_compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
