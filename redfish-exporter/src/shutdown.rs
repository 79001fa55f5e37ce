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

//! Graceful shutdown on SIGINT/SIGTERM.

use axum_server::Handle;
use futures_util::StreamExt;
use signal_hook::consts::signal::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use std::time::Duration;

/// Returns a future that resolves once SIGINT or SIGTERM is received.
pub fn signal_stream() -> anyhow::Result<impl std::future::Future<Output = ()>> {
    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(async move {
        if let Some(signal) = signals.next().await {
            tracing::info!(signal, "received shutdown signal");
        }
    })
}

/// Drives `axum-server`'s graceful shutdown from the same signal future used
/// by the plain-HTTP listener, giving in-flight scrapes ten seconds to
/// finish before the TLS listener is torn down.
pub async fn watch_tls_handle(signal: impl std::future::Future<Output = ()>, handle: Handle) {
    signal.await;
    handle.graceful_shutdown(Some(Duration::from_secs(10)));
}
