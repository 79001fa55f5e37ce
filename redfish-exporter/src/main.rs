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

//! CLI entry point (§6.1): wires the configuration loader and the
//! collector registry into the HTTP front-end, with optional TLS
//! termination and graceful shutdown on SIGINT/SIGTERM.

use clap::Parser;
use redfish_exporter::{http, shutdown, AppState};
use redfish_exporter_collector::Registry;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about = "Multi-target Redfish-to-metrics exporter")]
struct Args {
    /// Path to the exporter's YAML configuration file.
    #[arg(short, long, default_value = "/etc/redfish_exporter.yml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = redfish_exporter_config::load(&args.config)?;
    let address: SocketAddr = format!("{}:{}", config.address, config.port).parse()?;
    let tls = config.tls.clone();

    let state = Arc::new(AppState {
        config,
        registry: Registry::new(),
    });
    let app = http::router(state);

    let shutdown = shutdown::signal_stream()?;

    if tls.enabled {
        tracing::info!(%address, "listening with TLS");
        let rustls_config =
            axum_server::tls_rustls::RustlsConfig::from_pem_file(&tls.cert_file, &tls.key_file).await?;
        let handle = axum_server::Handle::new();
        tokio::spawn(shutdown::watch_tls_handle(shutdown, handle.clone()));
        axum_server::bind_rustls(address, rustls_config)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;
    } else {
        tracing::info!(%address, "listening");
        let listener = tokio::net::TcpListener::bind(address).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown.await;
            })
            .await?;
    }

    Ok(())
}
