//! Equipment Configurator Storefront Server
//!
//! Entry point: serves the storefront, or exports it with `--export <DIR>`.

use std::sync::Arc;

use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;

use equipment_storefront::AppState;
use equipment_storefront::clock::SystemClock;
use equipment_storefront::config::AppConfig;
use equipment_storefront::error::StorefrontError;
use equipment_storefront::{export, server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    telemetry::init();

    let config = AppConfig::load().map_err(StorefrontError::from)?;
    info!(
        name: "config.loaded",
        address = %config.bind_address(),
        timeout_disabled = config.resilience.timeout_disabled,
        "Configuration loaded"
    );

    let state = AppState::new(config, Arc::new(SystemClock));

    if let Some(dir) = state.config.export_dir.as_deref() {
        let written = export::export_site(dir, state.clock.as_ref())?;
        info!(name: "export.finished", pages = written.len(), dir = %dir.display(), "Export finished");
        return Ok(());
    }

    server::start_server(state).await?;
    Ok(())
}
