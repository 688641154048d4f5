//! Satchel game client binary.
//!
//! This binary is the composition root that assembles:
//! 1. Content (item catalog, starting inventory, game configuration)
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! # Environment
//!
//! - `SATCHEL_CONTENT_DIR`: directory holding `items.ron`, `inventory.ron` and
//!   `config.toml`; missing files fall back to the built-in content
//! - `SATCHEL_TICK_RATE`, `SATCHEL_SHOW_FPS`: see `FrontendConfig`
//! - `CLI_KEY_HOLD_MS`: see `CliConfig`
//! - `RUST_LOG`: log filter (default INFO)
//!
//! # Examples
//!
//! ```bash
//! cargo run -p satchel-client
//! SATCHEL_CONTENT_DIR=./data cargo run -p satchel-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use game_content::ContentFactory;
    use satchel_client::Client;

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();
    let content_dir = std::env::var("SATCHEL_CONTENT_DIR").ok();

    // 2. Setup logging
    logging::setup_logging(None)?;

    tracing::info!("Starting Satchel client");
    tracing::info!("Frontend config: {:?}", frontend_config);
    tracing::info!("CLI config: {:?}", cli_config);

    // 3. Load content (fails fast on invalid data)
    let factory = match &content_dir {
        Some(dir) => {
            tracing::info!("Content directory: {}", dir);
            ContentFactory::new(dir)
        }
        None => {
            tracing::info!("Using built-in content");
            ContentFactory::builtin()
        }
    };
    let content = factory.load().inspect_err(|e| {
        tracing::error!("Failed to load content: {:#}", e);
    })?;
    tracing::info!(
        "Content loaded: {} catalog items, {} inventory entries (capacity {})",
        content.inventory.catalog().len(),
        content.inventory.len(),
        content.inventory.capacity()
    );

    // 4. Build Frontend
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder()
        .content(content)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
