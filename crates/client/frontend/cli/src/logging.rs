//! File logging for the terminal client.
//!
//! The terminal belongs to the UI, so logs go only to a per-session file.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Platform-specific log directory for Satchel
///
/// - macOS: `~/Library/Caches/satchel/logs`
/// - Linux: `~/.cache/satchel/logs` (or `$XDG_CACHE_HOME/satchel/logs`)
/// - Windows: `%LOCALAPPDATA%\satchel\cache\logs`
/// - Fallback: `./logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "satchel")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Filter from a `RUST_LOG`-style directive string; INFO when absent or invalid.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Installs a file subscriber writing to `<log_dir>/<session>/client.log`.
///
/// `RUST_LOG` overrides the default INFO level. Returns the log file path.
pub fn setup_logging(session_id: Option<&str>) -> Result<PathBuf> {
    let session_id = match session_id {
        Some(id) => id.to_string(),
        None => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default();
            format!("session_{}", timestamp)
        }
    };

    let session_log_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    // Leak the guard to keep file writer alive
    std::mem::forget(guard);

    let log_file = session_log_dir.join("client.log");
    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", log_file.display());

    Ok(log_file)
}
