//! Terminal UI frontend for Satchel.
//!
//! This crate provides a terminal-based user interface for the game.
//! It implements the `client_frontend_core::Frontend` trait: crossterm
//! events are folded into per-frame input snapshots, the game advances once
//! per tick, and the scene is rasterized onto the terminal with ratatui.

mod app;
mod config;
mod event_loop;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::CliConfig;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
