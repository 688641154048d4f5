//! Top-level client wiring game content to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Game (screen state machine, built from content + config)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The game never sees a device; the frontend owns the frame loop and hands
//! each frame's input to the game.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use game_core::Game;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects content and a frontend
/// 2. `Client::run()` transfers the game to the frontend (blocking until quit)
pub struct Client {
    game: Game,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the client until the frontend exits.
    ///
    /// # Errors
    ///
    /// Returns the frontend's fatal error, if any.
    pub async fn run(self) -> Result<()> {
        let Client { game, mut frontend } = self;
        frontend.run(game).await
    }
}
