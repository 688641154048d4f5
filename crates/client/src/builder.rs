//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use game_content::Content;
use game_core::Game;

/// Builder for constructing a Client with proper validation.
///
/// - **Required fields**: content and frontend must be provided
/// - **Fail-fast validation**: missing fields cause `build()` to fail
#[derive(Default)]
pub struct ClientBuilder {
    content: Option<Content>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the startup content (required): game configuration and the
    /// starting inventory with its catalog.
    pub fn content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if content or frontend is not set.
    pub fn build(self) -> Result<Client> {
        let content = self
            .content
            .context("Content is required. Use .content() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client {
            game: Game::new(&content.config, content.inventory),
            frontend,
        })
    }
}
