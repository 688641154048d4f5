//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use game_core::Game;

/// Frontend abstraction for UI layers.
///
/// A frontend owns the device side of the frame loop: it samples input into
/// a [`game_core::FrameInput`], calls [`Game::advance`], and supplies a
/// [`game_core::Canvas`] for [`game_core::render::render_game`]. The game
/// itself never sees the device.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
/// - Future: `GuiFrontend`, `WebFrontend`, etc.
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, game: Game) -> Result<()>;
}
