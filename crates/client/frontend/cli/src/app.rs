//! Glue code tying the game, configuration, and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::{FrameClock, Frontend, FrontendConfig};
use game_core::Game;

use crate::config::CliConfig;
use crate::event_loop::EventLoop;
use crate::input::{InputSampler, KeyMap};
use crate::presentation::{ImageAtlas, ViewportMapping, terminal};

/// Terminal frontend. Owns presentation settings only; the game is handed
/// over in [`Frontend::run`].
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    keymap: KeyMap,
    atlas: ImageAtlas,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
            keymap: KeyMap::default(),
            atlas: ImageAtlas::default(),
        }
    }

    async fn execute(&mut self, game: Game) -> Result<()> {
        tracing::info!("CLI frontend starting...");
        tracing::info!(
            "Tick rate: {}/s, FPS readout: {}, key hold: {}ms",
            self.frontend_config.tick_rate,
            self.frontend_config.show_fps,
            self.cli_config.key_hold_ms
        );

        let (mut terminal, releases) = terminal::init()?;
        let _guard = terminal::TerminalGuard;
        tracing::info!("Key release reporting: {}", releases);

        let area = terminal.size()?;
        let mapping = ViewportMapping::new(game.viewport(), area.width, area.height);
        let sampler = InputSampler::new(self.keymap.clone(), self.cli_config.key_hold(), releases);
        let clock = FrameClock::new(self.frontend_config.tick_rate);

        let event_loop = EventLoop::new(
            game,
            sampler,
            clock,
            mapping,
            &self.atlas,
            self.frontend_config.show_fps,
        );
        let game = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!("CLI frontend exiting in {} mode", game.mode());

        Ok(())
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, game: Game) -> Result<()> {
        self.execute(game).await
    }
}
