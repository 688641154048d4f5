//! Frame loop: terminal events in, one game frame per tick, render out.
use std::time::{Duration, Instant};

use anyhow::Result;
use client_frontend_core::FrameClock;
use crossterm::event::{self as term_event, Event as TermEvent};
use game_core::render::render_game;
use game_core::{FrameInput, FrameOutcome, Game, PlayChanges, ScreenMode};
use tokio::time::{self, MissedTickBehavior};

use crate::input::{InputSampler, KeyAction};
use crate::presentation::{ImageAtlas, TerminalCanvas, ViewportMapping, terminal::Tui};

pub struct EventLoop<'a> {
    game: Game,
    sampler: InputSampler,
    clock: FrameClock,
    mapping: ViewportMapping,
    atlas: &'a ImageAtlas,
    show_fps: bool,
    frames: u64,
}

impl<'a> EventLoop<'a> {
    pub fn new(
        game: Game,
        sampler: InputSampler,
        clock: FrameClock,
        mapping: ViewportMapping,
        atlas: &'a ImageAtlas,
        show_fps: bool,
    ) -> Self {
        Self {
            game,
            sampler,
            clock,
            mapping,
            atlas,
            show_fps,
            frames: 0,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<Game> {
        let mut ticker = time::interval(self.clock.period());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            if self.drain_terminal_events()? {
                tracing::info!("Quit requested");
                break;
            }
            self.step(Instant::now());
            self.render(terminal)?;
        }

        Ok(self.game)
    }

    /// Applies every pending terminal event. Returns `true` on quit.
    fn drain_terminal_events(&mut self) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            let event = term_event::read()?;
            if self.apply_event(&event, Instant::now()) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn apply_event(&mut self, event: &TermEvent, now: Instant) -> bool {
        if let TermEvent::Resize(cols, rows) = event {
            self.mapping = ViewportMapping::new(self.mapping.logical(), *cols, *rows);
            tracing::debug!("Terminal resized to {}x{}", cols, rows);
            return false;
        }
        self.sampler.handle_event(event, &self.mapping, now) == KeyAction::Quit
    }

    /// Runs one game frame at `now`.
    pub fn step(&mut self, now: Instant) -> FrameOutcome {
        let elapsed = self.clock.tick_at(now);
        let input = self.sampler.sample(now);
        let frame = FrameInput::new(input, elapsed, self.mapping.logical());
        let outcome = self.game.advance(&frame);

        self.frames += 1;
        if self.frames % 600 == 0 {
            tracing::debug!("Frame clock: {:.2} ticks/s", self.clock.actual_tps());
        }
        log_outcome(&self.game, outcome);
        outcome
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        let fps = self.show_fps.then(|| self.clock.actual_tps());
        terminal.draw(|frame| {
            let area = frame.area();
            let mapping = ViewportMapping::new(self.mapping.logical(), area.width, area.height);
            let mut canvas = TerminalCanvas::new(mapping, self.atlas);
            render_game(&self.game, &mut canvas, fps);
            canvas.flush(frame.buffer_mut());
        })?;
        Ok(())
    }

    pub fn game(&self) -> &Game {
        &self.game
    }
}

fn log_outcome(game: &Game, outcome: FrameOutcome) {
    let changes = match outcome {
        FrameOutcome::Menu => return,
        FrameOutcome::EnteredPlay => {
            tracing::info!("Screen transition: {} -> {}", ScreenMode::Menu, ScreenMode::Play);
            return;
        }
        FrameOutcome::Play(changes) => changes,
    };

    let inventory = game.play().inventory();
    if changes.contains(PlayChanges::INVENTORY_OPENED) {
        tracing::info!("Inventory opened ({} entries)", inventory.len());
    }
    if changes.contains(PlayChanges::INVENTORY_CLOSED) {
        tracing::info!("Inventory closed");
    }
    if changes.contains(PlayChanges::PAGE) {
        let per_page = game.play().current_layout().items_per_page;
        tracing::info!(
            "Inventory page {}/{}",
            inventory.current_page() + 1,
            inventory.total_pages(per_page)
        );
    }
    if changes.contains(PlayChanges::SELECTION) {
        tracing::debug!("Selection moved to {:?}", inventory.selected_index());
    }
}
