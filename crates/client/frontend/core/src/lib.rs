//! Cross-frontend primitives for presenting the game.
//!
//! Houses the frontend trait, environment configuration and the measured
//! frame clock that terminal and future graphical clients share.
pub mod clock;
pub mod config;
pub mod frontend;

pub use clock::FrameClock;
pub use config::FrontendConfig;
pub use frontend::Frontend;
