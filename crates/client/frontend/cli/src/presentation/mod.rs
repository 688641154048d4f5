pub mod canvas;
pub mod terminal;

pub use canvas::{ImageAtlas, TerminalCanvas, ViewportMapping};
