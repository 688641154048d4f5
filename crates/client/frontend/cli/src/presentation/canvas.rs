//! Draw primitives rasterized onto a terminal grid.
//!
//! Every terminal cell holds two vertically stacked pixels drawn with the
//! upper-half block glyph: the foreground color is the top pixel and the
//! background color the bottom one. Text is overlaid per cell after the
//! pixels are composed.
use std::collections::HashMap;

use game_core::render::{Canvas, Color, FRect, ImageTransform};
use game_core::{ImageHandle, Point, Size};
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::style::Color as TermColor;

const HALF_BLOCK: &str = "\u{2580}";
const CLEAR: Rgb = Rgb(12, 12, 16);

/// Opaque pixel color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    fn blend(self, src: Color) -> Self {
        let a = u32::from(src.a);
        let mix = |dst: u8, src: u8| ((u32::from(src) * a + u32::from(dst) * (255 - a)) / 255) as u8;
        Rgb(mix(self.0, src.r), mix(self.1, src.g), mix(self.2, src.b))
    }

    fn average(self, other: Self) -> Self {
        let avg = |a: u8, b: u8| ((u16::from(a) + u16::from(b)) / 2) as u8;
        Rgb(avg(self.0, other.0), avg(self.1, other.1), avg(self.2, other.2))
    }

    fn term(self) -> TermColor {
        TermColor::Rgb(self.0, self.1, self.2)
    }
}

/// Maps the game's fixed logical viewport onto a grid of terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportMapping {
    logical: Size,
    cols: u16,
    rows: u16,
}

impl ViewportMapping {
    pub fn new(logical: Size, cols: u16, rows: u16) -> Self {
        Self {
            logical,
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    pub fn logical(&self) -> Size {
        self.logical
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Logical point at the center of a terminal cell, clamped to the viewport.
    pub fn cell_to_logical(&self, col: u16, row: u16) -> Point {
        let x = (f64::from(col) + 0.5) * f64::from(self.logical.width) / f64::from(self.cols);
        let y = (f64::from(row) + 0.5) * f64::from(self.logical.height) / f64::from(self.rows);
        Point::new(
            (x.floor() as i32).clamp(0, (self.logical.width - 1).max(0)),
            (y.floor() as i32).clamp(0, (self.logical.height - 1).max(0)),
        )
    }

    /// Terminal cell containing a logical point.
    pub fn logical_to_cell(&self, x: i32, y: i32) -> (i32, i32) {
        let col = i64::from(x) * i64::from(self.cols) / i64::from(self.logical.width.max(1));
        let row = i64::from(y) * i64::from(self.rows) / i64::from(self.logical.height.max(1));
        (col as i32, row as i32)
    }

    fn pixel_width(&self) -> usize {
        usize::from(self.cols)
    }

    fn pixel_height(&self) -> usize {
        usize::from(self.rows) * 2
    }

    fn scale(&self) -> (f32, f32) {
        (
            self.pixel_width() as f32 / self.logical.width.max(1) as f32,
            self.pixel_height() as f32 / self.logical.height.max(1) as f32,
        )
    }
}

#[derive(Clone, Copy, Debug)]
struct Sprite {
    size: Size,
    color: Color,
}

/// Native sizes and flat colors standing in for image assets.
#[derive(Clone, Debug)]
pub struct ImageAtlas {
    sprites: HashMap<ImageHandle, Sprite>,
}

impl Default for ImageAtlas {
    fn default() -> Self {
        let mut atlas = Self {
            sprites: HashMap::new(),
        };
        let full = Size::new(800, 600);
        let icon = Size::new(32, 32);
        atlas.insert(ImageHandle::MENU_BACKGROUND, full, Color::rgba(20, 24, 48, 255));
        atlas.insert(ImageHandle::PLAY_BACKGROUND, full, Color::rgba(24, 44, 28, 255));
        atlas.insert(ImageHandle::PLAYER, icon, Color::rgba(235, 200, 60, 255));
        atlas.insert(ImageHandle(1001), icon, Color::rgba(255, 215, 0, 255));
        atlas.insert(ImageHandle(1002), icon, Color::rgba(170, 170, 190, 255));
        atlas.insert(ImageHandle(1003), icon, Color::rgba(110, 160, 230, 255));
        atlas
    }
}

impl ImageAtlas {
    const FALLBACK_PALETTE: [Color; 4] = [
        Color::rgba(200, 90, 90, 255),
        Color::rgba(90, 200, 120, 255),
        Color::rgba(90, 140, 220, 255),
        Color::rgba(210, 160, 80, 255),
    ];

    pub fn insert(&mut self, image: ImageHandle, size: Size, color: Color) {
        self.sprites.insert(image, Sprite { size, color });
    }

    /// Unknown handles are treated as 32x32 icons with a palette color so
    /// custom catalogs still render.
    fn sprite(&self, image: ImageHandle) -> Sprite {
        self.sprites.get(&image).copied().unwrap_or_else(|| {
            let index = image.0 as usize % Self::FALLBACK_PALETTE.len();
            Sprite {
                size: Size::new(32, 32),
                color: Self::FALLBACK_PALETTE[index],
            }
        })
    }
}

/// [`Canvas`] that composes one frame into pixels and text, then writes it
/// into a ratatui [`Buffer`] with [`TerminalCanvas::flush`].
pub struct TerminalCanvas<'a> {
    mapping: ViewportMapping,
    atlas: &'a ImageAtlas,
    pixels: Vec<Rgb>,
    text: Vec<(i32, i32, String)>,
}

impl<'a> TerminalCanvas<'a> {
    pub fn new(mapping: ViewportMapping, atlas: &'a ImageAtlas) -> Self {
        Self {
            mapping,
            atlas,
            pixels: vec![CLEAR; mapping.pixel_width() * mapping.pixel_height()],
            text: Vec::new(),
        }
    }

    /// Half-open pixel span covered by a logical rectangle, clipped.
    fn pixel_span(&self, rect: FRect) -> Option<(usize, usize, usize, usize)> {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return None;
        }
        let (sx, sy) = self.mapping.scale();
        let span = |start: f32, len: f32, scale: f32, max: usize| {
            let lo = (start * scale).round();
            let hi = ((start + len) * scale).round().max(lo + 1.0);
            let clamp = |v: f32| v.clamp(0.0, max as f32) as usize;
            (clamp(lo), clamp(hi))
        };
        let (x0, x1) = span(rect.x, rect.width, sx, self.mapping.pixel_width());
        let (y0, y1) = span(rect.y, rect.height, sy, self.mapping.pixel_height());
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    fn blend_span(&mut self, (x0, y0, x1, y1): (usize, usize, usize, usize), color: Color) {
        let width = self.mapping.pixel_width();
        for y in y0..y1 {
            for px in &mut self.pixels[y * width + x0..y * width + x1] {
                *px = px.blend(color);
            }
        }
    }

    fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels
            .get(y * self.mapping.pixel_width() + x)
            .copied()
            .unwrap_or(CLEAR)
    }

    /// Writes the composed frame into `buf`, anchored at its area's origin.
    pub fn flush(&self, buf: &mut Buffer) {
        let area = buf.area;
        let cols = self.mapping.cols().min(area.width);
        let rows = self.mapping.rows().min(area.height);

        for row in 0..rows {
            for col in 0..cols {
                let top = self.pixel(usize::from(col), usize::from(row) * 2);
                let bottom = self.pixel(usize::from(col), usize::from(row) * 2 + 1);
                if let Some(cell) = buf.cell_mut(Position::new(area.x + col, area.y + row)) {
                    cell.set_symbol(HALF_BLOCK)
                        .set_fg(top.term())
                        .set_bg(bottom.term());
                }
            }
        }

        for (col, row, text) in &self.text {
            if *row < 0 || *row >= i32::from(rows) {
                continue;
            }
            for (offset, ch) in text.chars().enumerate() {
                let c = *col + offset as i32;
                if c < 0 || c >= i32::from(cols) {
                    continue;
                }
                let (c, r) = (c as u16, *row as u16);
                let under = self
                    .pixel(usize::from(c), usize::from(r) * 2)
                    .average(self.pixel(usize::from(c), usize::from(r) * 2 + 1));
                if let Some(cell) = buf.cell_mut(Position::new(area.x + c, area.y + r)) {
                    cell.set_char(ch)
                        .set_fg(TermColor::White)
                        .set_bg(under.term());
                }
            }
        }
    }
}

impl Canvas for TerminalCanvas<'_> {
    fn fill_rect(&mut self, rect: FRect, color: Color) {
        if let Some(span) = self.pixel_span(rect) {
            self.blend_span(span, color);
        }
    }

    fn stroke_rect(&mut self, rect: FRect, thickness: f32, color: Color) {
        let Some((x0, y0, x1, y1)) = self.pixel_span(rect) else {
            return;
        };
        let (sx, sy) = self.mapping.scale();
        let tx = ((thickness * sx).round() as usize).max(1).min(x1 - x0);
        let ty = ((thickness * sy).round() as usize).max(1).min(y1 - y0);

        self.blend_span((x0, y0, x1, y0 + ty), color);
        if y1 - ty > y0 + ty {
            self.blend_span((x0, y1 - ty, x1, y1), color);
        }
        let (inner_top, inner_bottom) = (y0 + ty, y1.saturating_sub(ty));
        if inner_bottom > inner_top {
            self.blend_span((x0, inner_top, x0 + tx, inner_bottom), color);
            if x1 - tx > x0 + tx {
                self.blend_span((x1 - tx, inner_top, x1, inner_bottom), color);
            }
        }
    }

    fn draw_image(&mut self, image: ImageHandle, transform: ImageTransform) {
        let sprite = self.atlas.sprite(image);
        self.fill_rect(transform.apply(sprite.size), sprite.color);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        let (col, row) = self.mapping.logical_to_cell(x, y);
        self.text.push((col, row, text.to_string()));
    }

    fn image_size(&self, image: ImageHandle) -> Option<Size> {
        Some(self.atlas.sprite(image).size)
    }
}
