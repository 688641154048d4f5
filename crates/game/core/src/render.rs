//! Scene rendering through an opaque set of draw primitives.
//!
//! The core never touches pixels. It computes geometry and issues calls on a
//! [`Canvas`] supplied by the frontend; everything here only reads game state.
use crate::catalog::ImageHandle;
use crate::geometry::{Rect, Size};
use crate::layout::{CellPlacement, InventoryLayout};
use crate::menu::{ButtonVisual, MenuScreen};
use crate::play::PlayScreen;
use crate::screen::{Game, ScreenMode};

/// Width of one glyph of the debug font, used to center text.
pub const GLYPH_WIDTH: i32 = 6;
/// Line height of the debug font.
pub const GLYPH_HEIGHT: i32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Black with the given opacity.
    pub const fn shade(a: u8) -> Self {
        Self::rgba(0, 0, 0, a)
    }
}

/// Rectangle in fractional viewport units, for scaled and animated shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<Rect> for FRect {
    fn from(rect: Rect) -> Self {
        Self::new(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
        )
    }
}

/// Scale-then-translate transform applied to an image's own pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl ImageTransform {
    /// Stretches an image of `source` size over `target`.
    pub fn stretch(source: Size, target: FRect) -> Self {
        Self {
            scale_x: f64::from(target.width) / f64::from(source.width),
            scale_y: f64::from(target.height) / f64::from(source.height),
            translate_x: f64::from(target.x),
            translate_y: f64::from(target.y),
        }
    }

    /// Uniformly scales an image into `cell` minus `inset` on each side,
    /// centered, keeping its aspect ratio.
    pub fn fit(source: Size, cell: Rect, inset: i32) -> Self {
        let scale_x = f64::from(cell.width - 2 * inset) / f64::from(source.width);
        let scale_y = f64::from(cell.height - 2 * inset) / f64::from(source.height);
        let scale = scale_x.min(scale_y);
        Self {
            scale_x: scale,
            scale_y: scale,
            translate_x: f64::from(cell.x)
                + (f64::from(cell.width) - f64::from(source.width) * scale) / 2.0,
            translate_y: f64::from(cell.y)
                + (f64::from(cell.height) - f64::from(source.height) * scale) / 2.0,
        }
    }

    /// Destination rectangle of an image of `source` size.
    pub fn apply(&self, source: Size) -> FRect {
        FRect::new(
            self.translate_x as f32,
            self.translate_y as f32,
            (f64::from(source.width) * self.scale_x) as f32,
            (f64::from(source.height) * self.scale_y) as f32,
        )
    }
}

/// Drawing capability provided by the rendering backend.
pub trait Canvas {
    fn fill_rect(&mut self, rect: FRect, color: Color);

    fn stroke_rect(&mut self, rect: FRect, thickness: f32, color: Color);

    fn draw_image(&mut self, image: ImageHandle, transform: ImageTransform);

    /// Debug text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32);

    /// Native size of an image, `None` when the backend does not know it.
    fn image_size(&self, image: ImageHandle) -> Option<Size>;
}

// ===== palette =====
const BUTTON_IDLE: Color = Color::rgba(100, 200, 100, 255);
const BUTTON_ACTIVE: Color = Color::rgba(150, 255, 150, 255);
const PANEL_BG: Color = Color::shade(200);
const PANEL_BORDER: Color = Color::rgba(100, 100, 150, 255);
const PANEL_OUTER_BORDER: Color = Color::rgba(200, 200, 255, 255);
const CELL_SHADOW: Color = Color::shade(100);
const CELL_BG: Color = Color::rgba(50, 50, 70, 200);
const CELL_BORDER: Color = Color::rgba(150, 150, 200, 255);
const CLOSE_BG: Color = Color::rgba(200, 50, 50, 200);
const CLOSE_BORDER: Color = Color::rgba(255, 100, 100, 255);
const HIGHLIGHT_PASSES: i32 = 3;
const ICON_INSET: i32 = 4;

fn text_width(text: &str) -> i32 {
    text.chars().count() as i32 * GLYPH_WIDTH
}

/// Draws the active screen and, when `fps` is given, the rate readout.
pub fn render_game<C: Canvas + ?Sized>(game: &Game, canvas: &mut C, fps: Option<f64>) {
    match game.mode() {
        ScreenMode::Menu => render_menu(game.menu(), game.viewport(), canvas),
        ScreenMode::Play => render_play(game.play(), game.viewport(), canvas),
    }

    if let Some(fps) = fps {
        canvas.draw_text(&format!("FPS: {fps:.2}"), 10, 10);
    }
}

fn draw_background<C: Canvas + ?Sized>(canvas: &mut C, image: ImageHandle, viewport: Size) {
    if let Some(size) = canvas.image_size(image).filter(|s| !s.is_empty()) {
        let target = FRect::new(0.0, 0.0, viewport.width as f32, viewport.height as f32);
        canvas.draw_image(image, ImageTransform::stretch(size, target));
    }
}

pub fn render_menu<C: Canvas + ?Sized>(menu: &MenuScreen, viewport: Size, canvas: &mut C) {
    draw_background(canvas, ImageHandle::MENU_BACKGROUND, viewport);

    let button = menu.start_button();
    let visual = menu.visual();
    let color = match visual {
        ButtonVisual::Idle => BUTTON_IDLE,
        ButtonVisual::Hover | ButtonVisual::Pressed => BUTTON_ACTIVE,
    };

    let scale = visual.scale();
    let (cx, cy) = button.center();
    let width = button.width as f32 * scale;
    let height = button.height as f32 * scale;
    canvas.fill_rect(
        FRect::new(cx - width / 2.0, cy - height / 2.0, width, height),
        color,
    );

    let label = menu.label();
    let x = button.x + (button.width - text_width(label)) / 2;
    let y = button.y + (button.height - GLYPH_HEIGHT) / 2;
    canvas.draw_text(label, x, y);
}

pub fn render_play<C: Canvas + ?Sized>(play: &PlayScreen, viewport: Size, canvas: &mut C) {
    draw_background(canvas, ImageHandle::PLAY_BACKGROUND, viewport);
    draw_grid(canvas, viewport, play.grid_size());
    draw_player(play, canvas);

    if play.is_inventory_open() {
        render_inventory(play, &play.current_layout(), canvas);
    }
}

fn draw_grid<C: Canvas + ?Sized>(canvas: &mut C, viewport: Size, grid_size: i32) {
    if grid_size <= 0 {
        return;
    }
    let (w, h) = (viewport.width as f32, viewport.height as f32);
    for x in (0..=viewport.width).step_by(grid_size as usize) {
        canvas.fill_rect(FRect::new(x as f32, 0.0, 1.0, h), Color::WHITE);
    }
    for y in (0..=viewport.height).step_by(grid_size as usize) {
        canvas.fill_rect(FRect::new(0.0, y as f32, w, 1.0), Color::WHITE);
    }
}

fn draw_player<C: Canvas + ?Sized>(play: &PlayScreen, canvas: &mut C) {
    let position = play.player_position();
    let size = play.player_size() as f32;
    let target = FRect::new(position.x as f32, position.y as f32, size, size);
    let source = canvas
        .image_size(ImageHandle::PLAYER)
        .filter(|s| !s.is_empty())
        .unwrap_or(Size::new(play.player_size(), play.player_size()));
    canvas.draw_image(ImageHandle::PLAYER, ImageTransform::stretch(source, target));
}

/// Draws the inventory overlay using the same layout the router hit-tests.
pub fn render_inventory<C: Canvas + ?Sized>(
    play: &PlayScreen,
    layout: &InventoryLayout,
    canvas: &mut C,
) {
    let inventory = play.inventory();
    let panel = layout.panel;

    canvas.fill_rect(panel.into(), PANEL_BG);
    canvas.stroke_rect(panel.into(), 2.0, PANEL_BORDER);
    canvas.stroke_rect(panel.inflate(1).into(), 1.0, PANEL_OUTER_BORDER);

    let title = "Inventory";
    canvas.draw_text(title, panel.x + (panel.width - text_width(title)) / 2, layout.title_y);
    canvas.fill_rect(
        FRect::new(
            (panel.x + 10) as f32,
            (layout.title_y + 20) as f32,
            (panel.width - 20) as f32,
            1.0,
        ),
        PANEL_BORDER,
    );

    for (button, label) in [(layout.prev_button, "Prev"), (layout.next_button, "Next")] {
        canvas.fill_rect(button.into(), PANEL_BORDER);
        canvas.draw_text(label, button.x + 15, button.y + 5);
    }

    let selected = inventory.selected_index();
    for cell in layout.visible_cells(inventory) {
        draw_cell(play, cell, selected == Some(cell.index), canvas);
    }

    let page_info = format!(
        "Page {}/{}",
        inventory.current_page() + 1,
        inventory.total_pages(layout.items_per_page)
    );
    canvas.draw_text(&page_info, panel.x + 20, layout.info_y);

    let capacity_info = format!("Items: {}/{}", inventory.len(), inventory.capacity());
    canvas.draw_text(
        &capacity_info,
        panel.right() - text_width(&capacity_info) - 20,
        layout.info_y,
    );

    let close = layout.close_button;
    canvas.fill_rect(close.into(), CLOSE_BG);
    canvas.stroke_rect(close.into(), 1.0, CLOSE_BORDER);
    canvas.draw_text("X", close.x + 7, close.y + 2);
}

fn draw_cell<C: Canvas + ?Sized>(
    play: &PlayScreen,
    cell: CellPlacement,
    selected: bool,
    canvas: &mut C,
) {
    let rect = cell.rect;
    canvas.fill_rect(rect.translate(2, 2).into(), CELL_SHADOW);

    if selected {
        for pass in 0..HIGHLIGHT_PASSES {
            let alpha = (150 - pass * 50) as u8;
            canvas.stroke_rect(
                rect.inflate(pass).into(),
                1.0,
                Color::rgba(100, 150, 255, alpha),
            );
        }
    }

    canvas.fill_rect(rect.into(), CELL_BG);
    canvas.stroke_rect(rect.into(), 1.0, CELL_BORDER);

    let inventory = play.inventory();
    let Some(entry) = inventory.entry(cell.index) else {
        return;
    };
    let definition = inventory.definition(cell.index);

    if let Some(definition) = definition {
        if let Some(size) = canvas.image_size(definition.image).filter(|s| !s.is_empty()) {
            canvas.draw_image(definition.image, ImageTransform::fit(size, rect, ICON_INSET));
        }
    }

    if entry.count > 1 {
        let count = entry.count.to_string();
        let width = text_width(&count);
        canvas.fill_rect(
            FRect::new(
                (rect.right() - width - 4) as f32,
                (rect.bottom() - 16) as f32,
                (width + 4) as f32,
                16.0,
            ),
            Color::shade(200),
        );
        canvas.draw_text(&count, rect.right() - width - 2, rect.bottom() - 14);
    }

    if let Some(definition) = definition.filter(|_| play.hovered_entry() == Some(cell.index)) {
        let name = definition.display_name.as_str();
        let width = text_width(name) + 4;
        let x = rect.x + (rect.width - width) / 2;
        canvas.fill_rect(
            FRect::new(x as f32, (rect.y - 20) as f32, width as f32, 16.0),
            Color::shade(200),
        );
        canvas.draw_text(name, x + 2, rect.y - 18);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::{ItemCatalog, ItemDefinition, ItemId};
    use crate::config::GameConfig;
    use crate::geometry::Point;
    use crate::input::{InputAction, InputSnapshot};
    use crate::inventory::{Inventory, InventoryEntry};
    use crate::screen::FrameInput;

    #[derive(Debug, PartialEq)]
    enum Call {
        Fill(FRect, Color),
        Stroke(FRect, Color),
        Image(ImageHandle),
        Text(String, i32, i32),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Recorder {
        fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Text(t, _, _) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }

        fn strokes_with(&self, color: Color) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, Call::Stroke(_, col) if *col == color))
                .count()
        }
    }

    impl Canvas for Recorder {
        fn fill_rect(&mut self, rect: FRect, color: Color) {
            self.calls.push(Call::Fill(rect, color));
        }
        fn stroke_rect(&mut self, rect: FRect, _thickness: f32, color: Color) {
            self.calls.push(Call::Stroke(rect, color));
        }
        fn draw_image(&mut self, image: ImageHandle, _transform: ImageTransform) {
            self.calls.push(Call::Image(image));
        }
        fn draw_text(&mut self, text: &str, x: i32, y: i32) {
            self.calls.push(Call::Text(text.to_string(), x, y));
        }
        fn image_size(&self, _image: ImageHandle) -> Option<Size> {
            Some(Size::new(16, 16))
        }
    }

    fn game_in_play(len: usize) -> Game {
        let catalog = Arc::new(
            ItemCatalog::new([ItemDefinition::new(ItemId(1), "Gold", ImageHandle(100))]).unwrap(),
        );
        let inventory =
            Inventory::new(catalog, 5, vec![InventoryEntry::new(ItemId(1), 50000); len]).unwrap();
        let mut game = Game::new(&GameConfig::default(), inventory);
        let viewport = Size::new(800, 600);
        let start = InputSnapshot::default()
            .with_pointer(Point::new(300, 220))
            .with_click();
        game.advance(&FrameInput::new(start, 0.0, viewport));
        game.advance(&FrameInput::new(
            InputSnapshot::default().with_pressed(InputAction::ToggleInventory),
            0.0,
            viewport,
        ));
        game
    }

    #[test]
    fn menu_label_is_centered_in_button() {
        let mut game = Game::new(
            &GameConfig::default(),
            Inventory::empty(Arc::new(ItemCatalog::default()), 5),
        );
        game.advance(&FrameInput::new(
            InputSnapshot::default(),
            0.0,
            Size::new(800, 600),
        ));
        let mut canvas = Recorder::default();
        render_game(&game, &mut canvas, None);

        // 14 glyphs * 6 = 84 wide, (200 - 84) / 2 = 58, (50 - 16) / 2 = 17
        assert!(canvas
            .calls
            .contains(&Call::Text("START_THE_GAME".into(), 278, 217)));
    }

    #[test]
    fn inventory_readouts_and_single_highlight() {
        let game = game_in_play(3);
        let mut canvas = Recorder::default();
        render_game(&game, &mut canvas, Some(60.0));

        let texts = canvas.texts();
        assert!(texts.contains(&"Page 1/1"));
        assert!(texts.contains(&"Items: 3/5"));
        assert!(texts.contains(&"FPS: 60.00"));
        assert_eq!(texts.iter().filter(|t| **t == "50000").count(), 3);
        assert_eq!(
            canvas.strokes_with(Color::rgba(100, 150, 255, 150)),
            1,
            "only the selected cell is highlighted"
        );
        assert_eq!(canvas.strokes_with(Color::rgba(100, 150, 255, 50)), 1);
    }

    #[test]
    fn tooltip_follows_hover() {
        let mut game = game_in_play(2);
        game.advance(&FrameInput::new(
            InputSnapshot::default().with_pointer(Point::new(340, 170)),
            0.0,
            Size::new(800, 600),
        ));
        let mut canvas = Recorder::default();
        render_game(&game, &mut canvas, None);
        // second cell starts at x=333; tooltip is 4*6+4=28 wide, centered
        assert!(canvas.calls.contains(&Call::Text("Gold".into(), 345, 137)));
    }

    #[test]
    fn fit_keeps_aspect_ratio_and_centers() {
        let transform = ImageTransform::fit(Size::new(80, 40), Rect::new(0, 0, 48, 48), 4);
        assert_eq!(transform.scale_x, 0.5);
        assert_eq!(transform.scale_y, 0.5);
        assert_eq!(transform.translate_x, 4.0);
        assert_eq!(transform.translate_y, 14.0);
    }
}
