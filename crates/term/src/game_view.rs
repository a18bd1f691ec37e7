//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O). One grid cell covers `cell_w x cell_h` terminal cells; the
//! playfield sits inside a one-cell border with a single HUD line above it.

use crate::core::{Band, GameSnapshot, GridSpec};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{SpriteId, DEFAULT_STEP_X, DEFAULT_STEP_Y};

/// Terminal rows above the playfield border.
pub const HUD_ROWS: u16 = 1;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// What a sprite looks like in a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub text: &'static str,
    pub fg: Rgb,
}

/// Resolve a sprite to its terminal glyph.
pub fn sprite_glyph(sprite: SpriteId) -> Glyph {
    let (text, fg) = match sprite {
        SpriteId::EnemyBug => ("=#>", Rgb::new(230, 70, 60)),
        SpriteId::Heart => ("♥", Rgb::new(230, 40, 70)),
        SpriteId::CharBoy => ("\\o/", Rgb::new(250, 250, 250)),
        SpriteId::CharCatGirl => ("\\o/", Rgb::new(250, 200, 90)),
        SpriteId::CharHornGirl => ("\\o/", Rgb::new(190, 120, 240)),
        SpriteId::CharPinkGirl => ("\\o/", Rgb::new(255, 140, 200)),
        SpriteId::CharPrincessGirl => ("\\o/", Rgb::new(120, 220, 255)),
    };
    Glyph { text, fg }
}

fn band_style(band: Band) -> (char, CellStyle) {
    match band {
        Band::Water => (
            '~',
            CellStyle::new(Rgb::new(120, 170, 230), Rgb::new(25, 70, 150)),
        ),
        Band::Road => (' ', CellStyle::new(Rgb::new(90, 90, 95), Rgb::new(45, 45, 50))),
        Band::Grass => (
            '"',
            CellStyle::new(Rgb::new(90, 170, 80), Rgb::new(35, 100, 45)),
        ),
    }
}

/// Where the board lands inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    hud_y: u16,
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl Layout {
    fn inner_x(&self) -> u16 {
        self.frame_x + 1
    }

    fn inner_y(&self) -> u16 {
        self.frame_y + 1
    }

    fn inner_right(&self) -> u16 {
        self.frame_x + self.frame_w.saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_X as u16, DEFAULT_STEP_Y as u16)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// A view whose cells match the grid's step sizes.
    pub fn for_grid(grid: &GridSpec) -> Self {
        Self::new(
            grid.step_x.min(u16::MAX as u32) as u16,
            grid.step_y.min(u16::MAX as u32) as u16,
        )
    }

    /// Terminal area available to the grid once border and HUD are taken out.
    /// Feed this to `compute_grid`.
    pub fn playfield(viewport: Viewport) -> (u32, u32) {
        (
            viewport.width.saturating_sub(2) as u32,
            viewport.height.saturating_sub(2 + HUD_ROWS) as u32,
        )
    }

    fn layout(&self, grid: &GridSpec, viewport: Viewport) -> Layout {
        let inner_w = (grid.columns as u16).saturating_mul(self.cell_w);
        let inner_h = (grid.total_rows() as u16).saturating_mul(self.cell_h);
        let frame_w = inner_w.saturating_add(2);
        let frame_h = inner_h.saturating_add(2);
        let hud_y = viewport.height.saturating_sub(frame_h + HUD_ROWS) / 2;
        Layout {
            hud_y,
            frame_x: viewport.width.saturating_sub(frame_w) / 2,
            frame_y: hud_y + HUD_ROWS,
            frame_w,
            frame_h,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Does not allocate once `fb` has reached the viewport size.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let grid = &snap.grid;
        let layout = self.layout(grid, viewport);

        for row in 0..grid.total_rows() {
            let (ch, style) = band_style(grid.band_of(row));
            fb.fill_rect(
                layout.inner_x(),
                layout.inner_y() + row as u16 * self.cell_h,
                grid.columns as u16 * self.cell_w,
                self.cell_h,
                ch,
                style,
            );
        }

        draw_border(fb, &layout, CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)));

        for enemy in &snap.enemies {
            self.draw_sprite(fb, &layout, grid, enemy.sprite, enemy.position.col, enemy.position.row);
        }
        self.draw_sprite(
            fb,
            &layout,
            grid,
            snap.player.sprite,
            snap.player.position.col,
            snap.player.position.row,
        );

        self.draw_hud(fb, snap, &layout);

        if snap.game_over {
            draw_centered(fb, &layout, 0, "GAME OVER");
            draw_centered(fb, &layout, 1, "press r to restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Draw a sprite on the middle line of its cell, clipped to the board.
    fn draw_sprite(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        grid: &GridSpec,
        sprite: SpriteId,
        col: f32,
        row: u32,
    ) {
        if row >= grid.total_rows() || !col.is_finite() {
            return;
        }
        let glyph = sprite_glyph(sprite);
        let (_, band) = band_style(grid.band_of(row));
        let style = CellStyle::new(glyph.fg, band.bg).bold();

        let len = glyph.text.chars().count() as i32;
        let pad = (self.cell_w as i32 - len).max(0) / 2;
        let x = layout.inner_x() as i32 + (col * self.cell_w as f32).round() as i32 + pad;
        let y = layout.inner_y() + row as u16 * self.cell_h + self.cell_h / 2;
        fb.put_str_clipped(x, y, glyph.text, style, layout.inner_x(), layout.inner_right());
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let label = CellStyle::default().bold();
        let y = layout.hud_y;

        for heart in &snap.hearts {
            let glyph = sprite_glyph(heart.sprite);
            let x = layout.frame_x + 1 + heart.position.col as u16 * 2;
            fb.put_str(x, y, glyph.text, CellStyle::new(glyph.fg, Rgb::new(0, 0, 0)));
        }

        let digits = decimal_width(snap.score);
        let x = (layout.frame_x + layout.frame_w).saturating_sub(7 + digits);
        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x + 6, y, snap.score, CellStyle::default());
    }
}

fn decimal_width(mut n: u32) -> u16 {
    let mut w = 1;
    while n >= 10 {
        n /= 10;
        w += 1;
    }
    w
}

fn draw_border(fb: &mut FrameBuffer, layout: &Layout, style: CellStyle) {
    let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_centered(fb: &mut FrameBuffer, layout: &Layout, line: u16, text: &str) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    let text_w = text.chars().count() as u16;
    let x = layout.frame_x + layout.frame_w.saturating_sub(text_w) / 2;
    let y = layout.frame_y + layout.frame_h / 2 + line;
    fb.put_str(x, y, text, style);
}
