use road_crossing::core::{compute_grid, EntitySnapshot, GameConfig, GameSnapshot, GameState, Position};
use road_crossing::term::{FrameBuffer, GameView, Viewport};
use road_crossing::types::SpriteId;

// 10x8 grid of 4x2 cells: 40x16 inside a border, one HUD row above.
const VP: Viewport = Viewport {
    width: 42,
    height: 19,
};

fn snapshot() -> GameSnapshot {
    let config = GameConfig {
        seed: Some(1),
        ..GameConfig::default()
    };
    let mut snap = GameState::new(compute_grid(40, 16, 4, 2, 1, 2), &config)
        .unwrap()
        .snapshot();
    snap.enemies.clear();
    snap
}

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
}

/// Terminal row of the middle line of grid row `row`.
fn sprite_y(row: u16) -> u16 {
    2 + row * 2 + 1
}

#[test]
fn term_view_fits_the_playfield() {
    let (w, h) = GameView::playfield(VP);
    let grid = compute_grid(w, h, 4, 2, 1, 2);
    assert_eq!(grid.columns, 10);
    assert_eq!(grid.total_rows(), 8);

    let fb = GameView::default().render(&snapshot(), VP);
    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 18).unwrap().ch, '└');
    assert_eq!(fb.get(41, 18).unwrap().ch, '┘');
}

#[test]
fn term_view_paints_bands() {
    let fb = GameView::default().render(&snapshot(), VP);
    // Water row 0, road row 1, grass row 7.
    assert_eq!(fb.get(1, 2).unwrap().ch, '~');
    assert_eq!(fb.get(1, 4).unwrap().ch, ' ');
    assert_eq!(fb.get(1, 16).unwrap().ch, '"');
    assert_ne!(fb.get(1, 2).unwrap().style.bg, fb.get(1, 4).unwrap().style.bg);
}

#[test]
fn term_view_draws_player_in_its_cell() {
    let mut snap = snapshot();
    snap.player.position = Position::new(2.0, 6);
    let fb = GameView::default().render(&snap, VP);

    let y = sprite_y(6);
    assert_eq!(fb.get(9, y).unwrap().ch, '\\');
    assert_eq!(fb.get(10, y).unwrap().ch, 'o');
    assert_eq!(fb.get(11, y).unwrap().ch, '/');
}

#[test]
fn term_view_clips_enemies_at_both_edges() {
    let mut snap = snapshot();
    snap.player.position = Position::new(0.0, 6);
    snap.enemies.push(EntitySnapshot {
        sprite: SpriteId::EnemyBug,
        position: Position::new(-0.5, 2),
    });
    snap.enemies.push(EntitySnapshot {
        sprite: SpriteId::EnemyBug,
        position: Position::new(9.5, 3),
    });
    let fb = GameView::default().render(&snap, VP);

    let y = sprite_y(2);
    assert_eq!(fb.get(0, y).unwrap().ch, '│');
    assert_eq!(fb.get(1, y).unwrap().ch, '>');

    let y = sprite_y(3);
    assert_eq!(fb.get(39, y).unwrap().ch, '=');
    assert_eq!(fb.get(40, y).unwrap().ch, '#');
    assert_eq!(fb.get(41, y).unwrap().ch, '│');
}

#[test]
fn term_view_shows_hearts_and_score() {
    let mut snap = snapshot();
    snap.score = 42;
    snap.hearts.truncate(2);
    let fb = GameView::default().render(&snap, VP);

    let hud = row_text(&fb, 0);
    assert_eq!(hud.matches('♥').count(), 2);
    assert!(hud.contains("SCORE 42"));
}

#[test]
fn term_view_overlays_game_over() {
    let mut snap = snapshot();
    let fb = GameView::default().render(&snap, VP);
    assert!(!(0..fb.height()).any(|y| row_text(&fb, y).contains("GAME OVER")));

    snap.game_over = true;
    let fb = GameView::default().render(&snap, VP);
    assert!(row_text(&fb, 10).contains("GAME OVER"));
    assert!(row_text(&fb, 11).contains("press r to restart"));
}

#[test]
fn term_view_centers_on_large_viewports() {
    let fb = GameView::default().render(&snapshot(), Viewport::new(62, 29));
    // hud_y = (29 - 19) / 2 = 5, frame_x = (62 - 42) / 2 = 10.
    assert_eq!(fb.get(10, 6).unwrap().ch, '┌');
}
