use criterion::{black_box, criterion_group, criterion_main, Criterion};
use road_crossing::core::{compute_grid, GameConfig, GameState};
use road_crossing::term::{FrameBuffer, GameView, Viewport};
use road_crossing::types::Direction;

fn game() -> GameState {
    let config = GameConfig {
        seed: Some(12345),
        lives: 9,
        ..GameConfig::default()
    };
    // A roomy terminal: 30 columns, 20 road lanes.
    GameState::new(compute_grid(120, 46, 4, 2, 1, 2), &config).unwrap()
}

fn bench_tick(c: &mut Criterion) {
    let mut state = game();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            state.tick(black_box(0.016));
        })
    });
}

fn bench_handle_input(c: &mut Criterion) {
    let mut state = game();
    let dirs = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
    let mut i = 0usize;

    c.bench_function("handle_input", |b| {
        b.iter(|| {
            i = i.wrapping_add(1);
            state.handle_input(black_box(dirs[i % dirs.len()]));
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let state = game();
    let mut snap = state.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_render_into(c: &mut Criterion) {
    let snap = game().snapshot();
    let view = GameView::default();
    let vp = Viewport::new(122, 49);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_into", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_handle_input,
    bench_snapshot_into,
    bench_render_into
);
criterion_main!(benches);
