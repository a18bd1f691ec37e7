//! Terminal road-crossing runner (default binary).
//!
//! `road-crossing [--config PATH] [--seed N]` plays in the terminal;
//! `road-crossing headless ...` runs a scripted game and prints the final
//! snapshot as JSON.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use road_crossing::args::{load_config, parse_play_args};
use road_crossing::core::{compute_grid, GameConfig, GameState};
use road_crossing::engine::{FrameClock, Session};
use road_crossing::headless::{parse_headless_args, run_headless};
use road_crossing::input::{should_quit, KeyTrigger};
use road_crossing::logging;
use road_crossing::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use road_crossing::types::DEFAULT_SEED;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Some(cfg) = parse_headless_args(&args)? {
        logging::init("warn")?;
        let game = load_config(cfg.config.as_deref(), cfg.seed)?;
        let snap = run_headless(&cfg, &game)?;
        println!("{}", serde_json::to_string_pretty(&snap)?);
        return Ok(());
    }

    let play = parse_play_args(&args)?;
    // The alternate screen owns stderr; only log when a file is configured.
    if logging::log_path().is_some() {
        logging::init("info")?;
    }
    let mut game = load_config(play.config.as_deref(), play.seed)?;
    if game.seed.is_none() {
        game.seed = Some(time_seed());
    }

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let viewport = Viewport::new(w, h);
    let (pw, ph) = GameView::playfield(viewport);
    let grid = compute_grid(pw, ph, game.step_x, game.step_y, game.water_rows, game.grass_rows);
    let state = GameState::new(grid, &game)
        .with_context(|| format!("terminal {}x{} is too small to play", w, h))?;

    let mut term = TerminalRenderer::new();
    let release_events = term.enter()?;
    info!(
        "playing on a {}x{} terminal, key release events: {}",
        w, h, release_events
    );

    let result = run(&mut term, Session::new(state), viewport, &game, KeyTrigger::new(release_events));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    mut session: Session,
    mut viewport: Viewport,
    game: &GameConfig,
    trigger: KeyTrigger,
) -> Result<()> {
    let view = GameView::for_grid(session.state().grid());
    let mut snap = session.snapshot();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut clock = FrameClock::new(game.max_dt);

    loop {
        session.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if event::poll(clock.until_next_frame())? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = trigger.filter(key) {
                        session.on_action(action);
                    }
                }
                // The grid keeps its size; the view re-centres it.
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        if clock.until_next_frame().is_zero() {
            session.on_frame(clock.tick());
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(DEFAULT_SEED)
}
