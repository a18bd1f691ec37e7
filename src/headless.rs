//! Headless runner: drives a session from a script and reports the final
//! snapshot, without touching the terminal.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::args::parse_seed;
use crate::core::{compute_grid, GameConfig, GameSnapshot, GameState};
use crate::engine::Session;
use crate::types::{GameAction, FRAME_MS};

/// Viewport used to size the grid: 5 columns and 7 rows at the default steps.
pub const HEADLESS_WIDTH: u32 = 20;
pub const HEADLESS_HEIGHT: u32 = 14;

pub const DEFAULT_TICKS: u32 = 600;

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessConfig {
    pub config: Option<PathBuf>,
    pub seed: Option<u32>,
    pub ticks: u32,
    pub dt: f32,
    pub width: u32,
    pub height: u32,
    /// One entry per tick; `None` means no input that tick.
    pub inputs: Vec<Option<GameAction>>,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            config: None,
            seed: None,
            ticks: DEFAULT_TICKS,
            dt: FRAME_MS as f32 / 1000.0,
            width: HEADLESS_WIDTH,
            height: HEADLESS_HEIGHT,
            inputs: Vec::new(),
        }
    }
}

/// Returns `Ok(None)` unless the first argument is `headless`.
pub fn parse_headless_args(args: &[String]) -> Result<Option<HeadlessConfig>> {
    if args.is_empty() || args[0] != "headless" {
        return Ok(None);
    }

    let mut cfg = HeadlessConfig::default();
    let mut i = 1usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--config" => cfg.config = Some(PathBuf::from(flag_value(args, &mut i, flag)?)),
            "--seed" => {
                let v = flag_value(args, &mut i, flag)?;
                cfg.seed = Some(parse_seed(v).map_err(|_| anyhow!("headless: invalid --seed value: {}", v))?);
            }
            "--ticks" => {
                let v = flag_value(args, &mut i, flag)?;
                cfg.ticks = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("headless: invalid --ticks value: {}", v))?;
            }
            "--dt" => {
                let v = flag_value(args, &mut i, flag)?;
                cfg.dt = v
                    .parse::<f32>()
                    .ok()
                    .filter(|dt| dt.is_finite() && *dt >= 0.0)
                    .ok_or_else(|| anyhow!("headless: invalid --dt value: {}", v))?;
            }
            "--width" => {
                let v = flag_value(args, &mut i, flag)?;
                cfg.width = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("headless: invalid --width value: {}", v))?;
            }
            "--height" => {
                let v = flag_value(args, &mut i, flag)?;
                cfg.height = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("headless: invalid --height value: {}", v))?;
            }
            "--inputs" => cfg.inputs = parse_inputs(flag_value(args, &mut i, flag)?)?,
            other => return Err(anyhow!("headless: unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(Some(cfg))
}

/// Step past `flag` and return the value that follows it.
fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("headless: missing value for {}", flag))
}

/// Parse a comma separated script such as `up,up,-,left,restart`.
pub fn parse_inputs(list: &str) -> Result<Vec<Option<GameAction>>> {
    list.split(',')
        .map(str::trim)
        .map(|item| match item {
            "" | "-" => Ok(None),
            name => GameAction::from_str(name)
                .map(Some)
                .ok_or_else(|| anyhow!("headless: unknown input: {}", name)),
        })
        .collect()
}

/// Play `cfg.ticks` frames and return the final snapshot.
pub fn run_headless(cfg: &HeadlessConfig, game: &GameConfig) -> Result<GameSnapshot> {
    let grid = compute_grid(
        cfg.width,
        cfg.height,
        game.step_x,
        game.step_y,
        game.water_rows,
        game.grass_rows,
    );
    let mut session = Session::new(GameState::new(grid, game)?);

    for tick in 0..cfg.ticks as usize {
        if let Some(Some(action)) = cfg.inputs.get(tick) {
            session.on_action(*action);
        }
        session.on_frame(cfg.dt);
    }

    Ok(session.snapshot())
}
