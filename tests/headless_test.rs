use road_crossing::core::GameConfig;
use road_crossing::headless::{parse_headless_args, run_headless, HeadlessConfig};
use road_crossing::types::{Direction, GameAction};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn seeded(seed: u32) -> GameConfig {
    GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    }
}

#[test]
fn parses_all_flags() {
    let cfg = parse_headless_args(&args(&[
        "headless", "--seed", "9", "--ticks", "30", "--dt", "0.1", "--width", "40", "--height",
        "16", "--inputs", "up,-,left",
    ]))
    .unwrap()
    .unwrap();

    assert_eq!(cfg.seed, Some(9));
    assert_eq!(cfg.ticks, 30);
    assert_eq!(cfg.dt, 0.1);
    assert_eq!((cfg.width, cfg.height), (40, 16));
    assert_eq!(
        cfg.inputs,
        vec![
            Some(GameAction::Move(Direction::Up)),
            None,
            Some(GameAction::Move(Direction::Left)),
        ]
    );
}

#[test]
fn unknown_flag_is_reported_before_its_value() {
    let err = parse_headless_args(&args(&["headless", "--color"])).unwrap_err();
    assert_eq!(err.to_string(), "headless: unknown argument: --color");
}

#[test]
fn argument_errors_are_prefixed() {
    for bad in [
        &["headless", "--ticks"][..],
        &["headless", "--ticks", "many"][..],
        &["headless", "--inputs", "up,fly"][..],
        &["headless", "--color", "red"][..],
        &["headless", "--color"][..],
    ] {
        let err = parse_headless_args(&args(bad)).unwrap_err();
        assert!(err.to_string().starts_with("headless:"), "{}", err);
    }
}

#[test]
fn default_grid_is_five_by_seven() {
    let cfg = HeadlessConfig {
        ticks: 0,
        ..HeadlessConfig::default()
    };
    let snap = run_headless(&cfg, &seeded(1)).unwrap();
    assert_eq!(snap.grid.columns, 5);
    assert_eq!(snap.grid.total_rows(), 7);
    assert_eq!(snap.enemies.len(), snap.grid.road_rows as usize + 1);
}

#[test]
fn scripted_run_is_reproducible_and_serializes() {
    let cfg = HeadlessConfig {
        ticks: 120,
        inputs: vec![Some(GameAction::Move(Direction::Up)); 4],
        ..HeadlessConfig::default()
    };
    let a = run_headless(&cfg, &seeded(31)).unwrap();
    let b = run_headless(&cfg, &seeded(31)).unwrap();
    assert_eq!(a, b);
    if !a.game_over {
        assert_eq!(a.ticks, 120);
    }

    let json: serde_json::Value = serde_json::to_value(&a).unwrap();
    assert_eq!(json["seed"], 31);
    assert_eq!(json["grid"]["columns"], 5);
    assert!(json["player"]["sprite"].as_str().unwrap().starts_with("char-"));
}

#[test]
fn too_small_viewport_is_an_error() {
    let cfg = HeadlessConfig {
        width: 3,
        ..HeadlessConfig::default()
    };
    assert!(run_headless(&cfg, &seeded(1)).is_err());
}

#[test]
fn oversized_viewport_is_rejected_before_spawning() {
    let cfg = parse_headless_args(&args(&["headless", "--height", "4000000000", "--ticks", "1"]))
        .unwrap()
        .unwrap();
    let err = run_headless(&cfg, &seeded(1)).unwrap_err();
    assert!(err.to_string().contains("enemy pool"), "{}", err);
}
