use std::fs;
use std::path::PathBuf;

use road_crossing::args::load_config_with;
use road_crossing::core::{ConfigError, GameConfig, SpeedPolicy, ENV_LIVES, ENV_SEED};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("road-crossing-{}-{}.toml", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_toml_file() {
    let path = temp_file(
        "full",
        r#"
            lives = 5
            enemy_count = 2
            max_dt = 0.1

            [speed]
            kind = "fixed"
            min = 2
            max = 4
        "#,
    );
    let config = GameConfig::load(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.lives, 5);
    assert_eq!(config.enemy_count, Some(2));
    assert_eq!(config.max_dt, 0.1);
    assert_eq!(config.speed, SpeedPolicy::Fixed { min: 2, max: 4 });
    assert_eq!(config.step_x, GameConfig::default().step_x);
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("road-crossing-does-not-exist.toml");
    assert!(matches!(GameConfig::load(&path), Err(ConfigError::Io { .. })));
}

#[test]
fn malformed_file_is_parse_error() {
    let path = temp_file("broken", "lives = \"many\"");
    let result = GameConfig::load(&path);
    fs::remove_file(&path).ok();
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

fn no_env(_: &'static str) -> Option<String> {
    None
}

#[test]
fn command_line_seed_wins() {
    let path = temp_file("seeded", "seed = 5");
    let from_file = load_config_with(Some(&path), None, no_env).unwrap();
    let from_env = load_config_with(Some(&path), None, |var| (var == ENV_SEED).then(|| "11".to_string())).unwrap();
    let overridden =
        load_config_with(Some(&path), Some(77), |var| (var == ENV_SEED).then(|| "11".to_string())).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(from_file.seed, Some(5));
    assert_eq!(from_env.seed, Some(11));
    assert_eq!(overridden.seed, Some(77));
}

#[test]
fn invalid_values_are_rejected_after_layering() {
    let path = temp_file("invalid", "lives = 0");
    let from_file = load_config_with(Some(&path), None, no_env);
    let fixed_by_env = load_config_with(Some(&path), None, |var| (var == ENV_LIVES).then(|| "4".to_string()));
    fs::remove_file(&path).ok();

    assert!(from_file.is_err());
    assert_eq!(fixed_by_env.unwrap().lives, 4);
}

#[test]
fn bad_environment_value_is_reported() {
    let err = load_config_with(None, None, |var| (var == ENV_SEED).then(|| "soon".to_string())).unwrap_err();
    assert!(err.to_string().contains(ENV_SEED), "{}", err);
}
