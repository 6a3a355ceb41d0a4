//! skirmish-headless: run the Skirmish scene without a renderer.
//!
//! Usage:
//!   skirmish-headless run --frames 1800 --tap 300,160@0.5 --auto-fire
//!   skirmish-headless run --config scene.json --seed 7

use std::path::PathBuf;
use std::process;

use skirmish_core::commands::HostInput;
use skirmish_core::config::SceneConfig;
use skirmish_core::errors::ConfigError;
use skirmish_core::state::SceneSnapshot;
use skirmish_core::types::Point2D;
use skirmish_sim::SceneController;
use tracing::{error, info};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            error!(command = other, "unknown command");
            print_usage();
            process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout carries only the snapshot JSON.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn print_usage() {
    eprintln!(
        "skirmish-headless: run the Skirmish scene without a renderer\n\
         \n\
         Commands:\n\
         \n\
         run       Step the scene and print the final snapshot as JSON\n\
         \n\
           --config <path>    Scene config JSON (optional, defaults otherwise)\n\
           --frames <N>       Frames to run (default: 600)\n\
           --fps <F>          Host frame rate (default: 60)\n\
           --seed <S>         Override the config seed\n\
           --tap <x,y@secs>   Touch at (x, y) at the given time (repeatable)\n\
           --auto-fire        Tap the leftmost monster once per second\n\
         \n\
         Environment:\n\
         \n\
           RUST_LOG=debug     Log spawns and launches\n\
           LOG_FORMAT=json    JSON log lines on stderr\n\
         \n\
         Examples:\n\
         \n\
           skirmish-headless run --frames 1800 --auto-fire\n\
           skirmish-headless run --seed 7 --tap 300,160@0.5 --tap 400,60@1.25\n"
    );
}

// --- Argument parsing ---

/// A touch scheduled at a host time.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScheduledTap {
    at_secs: f64,
    location: Point2D,
}

fn parse_flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

/// Parse an optional numeric flag. A flag that is present but missing its
/// value or not a number is an error, never a silent default.
fn parse_optional<T: std::str::FromStr>(
    args: &[String],
    flag: &str,
) -> Result<Option<T>, String> {
    if !args.iter().any(|a| a == flag) {
        return Ok(None);
    }
    let value = parse_flag_value(args, flag).ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map(Some)
        .map_err(|_| format!("{flag}: invalid number {value:?}"))
}

fn parse_number<T: std::str::FromStr>(
    args: &[String],
    flag: &str,
    default: T,
) -> Result<T, String> {
    Ok(parse_optional(args, flag)?.unwrap_or(default))
}

/// Parse `x,y@secs`.
fn parse_tap(value: &str) -> Option<ScheduledTap> {
    let (point, at) = value.split_once('@')?;
    let (x, y) = point.split_once(',')?;
    Some(ScheduledTap {
        at_secs: at.trim().parse().ok()?,
        location: Point2D::new(x.trim().parse().ok()?, y.trim().parse().ok()?),
    })
}

fn parse_taps(args: &[String]) -> Vec<ScheduledTap> {
    let mut taps = Vec::new();
    for i in 0..args.len() {
        if args[i] == "--tap" && i + 1 < args.len() {
            match parse_tap(&args[i + 1]) {
                Some(tap) => taps.push(tap),
                None => error!(value = %args[i + 1], "ignoring malformed --tap"),
            }
        }
    }
    taps.sort_by(|a, b| a.at_secs.total_cmp(&b.at_secs));
    taps
}

fn load_config(args: &[String], seed: Option<u64>) -> Result<SceneConfig, ConfigError> {
    let mut config = match parse_flag_value(args, "--config") {
        Some(path) => SceneConfig::load(&PathBuf::from(path))?,
        None => SceneConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    Ok(config)
}

/// Numeric flags of the `run` command.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RunOptions {
    frames: u64,
    fps: f64,
    seed: Option<u64>,
}

fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let frames = parse_number(args, "--frames", 600)?;
    let fps: f64 = parse_number(args, "--fps", 60.0)?;
    if !fps.is_finite() || fps <= 0.0 {
        return Err("--fps must be positive".into());
    }
    let seed = parse_optional(args, "--seed")?;
    Ok(RunOptions { frames, fps, seed })
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let RunOptions { frames, fps, seed } = match parse_run_options(args) {
        Ok(o) => o,
        Err(e) => {
            error!(error = %e, "invalid arguments");
            process::exit(1);
        }
    };

    let config = match load_config(args, seed) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "failed to load config");
            process::exit(1);
        }
    };
    let auto_fire = args.iter().any(|a| a == "--auto-fire");
    let taps = parse_taps(args);

    let mut scene = match SceneController::new(config) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "invalid scene config");
            process::exit(1);
        }
    };

    let snapshot = run_frames(&mut scene, frames, fps, &taps, auto_fire);

    let score = &snapshot.score;
    info!(
        frames,
        spawned = score.monsters_spawned,
        destroyed = score.monsters_destroyed,
        escaped = score.monsters_escaped,
        launched = score.projectiles_launched,
        rejected = score.launches_rejected,
        "run complete"
    );

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!(error = %e, "failed to serialize snapshot");
            process::exit(1);
        }
    }
}

/// Step the scene `frames` times at `fps`, feeding scheduled and automatic
/// taps, and return the last snapshot.
fn run_frames(
    scene: &mut SceneController,
    frames: u64,
    fps: f64,
    taps: &[ScheduledTap],
    auto_fire: bool,
) -> SceneSnapshot {
    let mut pending = taps.iter().peekable();
    let mut snapshot = scene.snapshot();
    let mut last_auto_fire_sec = 0u64;

    for k in 1..=frames {
        let now = k as f64 / fps;

        while let Some(tap) = pending.next_if(|t| t.at_secs <= now) {
            scene.queue_input(HostInput::TouchEnded {
                location: tap.location,
            });
        }

        let whole_secs = now.floor() as u64;
        if auto_fire && whole_secs > last_auto_fire_sec {
            last_auto_fire_sec = whole_secs;
            if let Some(target) = leftmost_monster(&snapshot) {
                scene.queue_input(HostInput::TouchEnded { location: target });
            }
        }

        snapshot = scene.step(now);
    }
    snapshot
}

fn leftmost_monster(snapshot: &SceneSnapshot) -> Option<Point2D> {
    snapshot
        .monsters
        .iter()
        .map(|m| m.position)
        .min_by(|a, b| a.x.total_cmp(&b.x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_taps_sorted_by_time() {
        let taps = parse_taps(&args(&["--tap", "400,60@1.25", "--tap", "300, 160@0.5"]));
        assert_eq!(
            taps,
            vec![
                ScheduledTap {
                    at_secs: 0.5,
                    location: Point2D::new(300.0, 160.0),
                },
                ScheduledTap {
                    at_secs: 1.25,
                    location: Point2D::new(400.0, 60.0),
                },
            ]
        );
    }

    #[test]
    fn rejects_malformed_tap() {
        assert_eq!(parse_tap("300,160"), None);
        assert_eq!(parse_tap("x,y@1"), None);
    }

    #[test]
    fn numbers_fall_back_to_defaults_only_when_absent() {
        let a = args(&["--frames", "120"]);
        assert_eq!(parse_number(&a, "--frames", 600u64), Ok(120));
        assert_eq!(parse_number(&a, "--fps", 60.0f64), Ok(60.0));
    }

    #[test]
    fn malformed_numbers_are_errors() {
        assert!(parse_run_options(&args(&["--fps", "abc"])).is_err());
        assert!(parse_run_options(&args(&["--frames", "-3"])).is_err());
        assert!(parse_run_options(&args(&["--seed", "seven"])).is_err());
        assert!(parse_run_options(&args(&["--frames"])).is_err());
        assert!(parse_run_options(&args(&["--fps", "0"])).is_err());
    }

    #[test]
    fn run_options_defaults() {
        let options = parse_run_options(&args(&["--auto-fire"])).unwrap();
        assert_eq!(
            options,
            RunOptions {
                frames: 600,
                fps: 60.0,
                seed: None,
            }
        );
    }

    #[test]
    fn seed_override_applies() {
        let options = parse_run_options(&args(&["--seed", "77"])).unwrap();
        let config = load_config(&args(&["--seed", "77"]), options.seed).unwrap();
        assert_eq!(config.seed, 77);
    }

    #[test]
    fn scripted_tap_launches_projectile() {
        let mut scene = SceneController::new(SceneConfig::default()).unwrap();
        let taps = [ScheduledTap {
            at_secs: 0.1,
            location: Point2D::new(300.0, 160.0),
        }];
        let snapshot = run_frames(&mut scene, 12, 60.0, &taps, false);
        assert_eq!(snapshot.score.projectiles_launched, 1);
        assert_eq!(snapshot.projectiles.len(), 1);
    }
}
