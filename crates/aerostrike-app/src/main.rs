use std::time::Duration;

use aerostrike_app::game_loop;
use aerostrike_core::commands::SimCommand;
use aerostrike_sim::SimConfig;

/// How long to fly when no duration is given.
const DEFAULT_RUN_SECS: f64 = 30.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Usage: aerostrike-app [config.json] [seconds]
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(err) => {
                log::warn!("{err}; falling back to defaults");
                SimConfig::default()
            }
        },
        None => SimConfig::default(),
    };
    let run_secs = args
        .next()
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or(DEFAULT_RUN_SECS);

    log::info!("AEROSTRIKE seed={} targets={}", config.seed, config.fleet.target_count);

    let mut app = match game_loop::spawn_game_loop(config) {
        Ok(app) => app,
        Err(err) => {
            log::error!("Failed to spawn game loop thread: {err}");
            std::process::exit(1);
        }
    };

    app.send(SimCommand::StartMission);
    std::thread::sleep(Duration::from_secs_f64(run_secs));
    app.shutdown();

    match app.snapshot() {
        Some(snapshot) => {
            log::info!("Final: {}", game_loop::hud_line(&snapshot));
            if let Ok(json) = serde_json::to_string(&snapshot.score) {
                println!("{json}");
            }
        }
        None => log::warn!("No frames were simulated"),
    }
}
