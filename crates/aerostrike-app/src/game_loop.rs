//! Game loop thread: runs the simulation at 60Hz against a headless scene.
//!
//! The engine and scene are created inside this thread so it owns them
//! outright. Commands arrive via `mpsc` channel. Each frame measures the
//! real elapsed time and hands it to the engine, which discards stalls.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use aerostrike_core::constants::TARGET_FRAME_RATE;
use aerostrike_core::events::GameEvent;
use aerostrike_core::scene::HeadlessScene;
use aerostrike_core::state::FrameSnapshot;
use aerostrike_sim::{SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;
use crate::state::{AppState, GameLoopCommand};

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FRAME_RATE as u64);

/// Frames between HUD log lines.
const HUD_INTERVAL_FRAMES: u64 = 60;

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(config: SimConfig) -> io::Result<AppState> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("aerostrike-game-loop".into())
        .spawn(move || run_game_loop(config, cmd_rx, &shared))?;

    Ok(AppState::new(cmd_tx, latest_snapshot, thread))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut scene = HeadlessScene::new();
    let mut pilot = Autopilot::new();
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame + FRAME_DURATION;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Sim(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    log::debug!("Game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Step with the measured frame time
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        let input = pilot.next_input(dt);
        let snapshot = engine.step(dt, &input, &mut scene);

        // 3. Report
        report(&snapshot);

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind; reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}

/// Log notable events and a periodic HUD line.
pub fn report(snapshot: &FrameSnapshot) {
    for event in &snapshot.events {
        match event {
            GameEvent::MissionComplete { elapsed_secs } => {
                log::info!(
                    "Mission complete: {}/{} targets in {elapsed_secs:.1}s",
                    snapshot.score.destroyed,
                    snapshot.score.total
                );
            }
            GameEvent::CameraModeChanged { mode } => log::info!("Camera: {mode:?}"),
            _ => {}
        }
    }

    let frame = snapshot.time.frame;
    if frame > 0 && frame % HUD_INTERVAL_FRAMES == 0 {
        log::info!("{}", hud_line(snapshot));
    }
}

/// One-line HUD readout.
pub fn hud_line(snapshot: &FrameSnapshot) -> String {
    let aircraft = &snapshot.aircraft;
    format!(
        "t={:.1}s spd={:.0} alt={:.0} hdg={:.0}° score={}/{} rounds={} fx={}{}",
        snapshot.time.elapsed_secs,
        aircraft.speed,
        aircraft.position.y,
        aircraft.yaw.to_degrees().rem_euclid(360.0),
        snapshot.score.destroyed,
        snapshot.score.total,
        snapshot.projectiles,
        snapshot.explosions,
        if snapshot.weapon_ready { "" } else { " (reloading)" },
    )
}
