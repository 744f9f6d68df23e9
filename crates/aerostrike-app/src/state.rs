//! State shared between the host thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use aerostrike_core::commands::SimCommand;
use aerostrike_core::state::FrameSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A session command to forward to the simulation engine.
    Sim(SimCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running game loop.
///
/// - `command_tx` forwards commands to the loop thread
/// - `latest_snapshot` is written by the loop after every frame for polling
pub struct AppState {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    thread: Option<JoinHandle<()>>,
}

impl AppState {
    pub fn new(
        command_tx: mpsc::Sender<GameLoopCommand>,
        latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
        thread: JoinHandle<()>,
    ) -> Self {
        Self {
            command_tx,
            latest_snapshot,
            thread: Some(thread),
        }
    }

    /// Forward a session command. Returns `false` once the loop has exited.
    pub fn send(&self, command: SimCommand) -> bool {
        self.command_tx.send(GameLoopCommand::Sim(command)).is_ok()
    }

    /// Clone of the most recent snapshot, if any frame has run.
    pub fn snapshot(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }

    /// Stop the loop and wait for its thread to finish.
    pub fn shutdown(&mut self) {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("Game loop thread panicked");
            }
        }
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_send_and_poll() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        let latest = Arc::new(Mutex::new(None));
        let mut state = AppState::new(tx, latest.clone(), std::thread::spawn(|| {}));

        assert!(state.snapshot().is_none());
        assert!(state.send(SimCommand::StartMission));
        assert!(matches!(
            rx.try_recv(),
            Ok(GameLoopCommand::Sim(SimCommand::StartMission))
        ));

        *latest.lock().unwrap() = Some(FrameSnapshot::default());
        assert!(state.snapshot().is_some());

        state.shutdown();
        assert!(matches!(rx.try_recv(), Ok(GameLoopCommand::Shutdown)));
    }
}
