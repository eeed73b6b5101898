//! State shared between the command sources and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use rampart_core::commands::PlayerCommand;
use rampart_core::state::GameStateSnapshot;

/// Messages sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Stop the game loop after the current tick.
    Shutdown,
}

/// Handles held by the main thread while the game loop runs.
///
/// - `command_tx` is cloned into every command source (stdin reader, tests)
/// - `latest_snapshot` is overwritten by the loop after each tick
pub struct AppState {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl AppState {
    /// Send a player command. Returns false once the loop has exited.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.command_tx.send(GameLoopCommand::Player(command)).is_ok()
    }

    /// Copy of the most recent snapshot, if a tick has completed.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_after_receiver_dropped() {
        let (tx, rx) = mpsc::channel();
        let state = AppState {
            command_tx: tx,
            latest_snapshot: Arc::new(Mutex::new(None)),
        };
        assert!(state.send(PlayerCommand::Pause));
        assert!(matches!(
            rx.try_recv(),
            Ok(GameLoopCommand::Player(PlayerCommand::Pause))
        ));

        drop(rx);
        assert!(!state.send(PlayerCommand::Resume));
        assert!(state.snapshot().is_none());
    }
}
