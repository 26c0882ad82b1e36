//! Per-game client state.

use crate::domain::{Actor, CellState, GameSnapshot};

/// Monotonic tag distinguishing game sessions. Every scheduled reveal step
/// carries the tag of the session that staged it; steps with a stale tag are
/// discarded instead of mutating a fresh session's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(u64);

impl SessionId {
    pub fn new(n: u64) -> Self {
        Self(n)
    }
}

/// Everything the client holds for one game: the id the engine issued, the
/// snapshot the renderer consumes right now, and the authoritative snapshot
/// from the latest response, held back until the reveal commits so the board
/// does not jump ahead of the paced playback.
#[derive(Debug, Clone)]
pub struct ClientSession {
    pub id: SessionId,
    pub game_id: String,
    pub snapshot: GameSnapshot,
    staged: Option<GameSnapshot>,
}

impl ClientSession {
    pub fn new(id: SessionId, game_id: String, snapshot: GameSnapshot) -> Self {
        Self {
            id,
            game_id,
            snapshot,
            staged: None,
        }
    }

    /// Hold the new authoritative snapshot until the cycle's commit step.
    pub fn stage(&mut self, snapshot: GameSnapshot) {
        self.staged = Some(snapshot);
    }

    /// Replace the displayed snapshot with the staged one. Returns false when
    /// nothing was staged.
    pub fn commit(&mut self) -> bool {
        match self.staged.take() {
            Some(snapshot) => {
                self.snapshot = snapshot;
                true
            }
            None => false,
        }
    }

    /// Mark a single revealed shot on the displayed snapshot. Player shots
    /// land on the computer's board, computer shots on the player's.
    pub fn mark_shot(&mut self, actor: Actor, position: (u8, u8), hit: bool) {
        let board = match actor {
            Actor::Player => &mut self.snapshot.computer_board,
            Actor::Computer => &mut self.snapshot.player_board,
        };
        let (row, col) = (position.0 as usize, position.1 as usize);
        if let Some(cell) = board.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = if hit { CellState::Hit } else { CellState::Miss };
        }
    }
}
