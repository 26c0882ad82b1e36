//! Domain types shared by the controller, renderer and wire protocol.

use serde::{Deserialize, Serialize};

use crate::config::BOARD_SIZE;

/// State of a single board cell as the engine reports it. The wire alphabet
/// is one symbol per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[serde(rename = "~")]
    Water,
    #[serde(rename = "S")]
    Ship,
    #[serde(rename = "X")]
    Hit,
    #[serde(rename = "O")]
    Miss,
}

pub type Grid = [[CellState; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// A grid with no shots taken and no ships visible.
pub fn water_grid() -> Grid {
    [[CellState::Water; BOARD_SIZE as usize]; BOARD_SIZE as usize]
}

/// Who acted or won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    Player,
    Computer,
}

/// Full authoritative game state, replaced wholesale after every intent.
///
/// Ships are only meaningful on the player's own board. The engine should
/// never send `Ship` cells in `computer_board`, but a buggy or hostile one
/// might; the renderer suppresses them either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(default)]
    pub game_id: String,
    pub current_turn: Actor,
    pub game_over: bool,
    #[serde(default)]
    pub winner: Option<Actor>,
    pub player_board: Grid,
    pub computer_board: Grid,
    pub player_ships_remaining: u8,
    pub computer_ships_remaining: u8,
}

/// One resolved shot inside a cycle, already attributed and positioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotOutcome {
    pub actor: Actor,
    pub position: (u8, u8),
    pub hit: bool,
    /// Only meaningful when `hit` is set.
    pub sunk: bool,
    /// Present when `sunk` is set and the engine named the ship.
    pub ship_type: Option<String>,
    /// Free-form line from the engine, preferred for sunk announcements.
    pub message: Option<String>,
}

impl ShotOutcome {
    /// One-line description for the event log.
    pub fn headline(&self) -> String {
        let ship = self.ship_type.as_deref().unwrap_or("ship");
        match (self.actor, self.hit, self.sunk) {
            (Actor::Player, true, true) => self
                .message
                .clone()
                .unwrap_or_else(|| format!("You sunk the {}!", ship)),
            (Actor::Player, true, false) => "Direct hit!".to_string(),
            (Actor::Player, false, _) => "Miss!".to_string(),
            (Actor::Computer, true, true) => format!("Computer sunk your {}!", ship),
            (Actor::Computer, true, false) => "Computer hit your ship!".to_string(),
            (Actor::Computer, false, _) => "Computer missed!".to_string(),
        }
    }
}
