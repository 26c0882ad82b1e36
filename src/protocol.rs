//! Wire bodies for the engine's REST surface.

use serde::{Deserialize, Serialize};

use crate::common::ApiError;
use crate::domain::{Actor, GameSnapshot, ShotOutcome};

/// Body of `POST /api/game/{id}/shoot`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ShotRequest {
    pub row: u8,
    pub col: u8,
}

/// Reply to `POST /api/new-game`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewGameResponse {
    pub game_id: String,
    #[serde(default)]
    pub message: String,
    pub game_state: GameSnapshot,
}

/// One shot as the engine describes it. The player's own shot omits
/// `position` since the client already knows where it fired; the computer's
/// must carry it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireShot {
    #[serde(default)]
    pub position: Option<(u8, u8)>,
    #[serde(default)]
    pub hit: bool,
    #[serde(default)]
    pub sunk: bool,
    #[serde(default)]
    pub ship_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply to a fire intent: what happened, plus the new authoritative state.
#[derive(Debug, Clone, Deserialize)]
pub struct FireResponse {
    pub player_shot: WireShot,
    #[serde(default)]
    pub computer_shot: Option<WireShot>,
    pub game_state: GameSnapshot,
}

impl FireResponse {
    /// Ordered outcomes for one cycle: the player's shot first, then the
    /// computer's counter-shot when the engine took one. `fired_at` is the
    /// cell the player targeted.
    pub fn outcomes(&self, fired_at: (u8, u8)) -> Result<Vec<ShotOutcome>, ApiError> {
        let mut out = Vec::with_capacity(2);
        out.push(ShotOutcome {
            actor: Actor::Player,
            position: fired_at,
            hit: self.player_shot.hit,
            sunk: self.player_shot.sunk,
            ship_type: self.player_shot.ship_type.clone(),
            message: self.player_shot.message.clone(),
        });
        if let Some(shot) = &self.computer_shot {
            let position = shot.position.ok_or_else(|| {
                ApiError::Malformed("computer shot without a position".to_string())
            })?;
            out.push(ShotOutcome {
                actor: Actor::Computer,
                position,
                hit: shot.hit,
                sunk: shot.sunk,
                ship_type: shot.ship_type.clone(),
                message: shot.message.clone(),
            });
        }
        Ok(out)
    }
}

/// Non-2xx bodies carry a single human-readable reason.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Reply to `DELETE /api/game/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: String,
}

/// One row of the engine's active-game listing.
#[derive(Debug, Clone, Deserialize)]
pub struct GameListEntry {
    pub game_id: String,
    pub current_turn: Actor,
    pub game_over: bool,
    #[serde(default)]
    pub winner: Option<Actor>,
}

/// Reply to `GET /api/games`.
#[derive(Debug, Clone, Deserialize)]
pub struct GamesResponse {
    pub games: Vec<GameListEntry>,
}
