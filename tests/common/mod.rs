//! Scripted engine fake and snapshot builders shared by controller tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use broadside::domain::{water_grid, Actor, GameSnapshot};
use broadside::protocol::{FireResponse, GamesResponse, NewGameResponse, WireShot};
use broadside::{ApiError, GameApi};

pub fn snapshot(game_id: &str, turn: Actor) -> GameSnapshot {
    GameSnapshot {
        game_id: game_id.to_string(),
        current_turn: turn,
        game_over: false,
        winner: None,
        player_board: water_grid(),
        computer_board: water_grid(),
        player_ships_remaining: 5,
        computer_ships_remaining: 5,
    }
}

pub fn new_game_ok(game_id: &str) -> Result<NewGameResponse, ApiError> {
    new_game_with(game_id, snapshot(game_id, Actor::Player))
}

pub fn new_game_with(game_id: &str, state: GameSnapshot) -> Result<NewGameResponse, ApiError> {
    Ok(NewGameResponse {
        game_id: game_id.to_string(),
        message: String::new(),
        game_state: state,
    })
}

pub fn fire_ok(
    state: GameSnapshot,
    player: WireShot,
    computer: Option<WireShot>,
) -> Result<FireResponse, ApiError> {
    Ok(FireResponse {
        player_shot: player,
        computer_shot: computer,
        game_state: state,
    })
}

pub fn player_miss() -> WireShot {
    WireShot::default()
}

pub fn player_hit(sunk: bool, ship: Option<&str>, message: Option<&str>) -> WireShot {
    WireShot {
        position: None,
        hit: true,
        sunk,
        ship_type: ship.map(str::to_string),
        message: message.map(str::to_string),
    }
}

pub fn computer_wire_shot(position: (u8, u8), hit: bool) -> WireShot {
    WireShot {
        position: Some(position),
        hit,
        sunk: false,
        ship_type: None,
        message: None,
    }
}

#[derive(Default)]
struct Inner {
    new_games: VecDeque<Result<NewGameResponse, ApiError>>,
    fires: VecDeque<Result<FireResponse, ApiError>>,
    fired: Vec<(String, u8, u8)>,
    deleted: Vec<String>,
}

/// Engine fake fed from a script. Clones share the script, so tests keep one
/// handle for assertions after handing a clone to the controller.
#[derive(Clone, Default)]
pub struct ScriptedApi {
    inner: Arc<Mutex<Inner>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_new_game(&self, result: Result<NewGameResponse, ApiError>) {
        self.inner.lock().unwrap().new_games.push_back(result);
    }

    pub fn push_fire(&self, result: Result<FireResponse, ApiError>) {
        self.inner.lock().unwrap().fires.push_back(result);
    }

    pub fn fired(&self) -> Vec<(String, u8, u8)> {
        self.inner.lock().unwrap().fired.clone()
    }

    pub fn fire_calls(&self) -> usize {
        self.inner.lock().unwrap().fired.len()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.inner.lock().unwrap().deleted.clone()
    }
}

#[async_trait::async_trait]
impl GameApi for ScriptedApi {
    async fn new_game(&mut self) -> Result<NewGameResponse, ApiError> {
        self.inner
            .lock()
            .unwrap()
            .new_games
            .pop_front()
            .unwrap_or_else(|| {
                Err(ApiError::Transport("no scripted new_game reply".to_string()))
            })
    }

    async fn fire(&mut self, game_id: &str, row: u8, col: u8) -> Result<FireResponse, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.fired.push((game_id.to_string(), row, col));
        inner
            .fires
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted fire reply".to_string())))
    }

    async fn fetch_state(&mut self, _game_id: &str) -> Result<GameSnapshot, ApiError> {
        Err(ApiError::Transport("not scripted".to_string()))
    }

    async fn delete_game(&mut self, game_id: &str) -> Result<(), ApiError> {
        self.inner.lock().unwrap().deleted.push(game_id.to_string());
        Ok(())
    }

    async fn list_games(&mut self) -> Result<GamesResponse, ApiError> {
        Ok(GamesResponse { games: Vec::new() })
    }
}
