use crate::common::ApiError;
use crate::domain::GameSnapshot;
use crate::protocol::{FireResponse, GamesResponse, NewGameResponse};

/// Seam between the turn controller and the authoritative engine. The
/// production implementation speaks HTTP; tests script this trait directly.
#[async_trait::async_trait]
pub trait GameApi: Send + Sync {
    async fn new_game(&mut self) -> Result<NewGameResponse, ApiError>;
    async fn fire(&mut self, game_id: &str, row: u8, col: u8) -> Result<FireResponse, ApiError>;
    async fn fetch_state(&mut self, game_id: &str) -> Result<GameSnapshot, ApiError>;
    async fn delete_game(&mut self, game_id: &str) -> Result<(), ApiError>;
    async fn list_games(&mut self) -> Result<GamesResponse, ApiError>;
}
