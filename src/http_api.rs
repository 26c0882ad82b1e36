//! HTTP implementation of [`GameApi`] against the engine's REST surface.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::common::ApiError;
use crate::config::REQUEST_TIMEOUT;
use crate::domain::GameSnapshot;
use crate::engine_api::GameApi;
use crate::protocol::{
    DeleteResponse, ErrorBody, FireResponse, GamesResponse, NewGameResponse, ShotRequest,
};

pub struct HttpGameApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGameApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Read the body before checking the status so a non-2xx `detail` can be
    /// surfaced verbatim.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let status = resp.status();
        let body = resp.text().await.map_err(map_transport)?;
        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.detail)
                .unwrap_or_else(|_| format!("engine returned {}", status));
            return Err(ApiError::Rejected { detail });
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

fn map_transport(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Transport(err.to_string())
    }
}

#[async_trait::async_trait]
impl GameApi for HttpGameApi {
    async fn new_game(&mut self) -> Result<NewGameResponse, ApiError> {
        let resp = self
            .client
            .post(format!("{}/api/new-game", self.base_url))
            .send()
            .await
            .map_err(map_transport)?;
        Self::decode(resp).await
    }

    async fn fire(&mut self, game_id: &str, row: u8, col: u8) -> Result<FireResponse, ApiError> {
        let resp = self
            .client
            .post(format!("{}/api/game/{}/shoot", self.base_url, game_id))
            .json(&ShotRequest { row, col })
            .send()
            .await
            .map_err(map_transport)?;
        Self::decode(resp).await
    }

    async fn fetch_state(&mut self, game_id: &str) -> Result<GameSnapshot, ApiError> {
        let resp = self
            .client
            .get(format!("{}/api/game/{}", self.base_url, game_id))
            .send()
            .await
            .map_err(map_transport)?;
        Self::decode(resp).await
    }

    async fn delete_game(&mut self, game_id: &str) -> Result<(), ApiError> {
        let resp = self
            .client
            .delete(format!("{}/api/game/{}", self.base_url, game_id))
            .send()
            .await
            .map_err(map_transport)?;
        let _: DeleteResponse = Self::decode(resp).await?;
        Ok(())
    }

    async fn list_games(&mut self) -> Result<GamesResponse, ApiError> {
        let resp = self
            .client
            .get(format!("{}/api/games", self.base_url))
            .send()
            .await
            .map_err(map_transport)?;
        Self::decode(resp).await
    }
}
