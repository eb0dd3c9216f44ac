//! Game (prototype) endpoints (`/games/*`).

use aaaj_core::models::{Game, GameInput};
use aaaj_core::types::DbId;
use validator::Validate;

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// GET /games
    pub async fn list_games(&self) -> Result<Vec<Game>, ApiError> {
        self.get_list("/games").await
    }

    /// GET /games/{id}
    pub async fn get_game(&self, id: DbId) -> Result<Game, ApiError> {
        self.get_json(&format!("/games/{id}")).await
    }

    /// GET /games/my-games — the logged-in member's own prototypes,
    /// drafts included.
    pub async fn my_games(&self) -> Result<Vec<Game>, ApiError> {
        self.get_json("/games/my-games").await
    }

    /// POST /games
    pub async fn create_game(&self, input: &GameInput) -> Result<Game, ApiError> {
        input.validate()?;
        input.validate_ranges()?;
        let game: Game = self.post_json("/games", input).await?;
        tracing::info!(game_id = game.id, "game created");
        Ok(game)
    }

    /// PUT /games/{id}
    pub async fn update_game(&self, id: DbId, input: &GameInput) -> Result<Game, ApiError> {
        input.validate()?;
        input.validate_ranges()?;
        self.put_json(&format!("/games/{id}"), input).await
    }

    /// DELETE /games/{id}
    pub async fn delete_game(&self, id: DbId) -> Result<(), ApiError> {
        self.delete_empty(&format!("/games/{id}")).await
    }
}
