//! Author endpoints (`/authors/*`).

use aaaj_core::models::{Author, AuthorUpdate, Game};
use aaaj_core::types::DbId;
use validator::Validate;

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// GET /authors
    pub async fn list_authors(&self) -> Result<Vec<Author>, ApiError> {
        self.get_list("/authors").await
    }

    /// GET /authors/{id}
    pub async fn get_author(&self, id: DbId) -> Result<Author, ApiError> {
        self.get_json(&format!("/authors/{id}")).await
    }

    /// GET /authors/{id}/games
    pub async fn author_games(&self, id: DbId) -> Result<Vec<Game>, ApiError> {
        self.get_json(&format!("/authors/{id}/games")).await
    }

    /// PUT /authors/{id} — partial profile update; only the fields set on
    /// `update` are changed.
    pub async fn update_author(
        &self,
        id: DbId,
        update: &AuthorUpdate,
    ) -> Result<Author, ApiError> {
        update.validate()?;
        self.put_json(&format!("/authors/{id}"), update).await
    }
}
