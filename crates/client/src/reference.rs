//! Reference-data endpoints backing the filter selects.

use aaaj_core::models::{Category, Mechanic};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// GET /mechanics
    pub async fn list_mechanics(&self) -> Result<Vec<Mechanic>, ApiError> {
        self.get_list("/mechanics").await
    }

    /// GET /categories
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_list("/categories").await
    }
}
