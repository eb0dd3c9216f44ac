//! Logged-in account endpoints (`/account/*`).

use aaaj_core::models::{ChangePasswordData, UpdateProfileData, User};
use validator::Validate;

use crate::client::{ApiClient, StatusResponse};
use crate::error::ApiError;

impl ApiClient {
    /// PATCH /account/profile
    pub async fn update_profile(&self, data: &UpdateProfileData) -> Result<User, ApiError> {
        data.validate()?;
        self.patch_json("/account/profile", data).await
    }

    /// POST /account/change-password
    pub async fn change_password(
        &self,
        data: &ChangePasswordData,
    ) -> Result<StatusResponse, ApiError> {
        data.validate()?;
        self.post_json("/account/change-password", data).await
    }
}
