//! Authentication endpoints (`/auth/*`).

use aaaj_core::models::{
    AuthResponse, InvitationVerification, LoginCredentials, RegisterData, ResetPasswordConfirm,
    ResetPasswordRequest,
};
use validator::Validate;

use crate::client::{ApiClient, StatusResponse};
use crate::error::ApiError;

impl ApiClient {
    /// POST /auth/login
    ///
    /// On success the returned token is stored and attached to every
    /// subsequent request.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        credentials.validate()?;
        let response: AuthResponse = self.post_json("/auth/login", credentials).await?;
        self.set_token(response.token.clone());
        tracing::info!(user_id = %response.user.id, "logged in");
        Ok(response)
    }

    /// POST /auth/register
    ///
    /// Registration requires a valid invitation token issued by an admin.
    pub async fn register(&self, data: &RegisterData) -> Result<AuthResponse, ApiError> {
        data.validate()?;
        let response: AuthResponse = self.post_json("/auth/register", data).await?;
        self.set_token(response.token.clone());
        tracing::info!(user_id = %response.user.id, "account registered");
        Ok(response)
    }

    /// Drop the stored session token. The backend keeps no session state,
    /// so logout is purely client-side.
    pub fn logout(&self) {
        self.clear_token();
    }

    /// POST /auth/reset-password
    pub async fn request_password_reset(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<StatusResponse, ApiError> {
        request.validate()?;
        self.post_json("/auth/reset-password", request).await
    }

    /// POST /auth/reset-password/confirm
    pub async fn confirm_password_reset(
        &self,
        confirm: &ResetPasswordConfirm,
    ) -> Result<StatusResponse, ApiError> {
        confirm.validate()?;
        self.post_json("/auth/reset-password/confirm", confirm).await
    }

    /// GET /auth/invitation/verify/{token}
    ///
    /// Checks an invitation token before showing the registration form.
    pub async fn verify_invitation(
        &self,
        token: &str,
    ) -> Result<InvitationVerification, ApiError> {
        self.get_json(&format!("/auth/invitation/verify/{token}"))
            .await
    }
}
