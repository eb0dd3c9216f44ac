//! Admin invitation management (`/admin/invitations/*`).

use aaaj_core::models::Invitation;
use aaaj_core::types::UserId;
use serde::Serialize;
use validator::Validate;

use crate::client::{ApiClient, StatusResponse};
use crate::error::ApiError;

#[derive(Debug, Serialize, Validate)]
struct CreateInvitation {
    #[validate(email)]
    email: String,
}

impl ApiClient {
    /// POST /admin/invitations
    pub async fn create_invitation(&self, email: &str) -> Result<Invitation, ApiError> {
        let payload = CreateInvitation {
            email: email.to_string(),
        };
        payload.validate()?;
        let invitation: Invitation = self.post_json("/admin/invitations", &payload).await?;
        tracing::info!(invitation_id = %invitation.id, "invitation created");
        Ok(invitation)
    }

    /// GET /admin/invitations
    pub async fn list_invitations(&self) -> Result<Vec<Invitation>, ApiError> {
        self.get_list("/admin/invitations").await
    }

    /// DELETE /admin/invitations/{id}
    pub async fn delete_invitation(&self, id: UserId) -> Result<StatusResponse, ApiError> {
        self.delete_json(&format!("/admin/invitations/{id}")).await
    }

    /// POST /admin/invitations/{id}/resend
    pub async fn resend_invitation(&self, id: UserId) -> Result<StatusResponse, ApiError> {
        self.post_json(
            &format!("/admin/invitations/{id}/resend"),
            &serde_json::json!({}),
        )
        .await
    }
}
