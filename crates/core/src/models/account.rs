//! User accounts, authentication payloads, invitations, and the contact form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp, UserId};

/// Access level of a logged-in account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Member,
    Admin,
}

/// A logged-in member account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    /// Public author profile linked to this account, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// Response of `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remember_me: Option<bool>,
}

/// Registration payload; an invitation token from an admin is required.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1))]
    pub invitation_token: String,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordConfirm {
    #[validate(length(min = 1))]
    pub token: String,
    #[validate(length(min = 8))]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordData {
    #[validate(length(min = 1))]
    pub current_password: String,
    #[validate(length(min = 8))]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileData {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

/// A pending member invitation (admin-managed).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: UserId,
    pub email: String,
    pub token: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_at: Option<Timestamp>,
    pub created_by: UserId,
}

/// Response of `GET /auth/invitation/verify/{token}`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvitationVerification {
    pub valid: bool,
    pub email: String,
    pub expires_at: Timestamp,
    #[serde(default)]
    pub author_id: Option<DbId>,
    #[serde(default)]
    pub author_firstname: Option<String>,
    #[serde(default)]
    pub author_lastname: Option<String>,
}

/// Contact form payload. The honeypot field must stay empty; bots filling
/// it are rejected before the message reaches the backend.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 200))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honeypot: Option<String>,
}

impl ContactMessage {
    /// Anti-spam check the derive cannot express: a filled honeypot means
    /// the form was submitted by a bot.
    pub fn validate_honeypot(&self) -> Result<(), CoreError> {
        match self.honeypot.as_deref() {
            None | Some("") => Ok(()),
            Some(_) => Err(CoreError::Validation(
                "Honeypot field must be empty".into(),
            )),
        }
    }
}
