//! Public contact form (`/contact`).

use aaaj_core::models::ContactMessage;
use validator::Validate;

use crate::client::{ApiClient, StatusResponse};
use crate::error::ApiError;

impl ApiClient {
    /// POST /contact
    ///
    /// Validation rejects bot submissions (filled honeypot) before any
    /// request is sent.
    pub async fn submit_contact(&self, message: &ContactMessage) -> Result<StatusResponse, ApiError> {
        message.validate()?;
        message.validate_honeypot()?;
        self.post_json("/contact", message).await
    }
}
