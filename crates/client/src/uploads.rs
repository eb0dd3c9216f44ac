//! Image upload endpoints (`/upload/*`).
//!
//! Callers normalize the file first with [`aaaj_core::media::prepare_image`]
//! (or [`aaaj_core::media::prepare_avatar`]) so only bounded, re-encoded
//! bytes travel over the wire.

use aaaj_core::media::PreparedImage;
use reqwest::{multipart, Method};
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Which upload endpoint a file is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Author,
    Game,
}

impl UploadKind {
    fn endpoint(&self) -> &'static str {
        match self {
            Self::Author => "/upload/author",
            Self::Game => "/upload/game",
        }
    }
}

/// Stored-file descriptor returned by the upload endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub url: String,
    pub public_id: String,
    pub secure_url: String,
    pub format: String,
    pub width: u32,
    pub height: u32,
}

/// Upload responses wrap the descriptor; unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    data: UploadResult,
}

impl ApiClient {
    /// POST the prepared bytes as `multipart/form-data` to the endpoint
    /// for `kind`.
    pub async fn upload_image(
        &self,
        kind: UploadKind,
        image: &PreparedImage,
    ) -> Result<UploadResult, ApiError> {
        let filename = image
            .filename
            .clone()
            .unwrap_or_else(|| default_filename(&image.content_type));

        let part = multipart::Part::bytes(image.bytes.clone())
            .file_name(filename)
            .mime_str(&image.content_type)?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .request(Method::POST, kind.endpoint())
            .multipart(form)
            .send()
            .await?;
        let parsed: UploadResponse = self.parse(response).await?;

        tracing::info!(url = %parsed.data.url, "image uploaded");
        Ok(parsed.data)
    }

    /// Upload a member profile photo.
    pub async fn upload_author_image(
        &self,
        image: &PreparedImage,
    ) -> Result<UploadResult, ApiError> {
        self.upload_image(UploadKind::Author, image).await
    }

    /// Upload a game cover or gallery image.
    pub async fn upload_game_image(
        &self,
        image: &PreparedImage,
    ) -> Result<UploadResult, ApiError> {
        self.upload_image(UploadKind::Game, image).await
    }
}

/// Fallback filename when the prepared image carries none.
fn default_filename(content_type: &str) -> String {
    let name = match content_type {
        "image/png" => "image.png",
        "image/webp" => "image.webp",
        _ => "image.jpg",
    };
    name.to_string()
}
