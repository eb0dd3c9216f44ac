//! Typed async client for the AAAJ backend REST API.
//!
//! [`ApiClient`] is constructed explicitly from a [`ClientConfig`] and
//! passed down to whoever needs it; there is no global instance. One
//! pooled HTTP connection set is shared across all endpoint calls, and
//! the bearer token captured at login is attached to every subsequent
//! request until [`ApiClient::clear_token`] (or a 401) drops it.

pub mod account;
pub mod auth;
pub mod authors;
pub mod client;
pub mod config;
pub mod contact;
pub mod error;
pub mod games;
pub mod invitations;
pub mod reference;
pub mod uploads;

pub use client::{ApiClient, StatusResponse};
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use uploads::{UploadKind, UploadResult};
