//! Core domain logic for the AAAJ board-game authors association platform.
//!
//! Everything in this crate is pure computation: record types matching the
//! backend wire format, the catalogue and agenda filter engines, slug
//! generation, and the image normalization pipeline that prepares uploads
//! client-side. No I/O happens here; the HTTP layer lives in `aaaj-client`.

pub mod agenda;
pub mod error;
pub mod filtering;
pub mod labels;
pub mod media;
pub mod models;
pub mod slug;
pub mod types;
