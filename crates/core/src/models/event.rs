//! Event records for the agenda pages.
//!
//! An event's lifecycle status (upcoming/ongoing/past) is never part of the
//! record: it is derived from the date range and the current instant by
//! [`crate::agenda::derive_event_status`], so a record close to a boundary
//! can legitimately change status between two evaluations.

use serde::{Deserialize, Serialize};

use crate::labels::EventType;
use crate::models::author::Author;
use crate::types::{DbId, Timestamp};

/// An event (playtesting session, festival, convention...) on the agenda.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub start_date: Timestamp,
    /// Absent for single-instant events; the start date then also closes
    /// the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
    pub location: String,
    pub region: String,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub is_free: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<Author>,
}
