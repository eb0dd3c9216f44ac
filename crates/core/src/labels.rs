//! Well-known domain enums and their French display labels.
//!
//! Wire values are the lowercase identifiers the backend stores; the
//! `label()` accessors return the strings shown on the public site.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Member roles
// ---------------------------------------------------------------------------

/// Role of an association member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Member,
    Honorific,
    Admin,
    President,
    Treasurer,
    Secretary,
}

impl MemberRole {
    /// Wire/storage value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Honorific => "honorific",
            Self::Admin => "admin",
            Self::President => "president",
            Self::Treasurer => "treasurer",
            Self::Secretary => "secretary",
        }
    }

    /// French display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Member => "Membre",
            Self::Honorific => "Membre d'honneur",
            Self::Admin => "Administrateur",
            Self::President => "Président(e)",
            Self::Treasurer => "Trésorier(ère)",
            Self::Secretary => "Secrétaire",
        }
    }
}

// ---------------------------------------------------------------------------
// Game categories
// ---------------------------------------------------------------------------

/// Audience/difficulty classification of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameCategory {
    Familial,
    Initie,
    Expert,
}

impl GameCategory {
    /// Every category, in display order (drives select options).
    pub const ALL: [GameCategory; 3] = [Self::Familial, Self::Initie, Self::Expert];

    /// Wire/storage value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Familial => "familial",
            Self::Initie => "initie",
            Self::Expert => "expert",
        }
    }

    /// Convert from a wire string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "familial" => Ok(Self::Familial),
            "initie" => Ok(Self::Initie),
            "expert" => Ok(Self::Expert),
            _ => Err(format!(
                "Invalid game category '{s}'. Must be one of: familial, initie, expert"
            )),
        }
    }

    /// French display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Familial => "Familial",
            Self::Initie => "Initié",
            Self::Expert => "Expert",
        }
    }

    /// One-line audience description shown next to the label.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Familial => "Accessible à tous",
            Self::Initie => "Pour joueurs expérimentés",
            Self::Expert => "Pour joueurs confirmés",
        }
    }
}

// ---------------------------------------------------------------------------
// Event types
// ---------------------------------------------------------------------------

/// Whether an event is organized by the association or externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Association,
    External,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Association => "association",
            Self::External => "external",
        }
    }

    /// French display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Association => "Événement de l'association",
            Self::External => "Événement externe",
        }
    }
}

// ---------------------------------------------------------------------------
// Event lifecycle status
// ---------------------------------------------------------------------------

/// Lifecycle status of an event relative to the current instant.
///
/// Never stored: always derived from the event's date range and `now`
/// (see [`crate::agenda::derive_event_status`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Past,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Past => "past",
        }
    }

    /// French display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Upcoming => "À venir",
            Self::Ongoing => "En cours",
            Self::Past => "Passé",
        }
    }

    /// Badge color used by the site for this status.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Upcoming => "blue",
            Self::Ongoing => "green",
            Self::Past => "gray",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
