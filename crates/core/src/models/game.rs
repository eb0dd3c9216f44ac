//! Game (prototype) records, reference lists, and the create/update payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::labels::GameCategory;
use crate::models::author::Author;
use crate::types::{DbId, Timestamp, UserId};

/// Development status of a prototype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Prototype,
    Playtesting,
    Published,
}

/// A board-game prototype listed on the public site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: DbId,
    pub name: String,
    /// Authors embedded by the backend on read.
    #[serde(default)]
    pub authors: Vec<Author>,
    pub description: String,
    pub min_players: i32,
    pub max_players: i32,
    /// Play time in minutes.
    pub duration: i32,
    pub image_url: String,
    pub category: GameCategory,
    /// Mechanic names attached to the record.
    #[serde(default)]
    pub mechanics: Vec<String>,

    /// Gallery image URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_rules_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GameStatus>,

    /// Account that created the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Create/update payload for a game.
///
/// Authors and mechanics are referenced by id; the backend resolves and
/// embeds the full records on read.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 1))]
    pub min_players: i32,
    #[validate(range(min = 1))]
    pub max_players: i32,
    #[validate(range(min = 1))]
    pub duration: i32,
    pub image_url: String,
    pub category: GameCategory,
    pub author_ids: Vec<DbId>,
    pub mechanic_ids: Vec<DbId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub rules_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub video_rules_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GameStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,
}

impl GameInput {
    /// Cross-field checks the derive cannot express: player span ordering.
    pub fn validate_ranges(&self) -> Result<(), CoreError> {
        if self.max_players < self.min_players {
            return Err(CoreError::Validation(format!(
                "Player range is inverted: {}-{}",
                self.min_players, self.max_players
            )));
        }
        Ok(())
    }
}

/// A gameplay mechanic reference (e.g. "Draft", "Bluff").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mechanic {
    pub id: DbId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// A category reference row from `/categories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn sample_input() -> GameInput {
        GameInput {
            name: "Les Explorateurs".to_string(),
            description: "Un jeu d'exploration et de collection".to_string(),
            min_players: 2,
            max_players: 4,
            duration: 45,
            image_url: "https://cdn.example.org/games/explorateurs.jpg".to_string(),
            category: GameCategory::Familial,
            author_ids: vec![3],
            mechanic_ids: vec![5, 9],
            images: None,
            rules_url: None,
            video_rules_url: None,
            contact_email: None,
            full_description: None,
            published_date: None,
            status: Some(GameStatus::Playtesting),
            is_draft: Some(false),
        }
    }

    #[test]
    fn game_deserializes_from_backend_json() {
        let json = r#"{
            "id": 12,
            "name": "Les Explorateurs",
            "description": "Un jeu d'exploration",
            "minPlayers": 2,
            "maxPlayers": 4,
            "duration": 45,
            "imageUrl": "https://cdn.example.org/games/explorateurs.jpg",
            "category": "familial",
            "mechanics": ["Draft", "Collection"]
        }"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.id, 12);
        assert_eq!(game.category, GameCategory::Familial);
        assert_eq!(game.mechanics, vec!["Draft", "Collection"]);
        assert!(game.authors.is_empty());
        assert!(game.status.is_none());
    }

    #[test]
    fn input_serializes_ids_in_camel_case() {
        let value = serde_json::to_value(sample_input()).unwrap();
        assert_eq!(value["mechanicIds"], serde_json::json!([5, 9]));
        assert_eq!(value["authorIds"], serde_json::json!([3]));
        assert_eq!(value["minPlayers"], 2);
        // Unset optionals are omitted from the payload.
        assert!(value.get("rulesUrl").is_none());
    }

    #[test]
    fn input_validation_catches_empty_name() {
        let mut input = sample_input();
        input.name.clear();
        assert!(validator::Validate::validate(&input).is_err());
    }

    #[test]
    fn inverted_player_range_is_rejected() {
        let mut input = sample_input();
        input.min_players = 5;
        input.max_players = 2;
        assert_matches!(input.validate_ranges(), Err(CoreError::Validation(_)));
    }
}
