//! Catalogue filter engine for the games listing page.
//!
//! Pure and synchronous: `(records, filters)` in, ordered subset out. The
//! UI re-runs this on every keystroke, so matching must stay allocation-light
//! and must never reorder the input (cards keep their position while the
//! user types).

use crate::labels::GameCategory;
use crate::models::Game;

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// Criteria for the games listing. All facets combine with AND; an empty
/// facet matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameFilters {
    /// Case-insensitive substring match against the game name.
    pub search: String,
    pub category: Option<GameCategory>,
    /// Every listed mechanic must be present on the record.
    pub mechanics: Vec<String>,
}

impl GameFilters {
    /// True when no facet constrains the result.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.category.is_none() && self.mechanics.is_empty()
    }

    /// Number of active facets, counting each selected mechanic separately.
    /// Drives the badge on the filter button.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.search.is_empty() {
            count += 1;
        }
        if self.category.is_some() {
            count += 1;
        }
        count + self.mechanics.len()
    }

    /// Whether a single record passes every facet.
    pub fn matches(&self, game: &Game) -> bool {
        let matches_search = self.search.is_empty()
            || game
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let matches_category = match self.category {
            Some(category) => game.category == category,
            None => true,
        };
        let matches_mechanics = self
            .mechanics
            .iter()
            .all(|wanted| game.mechanics.iter().any(|m| m == wanted));

        matches_search && matches_category && matches_mechanics
    }
}

/// Extended criteria from the filter drawer: the base facets plus player
/// and duration ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedGameFilters {
    pub base: GameFilters,
    pub min_players: i32,
    pub max_players: i32,
    /// Minutes.
    pub min_duration: i32,
    pub max_duration: i32,
}

impl Default for ExtendedGameFilters {
    fn default() -> Self {
        Self {
            base: GameFilters::default(),
            min_players: 1,
            max_players: 6,
            min_duration: 15,
            max_duration: 120,
        }
    }
}

impl ExtendedGameFilters {
    /// Base facets plus range checks: the game's player span must intersect
    /// the requested span, and its duration must fall inside the window.
    pub fn matches(&self, game: &Game) -> bool {
        self.base.matches(game)
            && game.min_players <= self.max_players
            && game.max_players >= self.min_players
            && game.duration >= self.min_duration
            && game.duration <= self.max_duration
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Filter the games listing. Order-preserving; an all-empty `filters`
/// returns every record.
pub fn filter_games<'a>(games: &'a [Game], filters: &GameFilters) -> Vec<&'a Game> {
    games.iter().filter(|game| filters.matches(game)).collect()
}

/// Filter with the drawer's extended criteria.
pub fn filter_games_extended<'a>(
    games: &'a [Game],
    filters: &ExtendedGameFilters,
) -> Vec<&'a Game> {
    games.iter().filter(|game| filters.matches(game)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
