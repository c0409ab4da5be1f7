//! Game configuration types.
//!
//! Games configure the engine at startup by providing:
//! - `DeckConfig`: Which cards make up a fresh deck
//! - `GameConfig`: Seats, winning score, forced draw count, reveal handling
//!
//! Both are plain serde structs. Missing fields fall back to the defaults
//! of the standard game, so a collaborator can load a partial JSON document.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Fewest seats a table supports.
pub const MIN_PLAYERS: usize = 2;

/// Most seats a table supports.
pub const MAX_PLAYERS: usize = 6;

/// Banked score that ends the game in the standard rules.
pub const DEFAULT_WIN_SCORE: u32 = 200;

/// Cards drawn by the target of an add-three effect.
pub const DEFAULT_FORCED_DRAWS: u8 = 3;

/// Highest standard value a deck may use.
pub const MAX_STANDARD_VALUE: u32 = 100;

/// Most cards a fresh deck may hold.
pub const MAX_DECK_CARDS: usize = 10_000;

/// Composition of a fresh deck.
///
/// The standard deck holds one 0, then `i` copies of every value `i` in
/// `1..=max_standard_value` (a triangular distribution), `specials_per_kind`
/// copies of each special card, one add card per entry of `add_values` and
/// `mult_cards` ×2 cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Number of standard 0 cards.
    pub zero_cards: u32,
    /// Highest standard value. Value `i` appears `i` times.
    pub max_standard_value: u32,
    /// Copies of each special kind.
    pub specials_per_kind: u32,
    /// One add card per listed value.
    pub add_values: Vec<u32>,
    /// Number of ×2 cards.
    pub mult_cards: u32,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            zero_cards: 1,
            max_standard_value: 11,
            specials_per_kind: 2,
            add_values: vec![2, 4, 6, 8, 10],
            mult_cards: 3,
        }
    }
}

impl DeckConfig {
    /// Total number of cards in a fresh deck.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let n = self.max_standard_value as usize;
        self.zero_cards as usize
            + n * (n + 1) / 2
            + 3 * self.specials_per_kind as usize
            + self.add_values.len()
            + self.mult_cards as usize
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use flip_engine::core::GameConfig;
///
/// let config = GameConfig::new().player_count(4).win_score(100);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.deck.total_cards(), 81);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of seats.
    pub player_count: usize,

    /// Banked score at which the game ends.
    pub win_score: u32,

    /// Cards drawn by the target of an add-three effect.
    pub forced_draw_count: u8,

    /// Whether each revealed card waits for an acknowledgement.
    ///
    /// When false the reveal is acknowledged immediately, which suits
    /// headless drivers.
    pub acknowledge_reveals: bool,

    /// Composition of every deck the engine builds.
    pub deck: DeckConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            win_score: DEFAULT_WIN_SCORE,
            forced_draw_count: DEFAULT_FORCED_DRAWS,
            acknowledge_reveals: true,
            deck: DeckConfig::default(),
        }
    }
}

impl GameConfig {
    /// Standard rules for two players.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn win_score(mut self, score: u32) -> Self {
        self.win_score = score;
        self
    }

    #[must_use]
    pub fn forced_draw_count(mut self, count: u8) -> Self {
        self.forced_draw_count = count;
        self
    }

    #[must_use]
    pub fn acknowledge_reveals(mut self, acknowledge: bool) -> Self {
        self.acknowledge_reveals = acknowledge;
        self
    }

    #[must_use]
    pub fn with_deck(mut self, deck: DeckConfig) -> Self {
        self.deck = deck;
        self
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        if self.forced_draw_count == 0 {
            return Err(ConfigError::ZeroForcedDraws);
        }
        // Checked before counting so the triangular sum cannot overflow
        if self.deck.max_standard_value > MAX_STANDARD_VALUE {
            return Err(ConfigError::StandardValueTooHigh(self.deck.max_standard_value));
        }
        match self.deck.total_cards() {
            0 => Err(ConfigError::EmptyDeck),
            n if n > MAX_DECK_CARDS => Err(ConfigError::DeckTooLarge(n)),
            _ => Ok(()),
        }
    }
}
