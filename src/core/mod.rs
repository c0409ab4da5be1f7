//! Core engine types: players, RNG, configuration, actions, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use player::{Hand, Player, PlayerId, PlayerMap, Reception};
pub use rng::GameRng;
pub use config::{
    DeckConfig, GameConfig, DEFAULT_FORCED_DRAWS, DEFAULT_WIN_SCORE, MAX_DECK_CARDS, MAX_PLAYERS,
    MAX_STANDARD_VALUE, MIN_PLAYERS,
};
pub use action::{Action, ActionRecord};
pub use error::{ConfigError, EngineError};
