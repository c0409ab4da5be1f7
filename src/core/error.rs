//! Error types.
//!
//! Rejections are never fatal: an `Err` from the engine means the request
//! was ignored and the game state is exactly as it was before the call.

use thiserror::Error;

use super::action::Action;
use super::player::PlayerId;

/// A configuration that cannot produce a playable game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be between 2 and 6, got {0}")]
    PlayerCount(usize),

    #[error("win score must be positive")]
    ZeroWinScore,

    #[error("add three must force at least one draw")]
    ZeroForcedDraws,

    #[error("deck composition contains no cards")]
    EmptyDeck,

    #[error("highest standard value must be at most 100, got {0}")]
    StandardValueTooHigh(u32),

    #[error("deck composition holds {0} cards, more than 10000")]
    DeckTooLarge(usize),
}

/// A rejected engine request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("the game is over")]
    GameOver,

    #[error("{action} is not accepted while {phase}")]
    UnexpectedAction { action: Action, phase: &'static str },

    /// The turn sits on a seat that left the round. Turn rotation only
    /// lands on active seats, so this guards a broken invariant.
    #[error("{0} has already finished this round")]
    PlayerInactive(PlayerId),

    #[error("{0} is not an eligible target")]
    IneligibleTarget(PlayerId),

    /// The engine could not be built from the given configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
