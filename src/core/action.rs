//! Requests a collaborator can make of the engine.
//!
//! `Draw` and `Stop` are player actions. `Acknowledge` and `ChooseTarget`
//! answer a suspension: a revealed card waiting to be seen, or an effect
//! waiting for its target.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// An engine request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw the top card.
    Draw,
    /// Bank the round score and leave the round.
    Stop,
    /// Continue past a revealed card.
    Acknowledge,
    /// Pick the recipient of a pending effect.
    ChooseTarget(PlayerId),
}

impl Action {
    /// Check if this is a turn action rather than an answer to a prompt.
    #[must_use]
    pub fn is_player_action(&self) -> bool {
        matches!(self, Action::Draw | Action::Stop)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Draw => f.write_str("draw"),
            Action::Stop => f.write_str("stop"),
            Action::Acknowledge => f.write_str("acknowledge"),
            Action::ChooseTarget(p) => write!(f, "target {p}"),
        }
    }
}

/// An accepted request with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player whose turn it was.
    pub player: PlayerId,

    /// The request.
    pub action: Action,

    /// Round number when the request was accepted.
    pub round: u32,

    /// Position in the game's history (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}
