//! Engine state machine.
//!
//! ```text
//! AwaitingAction --draw--> Revealing --ack--> AwaitingAction (next player)
//!                                        \--> ChoosingTarget --choose--> ...
//!                                        \--> Revealing (forced draws) ...
//!                                        \--> GameOver
//! ```
//!
//! `Revealing` and `ChoosingTarget` are the suspension points: the engine
//! accepts nothing but the matching answer until they are resolved.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::effects::{Effect, ForcedDraw, TargetOption};

use super::outcome::GameOutcome;

/// Where the engine is in a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The current player may draw or stop.
    AwaitingAction,

    /// A drawn card is shown and waits for acknowledgement before it applies.
    Revealing {
        card: Card,
        /// Whose hand the card is going to.
        recipient: PlayerId,
        /// Set while an add-three sequence is running.
        forced: Option<ForcedDraw>,
    },

    /// A freeze or add three waits for the drawer to pick a target.
    ChoosingTarget {
        effect: Effect,
        drawer: PlayerId,
        options: Vec<TargetOption>,
    },

    /// Terminal.
    GameOver(GameOutcome),
}

impl Phase {
    /// Short name for messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Phase::AwaitingAction => "awaiting an action",
            Phase::Revealing { .. } => "revealing a card",
            Phase::ChoosingTarget { .. } => "choosing a target",
            Phase::GameOver(_) => "game over",
        }
    }

    /// Check if the engine is waiting on a collaborator answer.
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        matches!(self, Phase::Revealing { .. } | Phase::ChoosingTarget { .. })
    }
}

/// What the engine needs next.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    /// `player` may draw or stop.
    Action { player: PlayerId },

    /// Show `card` and call `acknowledge`.
    Reveal {
        recipient: PlayerId,
        card: Card,
        forced: Option<ForcedDraw>,
    },

    /// Call `choose_target` with one of `options`.
    ChooseTarget {
        drawer: PlayerId,
        effect: Effect,
        options: Vec<TargetOption>,
    },

    /// No further actions are accepted.
    GameOver { outcome: GameOutcome },
}

impl Prompt {
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, Prompt::GameOver { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suspension_points() {
        assert!(!Phase::AwaitingAction.is_suspended());
        assert!(Phase::Revealing {
            card: Card::standard(1),
            recipient: PlayerId::new(0),
            forced: None,
        }
        .is_suspended());
        assert!(Phase::ChoosingTarget {
            effect: Effect::Freeze,
            drawer: PlayerId::new(0),
            options: Vec::new(),
        }
        .is_suspended());
    }
}
