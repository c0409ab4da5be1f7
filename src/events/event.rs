//! Game event types.
//!
//! Events record what happened, in the order the engine changed state.
//! Each one renders to a human-readable log line through `Display`.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::effects::Effect;

/// Something that happened during the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted {
        players: usize,
    },

    /// A card joined the drawer's hand.
    CardDrawn {
        player: PlayerId,
        card: Card,
        round_score: u32,
    },

    SecondChanceGained {
        player: PlayerId,
    },

    /// Second chance absorbed a duplicate.
    DuplicateDodged {
        player: PlayerId,
        card: Card,
    },

    /// A duplicate ended the player's round.
    Busted {
        player: PlayerId,
        card: Card,
        forfeited: u32,
    },

    /// A targeted effect card was drawn.
    EffectDrawn {
        player: PlayerId,
        effect: Effect,
    },

    Frozen {
        drawer: PlayerId,
        target: PlayerId,
        banked: u32,
        total: u32,
    },

    ForcedDrawsStarted {
        drawer: PlayerId,
        target: PlayerId,
        count: u8,
    },

    /// One forced card was revealed to the target.
    ForcedCardReceived {
        target: PlayerId,
        card: Card,
        index: u8,
        count: u8,
    },

    ForcedDrawsComplete {
        target: PlayerId,
        round_score: u32,
    },

    /// The player banked and left the round.
    Stopped {
        player: PlayerId,
        gained: u32,
        total: u32,
    },

    /// A fresh deck replaced the exhausted one.
    DeckReshuffled {
        during_effect: bool,
    },

    RoundStarted {
        round: u32,
    },

    GameOver {
        winner: PlayerId,
        score: u32,
    },
}

impl GameEvent {
    /// The player the event is mainly about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::CardDrawn { player, .. }
            | GameEvent::SecondChanceGained { player }
            | GameEvent::DuplicateDodged { player, .. }
            | GameEvent::Busted { player, .. }
            | GameEvent::EffectDrawn { player, .. }
            | GameEvent::Stopped { player, .. } => Some(*player),
            GameEvent::Frozen { target, .. }
            | GameEvent::ForcedDrawsStarted { target, .. }
            | GameEvent::ForcedCardReceived { target, .. }
            | GameEvent::ForcedDrawsComplete { target, .. } => Some(*target),
            GameEvent::GameOver { winner, .. } => Some(*winner),
            GameEvent::GameStarted { .. }
            | GameEvent::DeckReshuffled { .. }
            | GameEvent::RoundStarted { .. } => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted { players } => {
                write!(f, "Game started with {players} players!")
            }
            GameEvent::CardDrawn { player, card, round_score } => {
                write!(f, "{player} drew {card}. Round score: {round_score}")
            }
            GameEvent::SecondChanceGained { player } => {
                write!(f, "{player} has a SECOND CHANCE for this round!")
            }
            GameEvent::DuplicateDodged { player, card } => {
                write!(f, "{player} used their SECOND CHANCE on {card}! Duplicate dodged.")
            }
            GameEvent::Busted { player, card, forfeited } => {
                write!(
                    f,
                    "DUPLICATE {card}! {player} is out, losing {forfeited} points this round."
                )
            }
            GameEvent::EffectDrawn { player, effect } => {
                write!(f, "{player} drew {effect}!")
            }
            GameEvent::Frozen { drawer, target, banked, total } if drawer == target => {
                write!(f, "{drawer} froze themselves and banked {banked}. Total: {total}")
            }
            GameEvent::Frozen { target, banked, total, .. } => {
                write!(
                    f,
                    "FREEZE sent to {target}! Their round ends with {banked} banked. Total: {total}"
                )
            }
            GameEvent::ForcedDrawsStarted { drawer, target, count } if drawer == target => {
                write!(f, "{drawer} chose ADD THREE for themselves and draws {count} cards!")
            }
            GameEvent::ForcedDrawsStarted { drawer, target, count } => {
                write!(f, "{drawer} sent ADD THREE to {target}, who draws {count} cards!")
            }
            GameEvent::ForcedCardReceived { target, card, index, count } => {
                write!(f, "{target} received card {index}/{count}: {card}")
            }
            GameEvent::ForcedDrawsComplete { target, round_score } => {
                write!(f, "{target}'s round score is now {round_score}")
            }
            GameEvent::Stopped { player, gained, total } => {
                write!(f, "{player} ended their turn. Gained +{gained}. Total: {total}")
            }
            GameEvent::DeckReshuffled { during_effect: true } => {
                f.write_str("Deck exhausted mid-draw, reshuffled!")
            }
            GameEvent::DeckReshuffled { during_effect: false } => {
                f.write_str("Deck exhausted, reshuffled!")
            }
            GameEvent::RoundStarted { round } => write!(f, "Round {round} begins!"),
            GameEvent::GameOver { winner, score } => {
                write!(f, "{winner} wins with {score} points!")
            }
        }
    }
}
