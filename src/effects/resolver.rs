//! Effect resolution.
//!
//! The `EffectResolver` applies a targeted effect to the one player it is
//! handed. It never holds on to players between calls: the engine owns the
//! table and lends out the target for each step.
//!
//! Add three is resolved as an explicit sequence of steps tracked by a
//! [`ForcedDraw`] value. The engine draws each card (so it can reshuffle
//! and suspend for a reveal), then passes it here.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Player, PlayerId, Reception};

/// Progress through an add-three sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcedDraw {
    /// Who played the effect.
    pub drawer: PlayerId,
    /// Who draws the cards.
    pub target: PlayerId,
    /// Cards resolved so far.
    pub drawn: u8,
    /// Cards to draw in total.
    pub total: u8,
}

impl ForcedDraw {
    #[must_use]
    pub fn new(drawer: PlayerId, target: PlayerId, total: u8) -> Self {
        Self {
            drawer,
            target,
            drawn: 0,
            total,
        }
    }

    /// Check if every forced card has been resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.drawn >= self.total
    }

    /// 1-based position of the next card.
    #[must_use]
    pub fn next_index(&self) -> u8 {
        self.drawn + 1
    }
}

/// Result of resolving one forced card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForcedStep {
    /// The sequence continues.
    Continue(Reception),
    /// The target busted; remaining draws are abandoned.
    Bust { forfeited: u32 },
}

/// Applies effects to a target player.
pub struct EffectResolver;

impl EffectResolver {
    /// Freeze the target: their round ends and the score is banked.
    ///
    /// Returns the amount banked.
    pub fn freeze(target: &mut Player) -> u32 {
        target.finish_round(true)
    }

    /// Resolve one card of an add-three sequence against the target's hand.
    ///
    /// The card goes through the ordinary duplicate check, so an armed
    /// second chance still absorbs a duplicate. Special cards received
    /// this way are held without triggering.
    pub fn forced_card(progress: &mut ForcedDraw, target: &mut Player, card: Card) -> ForcedStep {
        debug_assert_eq!(progress.target, target.id());
        progress.drawn += 1;

        match target.receive(card) {
            Reception::Busted { forfeited } => {
                progress.drawn = progress.total;
                ForcedStep::Bust { forfeited }
            }
            other => ForcedStep::Continue(other),
        }
    }
}
