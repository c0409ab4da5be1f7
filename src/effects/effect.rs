//! Effects that need a target.
//!
//! Of the three special cards only freeze and add three act on a chosen
//! player. Second chance is a passive flag handled by
//! [`Player::receive`](crate::core::Player::receive).

use serde::{Deserialize, Serialize};

use crate::cards::{Card, SpecialKind};

/// A targeted effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// End the target's round with their score banked.
    Freeze,
    /// The target draws a fixed number of extra cards.
    AddThree,
}

impl Effect {
    /// The targeted effect a drawn card triggers, if any.
    #[must_use]
    pub fn from_card(card: &Card) -> Option<Self> {
        match card.special_kind()? {
            SpecialKind::Freeze => Some(Effect::Freeze),
            SpecialKind::AddThree => Some(Effect::AddThree),
            SpecialKind::SecondChance => None,
        }
    }

    /// The card kind that carries this effect.
    #[must_use]
    pub fn kind(&self) -> SpecialKind {
        match self {
            Effect::Freeze => SpecialKind::Freeze,
            Effect::AddThree => SpecialKind::AddThree,
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}
