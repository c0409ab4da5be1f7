//! Effect targeting.
//!
//! Freeze and add three may target any active player, the drawer
//! included. When only one player is eligible no choice is offered.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Player, PlayerId, PlayerMap};

/// One eligible target as presented to the chooser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetOption {
    /// The eligible player.
    pub player: PlayerId,
    /// Cards they hold this round.
    pub hand: Vec<Card>,
    /// Their current round score.
    pub round_score: u32,
}

impl TargetOption {
    #[must_use]
    pub fn of(player: &Player) -> Self {
        Self {
            player: player.id(),
            hand: player.hand().to_vec(),
            round_score: player.round_score(),
        }
    }

    /// Comma separated hand, or "no cards yet".
    #[must_use]
    pub fn hand_summary(&self) -> String {
        if self.hand.is_empty() {
            return "no cards yet".to_string();
        }
        self.hand
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// How a target will be selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetSelection {
    /// Exactly one player is eligible; no prompt.
    Implicit(PlayerId),
    /// The drawer must pick one of these.
    Choose(Vec<TargetOption>),
}

/// Check if a player may receive a targeted effect.
#[must_use]
pub fn is_eligible(player: &Player) -> bool {
    player.is_active()
}

/// All eligible players, in seat order.
#[must_use]
pub fn eligible_targets(players: &PlayerMap<Player>) -> Vec<TargetOption> {
    players
        .values()
        .filter(|p| is_eligible(p))
        .map(TargetOption::of)
        .collect()
}

/// Decide whether the drawer has a choice to make.
///
/// Falls back to the drawer when nobody is eligible.
#[must_use]
pub fn select_targets(players: &PlayerMap<Player>, drawer: PlayerId) -> TargetSelection {
    let mut options = eligible_targets(players);
    match options.len() {
        0 => TargetSelection::Implicit(drawer),
        1 => TargetSelection::Implicit(options.remove(0).player),
        _ => TargetSelection::Choose(options),
    }
}
