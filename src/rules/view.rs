//! Read-only snapshots for rendering.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Player, PlayerId};

/// One seat as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub hand: Vec<Card>,
    pub round_score: u32,
    pub banked_score: u32,
    pub is_active: bool,
    pub has_second_chance: bool,
}

impl PlayerView {
    #[must_use]
    pub fn of(player: &Player) -> Self {
        Self {
            id: player.id(),
            hand: player.hand().to_vec(),
            round_score: player.round_score(),
            banked_score: player.banked_score(),
            is_active: player.is_active(),
            has_second_chance: player.has_second_chance(),
        }
    }
}

/// The whole table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub players: Vec<PlayerView>,
    pub current_player: PlayerId,
    pub round: u32,
    pub deck_remaining: usize,
    pub is_game_over: bool,
    pub winner: Option<PlayerId>,
    /// True while a reveal or target choice is pending.
    pub is_suspended: bool,
}

impl TableView {
    /// Check whether draw and stop should be offered.
    #[must_use]
    pub fn accepts_player_action(&self) -> bool {
        !self.is_game_over
            && !self.is_suspended
            && self
                .players
                .get(self.current_player.index())
                .is_some_and(|p| p.is_active)
    }
}
