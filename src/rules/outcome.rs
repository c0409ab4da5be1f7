//! Game-over detection and final standings.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerMap};

/// One row of the final score table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub banked_score: u32,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Highest banked score; the lowest seat wins a tie.
    pub winner: PlayerId,
    pub winning_score: u32,
    /// Every seat, best first.
    pub standings: Vec<Standing>,
}

impl GameOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Banked scores ordered best first.
///
/// The sort is stable, so tied players stay in seat order.
#[must_use]
pub fn standings(players: &PlayerMap<Player>) -> Vec<Standing> {
    let mut rows: Vec<Standing> = players
        .values()
        .map(|p| Standing {
            player: p.id(),
            banked_score: p.banked_score(),
        })
        .collect();
    rows.sort_by(|a, b| b.banked_score.cmp(&a.banked_score));
    rows
}

/// The outcome, if anyone has banked at least `win_score`.
#[must_use]
pub fn decide(players: &PlayerMap<Player>, win_score: u32) -> Option<GameOutcome> {
    if !players.values().any(|p| p.banked_score() >= win_score) {
        return None;
    }

    let standings = standings(players);
    let best = *standings.first()?;
    Some(GameOutcome {
        winner: best.player,
        winning_score: best.banked_score,
        standings,
    })
}
