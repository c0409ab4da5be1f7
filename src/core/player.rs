//! Player identification and per-seat round state.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Indices are 0-based; `Display` shows the
//! 1-based seat number players see ("Player 1").
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! The cards drawn this round, the round flags and the banked total.
//! [`Player::finish_round`] is the only way a player leaves a round.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::cards::{Card, CardCategory, SpecialKind, MULT_FACTOR};

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seats of a table with `player_count` players, in turn order.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(|seat| PlayerId(seat as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 as u16 + 1)
    }
}

/// One value per seat, indexed by `PlayerId`.
///
/// ```
/// use flip_engine::core::{PlayerId, PlayerMap};
///
/// let mut totals: PlayerMap<u32> = PlayerMap::with_value(3, 0);
/// totals[PlayerId::new(1)] += 12;
/// assert_eq!(totals[PlayerId::new(1)], 12);
/// assert_eq!(totals.player_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build one entry per seat.
    ///
    /// Seat counts are checked by `GameConfig::validate`; this only guards
    /// against a table that cannot be indexed at all.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(
            (1..=u8::MAX as usize).contains(&player_count),
            "table needs between 1 and 255 seats, got {player_count}"
        );

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Every seat starts with a clone of `value`.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's entry, or `None` for an unknown seat.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Seats with their entries, in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.data.len()).zip(self.data.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all(self.data.len()).zip(self.data.iter_mut())
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// What happened when a card was handed to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reception {
    /// The card joined the hand.
    Added,
    /// A second-chance card joined the hand and armed the flag.
    SecondChanceGained,
    /// The card duplicated the hand; second chance absorbed it.
    Dodged,
    /// The card duplicated the hand and the round is lost.
    Busted {
        /// Round score that was discarded.
        forfeited: u32,
    },
}

/// Cards held during a round. Rounds rarely run past eight cards.
pub type Hand = SmallVec<[Card; 8]>;

/// Per-seat state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    hand: Hand,
    has_second_chance: bool,
    is_active: bool,
    banked_score: u32,
}

impl Player {
    /// A seated player, active, with nothing banked.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: SmallVec::new(),
            has_second_chance: false,
            is_active: true,
            banked_score: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Cards drawn this round, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn has_second_chance(&self) -> bool {
        self.has_second_chance
    }

    /// False once the player has stopped, busted or been frozen this round.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub fn banked_score(&self) -> u32 {
        self.banked_score
    }

    /// Sum of standard and add values, doubled once if any mult is held.
    #[must_use]
    pub fn round_score(&self) -> u32 {
        let sum: u32 = self.hand.iter().map(Card::points).sum();
        if self.hand.iter().any(|c| c.category() == CardCategory::Mult) {
            sum * MULT_FACTOR
        } else {
            sum
        }
    }

    /// Check if drawing `card` would collide with the hand.
    #[must_use]
    pub fn would_duplicate(&self, card: &Card) -> bool {
        self.hand.iter().any(|held| card.duplicates(held))
    }

    /// Hand a drawn card to this player and apply the duplicate rule.
    ///
    /// A duplicate consumes second chance if armed (the card is discarded),
    /// otherwise the round ends unbanked.
    pub fn receive(&mut self, card: Card) -> Reception {
        if self.would_duplicate(&card) {
            if self.has_second_chance {
                self.has_second_chance = false;
                return Reception::Dodged;
            }
            let forfeited = self.round_score();
            self.finish_round(false);
            return Reception::Busted { forfeited };
        }

        self.hand.push(card);
        if card.is_kind(SpecialKind::SecondChance) {
            self.has_second_chance = true;
            Reception::SecondChanceGained
        } else {
            Reception::Added
        }
    }

    /// Put a card in the hand without any rule checks.
    pub(crate) fn hold(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// End this player's round, optionally banking the round score.
    ///
    /// Returns the amount banked.
    pub fn finish_round(&mut self, bank: bool) -> u32 {
        let gained = if bank { self.round_score() } else { 0 };
        self.banked_score += gained;
        self.hand.clear();
        self.has_second_chance = false;
        self.is_active = false;
        gained
    }

    /// Clear the round and seat the player again. Banked score is kept.
    pub fn start_round(&mut self) {
        self.hand.clear();
        self.has_second_chance = false;
        self.is_active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with(cards: &[Card]) -> Player {
        let mut player = Player::new(PlayerId::new(0));
        for &card in cards {
            player.hold(card);
        }
        player
    }

    #[test]
    fn test_seat_display_is_one_based() {
        assert_eq!(PlayerId::new(0).to_string(), "Player 1");
        assert_eq!(PlayerId::new(5).to_string(), "Player 6");
        assert_eq!(PlayerId::new(5).index(), 5);
    }

    #[test]
    fn test_seats_in_turn_order() {
        let seats: Vec<u8> = PlayerId::all(6).map(|p| p.0).collect();
        assert_eq!(seats, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_player_map_new_and_iter() {
        let map: PlayerMap<u32> = PlayerMap::new(3, |p| p.index() as u32 * 10);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![
            (PlayerId::new(0), &0),
            (PlayerId::new(1), &10),
            (PlayerId::new(2), &20),
        ]);
        assert_eq!(map.get(PlayerId::new(3)), None);
    }

    #[test]
    #[should_panic(expected = "table needs between 1 and 255 seats")]
    fn test_player_map_rejects_empty_table() {
        let _: PlayerMap<u32> = PlayerMap::with_value(0, 0);
    }

    #[test]
    fn test_round_score_empty() {
        assert_eq!(player_with(&[]).round_score(), 0);
    }

    #[test]
    fn test_round_score_sums_and_doubles_once() {
        let plain = player_with(&[Card::standard(5), Card::add(4)]);
        assert_eq!(plain.round_score(), 9);

        let doubled = player_with(&[Card::standard(5), Card::add(4), Card::mult()]);
        assert_eq!(doubled.round_score(), 18);

        let not_stacked = player_with(&[Card::standard(5), Card::mult(), Card::mult()]);
        assert_eq!(not_stacked.round_score(), 10);

        let specials = player_with(&[
            Card::standard(3),
            Card::special(SpecialKind::Freeze),
            Card::special(SpecialKind::SecondChance),
        ]);
        assert_eq!(specials.round_score(), 3);
    }

    #[test]
    fn test_receive_adds_in_order() {
        let mut player = Player::new(PlayerId::new(0));
        assert_eq!(player.receive(Card::standard(5)), Reception::Added);
        assert_eq!(player.receive(Card::add(4)), Reception::Added);
        assert_eq!(player.receive(Card::add(4)), Reception::Added);
        assert_eq!(player.hand(), &[Card::standard(5), Card::add(4), Card::add(4)]);
    }

    #[test]
    fn test_receive_duplicate_busts() {
        let mut player = Player::new(PlayerId::new(0));
        player.receive(Card::standard(7));
        player.receive(Card::add(2));

        assert_eq!(player.receive(Card::standard(7)), Reception::Busted { forfeited: 9 });
        assert!(!player.is_active());
        assert!(player.hand().is_empty());
        assert_eq!(player.banked_score(), 0);
    }

    #[test]
    fn test_second_chance_used_once() {
        let mut player = Player::new(PlayerId::new(0));
        player.receive(Card::standard(7));
        assert_eq!(
            player.receive(Card::special(SpecialKind::SecondChance)),
            Reception::SecondChanceGained
        );
        assert!(player.has_second_chance());

        assert_eq!(player.receive(Card::standard(7)), Reception::Dodged);
        assert!(!player.has_second_chance());
        assert!(player.is_active());
        // The dodged card is discarded
        assert_eq!(player.hand().iter().filter(|c| **c == Card::standard(7)).count(), 1);

        assert!(matches!(player.receive(Card::standard(7)), Reception::Busted { .. }));
        assert!(!player.is_active());
    }

    #[test]
    fn test_finish_round_bank() {
        let mut player = player_with(&[Card::standard(5), Card::add(4), Card::mult()]);
        assert_eq!(player.finish_round(true), 18);
        assert_eq!(player.banked_score(), 18);
        assert!(player.hand().is_empty());
        assert!(!player.is_active());
        assert!(!player.has_second_chance());
    }

    #[test]
    fn test_start_round_keeps_bank() {
        let mut player = player_with(&[Card::standard(6)]);
        player.finish_round(true);
        player.start_round();

        assert!(player.is_active());
        assert!(player.hand().is_empty());
        assert_eq!(player.banked_score(), 6);
    }
}
