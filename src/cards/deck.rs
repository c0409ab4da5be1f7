//! The shared draw pile.
//!
//! A `Deck` is an ordered stack of cards: draws take the front card. Its
//! composition is fixed when it is built from a [`DeckConfig`]; the engine
//! replaces an exhausted deck with a fresh one rather than refilling it.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, SpecialKind};
use crate::core::{DeckConfig, GameRng};

/// Ordered stack of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Build a deck with the given composition, in construction order.
    ///
    /// Order: zeros, standard values ascending, specials, adds, mults.
    #[must_use]
    pub fn unshuffled(config: &DeckConfig) -> Self {
        let mut cards = VecDeque::with_capacity(config.total_cards());

        for _ in 0..config.zero_cards {
            cards.push_back(Card::standard(0));
        }
        for value in 1..=config.max_standard_value {
            for _ in 0..value {
                cards.push_back(Card::standard(value));
            }
        }
        for _ in 0..config.specials_per_kind {
            for kind in SpecialKind::ALL {
                cards.push_back(Card::special(kind));
            }
        }
        for &value in &config.add_values {
            cards.push_back(Card::add(value));
        }
        for _ in 0..config.mult_cards {
            cards.push_back(Card::mult());
        }

        Self { cards }
    }

    /// Build and shuffle a fresh deck.
    #[must_use]
    pub fn new(config: &DeckConfig, rng: &mut GameRng) -> Self {
        let mut deck = Self::unshuffled(config);
        deck.shuffle(rng);
        deck
    }

    /// A deck that deals exactly `cards`, first card on top.
    ///
    /// Useful for replaying a known sequence.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Uniformly permute the remaining cards (Fisher-Yates).
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Remove and return the top card, or `None` if the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the remaining cards from the top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Count of each distinct card remaining.
    #[must_use]
    pub fn composition(&self) -> FxHashMap<Card, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(*card).or_insert(0) += 1;
        }
        counts
    }
}
