//! Card values.
//!
//! A `Card` is an immutable value: a numeric value, a category and, for
//! special cards, the kind of special. Cards are `Copy` so hands and decks
//! move them around freely.
//!
//! ## Duplicates
//!
//! Structural equality (`PartialEq`) compares every field and is what the
//! deck composition checks use. Busting is decided by [`Card::duplicates`],
//! which only ever matches two standard cards of the same value: add, mult
//! and special cards can be held in any number.

use serde::{Deserialize, Serialize};

/// Category of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardCategory {
    /// Numbered card. Adds its value to the round score; can bust.
    Standard,
    /// Bonus card. Adds its value to the round score; never busts.
    Add,
    /// Doubles the round score while held.
    Mult,
    /// Card with a special effect, see [`SpecialKind`].
    Special,
}

/// The effect carried by a special card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpecialKind {
    /// Ends a chosen player's round, banking their score.
    Freeze,
    /// Survive one duplicate this round.
    SecondChance,
    /// A chosen player draws three extra cards.
    AddThree,
}

impl SpecialKind {
    /// All special kinds, in deck construction order.
    pub const ALL: [SpecialKind; 3] = [
        SpecialKind::Freeze,
        SpecialKind::SecondChance,
        SpecialKind::AddThree,
    ];
}

impl std::fmt::Display for SpecialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SpecialKind::Freeze => "FREEZE",
            SpecialKind::SecondChance => "SECOND CHANCE",
            SpecialKind::AddThree => "ADD THREE",
        };
        f.write_str(name)
    }
}

/// Multiplier applied by a mult card.
pub const MULT_FACTOR: u32 = 2;

/// A single card.
///
/// ```
/// use flip_engine::cards::{Card, SpecialKind};
///
/// let seven = Card::standard(7);
/// assert!(seven.duplicates(&Card::standard(7)));
/// assert!(!Card::add(4).duplicates(&Card::add(4)));
/// assert_eq!(Card::special(SpecialKind::Freeze).to_string(), "FREEZE");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    value: u32,
    category: CardCategory,
    special: Option<SpecialKind>,
}

impl Card {
    /// A standard numbered card.
    #[must_use]
    pub const fn standard(value: u32) -> Self {
        Self {
            value,
            category: CardCategory::Standard,
            special: None,
        }
    }

    /// An add card worth `value` points.
    #[must_use]
    pub const fn add(value: u32) -> Self {
        Self {
            value,
            category: CardCategory::Add,
            special: None,
        }
    }

    /// A ×2 mult card.
    #[must_use]
    pub const fn mult() -> Self {
        Self {
            value: MULT_FACTOR,
            category: CardCategory::Mult,
            special: None,
        }
    }

    /// A special card of the given kind.
    #[must_use]
    pub const fn special(kind: SpecialKind) -> Self {
        Self {
            value: 0,
            category: CardCategory::Special,
            special: Some(kind),
        }
    }

    /// Face value. Zero for special cards, the factor for mult cards.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub const fn category(&self) -> CardCategory {
        self.category
    }

    /// The special kind, if this is a special card.
    #[must_use]
    pub const fn special_kind(&self) -> Option<SpecialKind> {
        self.special
    }

    #[must_use]
    pub const fn is_special(&self) -> bool {
        self.special.is_some()
    }

    /// Check if this card is of the given special kind.
    #[must_use]
    pub fn is_kind(&self, kind: SpecialKind) -> bool {
        self.special == Some(kind)
    }

    /// Points this card contributes to a round score before multipliers.
    #[must_use]
    pub const fn points(&self) -> u32 {
        match self.category {
            CardCategory::Standard | CardCategory::Add => self.value,
            CardCategory::Mult | CardCategory::Special => 0,
        }
    }

    /// Check whether holding `other` makes drawing this card a bust.
    ///
    /// Only standard cards of equal value collide.
    #[must_use]
    pub fn duplicates(&self, other: &Card) -> bool {
        other.category == CardCategory::Standard && self == other
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(kind) = self.special {
            return write!(f, "{kind}");
        }
        match self.category {
            CardCategory::Add => write!(f, "+{}", self.value),
            CardCategory::Mult => write!(f, "×{}", self.value),
            _ => write!(f, "{}", self.value),
        }
    }
}
