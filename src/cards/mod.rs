//! Cards and the shared deck.
//!
//! - `Card`: immutable value with a category and optional special kind
//! - `Deck`: ordered draw pile with a fixed composition

mod card;
mod deck;

pub use card::{Card, CardCategory, SpecialKind, MULT_FACTOR};
pub use deck::Deck;
