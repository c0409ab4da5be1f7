//! # flip-engine
//!
//! A turn-based, push-your-luck card game engine.
//!
//! Players take turns drawing from a shared deck. Each card adds to a
//! running round score; drawing a number already in hand busts the round.
//! A player can stop at any time to bank the round score. Special cards
//! freeze a player, grant a second chance, or force a player to draw three
//! more cards. The first banked total to reach the win score ends the game.
//!
//! ## Architecture
//!
//! - **Session object**: [`GameEngine`] owns the deck, players and round
//!   state. Nothing else mutates them.
//!
//! - **Explicit suspension**: reveals and target choices are phases of the
//!   state machine. The engine returns a [`Prompt`] and waits for the
//!   matching call instead of invoking callbacks.
//!
//! - **Event feed**: every transition worth showing is appended as a
//!   [`GameEvent`], drained by the front end in causal order.
//!
//! ## Modules
//!
//! - `core`: Player ids and seats, RNG, configuration, actions, errors
//! - `cards`: Card values and the deck
//! - `effects`: Freeze and add three, targeting and resolution
//! - `events`: The event feed
//! - `rules`: The engine, prompts, outcome and collaborator seam
//!
//! ## Example
//!
//! ```
//! use flip_engine::{GameConfig, GameEngine, Prompt};
//!
//! let config = GameConfig::new().player_count(3).acknowledge_reveals(false);
//! let mut engine = GameEngine::new(config, 7).unwrap();
//!
//! // Player 1 stops at once and banks nothing
//! let prompt = engine.stop().unwrap();
//! assert!(matches!(prompt, Prompt::Action { .. }));
//! assert_eq!(engine.current_player().index(), 1);
//! ```

pub mod core;
pub mod cards;
pub mod effects;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigError, DeckConfig, EngineError, GameConfig, GameRng, Player,
    PlayerId, PlayerMap, Reception,
};

pub use crate::cards::{Card, CardCategory, Deck, SpecialKind};

pub use crate::effects::{Effect, EffectResolver, ForcedDraw, TargetOption};

pub use crate::events::GameEvent;

pub use crate::rules::{
    drive, Collaborator, GameEngine, GameOutcome, Phase, PlayerView, Prompt, Standing, TableView,
};
