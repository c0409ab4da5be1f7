//! Game rules: the engine state machine and its collaborator seam.
//!
//! - `GameEngine`: owns the session and exposes draw/stop/acknowledge/choose
//! - `Phase` / `Prompt`: where the engine is and what it waits for
//! - `outcome`: game-over detection and final standings
//! - `driver`: callback-style driving through the `Collaborator` trait

mod engine;
mod phase;
mod view;
pub mod outcome;
pub mod driver;

pub use engine::GameEngine;
pub use phase::{Phase, Prompt};
pub use view::{PlayerView, TableView};
pub use outcome::{GameOutcome, Standing};
pub use driver::{drive, Collaborator};
