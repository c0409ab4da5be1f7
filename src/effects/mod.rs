//! Effect system for special cards.
//!
//! - `Effect`: The effects that need a target (freeze, add three)
//! - `targeting`: Who may be targeted and whether a choice is needed
//! - `EffectResolver`: Applies an effect to the target it is lent
//!
//! Second chance is not resolved here: it is a flag on the player that
//! the duplicate rule consumes.

mod effect;
mod targeting;
mod resolver;

pub use effect::Effect;
pub use targeting::{eligible_targets, is_eligible, select_targets, TargetOption, TargetSelection};
pub use resolver::{EffectResolver, ForcedDraw, ForcedStep};
