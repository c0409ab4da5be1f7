//! Collaborator seam.
//!
//! The engine never calls out: it suspends and returns a [`Prompt`]. A
//! front end that would rather answer prompts through callbacks implements
//! [`Collaborator`] and hands each player action to [`drive`], which keeps
//! answering until the next player action is due or the game ends.
//!
//! Any `FnMut(PlayerId, Effect, &[TargetOption]) -> PlayerId` closure is a
//! collaborator that picks targets and ignores reveals and events.

use crate::cards::Card;
use crate::core::{Action, EngineError, PlayerId};
use crate::effects::{Effect, TargetOption};
use crate::events::GameEvent;

use super::engine::GameEngine;
use super::phase::Prompt;

/// Answers the engine's suspensions.
pub trait Collaborator {
    /// Pick the recipient of `effect` among `options` (never empty).
    fn choose_target(
        &mut self,
        drawer: PlayerId,
        effect: Effect,
        options: &[TargetOption],
    ) -> PlayerId;

    /// A card was revealed to `recipient`; return to let it apply.
    fn acknowledge(&mut self, _recipient: PlayerId, _card: &Card) {}

    /// Receive one event, in causal order.
    fn on_event(&mut self, _event: &GameEvent) {}
}

impl<F> Collaborator for F
where
    F: FnMut(PlayerId, Effect, &[TargetOption]) -> PlayerId,
{
    fn choose_target(
        &mut self,
        drawer: PlayerId,
        effect: Effect,
        options: &[TargetOption],
    ) -> PlayerId {
        self(drawer, effect, options)
    }
}

/// Apply a player action and answer every prompt that follows it.
///
/// Returns the first prompt the collaborator cannot answer: the next
/// player's action, or game over. If the collaborator picks an ineligible
/// target the error is returned and the engine stays suspended.
pub fn drive<C>(
    engine: &mut GameEngine,
    action: Action,
    collaborator: &mut C,
) -> Result<Prompt, EngineError>
where
    C: Collaborator + ?Sized,
{
    let mut prompt = engine.apply(action)?;
    loop {
        for event in engine.drain_events() {
            collaborator.on_event(&event);
        }

        prompt = match prompt {
            Prompt::Reveal { recipient, card, .. } => {
                collaborator.acknowledge(recipient, &card);
                engine.acknowledge()?
            }
            Prompt::ChooseTarget { drawer, effect, options } => {
                let target = collaborator.choose_target(drawer, effect, &options);
                engine.choose_target(target)?
            }
            done @ (Prompt::Action { .. } | Prompt::GameOver { .. }) => return Ok(done),
        };
    }
}
