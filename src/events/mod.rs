//! Event feed.
//!
//! The engine appends a [`GameEvent`] for every state transition worth
//! showing. Collaborators drain the feed after each call and render it;
//! the order always matches the order of the transitions.

mod event;

pub use event::GameEvent;
