//! The game engine.
//!
//! `GameEngine` is the session object: it owns the deck, the players, the
//! round counter and the RNG, and it is the only thing that mutates them.
//! A collaborator drives it through four calls:
//!
//! - `draw` / `stop`: the current player's turn action
//! - `acknowledge`: continue past a revealed card
//! - `choose_target`: answer a freeze or add-three target prompt
//!
//! Every call returns the next [`Prompt`]. A rejected call returns an
//! [`EngineError`] and changes nothing.
//!
//! ## Turn resolution
//!
//! A draw reveals the top card, then applies it to the drawer: duplicates
//! bust (or spend second chance), freeze and add three hand control to the
//! effect resolver, anything else joins the hand. Once the card and any
//! effect are fully resolved the engine refills an empty deck, checks for
//! game over and round end, and passes the turn to the next active seat.

use im::Vector;

use crate::cards::{Card, Deck};
use crate::core::{
    Action, ActionRecord, EngineError, GameConfig, GameRng, Player, PlayerId, PlayerMap,
    Reception,
};
use crate::effects::{
    select_targets, Effect, EffectResolver, ForcedDraw, ForcedStep, TargetSelection,
};
use crate::events::GameEvent;

use super::outcome::{self, GameOutcome, Standing};
use super::phase::{Phase, Prompt};
use super::view::{PlayerView, TableView};

/// A single game session.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    rng: GameRng,
    deck: Deck,
    players: PlayerMap<Player>,
    current: PlayerId,
    round: u32,
    phase: Phase,
    events: Vec<GameEvent>,
    history: Vector<ActionRecord>,
}

impl GameEngine {
    /// Start a game with a freshly shuffled deck.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, EngineError> {
        config.validate()?;
        let mut rng = GameRng::new(seed);
        let deck = Deck::new(&config.deck, &mut rng);
        Ok(Self::assemble(config, rng, deck))
    }

    /// Start a game seeded from the operating system.
    pub fn from_entropy(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let mut rng = GameRng::from_entropy();
        let deck = Deck::new(&config.deck, &mut rng);
        Ok(Self::assemble(config, rng, deck))
    }

    /// Start a game that deals `deck` first.
    ///
    /// Once `deck` runs out, fresh decks are built from the configuration
    /// and shuffled with `seed`.
    pub fn with_deck(config: GameConfig, deck: Deck, seed: u64) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::assemble(config, GameRng::new(seed), deck))
    }

    fn assemble(config: GameConfig, rng: GameRng, deck: Deck) -> Self {
        let players = PlayerMap::new(config.player_count, Player::new);
        let events = vec![GameEvent::GameStarted {
            players: config.player_count,
        }];

        Self {
            config,
            rng,
            deck,
            players,
            current: PlayerId::new(0),
            round: 1,
            phase: Phase::AwaitingAction,
            events,
            history: Vector::new(),
        }
    }

    // === Observation ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Round number, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        match &self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Banked scores, best first, ties in seat order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        outcome::standings(&self.players)
    }

    /// Accepted requests, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Events not yet drained.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the pending events, in the order they happened.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// What the engine is waiting for.
    #[must_use]
    pub fn prompt(&self) -> Prompt {
        match &self.phase {
            Phase::AwaitingAction => Prompt::Action { player: self.current },
            Phase::Revealing { card, recipient, forced } => Prompt::Reveal {
                recipient: *recipient,
                card: *card,
                forced: *forced,
            },
            Phase::ChoosingTarget { effect, drawer, options } => Prompt::ChooseTarget {
                drawer: *drawer,
                effect: *effect,
                options: options.clone(),
            },
            Phase::GameOver(outcome) => Prompt::GameOver {
                outcome: outcome.clone(),
            },
        }
    }

    /// Snapshot of everything a renderer shows.
    #[must_use]
    pub fn view(&self) -> TableView {
        TableView {
            players: self.players.values().map(PlayerView::of).collect(),
            current_player: self.current,
            round: self.round,
            deck_remaining: self.deck.len(),
            is_game_over: self.is_game_over(),
            winner: self.outcome().map(|o| o.winner),
            is_suspended: self.phase.is_suspended(),
        }
    }

    // === Requests ===

    /// Dispatch a request.
    pub fn apply(&mut self, action: Action) -> Result<Prompt, EngineError> {
        match action {
            Action::Draw => self.draw(),
            Action::Stop => self.stop(),
            Action::Acknowledge => self.acknowledge(),
            Action::ChooseTarget(target) => self.choose_target(target),
        }
    }

    /// The current player draws the top card.
    pub fn draw(&mut self) -> Result<Prompt, EngineError> {
        self.expect_turn(Action::Draw)?;
        self.record(Action::Draw);

        let card = self.take_card(false);
        if self.config.acknowledge_reveals {
            self.phase = Phase::Revealing {
                card,
                recipient: self.current,
                forced: None,
            };
            return Ok(self.prompt());
        }
        Ok(self.resolve_turn_card(card))
    }

    /// The current player banks their round score and leaves the round.
    pub fn stop(&mut self) -> Result<Prompt, EngineError> {
        self.expect_turn(Action::Stop)?;
        self.record(Action::Stop);

        let player = self.current;
        let gained = self.players[player].finish_round(true);
        self.events.push(GameEvent::Stopped {
            player,
            gained,
            total: self.players[player].banked_score(),
        });
        Ok(self.evaluate())
    }

    /// Continue past the revealed card and apply it.
    pub fn acknowledge(&mut self) -> Result<Prompt, EngineError> {
        let (card, forced) = match &self.phase {
            Phase::Revealing { card, forced, .. } => (*card, *forced),
            other => return Err(self.reject(Action::Acknowledge, other)),
        };
        self.record(Action::Acknowledge);

        match forced {
            None => Ok(self.resolve_turn_card(card)),
            Some(mut progress) => {
                if self.resolve_forced_card(&mut progress, card) {
                    Ok(self.run_forced_draws(progress))
                } else {
                    Ok(self.finish_action())
                }
            }
        }
    }

    /// Pick the recipient of the pending freeze or add three.
    pub fn choose_target(&mut self, target: PlayerId) -> Result<Prompt, EngineError> {
        let action = Action::ChooseTarget(target);
        let (effect, drawer) = match &self.phase {
            Phase::ChoosingTarget { effect, drawer, options } => {
                if !options.iter().any(|o| o.player == target) {
                    return Err(EngineError::IneligibleTarget(target));
                }
                (*effect, *drawer)
            }
            other => return Err(self.reject(action, other)),
        };
        self.record(action);

        Ok(self.apply_effect(effect, drawer, target))
    }

    // === Validation ===

    fn expect_turn(&self, action: Action) -> Result<(), EngineError> {
        match &self.phase {
            Phase::AwaitingAction if self.players[self.current].is_active() => Ok(()),
            Phase::AwaitingAction => Err(EngineError::PlayerInactive(self.current)),
            other => Err(self.reject(action, other)),
        }
    }

    fn reject(&self, action: Action, phase: &Phase) -> EngineError {
        match phase {
            Phase::GameOver(_) => EngineError::GameOver,
            other => EngineError::UnexpectedAction {
                action,
                phase: other.name(),
            },
        }
    }

    fn record(&mut self, action: Action) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(self.current, action, self.round, sequence));
    }

    // === Resolution ===

    /// Apply a card drawn on the current player's turn.
    fn resolve_turn_card(&mut self, card: Card) -> Prompt {
        let drawer = self.current;

        if !self.players[drawer].would_duplicate(&card) {
            if let Some(effect) = Effect::from_card(&card) {
                // The freeze card stays on show while its target is picked
                if effect == Effect::Freeze {
                    self.players[drawer].hold(card);
                }
                self.events.push(GameEvent::EffectDrawn { player: drawer, effect });
                return self.begin_effect(effect, drawer);
            }
        }

        let reception = self.players[drawer].receive(card);
        self.log_reception(drawer, card, reception, None);
        self.finish_action()
    }

    fn begin_effect(&mut self, effect: Effect, drawer: PlayerId) -> Prompt {
        match select_targets(&self.players, drawer) {
            TargetSelection::Implicit(target) => self.apply_effect(effect, drawer, target),
            TargetSelection::Choose(options) => {
                self.phase = Phase::ChoosingTarget { effect, drawer, options };
                self.prompt()
            }
        }
    }

    fn apply_effect(&mut self, effect: Effect, drawer: PlayerId, target: PlayerId) -> Prompt {
        match effect {
            Effect::Freeze => {
                let banked = EffectResolver::freeze(&mut self.players[target]);
                self.events.push(GameEvent::Frozen {
                    drawer,
                    target,
                    banked,
                    total: self.players[target].banked_score(),
                });
                self.finish_action()
            }
            Effect::AddThree => {
                let count = self.config.forced_draw_count;
                self.events.push(GameEvent::ForcedDrawsStarted { drawer, target, count });
                self.run_forced_draws(ForcedDraw::new(drawer, target, count))
            }
        }
    }

    /// Draw the remaining forced cards, suspending on each reveal.
    fn run_forced_draws(&mut self, mut progress: ForcedDraw) -> Prompt {
        loop {
            if progress.is_complete() {
                self.events.push(GameEvent::ForcedDrawsComplete {
                    target: progress.target,
                    round_score: self.players[progress.target].round_score(),
                });
                return self.finish_action();
            }

            let card = self.take_card(true);
            if self.config.acknowledge_reveals {
                self.phase = Phase::Revealing {
                    card,
                    recipient: progress.target,
                    forced: Some(progress),
                };
                return self.prompt();
            }
            if !self.resolve_forced_card(&mut progress, card) {
                return self.finish_action();
            }
        }
    }

    /// Returns false when the target busted.
    fn resolve_forced_card(&mut self, progress: &mut ForcedDraw, card: Card) -> bool {
        let target = progress.target;
        let index = progress.next_index();
        let step = EffectResolver::forced_card(progress, &mut self.players[target], card);

        match step {
            ForcedStep::Continue(reception) => {
                self.log_reception(target, card, reception, Some((index, progress.total)));
                true
            }
            ForcedStep::Bust { forfeited } => {
                self.log_reception(target, card, Reception::Busted { forfeited }, None);
                false
            }
        }
    }

    fn log_reception(
        &mut self,
        player: PlayerId,
        card: Card,
        reception: Reception,
        forced: Option<(u8, u8)>,
    ) {
        match reception {
            Reception::Added | Reception::SecondChanceGained => {
                let event = match forced {
                    Some((index, count)) => GameEvent::ForcedCardReceived {
                        target: player,
                        card,
                        index,
                        count,
                    },
                    None => GameEvent::CardDrawn {
                        player,
                        card,
                        round_score: self.players[player].round_score(),
                    },
                };
                self.events.push(event);
                if reception == Reception::SecondChanceGained {
                    self.events.push(GameEvent::SecondChanceGained { player });
                }
            }
            Reception::Dodged => self.events.push(GameEvent::DuplicateDodged { player, card }),
            Reception::Busted { forfeited } => self.events.push(GameEvent::Busted {
                player,
                card,
                forfeited,
            }),
        }
    }

    // === Deck ===

    /// Draw the top card, replacing an exhausted deck first.
    fn take_card(&mut self, during_effect: bool) -> Card {
        loop {
            if let Some(card) = self.deck.draw() {
                return card;
            }
            self.refill_deck(during_effect);
        }
    }

    fn refill_deck(&mut self, during_effect: bool) {
        self.deck = Deck::new(&self.config.deck, &mut self.rng);
        self.events.push(GameEvent::DeckReshuffled { during_effect });
    }

    // === Turn order ===

    /// Post-draw checks once a card and its effect are fully resolved.
    fn finish_action(&mut self) -> Prompt {
        if self.deck.is_empty() {
            self.refill_deck(false);
        }
        self.evaluate()
    }

    /// Game over, round end, or pass the turn.
    fn evaluate(&mut self) -> Prompt {
        if let Some(outcome) = outcome::decide(&self.players, self.config.win_score) {
            self.events.push(GameEvent::GameOver {
                winner: outcome.winner,
                score: outcome.winning_score,
            });
            self.phase = Phase::GameOver(outcome);
            return self.prompt();
        }

        if self.players.values().all(|p| !p.is_active()) {
            self.start_round();
        } else {
            self.advance_turn();
        }
        self.phase = Phase::AwaitingAction;
        self.prompt()
    }

    fn start_round(&mut self) {
        self.round += 1;
        for (_, player) in self.players.iter_mut() {
            player.start_round();
        }
        self.current = PlayerId::new(0);
        self.events.push(GameEvent::RoundStarted { round: self.round });
    }

    /// Move to the next active seat after the current one, wrapping.
    fn advance_turn(&mut self) {
        let count = self.players.player_count();
        let start = self.current.index();

        for step in 1..=count {
            let candidate = PlayerId::new(((start + step) % count) as u8);
            if self.players[candidate].is_active() {
                self.current = candidate;
                return;
            }
        }
    }
}
