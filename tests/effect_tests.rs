//! Freeze and add-three tests.
//!
//! Covers target selection, the implicit self-target when only the drawer
//! is still in, forced draws with and without reveals, and the
//! bust-aborts-the-sequence rule.

use flip_engine::{
    Action, Card, Deck, Effect, EngineError, ForcedDraw, GameConfig, GameEngine, GameEvent,
    PlayerId, Prompt, SpecialKind,
};

fn headless(players: usize) -> GameConfig {
    GameConfig::new().player_count(players).acknowledge_reveals(false)
}

fn stacked(config: GameConfig, cards: &[Card]) -> GameEngine {
    GameEngine::with_deck(config, Deck::from_cards(cards.iter().copied()), 3).unwrap()
}

fn p(i: u8) -> PlayerId {
    PlayerId::new(i)
}

fn freeze() -> Card {
    Card::special(SpecialKind::Freeze)
}

fn add_three() -> Card {
    Card::special(SpecialKind::AddThree)
}

fn target_players(prompt: &Prompt) -> Vec<PlayerId> {
    match prompt {
        Prompt::ChooseTarget { options, .. } => options.iter().map(|o| o.player).collect(),
        other => panic!("expected target prompt, got {other:?}"),
    }
}

// =============================================================================
// Freeze
// =============================================================================

/// Test freezing another player banks their round score.
#[test]
fn test_freeze_other_player() {
    let mut engine = stacked(headless(2), &[Card::standard(6), freeze(), Card::standard(2)]);

    engine.draw().unwrap(); // Player 1: 6
    let prompt = engine.draw().unwrap(); // Player 2: freeze
    assert_eq!(target_players(&prompt), vec![p(0), p(1)]);

    let prompt = engine.choose_target(p(0)).unwrap();

    let frozen = &engine.players()[p(0)];
    assert!(!frozen.is_active());
    assert_eq!(frozen.banked_score(), 6);
    assert!(frozen.hand().is_empty());
    // Drawer keeps the freeze card and, as the only one left, the turn
    assert_eq!(engine.players()[p(1)].hand(), &[freeze()]);
    assert_eq!(prompt, Prompt::Action { player: p(1) });
    assert!(engine.drain_events().contains(&GameEvent::Frozen {
        drawer: p(1),
        target: p(0),
        banked: 6,
        total: 6,
    }));
}

/// Test the target prompt lists only active players and shows their hands.
#[test]
fn test_target_options_skip_inactive() {
    let mut engine = stacked(headless(3), &[Card::standard(4), freeze()]);

    engine.draw().unwrap(); // Player 1: 4
    engine.stop().unwrap(); // Player 2 out
    let prompt = engine.draw().unwrap(); // Player 3: freeze

    assert_eq!(target_players(&prompt), vec![p(0), p(2)]);
    if let Prompt::ChooseTarget { drawer, effect, options } = &prompt {
        assert_eq!(*drawer, p(2));
        assert_eq!(*effect, Effect::Freeze);
        assert_eq!(options[0].round_score, 4);
        assert_eq!(options[0].hand, vec![Card::standard(4)]);
    }
}

/// Test picking an ineligible target is refused and the prompt stays.
#[test]
fn test_ineligible_target_rejected() {
    let mut engine = stacked(headless(3), &[freeze(), Card::standard(1)]);
    engine.stop().unwrap(); // Player 1 out
    let prompt = engine.draw().unwrap(); // Player 2: freeze
    assert_eq!(target_players(&prompt), vec![p(1), p(2)]);

    assert_eq!(engine.choose_target(p(0)), Err(EngineError::IneligibleTarget(p(0))));
    assert_eq!(engine.choose_target(p(5)), Err(EngineError::IneligibleTarget(p(5))));
    assert_eq!(engine.prompt(), prompt);
    assert!(matches!(engine.draw(), Err(EngineError::UnexpectedAction { .. })));
    assert_eq!(engine.players()[p(0)].banked_score(), 0);
}

/// Test a lone active drawer freezes themself with no target prompt.
#[test]
fn test_self_freeze_when_alone() {
    let config = GameConfig::new().player_count(2);
    let mut engine = stacked(config, &[Card::standard(4), freeze(), Card::standard(9)]);

    engine.stop().unwrap(); // Player 1 out
    assert!(matches!(engine.draw().unwrap(), Prompt::Reveal { .. }));
    engine.acknowledge().unwrap(); // Player 2: 4
    assert!(matches!(engine.draw().unwrap(), Prompt::Reveal { .. }));

    let prompt = engine.acknowledge().unwrap(); // freeze, no prompt
    assert_eq!(prompt, Prompt::Action { player: p(0) });
    assert_eq!(engine.players()[p(1)].banked_score(), 4);
    assert_eq!(engine.round(), 2);

    let events = engine.drain_events();
    assert!(events.contains(&GameEvent::Frozen {
        drawer: p(1),
        target: p(1),
        banked: 4,
        total: 4,
    }));
    assert!(!engine
        .history()
        .iter()
        .any(|r| matches!(r.action, Action::ChooseTarget(_))));
}

/// Test a duplicate of the freeze card is an ordinary effect, not a bust.
#[test]
fn test_second_freeze_does_not_bust() {
    let mut engine = stacked(
        headless(2),
        &[Card::standard(3), freeze(), Card::standard(5), freeze()],
    );
    engine.draw().unwrap();
    engine.draw().unwrap();
    engine.choose_target(p(0)).unwrap(); // Player 1 banks 3
    engine.draw().unwrap(); // Player 2: 5
    let prompt = engine.draw().unwrap(); // freeze again, alone

    assert!(matches!(prompt, Prompt::Action { .. }));
    assert_eq!(engine.players()[p(1)].banked_score(), 5);
}

// =============================================================================
// Add three
// =============================================================================

/// Test three forced cards land on the chosen target.
#[test]
fn test_add_three_on_target() {
    let mut engine = stacked(
        headless(2),
        &[Card::standard(2), add_three(), Card::standard(8), Card::add(6), Card::mult()],
    );

    engine.draw().unwrap(); // Player 1: 2
    engine.draw().unwrap(); // Player 2: add three
    engine.choose_target(p(0)).unwrap();

    let target = &engine.players()[p(0)];
    assert!(target.is_active());
    assert_eq!(target.hand(), &[Card::standard(2), Card::standard(8), Card::add(6), Card::mult()]);
    assert_eq!(target.round_score(), 32);
    // The add-three card itself is not kept
    assert!(engine.players()[p(1)].hand().is_empty());

    let events = engine.drain_events();
    assert!(events.contains(&GameEvent::ForcedDrawsStarted {
        drawer: p(1),
        target: p(0),
        count: 3,
    }));
    assert!(events.contains(&GameEvent::ForcedCardReceived {
        target: p(0),
        card: Card::add(6),
        index: 2,
        count: 3,
    }));
    assert!(events.contains(&GameEvent::ForcedDrawsComplete { target: p(0), round_score: 32 }));
    assert_eq!(engine.current_player(), p(0));
}

/// Test a forced duplicate busts the target and stops the sequence.
#[test]
fn test_add_three_aborts_on_bust() {
    let mut engine = stacked(
        headless(2),
        &[
            Card::standard(5),
            add_three(),
            Card::standard(8),
            Card::standard(5),
            Card::standard(9),
            Card::standard(10),
        ],
    );

    engine.draw().unwrap();
    engine.draw().unwrap();
    engine.choose_target(p(0)).unwrap();

    let target = &engine.players()[p(0)];
    assert!(!target.is_active());
    assert_eq!(target.banked_score(), 0);
    assert!(target.hand().is_empty());
    // The third forced card was never drawn
    assert_eq!(engine.deck_remaining(), 2);

    let events = engine.drain_events();
    assert!(events.contains(&GameEvent::Busted {
        player: p(0),
        card: Card::standard(5),
        forfeited: 13,
    }));
    assert!(!events.iter().any(|e| matches!(e, GameEvent::ForcedDrawsComplete { .. })));
    assert_eq!(engine.current_player(), p(1));
}

/// Test second chance absorbs a forced duplicate and the sequence goes on.
#[test]
fn test_add_three_second_chance_dodge() {
    let sc = Card::special(SpecialKind::SecondChance);
    let mut engine = stacked(
        headless(2),
        &[
            Card::standard(5),
            Card::standard(1),
            sc,
            add_three(),
            Card::standard(5),
            Card::standard(6),
            Card::standard(7),
        ],
    );

    engine.draw().unwrap(); // Player 1: 5
    engine.draw().unwrap(); // Player 2: 1
    engine.draw().unwrap(); // Player 1: second chance
    engine.draw().unwrap(); // Player 2: add three
    engine.choose_target(p(0)).unwrap();

    let target = &engine.players()[p(0)];
    assert!(target.is_active());
    assert!(!target.has_second_chance());
    assert_eq!(target.hand(), &[Card::standard(5), sc, Card::standard(6), Card::standard(7)]);
}

/// Test forced specials are held without triggering, except second chance.
#[test]
fn test_forced_specials_held() {
    let mut engine = stacked(
        headless(2),
        &[
            Card::standard(1),
            add_three(),
            freeze(),
            Card::special(SpecialKind::SecondChance),
            add_three(),
        ],
    );

    engine.draw().unwrap();
    engine.draw().unwrap();
    let prompt = engine.choose_target(p(0)).unwrap();

    let target = &engine.players()[p(0)];
    assert!(target.is_active());
    assert!(target.has_second_chance());
    assert_eq!(target.hand().len(), 4);
    assert_eq!(target.round_score(), 1);
    assert!(matches!(prompt, Prompt::Action { .. }));
    assert!(!engine
        .drain_events()
        .iter()
        .any(|e| matches!(e, GameEvent::Frozen { .. })));
}

/// Test add three on a lone drawer targets themself.
#[test]
fn test_add_three_self_when_alone() {
    let mut engine = stacked(
        headless(2),
        &[add_three(), Card::standard(2), Card::standard(3), Card::standard(4)],
    );

    engine.stop().unwrap();
    let prompt = engine.draw().unwrap();

    assert_eq!(prompt, Prompt::Action { player: p(1) });
    assert_eq!(engine.players()[p(1)].round_score(), 9);
}

/// Test each forced card is revealed and applied only when acknowledged.
#[test]
fn test_forced_reveals() {
    let mut engine = stacked(
        GameConfig::new(),
        &[add_three(), Card::standard(2), Card::standard(3), Card::standard(4)],
    );

    engine.draw().unwrap();
    let prompt = engine.acknowledge().unwrap();
    assert_eq!(target_players(&prompt), vec![p(0), p(1)]);

    let prompt = engine.choose_target(p(1)).unwrap();
    assert_eq!(
        prompt,
        Prompt::Reveal {
            recipient: p(1),
            card: Card::standard(2),
            forced: Some(ForcedDraw::new(p(0), p(1), 3)),
        }
    );
    assert!(engine.players()[p(1)].hand().is_empty());

    engine.acknowledge().unwrap();
    assert_eq!(engine.players()[p(1)].hand(), &[Card::standard(2)]);
    match engine.prompt() {
        Prompt::Reveal { forced: Some(progress), card, .. } => {
            assert_eq!(progress.drawn, 1);
            assert_eq!(card, Card::standard(3));
        }
        other => panic!("expected forced reveal, got {other:?}"),
    }

    engine.acknowledge().unwrap();
    let prompt = engine.acknowledge().unwrap();
    assert_eq!(prompt, Prompt::Action { player: p(1) });
    assert_eq!(engine.players()[p(1)].round_score(), 9);
}

/// Test the deck refills in the middle of a forced sequence.
#[test]
fn test_forced_draws_refill_deck() {
    let mut engine = stacked(headless(2), &[add_three(), Card::standard(2)]);

    engine.draw().unwrap();
    engine.choose_target(p(1)).unwrap();

    assert!(engine
        .drain_events()
        .contains(&GameEvent::DeckReshuffled { during_effect: true }));
    assert!(engine.deck_remaining() < 81);
}

/// Test the forced draw count follows the configuration.
#[test]
fn test_configured_forced_draw_count() {
    let config = headless(2).forced_draw_count(1);
    let mut engine = stacked(config, &[add_three(), Card::standard(2), Card::standard(3)]);

    engine.draw().unwrap();
    engine.choose_target(p(1)).unwrap();

    assert_eq!(engine.players()[p(1)].hand(), &[Card::standard(2)]);
    assert_eq!(engine.deck_remaining(), 1);
}
