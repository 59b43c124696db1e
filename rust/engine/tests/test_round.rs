use ante_engine::blinds::{Blind, Requirement};
use ante_engine::cards::Card;
use ante_engine::deck::Deck;
use ante_engine::errors::GameError;
use ante_engine::hand::HandCategory;
use ante_engine::history::ActionKind;
use ante_engine::round::{Round, RoundRules, RoundStatus, HAND_SIZE};

fn parse(text: &str) -> Vec<Card> {
    text.split_whitespace().map(|s| s.parse().unwrap()).collect()
}

// Opening hand sorts to: K♥ 7♥ 7♠ 7♦ 7♣ 4♣ 3♦ 2♠
fn quads_deck() -> Deck {
    Deck::from_cards(parse(
        "7♥ 7♠ 7♦ 7♣ K♥ 2♠ 3♦ 4♣ 9♥ 9♠ 9♦ 9♣ 5♥ 6♥ 8♠ J♦",
    ))
    .unwrap()
}

fn round(requirement: u64, deck: Deck, rules: RoundRules) -> Round {
    Round::new(Blind::Small, Requirement::Chips(requirement), deck, rules).unwrap()
}

#[test]
fn opening_hand_is_dealt_and_sorted() {
    let r = round(300, quads_deck(), RoundRules::default());
    assert_eq!(r.hand().len(), HAND_SIZE);
    assert_eq!(r.hand(), parse("K♥ 7♥ 7♠ 7♦ 7♣ 4♣ 3♦ 2♠").as_slice());
    assert_eq!(r.deck_remaining(), 8);
    assert_eq!(r.hands_left(), 4);
    assert_eq!(r.discards_left(), 4);
    assert_eq!(r.status(), RoundStatus::Active);
}

#[test]
fn play_scores_refills_and_resorts() {
    let mut r = round(10_000, quads_deck(), RoundRules::default());
    let result = r.play(&[1, 2, 3, 4, 0]).unwrap();
    assert_eq!(result.category, HandCategory::FourOfAKind);
    assert_eq!(result.played, parse("7♥ 7♠ 7♦ 7♣ K♥"));
    assert_eq!(result.score, 616);
    assert_eq!(r.score(), 616);
    assert_eq!(r.hands_left(), 3);
    assert_eq!(r.hand(), parse("9♥ 9♠ 9♦ 9♣ 5♥ 4♣ 3♦ 2♠").as_slice());
    assert_eq!(r.deck_remaining(), 3);
}

#[test]
fn discard_refills_to_previous_size() {
    let mut r = round(10_000, Deck::shuffled(5), RoundRules::default());
    let discarded = r.discard(&[0, 2, 4, 6, 7]).unwrap();
    assert_eq!(discarded.len(), 5);
    assert_eq!(r.hand().len(), HAND_SIZE);
    assert_eq!(r.deck_remaining(), 52 - 8 - 5);
    assert_eq!(r.score(), 0);
    assert_eq!(r.discards_left(), 3);
    assert_eq!(r.hands_left(), 4);
    for d in &discarded {
        assert!(!r.hand().contains(d));
    }
}

#[test]
fn exhausted_deck_refills_partially() {
    let deck = Deck::from_cards(parse("A♥ K♥ Q♥ J♥ 9♠ 8♠ 7♠ 6♠ 2♦ 3♦")).unwrap();
    let mut r = round(10_000, deck, RoundRules::default());
    assert_eq!(r.deck_remaining(), 2);
    r.discard(&[0, 1, 2]).unwrap();
    assert_eq!(r.hand().len(), 7);
    assert_eq!(r.deck_remaining(), 0);
    r.discard(&[0]).unwrap();
    assert_eq!(r.hand().len(), 6);
}

#[test]
fn win_takes_precedence_over_running_out_of_hands() {
    let rules = RoundRules {
        hands: 1,
        ..RoundRules::default()
    };
    let mut r = round(600, quads_deck(), rules);
    r.play(&[0, 1, 2, 3, 4]).unwrap();
    assert_eq!(r.hands_left(), 0);
    assert_eq!(r.status(), RoundStatus::Won);
}

#[test]
fn round_is_lost_when_hands_run_out_short() {
    let mut r = round(1_000_000, Deck::shuffled(11), RoundRules::default());
    for _ in 0..4 {
        assert_eq!(r.status(), RoundStatus::Active);
        r.play(&[0]).unwrap();
    }
    assert_eq!(r.hands_left(), 0);
    assert_eq!(r.status(), RoundStatus::Lost);
    assert_eq!(r.play(&[0]), Err(GameError::RoundOver));
    assert_eq!(r.discard(&[0]), Err(GameError::RoundOver));
}

#[test]
fn won_round_rejects_further_actions() {
    let mut r = round(100, quads_deck(), RoundRules::default());
    r.play(&[1, 2, 3, 4]).unwrap();
    assert_eq!(r.status(), RoundStatus::Won);
    assert_eq!(r.play(&[0]), Err(GameError::RoundOver));
}

#[test]
fn discard_budget_is_enforced() {
    let rules = RoundRules {
        discards: 1,
        ..RoundRules::default()
    };
    let mut r = round(1_000_000, Deck::shuffled(3), rules);
    r.discard(&[0]).unwrap();
    assert_eq!(r.discards_left(), 0);
    let before = r.snapshot(0);
    assert_eq!(r.discard(&[0]), Err(GameError::NoDiscardsLeft));
    assert_eq!(r.snapshot(0), before);
    // plays are unaffected
    assert!(r.play(&[0]).is_ok());
}

#[test]
fn unreachable_requirement_can_never_be_won() {
    let mut r = Round::new(
        Blind::Boss,
        Requirement::Unreachable,
        quads_deck(),
        RoundRules::default(),
    )
    .unwrap();
    r.play(&[1, 2, 3, 4, 0]).unwrap();
    assert_eq!(r.status(), RoundStatus::Active);
}

#[test]
fn actions_are_logged_in_order() {
    let mut r = round(10_000, quads_deck(), RoundRules::default());
    r.discard(&[7]).unwrap();
    // 9♥ replaces 2♠ and sorts in right after the king
    r.play(&[2, 3, 4, 5]).unwrap();
    let actions = r.actions();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0].kind, ActionKind::Discard);
    assert_eq!(actions[0].cards, parse("2♠"));
    assert_eq!(actions[1].kind, ActionKind::Play);
    assert_eq!(actions[1].category, Some(HandCategory::FourOfAKind));
    assert_eq!(actions[1].score, Some((60 + 28) * 7));
}

#[test]
fn snapshot_reflects_state_and_money() {
    let r = round(300, quads_deck(), RoundRules::default());
    let snap = r.snapshot(12);
    assert_eq!(snap.money, 12);
    assert_eq!(snap.requirement, Requirement::Chips(300));
    assert_eq!(snap.deck_remaining, 8);
    assert_eq!(snap.hand.len(), 8);
    assert_eq!(snap.status, RoundStatus::Active);
}

#[test]
fn invalid_rules_are_rejected_at_construction() {
    let rules = RoundRules {
        hand_size: 9,
        ..RoundRules::default()
    };
    let err = Round::new(
        Blind::Small,
        Requirement::Chips(1),
        Deck::shuffled(1),
        rules,
    )
    .unwrap_err();
    assert!(matches!(err, GameError::InvalidRules(_)));
}
