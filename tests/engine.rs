// Integration tests (native) for the `phonics-play` drill engines.
// These tests avoid wasm-specific functionality and exercise pure Rust logic
// so they can run under `cargo test` on the host.

use phonics_play::engine::deck::Deck;
use phonics_play::engine::drill::LetterDrill;
use phonics_play::engine::{Action, Phase, Verdict, WordPhaseEngine};

fn word_deck(words: &[&str]) -> Deck<String> {
    Deck::rotating(words.iter().map(|w| w.to_string()).collect())
}

/// Supplies correct input (and simulated time) until the engine finishes the
/// word it is currently on.
fn complete_current_word(engine: &mut WordPhaseEngine, now: &mut f64) {
    let target = engine.words_completed() + 1;
    let mut guard = 0;
    while engine.words_completed() < target {
        guard += 1;
        assert!(guard < 100, "drill did not progress");
        *now += 200.0;
        if let Some(ch) = engine.expected_letter() {
            engine.submit_letter(ch, *now);
        } else {
            // Non-interactive blend: jump well past the handoff deadline.
            *now += 4000.0;
            engine.tick(*now);
        }
    }
}

#[test]
fn every_word_in_a_pass_is_drilled_exactly_once() {
    let words = ["DOG", "CAT", "SUN", "PIG"];
    let (mut engine, _) = WordPhaseEngine::new(word_deck(&words), 0.0);
    let mut now = 0.0;
    let mut seen = Vec::new();
    for _ in 0..words.len() {
        seen.push(engine.word().to_string());
        complete_current_word(&mut engine, &mut now);
    }
    assert_eq!(seen, words);
    assert_eq!(engine.words_completed(), words.len() as u64);
    // The pass wraps around.
    assert_eq!(engine.word(), "DOG");
}

#[test]
fn shuffled_deck_pass_covers_every_word() {
    let words: Vec<String> = phonics_play::WORDS.iter().map(|w| w.to_string()).collect();
    let count = words.len();
    let (mut engine, _) = WordPhaseEngine::new(Deck::shuffled(words, 1234), 0.0);
    let mut now = 0.0;
    let mut seen = std::collections::HashSet::new();
    for _ in 0..count {
        seen.insert(engine.word().to_string());
        complete_current_word(&mut engine, &mut now);
    }
    assert_eq!(seen.len(), count, "one full pass drills each word once");
}

#[test]
fn correct_input_never_skips_or_repeats_a_phase() {
    let (mut engine, _) = WordPhaseEngine::new(word_deck(&["DOG"]), 0.0);
    let mut now = 0.0;
    let mut trail = Vec::new();
    let mut guard = 0;
    while engine.words_completed() == 0 {
        guard += 1;
        assert!(guard < 100);
        let tag = match engine.phase() {
            Phase::ClickLetter { slot } => format!("click{slot}"),
            Phase::BlendPrefix { len, .. } => format!("blend{len}"),
            Phase::TypePrefix { len, index, .. } => format!("type{len}.{index}"),
        };
        if trail.last() != Some(&tag) {
            trail.push(tag);
        }
        now += 200.0;
        if let Some(ch) = engine.expected_letter() {
            engine.submit_letter(ch, now);
        } else {
            now += 4000.0;
            engine.tick(now);
        }
    }
    assert_eq!(
        trail,
        [
            "click0", "click1", "blend2", "type2.0", "type2.1", "click2", "blend3", "type3.0",
            "type3.1", "type3.2",
        ]
    );
}

#[test]
fn whole_word_typed_in_a_burst_resolves_out_of_arrival_order() {
    let (mut engine, _) = WordPhaseEngine::new(word_deck(&["DOG", "CAT"]), 0.0);
    engine.submit_letter('D', 0.0);
    engine.submit_letter('O', 100.0);
    engine.tick(2300.0); // TypePrefix(2)
    engine.submit_letter('D', 2400.0);
    engine.submit_letter('O', 2500.0);
    engine.submit_letter('G', 2600.0); // ClickLetter(2) -> BlendPrefix(3)
    engine.tick(5800.0); // TypePrefix(3)

    // Burst arrives reversed while expecting D,O,G.
    let a = engine.submit_letter('G', 5900.0);
    assert_eq!(a, vec![Action::Feedback(Verdict::TryAgain)]);
    let a = engine.submit_letter('O', 5950.0);
    assert_eq!(a, vec![Action::Feedback(Verdict::TryAgain)]);
    // 'D' unlocks the chain: D, then the buffered O, then the buffered G.
    let a = engine.submit_letter('D', 6000.0);
    let corrects = a
        .iter()
        .filter(|x| matches!(x, Action::Feedback(Verdict::Correct)))
        .count();
    assert_eq!(corrects, 3, "one drain pass consumes the whole word");
    assert_eq!(engine.word(), "CAT");
    assert_eq!(engine.words_completed(), 1);
}

#[test]
fn skipping_a_word_mid_blend_leaves_no_live_timers() {
    let (mut engine, _) = WordPhaseEngine::new(word_deck(&["DOG", "CAT"]), 0.0);
    engine.submit_letter('D', 0.0);
    engine.submit_letter('O', 100.0);
    assert!(matches!(engine.phase(), Phase::BlendPrefix { len: 2, .. }));

    engine.skip_word(1000.0);
    assert_eq!(engine.word(), "CAT");

    // The old blend would have handed off at t=2200; nothing may fire now.
    for t in [2200.0, 3000.0, 60_000.0] {
        assert!(engine.tick(t).is_empty());
        assert_eq!(engine.phase(), &Phase::ClickLetter { slot: 0 });
    }
}

#[test]
fn letter_drill_runs_a_full_alphabet_pass() {
    let (mut drill, first) = LetterDrill::new(LetterDrill::alphabet(5));
    assert!(matches!(first.as_slice(), [Action::PlayLetter(_)]));
    let mut seen = std::collections::HashSet::new();
    for _ in 0..26 {
        let current = drill.current();
        seen.insert(current);
        let a = drill.submit_letter(current);
        assert!(a.contains(&Action::Feedback(Verdict::Correct)));
    }
    assert_eq!(seen.len(), 26);
}
