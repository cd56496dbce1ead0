// Integration tests for dataset invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

#[test]
fn words_are_unique_uppercase_three_letter() {
    let mut seen = HashSet::new();
    for word in phonics_play::WORDS {
        assert!(seen.insert(*word), "duplicate word '{}' in WORDS", word);
        assert_eq!(word.len(), 3, "word '{}' is not three letters", word);
        assert!(
            word.chars().all(|c| c.is_ascii_uppercase()),
            "word '{}' is not uppercase ASCII",
            word
        );
    }
    assert!(!phonics_play::WORDS.is_empty());
}

#[test]
fn letter_voices_cover_the_alphabet_exactly_once() {
    let letters: Vec<char> = phonics_play::LETTER_VOICES.iter().map(|(l, _, _)| *l).collect();
    let unique: HashSet<char> = letters.iter().copied().collect();
    assert_eq!(letters.len(), 26);
    assert_eq!(unique.len(), 26, "each letter must appear exactly once");
    for ch in 'A'..='Z' {
        assert!(unique.contains(&ch), "missing voice entry for '{}'", ch);
    }
}

#[test]
fn letter_voice_text_is_speakable() {
    for (letter, name, sound) in phonics_play::LETTER_VOICES {
        assert!(!name.is_empty(), "empty name for '{}'", letter);
        assert!(!sound.is_empty(), "empty sound for '{}'", letter);
        for part in [name, sound] {
            assert!(
                part.chars().all(|c| c.is_ascii_lowercase() || c == ' '),
                "voice text '{}' for '{}' has unexpected characters",
                part,
                letter
            );
        }
    }
}

#[test]
fn every_word_letter_has_a_voice_entry() {
    let voiced: HashSet<char> = phonics_play::LETTER_VOICES.iter().map(|(l, _, _)| *l).collect();
    for word in phonics_play::WORDS {
        for ch in word.chars() {
            assert!(voiced.contains(&ch), "no voice entry for '{}' in '{}'", ch, word);
        }
    }
}
