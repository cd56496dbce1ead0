//! Letter-recognition drill.
//!
//! The simpler sibling of the word drill: a target letter is announced, the
//! learner finds it on the keyboard or the on-screen grid, and a correct
//! answer advances to the next letter. Uses the same [`Action`] vocabulary
//! as the word engine so the host wiring is shared.

use super::deck::Deck;
use super::{Action, Verdict};

pub struct LetterDrill {
    deck: Deck<char>,
    current: char,
}

impl LetterDrill {
    /// Draws the first target letter; the returned actions announce it.
    pub fn new(mut deck: Deck<char>) -> (Self, Vec<Action>) {
        let current = deck.draw();
        let drill = Self { deck, current };
        let actions = vec![Action::PlayLetter(drill.current)];
        (drill, actions)
    }

    /// Deck over the full alphabet, reshuffled each pass.
    pub fn alphabet(seed: u64) -> Deck<char> {
        Deck::shuffled(('A'..='Z').collect(), seed)
    }

    pub fn current(&self) -> char {
        self.current
    }

    pub fn submit_letter(&mut self, key: char) -> Vec<Action> {
        let key = key.to_ascii_uppercase();
        if !key.is_ascii_uppercase() {
            return Vec::new();
        }
        if key == self.current {
            self.current = self.deck.draw();
            vec![
                Action::Feedback(Verdict::Correct),
                Action::PlayLetter(self.current),
            ]
        } else {
            vec![Action::Feedback(Verdict::TryAgain)]
        }
    }

    /// Re-announces the current target letter.
    pub fn replay(&self) -> Vec<Action> {
        vec![Action::PlayLetter(self.current)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn correct_letter_advances_and_announces_the_next() {
        let deck = Deck::rotating(vec!['A', 'B']);
        let (mut drill, actions) = LetterDrill::new(deck);
        assert_eq!(actions, vec![Action::PlayLetter('A')]);

        let a = drill.submit_letter('A');
        assert_eq!(
            a,
            vec![
                Action::Feedback(Verdict::Correct),
                Action::PlayLetter('B'),
            ]
        );
        assert_eq!(drill.current(), 'B');
    }

    #[test]
    fn wrong_letter_keeps_the_target() {
        let deck = Deck::rotating(vec!['A', 'B']);
        let (mut drill, _) = LetterDrill::new(deck);
        let a = drill.submit_letter('Q');
        assert_eq!(a, vec![Action::Feedback(Verdict::TryAgain)]);
        assert_eq!(drill.current(), 'A');
    }

    #[test]
    fn non_alphabetic_input_is_ignored() {
        let deck = Deck::rotating(vec!['A']);
        let (mut drill, _) = LetterDrill::new(deck);
        assert!(drill.submit_letter('3').is_empty());
        assert!(drill.submit_letter('?').is_empty());
    }

    #[test]
    fn alphabet_deck_covers_every_letter_once_per_pass() {
        let mut deck = LetterDrill::alphabet(9);
        let seen: HashSet<char> = (0..26).map(|_| deck.draw()).collect();
        assert_eq!(seen.len(), 26);
    }

    #[test]
    fn lowercase_answers_are_accepted() {
        let deck = Deck::rotating(vec!['A', 'B']);
        let (mut drill, _) = LetterDrill::new(deck);
        let a = drill.submit_letter('a');
        assert!(a.contains(&Action::Feedback(Verdict::Correct)));
    }
}
