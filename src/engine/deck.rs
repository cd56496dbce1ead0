//! Exhaustive-shuffle deck used for word and letter selection.
//!
//! Every item appears exactly once per pass; on exhaustion the deck refills.
//! A deck is either `rotating` (fixed list order, deterministic) or
//! `shuffled` (Fisher–Yates per pass, seeded so gameplay stays reproducible
//! under test).

/// Linear-congruential generator; prototype randomness, not crypto secure.
#[derive(Debug, Clone)]
pub(crate) struct Lcg {
    state: u64,
}

impl Lcg {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn next_index(&mut self, bound: usize) -> usize {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        if bound == 0 {
            return 0;
        }
        ((self.state >> 16) as usize) % bound
    }
}

#[derive(Debug, Clone)]
pub struct Deck<T> {
    items: Vec<T>,
    order: Vec<usize>,
    pos: usize,
    rng: Option<Lcg>,
}

impl<T: Clone> Deck<T> {
    /// Deck that cycles the list in its given order.
    pub fn rotating(items: Vec<T>) -> Self {
        assert!(!items.is_empty(), "deck requires at least one item");
        let order = (0..items.len()).collect();
        Self {
            items,
            order,
            pos: 0,
            rng: None,
        }
    }

    /// Deck that reshuffles on every pass.
    pub fn shuffled(items: Vec<T>, seed: u64) -> Self {
        let mut deck = Self::rotating(items);
        deck.rng = Some(Lcg::new(seed));
        deck.reshuffle();
        deck
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Next item, refilling the pass when exhausted.
    pub fn draw(&mut self) -> T {
        if self.pos >= self.order.len() {
            self.pos = 0;
            self.reshuffle();
        }
        let item = self.items[self.order[self.pos]].clone();
        self.pos += 1;
        item
    }

    fn reshuffle(&mut self) {
        let Some(rng) = self.rng.as_mut() else {
            return;
        };
        // Fisher–Yates over the index order.
        for i in (1..self.order.len()).rev() {
            let j = rng.next_index(i + 1);
            self.order.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rotating_deck_cycles_in_order() {
        let mut deck = Deck::rotating(vec!["DOG", "CAT", "SUN"]);
        let drawn: Vec<_> = (0..7).map(|_| deck.draw()).collect();
        assert_eq!(drawn, ["DOG", "CAT", "SUN", "DOG", "CAT", "SUN", "DOG"]);
    }

    #[test]
    fn shuffled_deck_is_exhaustive_per_pass() {
        let items: Vec<String> = (0..10).map(|i| format!("W{i}")).collect();
        let mut deck = Deck::shuffled(items.clone(), 42);
        for _pass in 0..3 {
            let seen: HashSet<String> = (0..items.len()).map(|_| deck.draw()).collect();
            assert_eq!(seen.len(), items.len(), "each pass covers every item once");
        }
    }

    #[test]
    fn shuffled_deck_is_reproducible_for_a_seed() {
        let items = vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()];
        let mut a = Deck::shuffled(items.clone(), 7);
        let mut b = Deck::shuffled(items, 7);
        for _ in 0..12 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn single_item_deck_repeats_it() {
        let mut deck = Deck::shuffled(vec!["DOG"], 1);
        assert_eq!(deck.draw(), "DOG");
        assert_eq!(deck.draw(), "DOG");
    }
}
