// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::deck::DECK_SIZE;
use crate::types::rank::Rank;

/// Hi-Lo counting state for a single deck.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Counter {
    running_count: i32,
    remaining_cards: usize,
}

impl Counter {
    pub fn new() -> Self {
        Self {
            running_count: 0,
            remaining_cards: DECK_SIZE,
        }
    }

    pub fn running_count(&self) -> i32 {
        self.running_count
    }

    pub fn remaining_cards(&self) -> usize {
        self.remaining_cards
    }

    pub fn cards_played(&self) -> usize {
        DECK_SIZE - self.remaining_cards
    }

    /// A card of the given rank left the deck. Returns the change to the
    /// running count.
    pub fn play(&mut self, rank: Rank) -> i32 {
        if self.remaining_cards == 0 {
            log::error!("Playing a card from an empty deck.");
            return 0;
        }
        let delta = rank.hi_lo();
        self.remaining_cards -= 1;
        self.running_count += delta;
        delta
    }

    /// A card of the given rank went back into the deck. Returns the change
    /// to the running count.
    pub fn unplay(&mut self, rank: Rank) -> i32 {
        if self.remaining_cards == DECK_SIZE {
            log::error!("Returning a card to a full deck.");
            return 0;
        }
        let delta = -rank.hi_lo();
        self.remaining_cards += 1;
        self.running_count += delta;
        delta
    }

    /// The running count divided by the number of decks remaining. Zero once
    /// the deck is exhausted.
    pub fn true_count(&self) -> f64 {
        let remaining_decks = self.remaining_cards as f64 / DECK_SIZE as f64;
        if remaining_decks == 0.0 {
            0.0
        } else {
            self.running_count as f64 / remaining_decks
        }
    }

    pub fn progress_percent(&self) -> f64 {
        (self.cards_played() as f64 / DECK_SIZE as f64) * 100.0
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::generate_deck;

    #[test]
    fn test_fresh_counter() {
        let counter = Counter::new();
        assert_eq!(counter.running_count(), 0);
        assert_eq!(counter.remaining_cards(), 52);
        assert_eq!(counter.true_count(), 0.0);
        assert_eq!(counter.progress_percent(), 0.0);
    }

    #[test]
    fn test_play_and_unplay() {
        let mut counter = Counter::new();
        assert_eq!(counter.play(Rank::Two), 1);
        assert_eq!(counter.remaining_cards(), 51);
        assert_eq!(counter.running_count(), 1);
        assert_eq!(counter.unplay(Rank::Two), -1);
        assert_eq!(counter, Counter::new());
    }

    #[test]
    fn test_true_count() {
        let mut counter = Counter::new();
        // 26 low cards out: running count +26 with half a deck left.
        for _ in 0..26 {
            counter.play(Rank::Four);
        }
        assert_eq!(counter.remaining_cards(), 26);
        assert_eq!(counter.true_count(), 52.0);
        assert_eq!(counter.progress_percent(), 50.0);
    }

    #[test]
    fn test_full_deck_sums_to_zero() {
        let mut counter = Counter::new();
        for card in generate_deck().cards() {
            counter.play(card.rank());
        }
        assert_eq!(counter.running_count(), 0);
        assert_eq!(counter.remaining_cards(), 0);
        assert_eq!(counter.true_count(), 0.0);
        assert_eq!(counter.progress_percent(), 100.0);
    }

    #[test]
    fn test_bounds() {
        let mut counter = Counter::new();
        assert_eq!(counter.unplay(Rank::King), 0);
        assert_eq!(counter.remaining_cards(), 52);
        for _ in 0..60 {
            counter.play(Rank::Nine);
        }
        assert_eq!(counter.remaining_cards(), 0);
    }
}
