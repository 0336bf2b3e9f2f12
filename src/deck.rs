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

use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::rank::Rank;
use crate::types::suit::Suit;

pub const DECK_SIZE: usize = 52;

/// All 52 cards of a standard deck, one per identity. Cards are never added
/// or removed, only flagged as played.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

/// Build a fresh deck with every card unplayed, in suit order (hearts,
/// diamonds, clubs, spades) and rank order (A, 2..10, J, Q, K) within each
/// suit.
pub fn generate_deck() -> Deck {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    Deck { cards }
}

impl Deck {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Flip the played flag of the card with the given identity, returning
    /// its new value, or `None` if no such card exists.
    pub fn toggle(&mut self, id: CardId) -> Option<bool> {
        self.cards
            .iter_mut()
            .find(|card| card.id() == id)
            .map(|card| card.toggle())
    }

    pub fn suit_cards(&self, suit: Suit) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |card| card.suit() == suit)
    }

    pub fn remaining_in_suit(&self, suit: Suit) -> usize {
        self.suit_cards(suit).filter(|card| !card.played()).count()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn played_count(deck: &Deck) -> usize {
        deck.cards().iter().filter(|card| card.played()).count()
    }

    #[test]
    fn test_generate_deck() {
        let deck = generate_deck();
        assert_eq!(deck.cards().len(), DECK_SIZE);
        let ids: HashSet<CardId> = deck.cards().iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), DECK_SIZE);
        assert!(deck.cards().iter().all(|c| !c.played()));
    }

    #[test]
    fn test_deck_order() {
        let deck = generate_deck();
        let cards = deck.cards();
        assert_eq!(cards[0].id(), CardId::new(Suit::Hearts, Rank::Ace));
        assert_eq!(cards[12].id(), CardId::new(Suit::Hearts, Rank::King));
        assert_eq!(cards[13].id(), CardId::new(Suit::Diamonds, Rank::Ace));
        assert_eq!(cards[51].id(), CardId::new(Suit::Spades, Rank::King));
    }

    #[test]
    fn test_toggle() {
        let mut deck = generate_deck();
        let id = CardId::new(Suit::Clubs, Rank::Five);
        assert_eq!(deck.toggle(id), Some(true));
        assert_eq!(played_count(&deck), 1);
        assert_eq!(deck.remaining_in_suit(Suit::Clubs), 12);
        assert_eq!(deck.remaining_in_suit(Suit::Hearts), 13);
        assert_eq!(deck.toggle(id), Some(false));
        assert_eq!(played_count(&deck), 0);
        assert_eq!(deck.cards().len(), DECK_SIZE);
    }

    #[test]
    fn test_suit_cards() {
        let deck = generate_deck();
        for suit in Suit::ALL {
            let cards: Vec<&Card> = deck.suit_cards(suit).collect();
            assert_eq!(cards.len(), 13);
            assert!(cards.iter().all(|c| c.suit() == suit));
        }
    }
}
