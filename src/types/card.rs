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

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::error::ErrorReport;
use crate::error::fail;
use crate::types::rank::Rank;
use crate::types::suit::Color;
use crate::types::suit::Suit;

/// The identity of a card: exactly one card per identity exists in a deck.
///
/// The textual form is the rank followed by the suit letter, e.g. `AH`,
/// `10D`, `KS`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CardId {
    pub suit: Suit,
    pub rank: Rank,
}

impl CardId {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// A human-readable name, e.g. `10 of hearts`.
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank, self.suit)
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.letter())
    }
}

impl FromStr for CardId {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(letter) = s.chars().last() else {
            return fail("empty card code");
        };
        let Some(suit) = Suit::from_letter(letter) else {
            return fail(format!("invalid card code: {s}"));
        };
        let rank = &s[..s.len() - letter.len_utf8()];
        let rank = Rank::try_from(rank)
            .map_err(|_| ErrorReport::new(format!("invalid card code: {s}")))?;
        Ok(CardId { suit, rank })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    played: bool,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            played: false,
        }
    }

    pub fn id(&self) -> CardId {
        CardId::new(self.suit, self.rank)
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    pub fn played(&self) -> bool {
        self.played
    }

    /// Flip the played flag, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.played = !self.played;
        self.played
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_parse_codes() -> Fallible<()> {
        assert_eq!("AH".parse::<CardId>()?, CardId::new(Suit::Hearts, Rank::Ace));
        assert_eq!("10d".parse::<CardId>()?, CardId::new(Suit::Diamonds, Rank::Ten));
        assert_eq!("tc".parse::<CardId>()?, CardId::new(Suit::Clubs, Rank::Ten));
        assert_eq!(" ks ".parse::<CardId>()?, CardId::new(Suit::Spades, Rank::King));
        Ok(())
    }

    #[test]
    fn test_parse_invalid_codes() {
        assert!("".parse::<CardId>().is_err());
        assert!("H".parse::<CardId>().is_err());
        assert!("1H".parse::<CardId>().is_err());
        assert!("KX".parse::<CardId>().is_err());
        assert!("K♠".parse::<CardId>().is_err());
    }

    #[test]
    fn test_display_round_trip() -> Fallible<()> {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let id = CardId::new(suit, rank);
                assert_eq!(id.to_string().parse::<CardId>()?, id);
            }
        }
        Ok(())
    }

    #[test]
    fn test_name() {
        assert_eq!(CardId::new(Suit::Hearts, Rank::Ten).name(), "10 of hearts");
    }

    #[test]
    fn test_toggle() {
        let mut card = Card::new(Suit::Clubs, Rank::Seven);
        assert!(!card.played());
        assert!(card.toggle());
        assert!(!card.toggle());
        assert_eq!(card.color(), Color::Black);
    }
}
