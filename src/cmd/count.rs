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

use crate::error::Fallible;
use crate::session::Session;
use crate::types::card::CardId;
use crate::types::timestamp::Timestamp;

pub struct CountSummary {
    pub cards_played: usize,
    pub running_count: i32,
    pub true_count: f64,
    pub remaining_cards: usize,
}

impl Display for CountSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cards played:   {}", self.cards_played)?;
        writeln!(f, "Running count:  {}", self.running_count)?;
        writeln!(f, "True count:     {:.2}", self.true_count)?;
        write!(f, "Remaining:      {}", self.remaining_cards)
    }
}

/// Toggle each card in order, exactly as clicking it in the UI would.
pub fn count_cards(codes: &[String]) -> Fallible<CountSummary> {
    let ids: Vec<CardId> = codes
        .iter()
        .map(|code| code.parse::<CardId>())
        .collect::<Fallible<Vec<_>>>()?;
    let mut session = Session::new();
    let now = Timestamp::now();
    for id in ids {
        session.toggle(id, now);
    }
    Ok(CountSummary {
        cards_played: session.cards_played(),
        running_count: session.running_count(),
        true_count: session.true_count(),
        remaining_cards: session.remaining_cards(),
    })
}
