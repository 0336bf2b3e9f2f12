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

use std::collections::VecDeque;
use std::time::Duration;

use crate::types::timestamp::Timestamp;

/// The maximum number of sessions kept in the history.
pub const HISTORY_CAPACITY: usize = 10;

/// A summary of a stopped session.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub id: u64,
    pub timestamp: Timestamp,
    pub cards_played: usize,
    pub duration: Duration,
    pub final_running_count: i32,
}

/// Stopped sessions, most recent first.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    next_id: u64,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a session at the front, evicting the oldest entry once the
    /// history is full.
    pub fn record(
        &mut self,
        timestamp: Timestamp,
        cards_played: usize,
        duration: Duration,
        final_running_count: i32,
    ) -> HistoryEntry {
        self.next_id += 1;
        let entry = HistoryEntry {
            id: self.next_id,
            timestamp,
            cards_played,
            duration,
            final_running_count,
        };
        self.entries.push_front(entry.clone());
        if self.entries.len() > HISTORY_CAPACITY {
            if let Some(evicted) = self.entries.pop_back() {
                log::debug!("Evicting session #{} from history.", evicted.id);
            }
        }
        entry
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
