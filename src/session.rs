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

use std::time::Duration;

use crate::count::Counter;
use crate::deck::Deck;
use crate::deck::generate_deck;
use crate::history::History;
use crate::history::HistoryEntry;
use crate::notification::Notification;
use crate::timer::Timer;
use crate::timer::TimerState;
use crate::types::card::CardId;
use crate::types::timestamp::Timestamp;

/// Everything the user is tracking: the deck, the count, the session timer,
/// and the history of stopped sessions.
pub struct Session {
    deck: Deck,
    counter: Counter,
    timer: Timer,
    history: History,
    notifications: Vec<Notification>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            deck: generate_deck(),
            counter: Counter::new(),
            timer: Timer::Idle,
            history: History::new(),
            notifications: Vec::new(),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn running_count(&self) -> i32 {
        self.counter.running_count()
    }

    pub fn true_count(&self) -> f64 {
        self.counter.true_count()
    }

    pub fn remaining_cards(&self) -> usize {
        self.counter.remaining_cards()
    }

    pub fn cards_played(&self) -> usize {
        self.counter.cards_played()
    }

    pub fn progress_percent(&self) -> f64 {
        self.counter.progress_percent()
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn elapsed(&self, now: Timestamp) -> Duration {
        self.timer.elapsed(now)
    }

    /// Flip a card between played and returned, updating the count. Playing
    /// a card while no session is running starts one. Unknown identities are
    /// ignored. Returns the card's new played flag.
    pub fn toggle(&mut self, id: CardId, now: Timestamp) -> Option<bool> {
        let Some(played) = self.deck.toggle(id) else {
            log::debug!("Ignoring toggle of unknown card {id}.");
            return None;
        };
        let delta = if played {
            self.counter.play(id.rank)
        } else {
            self.counter.unplay(id.rank)
        };
        log::debug!(
            "{id} {} RC={} TC={:.2} remaining={}",
            if played { "played" } else { "returned" },
            self.counter.running_count(),
            self.counter.true_count(),
            self.counter.remaining_cards()
        );
        if played && self.timer.start(now) {
            log::debug!("Session started by first card.");
        }
        self.notifications.push(Notification::toggled(id, played, delta));
        Some(played)
    }

    pub fn start(&mut self, now: Timestamp) -> bool {
        let started = self.timer.start(now);
        if !started {
            log::debug!("Ignoring start: timer is {}.", self.timer.state().as_str());
        }
        started
    }

    pub fn pause(&mut self, now: Timestamp) -> bool {
        let paused = self.timer.pause(now);
        if !paused {
            log::debug!("Ignoring pause: timer is {}.", self.timer.state().as_str());
        }
        paused
    }

    pub fn resume(&mut self, now: Timestamp) -> bool {
        let resumed = self.timer.resume(now);
        if !resumed {
            log::debug!("Ignoring resume: timer is {}.", self.timer.state().as_str());
        }
        resumed
    }

    /// End the current session and archive its summary. The deck and count
    /// are left as they are. Returns `None` if no session was active.
    pub fn stop(&mut self, now: Timestamp) -> Option<HistoryEntry> {
        let Some(duration) = self.timer.stop(now) else {
            log::debug!("Ignoring stop: no active session.");
            return None;
        };
        let entry = self.history.record(
            now,
            self.counter.cards_played(),
            duration,
            self.counter.running_count(),
        );
        log::debug!(
            "Session #{} stopped: {} cards, RC={}",
            entry.id,
            entry.cards_played,
            entry.final_running_count
        );
        Some(entry)
    }

    /// Put every card back, zero the count, and clear the timer. History is
    /// kept.
    pub fn reset(&mut self) {
        self.deck = generate_deck();
        self.counter = Counter::new();
        self.timer = Timer::Idle;
        self.notifications.push(Notification::reset());
        log::debug!("Deck reset.");
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drain the notifications raised since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
