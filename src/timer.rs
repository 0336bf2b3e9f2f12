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

use crate::types::timestamp::Timestamp;

/// A session stopwatch. Elapsed time is derived from wall-clock timestamps,
/// so nothing needs to tick for it to advance.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Timer {
    /// No session started.
    #[default]
    Idle,
    /// Counting since `resumed_at`, on top of `accumulated`.
    Running {
        resumed_at: Timestamp,
        accumulated: Duration,
    },
    /// Frozen at `accumulated`.
    Paused { accumulated: Duration },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

impl TimerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerState::Idle => "idle",
            TimerState::Running => "running",
            TimerState::Paused => "paused",
        }
    }
}

impl Timer {
    pub fn state(&self) -> TimerState {
        match self {
            Timer::Idle => TimerState::Idle,
            Timer::Running { .. } => TimerState::Running,
            Timer::Paused { .. } => TimerState::Paused,
        }
    }

    pub fn elapsed(&self, now: Timestamp) -> Duration {
        match self {
            Timer::Idle => Duration::ZERO,
            Timer::Running {
                resumed_at,
                accumulated,
            } => *accumulated + now.since(*resumed_at),
            Timer::Paused { accumulated } => *accumulated,
        }
    }

    /// Idle to running. Returns false if the timer was not idle.
    pub fn start(&mut self, now: Timestamp) -> bool {
        match self {
            Timer::Idle => {
                *self = Timer::Running {
                    resumed_at: now,
                    accumulated: Duration::ZERO,
                };
                true
            }
            _ => false,
        }
    }

    /// Running to paused. Returns false if the timer was not running.
    pub fn pause(&mut self, now: Timestamp) -> bool {
        match self {
            Timer::Running { .. } => {
                *self = Timer::Paused {
                    accumulated: self.elapsed(now),
                };
                true
            }
            _ => false,
        }
    }

    /// Paused to running. Returns false if the timer was not paused.
    pub fn resume(&mut self, now: Timestamp) -> bool {
        match *self {
            Timer::Paused { accumulated } => {
                *self = Timer::Running {
                    resumed_at: now,
                    accumulated,
                };
                true
            }
            _ => false,
        }
    }

    /// Running or paused to idle, returning the final elapsed time. Returns
    /// `None` if the timer was already idle.
    pub fn stop(&mut self, now: Timestamp) -> Option<Duration> {
        match self {
            Timer::Idle => None,
            _ => {
                let elapsed = self.elapsed(now);
                *self = Timer::Idle;
                Some(elapsed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    fn t0() -> Timestamp {
        Timestamp::new(Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap())
    }

    #[test]
    fn test_idle() {
        let mut timer = Timer::default();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.elapsed(t0().plus_secs(100)), Duration::ZERO);
        assert!(!timer.pause(t0()));
        assert!(!timer.resume(t0()));
        assert_eq!(timer.stop(t0()), None);
    }

    #[test]
    fn test_running() {
        let mut timer = Timer::Idle;
        assert!(timer.start(t0()));
        assert!(!timer.start(t0().plus_secs(5)));
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.elapsed(t0().plus_secs(42)), Duration::from_secs(42));
    }

    #[test]
    fn test_paused_time_is_not_counted() {
        let mut timer = Timer::Idle;
        timer.start(t0());
        assert!(timer.pause(t0().plus_secs(10)));
        assert_eq!(timer.state(), TimerState::Paused);
        assert_eq!(timer.elapsed(t0().plus_secs(500)), Duration::from_secs(10));
        assert!(timer.resume(t0().plus_secs(100)));
        assert_eq!(timer.elapsed(t0().plus_secs(105)), Duration::from_secs(15));
        assert_eq!(timer.stop(t0().plus_secs(110)), Some(Duration::from_secs(20)));
        assert_eq!(timer, Timer::Idle);
    }

    #[test]
    fn test_stop_while_paused() {
        let mut timer = Timer::Idle;
        timer.start(t0());
        timer.pause(t0().plus_secs(7));
        assert_eq!(timer.stop(t0().plus_secs(1000)), Some(Duration::from_secs(7)));
    }
}
