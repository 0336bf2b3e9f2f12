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

use crate::types::card::CardId;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NotificationKind {
    Played,
    Returned,
    Info,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Played => "played",
            NotificationKind::Returned => "returned",
            NotificationKind::Info => "info",
            NotificationKind::Error => "error",
        }
    }
}

/// A transient message shown to the user. Never part of the session's
/// persistent state.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub duration: Duration,
}

impl Notification {
    pub fn toggled(id: CardId, played: bool, delta: i32) -> Self {
        let (kind, title) = if played {
            (NotificationKind::Played, "Card played")
        } else {
            (NotificationKind::Returned, "Card returned")
        };
        Self {
            kind,
            title: title.to_string(),
            description: format!("{} (count {delta:+})", id.name()),
            duration: Duration::from_millis(1500),
        }
    }

    pub fn reset() -> Self {
        Self {
            kind: NotificationKind::Info,
            title: "Deck reset".to_string(),
            description: "All cards are back in the deck".to_string(),
            duration: Duration::from_millis(2000),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
            duration: Duration::from_millis(4000),
        }
    }
}
