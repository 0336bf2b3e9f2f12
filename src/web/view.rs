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

use maud::Markup;
use maud::html;

use crate::deck::DECK_SIZE;
use crate::history::History;
use crate::notification::Notification;
use crate::session::Session;
use crate::timer::TimerState;
use crate::types::card::Card;
use crate::types::suit::Suit;
use crate::types::timestamp::Timestamp;
use crate::types::timestamp::format_duration;

pub fn render_session(
    session: &Session,
    notifications: &[Notification],
    now: Timestamp,
) -> Markup {
    html! {
        div.root {
            (render_header(session, now))
            div.suits {
                @for suit in Suit::ALL {
                    (render_suit(session, suit))
                }
            }
            (render_history(session.history()))
            div.toasts {
                @for notification in notifications {
                    (render_notification(notification))
                }
            }
        }
    }
}

fn render_header(session: &Session, now: Timestamp) -> Markup {
    let percent = session.progress_percent();
    let progress_style = format!("width: {percent:.2}%;");
    let state = session.timer_state();
    let elapsed = session.elapsed(now);
    html! {
        header.header {
            h1 { "Card Counter" }
            div.progress {
                div.progress-label {
                    span { "Progress" }
                    span #progress-percent { (format!("{percent:.0}%")) }
                }
                div.progress-bar {
                    div.progress-fill style=(progress_style) {}
                }
            }
            div.stats {
                div #timer .stat data-state=(state.as_str()) data-elapsed=(elapsed.as_secs()) {
                    span.key { "Time" }
                    span.value { (format_duration(elapsed)) }
                    span.state { (state.as_str()) }
                }
                div #running-count .stat {
                    span.key { "Running count" }
                    span.value { (signed(session.running_count())) }
                }
                div #true-count .stat {
                    span.key { "True count" }
                    span.value { (signed_float(session.true_count())) }
                }
                div #remaining .stat {
                    span.key { "Remaining" }
                    span.value { (session.remaining_cards()) "/" (DECK_SIZE) }
                }
            }
            (render_controls(state))
        }
    }
}

fn render_controls(state: TimerState) -> Markup {
    html! {
        div.controls {
            form action="/" method="post" {
                @match state {
                    TimerState::Idle => {
                        input id="start" type="submit" name="action" value="Start" title="Start the session timer. Shortcut: space.";
                    }
                    TimerState::Running => {
                        input id="pause" type="submit" name="action" value="Pause" title="Pause the session timer. Shortcut: space.";
                        input id="stop" type="submit" name="action" value="Stop" title="End the session and save it to the history.";
                    }
                    TimerState::Paused => {
                        input id="resume" type="submit" name="action" value="Resume" title="Resume the session timer. Shortcut: space.";
                        input id="stop" type="submit" name="action" value="Stop" title="End the session and save it to the history.";
                    }
                }
                div.spacer {}
                input id="reset" type="submit" name="action" value="Reset" title="Put every card back in the deck.";
            }
            a #export .button href="/export" download { "Export" }
        }
    }
}

fn render_suit(session: &Session, suit: Suit) -> Markup {
    let deck = session.deck();
    let remaining = deck.remaining_in_suit(suit);
    let total = deck.suit_cards(suit).count();
    html! {
        section.suit id=(suit.as_str()) {
            div.suit-header {
                h2 class=(suit.color().as_str()) {
                    span.symbol { (suit.symbol()) }
                    span.name { (suit.as_str()) }
                }
                span.suit-remaining {
                    strong { (remaining) } "/" (total) " remaining"
                }
            }
            div.cards {
                @for card in deck.suit_cards(suit) {
                    (render_card(card))
                }
            }
        }
    }
}

fn render_card(card: &Card) -> Markup {
    let id = card.id();
    let class = if card.played() {
        format!("card {} played", card.color().as_str())
    } else {
        format!("card {}", card.color().as_str())
    };
    let title = if card.played() {
        format!("Return the {}", id.name())
    } else {
        format!("Play the {}", id.name())
    };
    html! {
        form.card-form action="/" method="post" {
            input type="hidden" name="card" value=(id.to_string());
            button class=(class) type="submit" name="action" value="Toggle" title=(title) {
                span.corner { (card.rank().as_str()) (card.suit().symbol()) }
                span.pip { (card.suit().symbol()) }
            }
        }
    }
}

fn render_history(history: &History) -> Markup {
    html! {
        details #history .history {
            summary { "History (" (history.len()) ")" }
            @if history.is_empty() {
                p.empty { "No sessions yet." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "#" }
                            th { "Ended" }
                            th { "Cards" }
                            th { "Duration" }
                            th { "Final count" }
                        }
                    }
                    tbody {
                        @for entry in history.entries() {
                            tr {
                                td { (entry.id) }
                                td { (entry.timestamp.local_time()) }
                                td { (entry.cards_played) }
                                td { (format_duration(entry.duration)) }
                                td { (signed(entry.final_running_count)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_notification(notification: &Notification) -> Markup {
    let class = format!("toast {}", notification.kind.as_str());
    html! {
        div class=(class) data-duration=(notification.duration.as_millis()) {
            strong.title { (notification.title) }
            p.description { (notification.description) }
        }
    }
}

fn signed(value: i32) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

fn signed_float(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.2}")
    } else if value < 0.0 {
        format!("{value:.2}")
    } else {
        "0.00".to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;
    use crate::error::Fallible;

    fn t0() -> Timestamp {
        Timestamp::new(Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap())
    }

    #[test]
    fn test_signed() {
        assert_eq!(signed(3), "+3");
        assert_eq!(signed(0), "0");
        assert_eq!(signed(-2), "-2");
        assert_eq!(signed_float(1.0), "+1.00");
        assert_eq!(signed_float(0.0), "0.00");
        assert_eq!(signed_float(-1.0 / 3.0), "-0.33");
    }

    #[test]
    fn test_fresh_session() {
        let session = Session::new();
        let html = render_session(&session, &[], t0()).into_string();
        assert!(html.contains("id=\"start\""));
        assert!(html.contains("data-state=\"idle\""));
        assert!(html.contains("No sessions yet."));
        assert!(html.contains("52/52"));
        assert!(!html.contains("played\""));
        for suit in Suit::ALL {
            assert!(html.contains(&format!("id=\"{}\"", suit.as_str())));
        }
        assert_eq!(html.matches("name=\"card\"").count(), DECK_SIZE);
    }

    #[test]
    fn test_played_card() -> Fallible<()> {
        let mut session = Session::new();
        session.toggle("KS".parse()?, t0());
        let notifications = session.take_notifications();
        let html = render_session(&session, &notifications, t0().plus_secs(65)).into_string();
        assert!(html.contains("class=\"card black played\""));
        assert!(html.contains("Return the K of spades"));
        assert!(html.contains("data-state=\"running\""));
        assert!(html.contains("data-elapsed=\"65\""));
        assert!(html.contains("01:05"));
        assert!(html.contains("id=\"pause\""));
        assert!(html.contains("51/52"));
        assert!(html.contains("Card played"));
        assert!(html.contains("data-duration=\"1500\""));
        Ok(())
    }

    #[test]
    fn test_paused_controls() {
        let mut session = Session::new();
        session.start(t0());
        session.pause(t0().plus_secs(1));
        let html = render_session(&session, &[], t0().plus_secs(2)).into_string();
        assert!(html.contains("id=\"resume\""));
        assert!(html.contains("id=\"stop\""));
        assert!(!html.contains("id=\"pause\""));
    }

    #[test]
    fn test_history() {
        let mut session = Session::new();
        session.start(t0());
        session.stop(t0().plus_secs(90));
        let html = render_session(&session, &[], t0().plus_secs(100)).into_string();
        assert!(html.contains("History (1)"));
        assert!(html.contains("01:30"));
        assert!(!html.contains("No sessions yet."));
    }
}
