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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::notification::Notification;
use crate::types::card::CardId;
use crate::types::timestamp::Timestamp;
use crate::web::state::ServerState;

#[derive(Debug, Deserialize)]
enum Action {
    Toggle,
    Start,
    Pause,
    Resume,
    Stop,
    Reset,
    Shutdown,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
    card: Option<String>,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    match action_handler(&state, form) {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
            state
                .acquire()
                .notify(Notification::error("Action failed", e.to_string()));
        }
    }
    Redirect::to("/")
}

fn action_handler(state: &ServerState, form: FormData) -> Fallible<()> {
    let now = Timestamp::now();
    match form.action {
        Action::Toggle => {
            // A card that doesn't parse can't be in the deck, so it is
            // ignored like any other unknown card.
            let id = form.card.as_deref().map(str::parse::<CardId>);
            match id {
                Some(Ok(id)) => {
                    state.acquire().toggle(id, now);
                }
                Some(Err(e)) => {
                    log::debug!("Ignoring toggle: {e}");
                }
                None => {
                    log::debug!("Ignoring toggle without a card.");
                }
            }
        }
        Action::Start => {
            state.acquire().start(now);
        }
        Action::Pause => {
            state.acquire().pause(now);
        }
        Action::Resume => {
            state.acquire().resume(now);
        }
        Action::Stop => {
            state.acquire().stop(now);
        }
        Action::Reset => {
            state.acquire().reset();
        }
        Action::Shutdown => {
            let tx = state.shutdown_tx.lock().unwrap().take();
            match tx {
                Some(tx) => {
                    log::debug!("Shutting down.");
                    if tx.send(()).is_err() {
                        return fail("server is not running.");
                    }
                }
                None => {
                    return fail("server is already shutting down.");
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tokio::sync::oneshot;

    use super::*;
    use crate::timer::TimerState;

    fn form(action: Action, card: Option<&str>) -> FormData {
        FormData {
            action,
            card: card.map(|c| c.to_string()),
        }
    }

    #[test]
    fn test_toggle() -> Fallible<()> {
        let (tx, _rx) = oneshot::channel();
        let state = ServerState::new(tx);
        action_handler(&state, form(Action::Toggle, Some("6D")))?;
        assert_eq!(state.acquire().running_count(), 1);
        assert_eq!(state.acquire().timer_state(), TimerState::Running);
        Ok(())
    }

    #[test]
    fn test_unknown_card_is_ignored() -> Fallible<()> {
        let (tx, _rx) = oneshot::channel();
        let state = ServerState::new(tx);
        action_handler(&state, form(Action::Toggle, Some("ZZ")))?;
        action_handler(&state, form(Action::Toggle, None))?;
        assert_eq!(state.acquire().remaining_cards(), 52);
        assert!(state.acquire().take_notifications().is_empty());
        Ok(())
    }

    #[test]
    fn test_timer_actions() -> Fallible<()> {
        let (tx, _rx) = oneshot::channel();
        let state = ServerState::new(tx);
        action_handler(&state, form(Action::Start, None))?;
        action_handler(&state, form(Action::Pause, None))?;
        assert_eq!(state.acquire().timer_state(), TimerState::Paused);
        action_handler(&state, form(Action::Resume, None))?;
        assert_eq!(state.acquire().timer_state(), TimerState::Running);
        action_handler(&state, form(Action::Stop, None))?;
        assert_eq!(state.acquire().timer_state(), TimerState::Idle);
        assert_eq!(state.acquire().history().len(), 1);
        Ok(())
    }

    #[test]
    fn test_shutdown_twice() -> Fallible<()> {
        let (tx, mut rx) = oneshot::channel();
        let state = ServerState::new(tx);
        action_handler(&state, form(Action::Shutdown, None))?;
        assert!(rx.try_recv().is_ok());
        assert!(action_handler(&state, form(Action::Shutdown, None)).is_err());
        Ok(())
    }
}
