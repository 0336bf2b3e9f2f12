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

use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CONTENT_DISPOSITION;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;

use crate::export::export_filename;
use crate::export::export_json;
use crate::notification::Notification;
use crate::types::timestamp::Timestamp;
use crate::web::state::ServerState;

/// Serve the current counters and history as a JSON attachment. On failure
/// the user is sent back to the main page with an error notification.
pub async fn export_handler(State(state): State<ServerState>) -> Response {
    let now = Timestamp::now();
    let mut session = state.acquire();
    match export_json(&session, now) {
        Ok(json) => {
            let disposition = format!("attachment; filename=\"{}\"", export_filename(now));
            log::debug!("Exporting {} history entries.", session.history().len());
            (
                StatusCode::OK,
                [
                    (CONTENT_TYPE, "application/json".to_string()),
                    (CONTENT_DISPOSITION, disposition),
                ],
                json,
            )
                .into_response()
        }
        Err(e) => {
            log::error!("Export failed: {e}");
            session.notify(Notification::error("Export failed", e.to_string()));
            Redirect::to("/").into_response()
        }
    }
}
