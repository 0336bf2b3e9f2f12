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
use axum::response::Html;

use crate::types::timestamp::Timestamp;
use crate::web::state::ServerState;
use crate::web::template::page_template;
use crate::web::view::render_session;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let mut session = state.acquire();
    let notifications = session.take_notifications();
    let body = render_session(&session, &notifications, Timestamp::now());
    let html = page_template(body);
    (StatusCode::OK, Html(html.into_string()))
}
