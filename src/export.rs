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

use serde::Serialize;

use crate::error::Fallible;
use crate::history::HistoryEntry;
use crate::session::Session;
use crate::types::timestamp::Timestamp;
use crate::types::timestamp::format_duration;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Export {
    current_game: CurrentGameExport,
    history: Vec<HistoryExport>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CurrentGameExport {
    cards_played: usize,
    running_count: i32,
    true_count: f64,
    elapsed_time: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryExport {
    id: u64,
    timestamp: Timestamp,
    cards_played: usize,
    duration: String,
    final_count: i32,
}

impl From<&HistoryEntry> for HistoryExport {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id,
            timestamp: entry.timestamp,
            cards_played: entry.cards_played,
            duration: format_duration(entry.duration),
            final_count: entry.final_running_count,
        }
    }
}

/// Snapshot the session for export. Does not modify the session.
pub fn get_export(session: &Session, now: Timestamp) -> Export {
    Export {
        current_game: CurrentGameExport {
            cards_played: session.cards_played(),
            running_count: session.running_count(),
            true_count: session.true_count(),
            elapsed_time: format_duration(session.elapsed(now)),
        },
        history: session.history().entries().map(HistoryExport::from).collect(),
    }
}

pub fn export_json(session: &Session, now: Timestamp) -> Fallible<String> {
    let export = get_export(session, now);
    let json = serde_json::to_string_pretty(&export)?;
    Ok(json)
}

/// The download name, dated by the local calendar day.
pub fn export_filename(now: Timestamp) -> String {
    format!("card-counter-{}.json", now.local_date().format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;
    use serde_json::Value;
    use serde_json::json;

    use super::*;

    fn t0() -> Timestamp {
        Timestamp::new(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_export_shape() -> Fallible<()> {
        let mut session = Session::new();
        for code in ["2H", "3C", "KD"] {
            session.toggle(code.parse()?, t0());
        }
        session.stop(t0().plus_secs(75));
        session.toggle("4S".parse()?, t0().plus_secs(80));

        let json = export_json(&session, t0().plus_secs(85))?;
        let value: Value = serde_json::from_str(&json)?;
        assert_eq!(value["currentGame"]["cardsPlayed"], json!(4));
        assert_eq!(value["currentGame"]["runningCount"], json!(2));
        assert_eq!(value["currentGame"]["elapsedTime"], json!("00:05"));
        assert!(value["currentGame"]["trueCount"].is_f64());
        let history = value["history"].as_array().cloned().unwrap_or_default();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0]["cardsPlayed"], json!(3));
        assert_eq!(history[0]["finalCount"], json!(1));
        assert_eq!(history[0]["duration"], json!("01:15"));
        assert_eq!(history[0]["timestamp"], json!("2025-06-01T12:01:15+00:00"));
        Ok(())
    }

    #[test]
    fn test_export_does_not_touch_session() -> Fallible<()> {
        let mut session = Session::new();
        session.toggle("AH".parse()?, t0());
        let _ = export_json(&session, t0().plus_secs(1))?;
        assert_eq!(session.running_count(), -1);
        assert_eq!(session.remaining_cards(), 51);
        Ok(())
    }

    #[test]
    fn test_export_filename() {
        let name = export_filename(t0());
        assert!(name.starts_with("card-counter-"));
        assert!(name.ends_with(".json"));
        assert_eq!(name.len(), "card-counter-2025-06-01.json".len());
    }
}
