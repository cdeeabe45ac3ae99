use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type EventId = i64;
pub type BetId = i64;
pub type UserId = i64;

/// Time-derived event status. Never stored and never read from the wire;
/// recomputed from the clock on every read (see `lifecycle::status`) and
/// serialized only for display payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Active,
    Completed,
}

/// An event as the API returns it. `outcomes` is the canonical JSON array of
/// labels; `probabilities` is an object keyed by those same labels with
/// integer percentage values summing to 100. `BTreeMap` keeps repeated
/// serialization byte-identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub outcomes: Vec<String>,
    pub probabilities: BTreeMap<String, u32>,
    pub created_by: UserId,
}

impl Event {
    pub fn has_outcome(&self, label: &str) -> bool {
        self.outcomes.iter().any(|o| o == label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bet {
    pub id: BetId,
    pub event_id: EventId,
    pub user_id: UserId,
    pub outcome: String,
    pub amount: f64,
    pub placed_at: DateTime<Utc>,
}

/// Derived results for one event. Outcomes with zero bets are omitted from
/// `outcome_counts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResults {
    pub event_id: EventId,
    pub total_bets: u64,
    pub outcome_counts: BTreeMap<String, u64>,
}

/// One row of the event-creation form: both fields arrive as raw text.
#[derive(Debug, Clone)]
pub struct OutcomeEntry {
    pub name: String,
    pub probability: String,
}

impl OutcomeEntry {
    pub fn new(name: impl Into<String>, probability: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            probability: probability.into(),
        }
    }
}

/// Unvalidated event-creation input, exactly as the admin form produces it.
/// `validate::event` turns this into a `CreateEventRequest` or a specific
/// validation failure.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub outcomes: Vec<OutcomeEntry>,
    pub created_by: UserId,
}

/// Normalized POST /events/ body: trimmed strings, outcomes as an ordered
/// list, probabilities keyed by the trimmed names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_by: UserId,
    pub outcomes: Vec<String>,
    pub probabilities: BTreeMap<String, u32>,
}

/// Unvalidated bet input; `amount` is the raw text of the stake field.
#[derive(Debug, Clone)]
pub struct BetDraft {
    pub event_id: EventId,
    pub outcome: String,
    pub amount: String,
    pub user_id: UserId,
}

/// Normalized POST /bets/ body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBetRequest {
    pub event_id: EventId,
    pub outcome: String,
    pub amount: f64,
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn event_wire_shape_is_canonical() {
        let event = Event {
            id: 7,
            title: "Final".into(),
            description: "Cup final".into(),
            start_time: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 6, 1, 14, 0, 0).unwrap(),
            outcomes: vec!["Yes".into(), "No".into()],
            probabilities: BTreeMap::from([("Yes".into(), 50), ("No".into(), 50)]),
            created_by: 123,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["outcomes"], serde_json::json!(["Yes", "No"]));
        assert_eq!(json["probabilities"], serde_json::json!({"No": 50, "Yes": 50}));
        assert_eq!(json["start_time"], "2025-06-01T12:00:00Z");

        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, 7);
        assert!(back.has_outcome("Yes"));
        assert!(!back.has_outcome("Maybe"));
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EventStatus::Active).unwrap(),
            "\"active\""
        );
    }
}
