use chrono::{DateTime, Utc};

use crate::types::{Event, EventStatus};

/// Resolves an event's status from the clock. Total over any `(start, end,
/// now)` triple; both window boundaries count as `Active`, so a bet placed at
/// exactly `start_time` or `end_time` is legal.
pub fn status(event: &Event, now: DateTime<Utc>) -> EventStatus {
    if now < event.start_time {
        EventStatus::Upcoming
    } else if now <= event.end_time {
        EventStatus::Active
    } else {
        EventStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::collections::BTreeMap;

    fn event_with_window(start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
        Event {
            id: 1,
            title: "Window test".into(),
            description: "desc".into(),
            start_time: start,
            end_time: end,
            outcomes: vec!["Yes".into(), "No".into()],
            probabilities: BTreeMap::from([("Yes".into(), 50), ("No".into(), 50)]),
            created_by: 1,
        }
    }

    #[test]
    fn before_start_is_upcoming() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let event = event_with_window(start, start + Duration::hours(2));
        assert_eq!(status(&event, start - Duration::seconds(1)), EventStatus::Upcoming);
    }

    #[test]
    fn boundary_instants_are_active() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let end = start + Duration::hours(2);
        let event = event_with_window(start, end);

        assert_eq!(status(&event, start), EventStatus::Active);
        assert_eq!(status(&event, end), EventStatus::Active);
        assert_eq!(status(&event, start + Duration::hours(1)), EventStatus::Active);
    }

    #[test]
    fn after_end_is_completed() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let end = start + Duration::hours(2);
        let event = event_with_window(start, end);
        assert_eq!(status(&event, end + Duration::seconds(1)), EventStatus::Completed);
    }
}
