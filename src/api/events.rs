use super::ApiClient;
use crate::error::Result;
use crate::types::{Bet, Event, EventDraft, EventId, EventResults, UserId};
use crate::validate;

impl ApiClient {
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        self.get_json("/events/").await
    }

    pub async fn get_event(&self, id: EventId) -> Result<Event> {
        self.get_json(&format!("/events/{id}")).await
    }

    pub async fn get_results(&self, id: EventId) -> Result<EventResults> {
        self.get_json(&format!("/events/{id}/results")).await
    }

    pub async fn user_bets(&self, event_id: EventId, user_id: UserId) -> Result<Vec<Bet>> {
        self.get_json(&format!("/events/{event_id}/user-bets/{user_id}"))
            .await
    }

    /// Validates the draft locally (all of the creation rules, fail fast)
    /// and only then submits it. Admin-only on the server side.
    pub async fn create_event(&self, draft: &EventDraft) -> Result<Event> {
        let request = validate::validate_event(draft)?;

        tracing::info!(title = %request.title, "creating event");
        let event: Event = self.post_json("/events/", &request).await?;
        tracing::info!(event_id = event.id, "event created");

        Ok(event)
    }
}
