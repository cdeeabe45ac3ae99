use std::sync::atomic::Ordering;

use chrono::Utc;

use super::ApiClient;
use crate::error::{Error, Result};
use crate::types::{Bet, BetDraft, UserId};
use crate::validate;

impl ApiClient {
    /// All of one user's bets across every event.
    pub async fn list_user_bets(&self, user_id: UserId) -> Result<Vec<Bet>> {
        self.get_json(&format!("/bets/{user_id}")).await
    }

    /// Fetches the target event, validates the draft against it and the
    /// current clock, and submits the normalized bet. A second call while
    /// one submission is in flight fails with a conflict instead of placing
    /// a duplicate bet; there is no server-side idempotency key, so each
    /// accepted submission creates exactly one new bet.
    pub async fn place_bet(&self, draft: &BetDraft) -> Result<Bet> {
        if self.submitting_flag().swap(true, Ordering::SeqCst) {
            return Err(Error::Conflict(
                "a bet submission is already in flight".into(),
            ));
        }

        let result = self.place_bet_inner(draft).await;
        self.submitting_flag().store(false, Ordering::SeqCst);
        result
    }

    async fn place_bet_inner(&self, draft: &BetDraft) -> Result<Bet> {
        let event = self.get_event(draft.event_id).await?;
        let request = validate::validate_bet(draft, &event, Utc::now())?;

        tracing::info!(
            event_id = request.event_id,
            outcome = %request.outcome,
            amount = request.amount,
            "placing bet"
        );
        let bet: Bet = self.post_json("/bets/", &request).await?;
        tracing::info!(bet_id = bet.id, "bet placed");

        Ok(bet)
    }
}
