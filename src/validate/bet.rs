use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::lifecycle;
use crate::types::{BetDraft, CreateBetRequest, Event, EventStatus};

/// Checks a bet draft against the event it targets and produces the
/// normalized POST body. All three rules run before any network call:
/// the event must be open right now, the outcome must belong to the event,
/// and the stake must be a positive number.
pub fn validate_bet(
    draft: &BetDraft,
    event: &Event,
    now: DateTime<Utc>,
) -> Result<CreateBetRequest, ValidationError> {
    if lifecycle::status(event, now) != EventStatus::Active {
        return Err(ValidationError::EventNotOpen);
    }

    if !event.has_outcome(&draft.outcome) {
        return Err(ValidationError::UnknownOutcome {
            outcome: draft.outcome.clone(),
        });
    }

    let amount: f64 = draft
        .amount
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAmount)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::InvalidAmount);
    }

    Ok(CreateBetRequest {
        event_id: event.id,
        outcome: draft.outcome.clone(),
        amount,
        user_id: draft.user_id,
    })
}
