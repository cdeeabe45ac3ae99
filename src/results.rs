use std::collections::BTreeMap;

use crate::types::{Bet, EventId, EventResults, UserId};

/// Reduces a bet collection into per-outcome counts. Order-independent and
/// idempotent: rerunning on the same bets yields an identical value, and
/// `BTreeMap` keys keep the serialized form stable too. Outcomes nobody bet
/// on do not appear.
pub fn summarize(event_id: EventId, bets: &[Bet]) -> EventResults {
    let mut outcome_counts: BTreeMap<String, u64> = BTreeMap::new();
    for bet in bets {
        *outcome_counts.entry(bet.outcome.clone()).or_insert(0) += 1;
    }

    EventResults {
        event_id,
        total_bets: bets.len() as u64,
        outcome_counts,
    }
}

/// One user's bets on an event, oldest first. Stable sort, so bets sharing a
/// `placed_at` keep their submission order.
pub fn bets_for_user(bets: &[Bet], user_id: UserId) -> Vec<Bet> {
    let mut mine: Vec<Bet> = bets
        .iter()
        .filter(|b| b.user_id == user_id)
        .cloned()
        .collect();
    mine.sort_by_key(|b| b.placed_at);
    mine
}
