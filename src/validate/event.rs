use std::collections::{BTreeMap, BTreeSet};

use crate::error::ValidationError;
use crate::types::{CreateEventRequest, EventDraft};

/// Checks an event-creation draft and produces the normalized POST body.
///
/// Rules run in a fixed order and stop at the first failure, so the caller
/// always sees the single most relevant message: required text fields, time
/// window, per-outcome completeness, probability parsing, name uniqueness,
/// and finally the sum. Nothing is submitted until every rule passes.
pub fn validate_event(draft: &EventDraft) -> Result<CreateEventRequest, ValidationError> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let description = draft.description.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }

    if draft.end_time <= draft.start_time {
        return Err(ValidationError::InvalidTimeWindow);
    }

    for (index, entry) in draft.outcomes.iter().enumerate() {
        if entry.name.trim().is_empty() || entry.probability.trim().is_empty() {
            return Err(ValidationError::IncompleteOutcome { index });
        }
    }

    // Whole-percentage semantics, each value in (0, 100]: "50" parses,
    // "0", "-5", "101" and "abc" all fail the same rule.
    let mut parsed: Vec<(String, u32)> = Vec::with_capacity(draft.outcomes.len());
    for entry in &draft.outcomes {
        let name = entry.name.trim().to_string();
        let percent: u32 = entry
            .probability
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidProbability {
                outcome: name.clone(),
            })?;
        if percent == 0 || percent > 100 {
            return Err(ValidationError::InvalidProbability { outcome: name });
        }
        parsed.push((name, percent));
    }

    let mut seen = BTreeSet::new();
    for (name, _) in &parsed {
        if !seen.insert(name.clone()) {
            return Err(ValidationError::DuplicateOutcome {
                outcome: name.clone(),
            });
        }
    }

    let sum: u64 = parsed.iter().map(|(_, p)| u64::from(*p)).sum();
    if sum != 100 {
        return Err(ValidationError::ProbabilitySum { sum });
    }

    let outcomes: Vec<String> = parsed.iter().map(|(name, _)| name.clone()).collect();
    let probabilities: BTreeMap<String, u32> = parsed.into_iter().collect();

    Ok(CreateEventRequest {
        title: title.to_string(),
        description: description.to_string(),
        start_time: draft.start_time,
        end_time: draft.end_time,
        created_by: draft.created_by,
        outcomes,
        probabilities,
    })
}
