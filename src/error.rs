use serde::Deserialize;
use thiserror::Error;

/// Local, pre-submission validation failures. One variant per rule so the
/// caller can render the specific message for the rule that failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("end time must be after start time")]
    InvalidTimeWindow,
    #[error("outcome {index} is missing a name or a probability")]
    IncompleteOutcome { index: usize },
    /// Declared weights are whole percentage points in (0, 100]; fractional
    /// values are rejected here rather than rounded.
    #[error("probability for \"{outcome}\" must be a whole percentage between 1 and 100")]
    InvalidProbability { outcome: String },
    #[error("duplicate outcome \"{outcome}\"")]
    DuplicateOutcome { outcome: String },
    #[error("probabilities must sum to 100, got {sum}")]
    ProbabilitySum { sum: u64 },
    #[error("event is not open for betting")]
    EventNotOpen,
    #[error("\"{outcome}\" is not an outcome of this event")]
    UnknownOutcome { outcome: String },
    #[error("bet amount must be a positive number")]
    InvalidAmount,
}

/// The `detail` field of a boundary error body. The API sends either a plain
/// string or a list of per-field records, both shapes observed in the wild.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldError {
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorDetail::Message(msg) => f.write_str(msg),
            ErrorDetail::Fields(fields) => {
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    let loc: Vec<String> = field
                        .loc
                        .iter()
                        .map(|seg| match seg {
                            serde_json::Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect();
                    write!(f, "{}: {}", loc.join("."), field.msg)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("not found: {0}")]
    NotFound(String),

    /// The collaborator is unreachable, timed out, or reported a failure.
    /// Never retried by the client; surfaced verbatim to the caller.
    #[error("boundary error: {detail}")]
    Boundary { detail: String },

    /// Duplicate prevention. Currently raised only by the client-side
    /// single-in-flight submission guard.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl Error {
    pub fn boundary(detail: impl Into<String>) -> Self {
        Error::Boundary {
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_detail() {
        let detail: ErrorDetail =
            serde_json::from_value(serde_json::json!("Event not found")).unwrap();
        assert_eq!(detail.to_string(), "Event not found");
    }

    #[test]
    fn parses_field_error_detail() {
        let detail: ErrorDetail = serde_json::from_value(serde_json::json!([
            {"loc": ["body", "probabilities"], "msg": "field required"},
            {"loc": ["body", "outcomes", 0], "msg": "value is not valid"}
        ]))
        .unwrap();
        assert_eq!(
            detail.to_string(),
            "body.probabilities: field required; body.outcomes.0: value is not valid"
        );
    }

    #[test]
    fn validation_error_messages_name_the_rule() {
        let err = ValidationError::ProbabilitySum { sum: 90 };
        assert_eq!(err.to_string(), "probabilities must sum to 100, got 90");

        let err = ValidationError::UnknownOutcome {
            outcome: "Maybe".into(),
        };
        assert_eq!(err.to_string(), "\"Maybe\" is not an outcome of this event");
    }
}
