use thiserror::Error;

use crate::models::Identity;

/// Errors returned by the matching and messaging core
///
/// Every variant is a deterministic validation failure: the operation that
/// raised it wrote nothing, and retrying against the same state fails the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TinderError {
    #[error("you must at the age")]
    AgeTooLow(u16),

    #[error("user already registered: {0}")]
    AlreadyRegistered(Identity),

    #[error("user not found: {0}")]
    NotFound(Identity),

    #[error("you must register before swiping: {0}")]
    NotRegistered(Identity),

    #[error("you cannot swipe a person twice")]
    AlreadySwiped,

    #[error("messaging allowed only between mutual matches")]
    NotMutualMatch,

    #[error("invalid swipe decision: {0}")]
    InvalidDecision(u8),

    #[error("invalid gender preference: {0}")]
    InvalidGenderPreference(u8),
}

impl TinderError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            TinderError::AgeTooLow(_) => "age_too_low",
            TinderError::AlreadyRegistered(_) => "already_registered",
            TinderError::NotFound(_) => "not_found",
            TinderError::NotRegistered(_) => "not_registered",
            TinderError::AlreadySwiped => "already_swiped",
            TinderError::NotMutualMatch => "not_mutual_match",
            TinderError::InvalidDecision(_) => "invalid_decision",
            TinderError::InvalidGenderPreference(_) => "invalid_gender_preference",
        }
    }

    /// HTTP status the transport reports for this error
    pub fn status_code(&self) -> u16 {
        match self {
            TinderError::NotFound(_) => 404,
            TinderError::AlreadyRegistered(_) => 409,
            TinderError::NotRegistered(_) => 403,
            _ => 400,
        }
    }
}
