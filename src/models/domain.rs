use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::TinderError;

/// Opaque, globally unique actor handle
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identity (UUID v4)
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Which genders a user wants to be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderPreference {
    Men,
    Women,
    Everyone,
}

impl GenderPreference {
    pub fn code(self) -> u8 {
        match self {
            GenderPreference::Men => 0,
            GenderPreference::Women => 1,
            GenderPreference::Everyone => 2,
        }
    }
}

impl TryFrom<u8> for GenderPreference {
    type Error = TinderError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(GenderPreference::Men),
            1 => Ok(GenderPreference::Women),
            2 => Ok(GenderPreference::Everyone),
            other => Err(TinderError::InvalidGenderPreference(other)),
        }
    }
}

/// Decision recorded by a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDecision {
    Pass,
    Like,
    Superlike,
}

impl SwipeDecision {
    pub fn code(self) -> u8 {
        match self {
            SwipeDecision::Pass => 0,
            SwipeDecision::Like => 1,
            SwipeDecision::Superlike => 2,
        }
    }

    /// Like and Superlike count towards a mutual match, Pass does not
    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, SwipeDecision::Like | SwipeDecision::Superlike)
    }
}

impl TryFrom<u8> for SwipeDecision {
    type Error = TinderError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(SwipeDecision::Pass),
            1 => Ok(SwipeDecision::Like),
            2 => Ok(SwipeDecision::Superlike),
            other => Err(TinderError::InvalidDecision(other)),
        }
    }
}

/// Outcome of a swipe status lookup
///
/// `NotSwiped` is its own variant so an absent record can never be
/// mistaken for a `Pass`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeStatus {
    NotSwiped,
    Pass,
    Like,
    Superlike,
}

impl SwipeStatus {
    pub fn decision(self) -> Option<SwipeDecision> {
        match self {
            SwipeStatus::NotSwiped => None,
            SwipeStatus::Pass => Some(SwipeDecision::Pass),
            SwipeStatus::Like => Some(SwipeDecision::Like),
            SwipeStatus::Superlike => Some(SwipeDecision::Superlike),
        }
    }
}

impl From<Option<SwipeDecision>> for SwipeStatus {
    fn from(value: Option<SwipeDecision>) -> Self {
        match value {
            None => SwipeStatus::NotSwiped,
            Some(SwipeDecision::Pass) => SwipeStatus::Pass,
            Some(SwipeDecision::Like) => SwipeStatus::Like,
            Some(SwipeDecision::Superlike) => SwipeStatus::Superlike,
        }
    }
}

/// Registered user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userId")]
    pub identity: Identity,
    pub age: u16,
    #[serde(rename = "genderPreference")]
    pub gender_preference: GenderPreference,
    pub name: String,
    pub location: String,
    #[serde(rename = "photoUrl")]
    pub photo_url: String,
    #[serde(rename = "registeredAt")]
    pub registered_at: chrono::DateTime<chrono::Utc>,
}

/// Profile fields supplied at registration
#[derive(Debug, Clone)]
pub struct NewUser {
    pub age: u16,
    pub gender_preference: GenderPreference,
    pub name: String,
    pub location: String,
    pub photo_url: String,
}

/// One directional decision by `actor` about `target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeRecord {
    pub actor: Identity,
    pub target: Identity,
    pub decision: SwipeDecision,
    #[serde(rename = "swipedAt")]
    pub swiped_at: chrono::DateTime<chrono::Utc>,
}

/// Message exchanged between two mutually matched users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: uuid::Uuid,
    pub sender: Identity,
    pub recipient: Identity,
    pub body: String,
    #[serde(rename = "sentAt")]
    pub sent_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_codes() {
        assert_eq!(SwipeDecision::try_from(0u8).unwrap(), SwipeDecision::Pass);
        assert_eq!(SwipeDecision::try_from(1u8).unwrap(), SwipeDecision::Like);
        assert_eq!(SwipeDecision::try_from(2u8).unwrap(), SwipeDecision::Superlike);
        assert_eq!(
            SwipeDecision::try_from(3u8),
            Err(TinderError::InvalidDecision(3))
        );
        assert_eq!(SwipeDecision::Superlike.code(), 2);
    }

    #[test]
    fn test_positive_decisions() {
        assert!(!SwipeDecision::Pass.is_positive());
        assert!(SwipeDecision::Like.is_positive());
        assert!(SwipeDecision::Superlike.is_positive());
    }

    #[test]
    fn test_not_swiped_is_distinct_from_pass() {
        assert_ne!(SwipeStatus::from(None), SwipeStatus::Pass);
        assert_eq!(SwipeStatus::NotSwiped.decision(), None);
        assert_eq!(
            SwipeStatus::from(Some(SwipeDecision::Pass)).decision(),
            Some(SwipeDecision::Pass)
        );
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&SwipeStatus::NotSwiped).unwrap(), "\"not_swiped\"");
        assert_eq!(serde_json::to_string(&SwipeDecision::Superlike).unwrap(), "\"superlike\"");
        assert_eq!(serde_json::to_string(&Identity::from("0xabc")).unwrap(), "\"0xabc\"");
    }

    #[test]
    fn test_gender_preference_codes() {
        assert_eq!(GenderPreference::try_from(1u8).unwrap(), GenderPreference::Women);
        assert!(GenderPreference::try_from(9u8).is_err());
        assert_eq!(GenderPreference::Everyone.code(), 2);
    }
}
