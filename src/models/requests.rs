use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::error::TinderError;
use crate::models::domain::{GenderPreference, SwipeDecision};

/// Enum value accepted either as its integer code or its lowercase name
///
/// Older clients send `0`, `1`, `2`; newer ones send `"pass"`, `"like"`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coded<T> {
    Code(u8),
    Named(T),
}

impl<T> Coded<T>
where
    T: TryFrom<u8, Error = TinderError>,
{
    pub fn resolve(self) -> Result<T, TinderError> {
        match self {
            Coded::Code(code) => T::try_from(code),
            Coded::Named(value) => Ok(value),
        }
    }
}

/// Request to register a profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 128))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    pub age: u16,
    #[serde(alias = "gender_preference", rename = "genderPreference")]
    pub gender_preference: Coded<GenderPreference>,
    #[validate(length(max = 100))]
    pub name: String,
    #[validate(length(max = 200))]
    pub location: String,
    #[validate(length(max = 2048))]
    #[serde(alias = "photo_url", rename = "photoUrl")]
    pub photo_url: String,
}

/// Request to swipe on another user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SwipeRequest {
    #[validate(length(min = 1, max = 128))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1, max = 128))]
    #[serde(alias = "target_user_id", rename = "targetUserId")]
    pub target_user_id: String,
    pub decision: Coded<SwipeDecision>,
}

/// Request to message a mutual match
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MessageRequest {
    #[validate(length(min = 1, max = 128))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1, max = 128))]
    #[serde(alias = "recipient_id", rename = "recipientId")]
    pub recipient_id: String,
    #[validate(length(min = 1, max = 2000))]
    pub body: String,
}

/// Pagination for the candidate feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedQuery {
    #[serde(default)]
    pub offset: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Swipe status lookup for an ordered pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeStatusQuery {
    pub actor: String,
    pub target: String,
}

/// Mutual match check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchQuery {
    #[serde(rename = "userA")]
    pub user_a: String,
    #[serde(rename = "userB")]
    pub user_b: String,
}

/// Conversation lookup between two users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationQuery {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "peerId")]
    pub peer_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_accepts_code_or_name() {
        let coded: SwipeRequest = serde_json::from_str(
            r#"{"userId":"a","targetUserId":"b","decision":2}"#,
        )
        .unwrap();
        assert_eq!(coded.decision.resolve().unwrap(), SwipeDecision::Superlike);

        let named: SwipeRequest = serde_json::from_str(
            r#"{"userId":"a","targetUserId":"b","decision":"pass"}"#,
        )
        .unwrap();
        assert_eq!(named.decision.resolve().unwrap(), SwipeDecision::Pass);
    }

    #[test]
    fn test_unknown_code_rejected() {
        let req: SwipeRequest = serde_json::from_str(
            r#"{"userId":"a","targetUserId":"b","decision":7}"#,
        )
        .unwrap();
        assert_eq!(req.decision.resolve(), Err(TinderError::InvalidDecision(7)));
    }

    #[test]
    fn test_empty_message_body_invalid() {
        let req = MessageRequest {
            user_id: "a".to_string(),
            recipient_id: "b".to_string(),
            body: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_request_wire_format() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"userId":"0x1","age":25,"genderPreference":0,"name":"Alice","location":"New York","photoUrl":"http://example.com/pic.jpg"}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.gender_preference.resolve().unwrap(), GenderPreference::Men);
    }
}
