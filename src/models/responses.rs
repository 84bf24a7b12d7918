use serde::{Deserialize, Serialize};

use crate::core::error::TinderError;
use crate::models::domain::{Identity, Message, SwipeRecord, SwipeStatus, User};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl From<&TinderError> for ErrorResponse {
    fn from(err: &TinderError) -> Self {
        Self {
            error: err.code().to_string(),
            message: err.to_string(),
            status_code: err.status_code(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerResponse {
    pub owner: Identity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub user: User,
}

/// One page of the candidate feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    pub users: Vec<User>,
    pub offset: usize,
    pub limit: usize,
    #[serde(rename = "nextOffset")]
    pub next_offset: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeResponse {
    pub success: bool,
    pub record: SwipeRecord,
    #[serde(rename = "isMatch")]
    pub is_match: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeStatusResponse {
    pub actor: Identity,
    pub target: Identity,
    pub status: SwipeStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    #[serde(rename = "userA")]
    pub user_a: Identity,
    #[serde(rename = "userB")]
    pub user_b: Identity,
    #[serde(rename = "isMatch")]
    pub is_match: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    #[serde(rename = "userId")]
    pub user_id: Identity,
    pub matches: Vec<Identity>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: Message,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationResponse {
    pub messages: Vec<Message>,
    pub count: usize,
}
