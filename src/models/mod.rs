// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{GenderPreference, Identity, Message, NewUser, SwipeDecision, SwipeRecord, SwipeStatus, User};
pub use requests::{Coded, ConversationQuery, FeedQuery, MatchQuery, MessageRequest, RegisterRequest, SwipeRequest, SwipeStatusQuery};
pub use responses::{
    ConversationResponse, ErrorResponse, FeedResponse, HealthResponse, MatchResponse, MatchesResponse,
    MessageResponse, OwnerResponse, RegisterResponse, SwipeResponse, SwipeStatusResponse,
};
