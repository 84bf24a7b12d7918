//! Tinder Match - matching and messaging service for the Tinder dating app
//!
//! Users register a profile, swipe on each other and may message once the
//! swipes are mutually positive. All state lives in an explicit [`Store`]
//! guarded by [`TinderService`]; the HTTP layer in [`routes`] is a thin
//! translation of requests into store operations.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MatchResolver, Store, SwipeLedger, TinderError, UserRegistry};
pub use crate::models::{GenderPreference, Identity, Message, NewUser, SwipeDecision, SwipeStatus, User};
pub use crate::services::{MatchCache, TinderService};
