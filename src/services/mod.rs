// Service exports
pub mod cache;
pub mod tinder;

pub use cache::{CacheKey, CacheStats, MatchCache};
pub use tinder::{ServiceStats, TinderService};
