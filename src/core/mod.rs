// Core matching and messaging exports
pub mod error;
pub mod feed;
pub mod ledger;
pub mod matcher;
pub mod messaging;
pub mod registry;
pub mod store;

pub use error::TinderError;
pub use feed::{is_matchable, matchable_users};
pub use ledger::SwipeLedger;
pub use matcher::MatchResolver;
pub use messaging::MessagingGate;
pub use registry::{UserRegistry, MIN_AGE};
pub use store::Store;
