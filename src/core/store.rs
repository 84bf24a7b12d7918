use crate::core::{
    error::TinderError,
    feed::matchable_users,
    ledger::SwipeLedger,
    matcher::MatchResolver,
    messaging::MessagingGate,
    registry::UserRegistry,
};
use crate::models::{Identity, Message, NewUser, SwipeDecision, SwipeRecord, SwipeStatus, User};

/// Explicit store for all matching and messaging state
///
/// Every mutating method validates its preconditions before the first
/// write, so a failed call leaves the store exactly as it found it.
/// Callers that share a `Store` across threads must hold exclusive access
/// for the duration of each mutating call.
#[derive(Debug, Default)]
pub struct Store {
    registry: UserRegistry,
    ledger: SwipeLedger,
    messages: MessagingGate,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, identity: Identity, profile: NewUser) -> Result<&User, TinderError> {
        self.registry.register(identity, profile)
    }

    pub fn get_user(&self, identity: &Identity) -> Result<&User, TinderError> {
        self.registry.get_user(identity)
    }

    pub fn swipe(
        &mut self,
        actor: &Identity,
        target: &Identity,
        decision: SwipeDecision,
    ) -> Result<&SwipeRecord, TinderError> {
        self.ledger.swipe(&self.registry, actor, target, decision)
    }

    pub fn get_swipe_status(&self, actor: &Identity, target: &Identity) -> SwipeStatus {
        self.ledger.get_swipe_status(actor, target)
    }

    pub fn is_match(&self, a: &Identity, b: &Identity) -> bool {
        MatchResolver::new(&self.ledger).is_match(a, b)
    }

    pub fn matches_for(&self, identity: &Identity) -> Vec<Identity> {
        MatchResolver::new(&self.ledger).matches_for(identity)
    }

    pub fn message(
        &mut self,
        sender: &Identity,
        recipient: &Identity,
        body: String,
    ) -> Result<&Message, TinderError> {
        self.messages.send(&self.ledger, sender, recipient, body)
    }

    pub fn conversation<'s>(
        &'s self,
        a: &'s Identity,
        b: &'s Identity,
    ) -> impl Iterator<Item = &'s Message> + 's {
        self.messages.conversation(a, b)
    }

    pub fn matchable_users<'s>(
        &'s self,
        requester: &'s Identity,
        offset: usize,
        limit: usize,
    ) -> impl Iterator<Item = &'s User> + 's {
        matchable_users(&self.registry, &self.ledger, requester, offset, limit)
    }

    pub fn user_count(&self) -> usize {
        self.registry.len()
    }

    pub fn swipe_count(&self) -> usize {
        self.ledger.len()
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}
