use crate::core::ledger::SwipeLedger;
use crate::models::Identity;

/// Derives mutual matches from the swipe ledger
///
/// Nothing is persisted: a pair is a match exactly when both directions
/// hold a positive decision. Because ledger records are never removed, a
/// match that exists once exists forever.
#[derive(Debug, Clone, Copy)]
pub struct MatchResolver<'a> {
    ledger: &'a SwipeLedger,
}

impl<'a> MatchResolver<'a> {
    pub fn new(ledger: &'a SwipeLedger) -> Self {
        Self { ledger }
    }

    /// True iff `a` and `b` both swiped positively on each other
    #[inline]
    pub fn is_match(&self, a: &Identity, b: &Identity) -> bool {
        self.positive(a, b) && self.positive(b, a)
    }

    /// Everyone `identity` is mutually matched with, in the order
    /// `identity` swiped them
    pub fn matches_for(&self, identity: &Identity) -> Vec<Identity> {
        self.ledger
            .outgoing(identity)
            .iter()
            .filter(|record| record.decision.is_positive())
            .filter(|record| self.positive(&record.target, identity))
            .map(|record| record.target.clone())
            .collect()
    }

    #[inline]
    fn positive(&self, actor: &Identity, target: &Identity) -> bool {
        self.ledger
            .decision(actor, target)
            .is_some_and(|decision| decision.is_positive())
    }
}
