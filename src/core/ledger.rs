use std::collections::HashMap;

use crate::core::error::TinderError;
use crate::core::registry::UserRegistry;
use crate::models::{Identity, SwipeDecision, SwipeRecord, SwipeStatus};

/// Immutable swipe decisions, at most one per ordered (actor, target) pair
///
/// Records are grouped by actor so the feed can exclude everyone an actor
/// has already judged without scanning the whole ledger.
#[derive(Debug, Default)]
pub struct SwipeLedger {
    by_actor: HashMap<Identity, Vec<SwipeRecord>>,
    index: HashMap<(Identity, Identity), SwipeDecision>,
}

impl SwipeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `actor`'s decision about `target`
    ///
    /// Both sides must be registered. Swiping oneself is allowed and follows
    /// the same one-swipe-per-pair rule as any other target.
    pub fn swipe(
        &mut self,
        registry: &UserRegistry,
        actor: &Identity,
        target: &Identity,
        decision: SwipeDecision,
    ) -> Result<&SwipeRecord, TinderError> {
        if !registry.is_registered(actor) {
            return Err(TinderError::NotRegistered(actor.clone()));
        }
        if !registry.is_registered(target) {
            return Err(TinderError::NotFound(target.clone()));
        }

        let key = (actor.clone(), target.clone());
        if self.index.contains_key(&key) {
            return Err(TinderError::AlreadySwiped);
        }

        self.index.insert(key, decision);
        let records = self.by_actor.entry(actor.clone()).or_default();
        records.push(SwipeRecord {
            actor: actor.clone(),
            target: target.clone(),
            decision,
            swiped_at: chrono::Utc::now(),
        });

        Ok(&records[records.len() - 1])
    }

    /// Decision recorded for the ordered pair, if any
    #[inline]
    pub fn decision(&self, actor: &Identity, target: &Identity) -> Option<SwipeDecision> {
        self.index.get(&(actor.clone(), target.clone())).copied()
    }

    pub fn get_swipe_status(&self, actor: &Identity, target: &Identity) -> SwipeStatus {
        SwipeStatus::from(self.decision(actor, target))
    }

    #[inline]
    pub fn has_swiped(&self, actor: &Identity, target: &Identity) -> bool {
        self.index.contains_key(&(actor.clone(), target.clone()))
    }

    /// Records made by `actor`, oldest first
    pub fn outgoing(&self, actor: &Identity) -> &[SwipeRecord] {
        self.by_actor.get(actor).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Everyone `actor` has swiped on, in swipe order
    pub fn swiped_targets(&self, actor: &Identity) -> impl Iterator<Item = &Identity> + '_ {
        self.outgoing(actor).iter().map(|record| &record.target)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GenderPreference, NewUser};

    fn registry_with(ids: &[&str]) -> UserRegistry {
        let mut registry = UserRegistry::new();
        for id in ids {
            registry
                .register(
                    Identity::from(*id),
                    NewUser {
                        age: 25,
                        gender_preference: GenderPreference::Everyone,
                        name: id.to_string(),
                        location: "Los Angeles".to_string(),
                        photo_url: "http://example.com/pic.jpg".to_string(),
                    },
                )
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_swipe_records_decision() {
        let registry = registry_with(&["a", "b"]);
        let mut ledger = SwipeLedger::new();
        let (a, b) = (Identity::from("a"), Identity::from("b"));

        ledger.swipe(&registry, &a, &b, SwipeDecision::Like).unwrap();

        assert_eq!(ledger.get_swipe_status(&a, &b), SwipeStatus::Like);
        assert_eq!(ledger.get_swipe_status(&b, &a), SwipeStatus::NotSwiped);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_second_swipe_rejected_and_first_kept() {
        let registry = registry_with(&["a", "b"]);
        let mut ledger = SwipeLedger::new();
        let (a, b) = (Identity::from("a"), Identity::from("b"));

        ledger.swipe(&registry, &a, &b, SwipeDecision::Pass).unwrap();
        let err = ledger.swipe(&registry, &a, &b, SwipeDecision::Like).unwrap_err();

        assert_eq!(err, TinderError::AlreadySwiped);
        assert_eq!(ledger.get_swipe_status(&a, &b), SwipeStatus::Pass);
        assert_eq!(ledger.outgoing(&a).len(), 1);
    }

    #[test]
    fn test_self_swipe_is_unique_pair() {
        let registry = registry_with(&["a"]);
        let mut ledger = SwipeLedger::new();
        let a = Identity::from("a");

        ledger.swipe(&registry, &a, &a, SwipeDecision::Superlike).unwrap();
        assert_eq!(
            ledger.swipe(&registry, &a, &a, SwipeDecision::Pass).unwrap_err(),
            TinderError::AlreadySwiped
        );
    }

    #[test]
    fn test_swiped_targets_in_order() {
        let registry = registry_with(&["a", "b", "c"]);
        let mut ledger = SwipeLedger::new();
        let (a, b, c) = (Identity::from("a"), Identity::from("b"), Identity::from("c"));

        assert_eq!(ledger.swiped_targets(&a).count(), 0);

        ledger.swipe(&registry, &a, &c, SwipeDecision::Pass).unwrap();
        ledger.swipe(&registry, &a, &b, SwipeDecision::Like).unwrap();
        ledger.swipe(&registry, &b, &a, SwipeDecision::Like).unwrap();

        let targets: Vec<&Identity> = ledger.swiped_targets(&a).collect();
        assert_eq!(targets, vec![&c, &b]);
        assert_eq!(ledger.swiped_targets(&b).collect::<Vec<_>>(), vec![&a]);
        assert_eq!(ledger.swiped_targets(&c).count(), 0);
    }

    #[test]
    fn test_unregistered_parties() {
        let registry = registry_with(&["a"]);
        let mut ledger = SwipeLedger::new();
        let (a, ghost) = (Identity::from("a"), Identity::from("ghost"));

        assert_eq!(
            ledger.swipe(&registry, &ghost, &a, SwipeDecision::Like).unwrap_err(),
            TinderError::NotRegistered(ghost.clone())
        );
        assert_eq!(
            ledger.swipe(&registry, &a, &ghost, SwipeDecision::Like).unwrap_err(),
            TinderError::NotFound(ghost)
        );
        assert!(ledger.is_empty());
    }
}
