use tokio::sync::RwLock;

use crate::core::{Store, TinderError};
use crate::models::{Identity, Message, NewUser, SwipeDecision, SwipeRecord, SwipeStatus, User};
use crate::services::cache::{CacheStats, MatchCache};

/// Thread-safe facade over the matching and messaging store
///
/// `register`, `swipe` and `message` run under the write lock, so each is
/// a single atomic unit. Reads share the read lock and copy their results
/// out before releasing it; none of them can observe a write in progress.
pub struct TinderService {
    owner: Identity,
    store: RwLock<Store>,
    match_cache: MatchCache,
}

impl TinderService {
    /// Instantiate the service once, owned by the deploying identity
    pub fn new(owner: Identity, match_cache: MatchCache) -> Self {
        tracing::info!("Tinder deployed with owner {}", owner);

        Self {
            owner,
            store: RwLock::new(Store::new()),
            match_cache,
        }
    }

    pub fn owner(&self) -> &Identity {
        &self.owner
    }

    pub async fn register(&self, identity: Identity, profile: NewUser) -> Result<User, TinderError> {
        let mut store = self.store.write().await;
        match store.register(identity.clone(), profile) {
            Ok(user) => {
                tracing::info!("Registered user {} (age {})", user.identity, user.age);
                Ok(user.clone())
            }
            Err(e) => {
                tracing::debug!("Registration rejected for {}: {}", identity, e);
                Err(e)
            }
        }
    }

    pub async fn get_user(&self, identity: &Identity) -> Result<User, TinderError> {
        self.store.read().await.get_user(identity).cloned()
    }

    /// Record a swipe and report whether it completed a mutual match
    pub async fn swipe(
        &self,
        actor: &Identity,
        target: &Identity,
        decision: SwipeDecision,
    ) -> Result<(SwipeRecord, bool), TinderError> {
        let (record, matched) = {
            let mut store = self.store.write().await;
            let record = store.swipe(actor, target, decision)?.clone();
            (record, store.is_match(actor, target))
        };

        tracing::debug!("Recorded swipe: {} -> {} ({:?})", actor, target, decision);

        if matched {
            tracing::info!("Mutual match: {} <-> {}", actor, target);
            self.match_cache.remember_match(actor, target).await;
        }

        Ok((record, matched))
    }

    pub async fn get_swipe_status(&self, actor: &Identity, target: &Identity) -> SwipeStatus {
        self.store.read().await.get_swipe_status(actor, target)
    }

    pub async fn is_match(&self, a: &Identity, b: &Identity) -> bool {
        if self.match_cache.is_known_match(a, b).await {
            return true;
        }

        let matched = self.store.read().await.is_match(a, b);
        if matched {
            self.match_cache.remember_match(a, b).await;
        }
        matched
    }

    pub async fn matches_for(&self, identity: &Identity) -> Vec<Identity> {
        self.store.read().await.matches_for(identity)
    }

    /// Send a message; the match check runs against the store itself, never the cache
    pub async fn message(
        &self,
        sender: &Identity,
        recipient: &Identity,
        body: String,
    ) -> Result<Message, TinderError> {
        let mut store = self.store.write().await;
        match store.message(sender, recipient, body) {
            Ok(message) => Ok(message.clone()),
            Err(e) => {
                tracing::debug!("Message {} -> {} rejected: {}", sender, recipient, e);
                Err(e)
            }
        }
    }

    pub async fn conversation(&self, a: &Identity, b: &Identity) -> Vec<Message> {
        self.store.read().await.conversation(a, b).cloned().collect()
    }

    pub async fn matchable_users(&self, requester: &Identity, offset: usize, limit: usize) -> Vec<User> {
        self.store
            .read()
            .await
            .matchable_users(requester, offset, limit)
            .cloned()
            .collect()
    }

    pub async fn stats(&self) -> ServiceStats {
        let store = self.store.read().await;
        ServiceStats {
            users: store.user_count(),
            swipes: store.swipe_count(),
            messages: store.message_count(),
            cache: self.match_cache.stats(),
        }
    }
}

/// Counters reported by the stats endpoint
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ServiceStats {
    pub users: usize,
    pub swipes: usize,
    pub messages: usize,
    pub cache: CacheStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenderPreference;

    fn service() -> TinderService {
        TinderService::new(Identity::from("owner"), MatchCache::new(100, 60))
    }

    fn profile(age: u16) -> NewUser {
        NewUser {
            age,
            gender_preference: GenderPreference::Men,
            name: "Alice".to_string(),
            location: "New York".to_string(),
            photo_url: "http://example.com/pic.jpg".to_string(),
        }
    }

    #[test]
    fn test_owner_is_deployer() {
        let service = service();
        assert_eq!(service.owner(), &Identity::from("owner"));
    }

    #[test]
    fn test_register_blocking() {
        let service = service();
        let alice = Identity::from("alice");

        let user = tokio_test::block_on(service.register(alice.clone(), profile(25))).unwrap();
        assert_eq!(user.identity, alice);
        assert!(tokio_test::block_on(service.get_user(&alice)).is_ok());
    }

    #[tokio::test]
    async fn test_swipe_reports_match() {
        let service = service();
        let (a, b) = (Identity::from("a"), Identity::from("b"));
        service.register(a.clone(), profile(25)).await.unwrap();
        service.register(b.clone(), profile(24)).await.unwrap();

        let (_, matched) = service.swipe(&a, &b, SwipeDecision::Like).await.unwrap();
        assert!(!matched);
        let (record, matched) = service.swipe(&b, &a, SwipeDecision::Superlike).await.unwrap();
        assert!(matched);
        assert_eq!(record.decision, SwipeDecision::Superlike);

        assert!(service.is_match(&a, &b).await);
        assert!(service.is_match(&b, &a).await);
        assert_eq!(service.stats().await.swipes, 2);
    }
}
