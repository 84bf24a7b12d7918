use std::collections::HashMap;

use crate::core::error::TinderError;
use crate::models::{Identity, NewUser, User};

/// Minimum age accepted at registration
pub const MIN_AGE: u16 = 18;

/// One profile per identity, remembered in registration order
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: HashMap<Identity, User>,
    order: Vec<Identity>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile for `identity`
    ///
    /// Fails with `AgeTooLow` below [`MIN_AGE`] and with `AlreadyRegistered`
    /// when the identity already owns a profile. Nothing is written on failure.
    pub fn register(&mut self, identity: Identity, profile: NewUser) -> Result<&User, TinderError> {
        if profile.age < MIN_AGE {
            return Err(TinderError::AgeTooLow(profile.age));
        }
        if self.users.contains_key(&identity) {
            return Err(TinderError::AlreadyRegistered(identity));
        }

        let user = User {
            identity: identity.clone(),
            age: profile.age,
            gender_preference: profile.gender_preference,
            name: profile.name,
            location: profile.location,
            photo_url: profile.photo_url,
            registered_at: chrono::Utc::now(),
        };

        self.order.push(identity.clone());
        Ok(self.users.entry(identity).or_insert(user))
    }

    pub fn get_user(&self, identity: &Identity) -> Result<&User, TinderError> {
        self.users
            .get(identity)
            .ok_or_else(|| TinderError::NotFound(identity.clone()))
    }

    #[inline]
    pub fn is_registered(&self, identity: &Identity) -> bool {
        self.users.contains_key(identity)
    }

    /// Users in registration order
    pub fn iter(&self) -> impl Iterator<Item = &User> + '_ {
        self.order.iter().filter_map(move |id| self.users.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenderPreference;

    fn profile(age: u16, name: &str) -> NewUser {
        NewUser {
            age,
            gender_preference: GenderPreference::Men,
            name: name.to_string(),
            location: "New York".to_string(),
            photo_url: "http://example.com/pic.jpg".to_string(),
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = UserRegistry::new();
        let alice = Identity::from("alice");

        registry.register(alice.clone(), profile(25, "Alice")).unwrap();

        let user = registry.get_user(&alice).unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.age, 25);
        assert!(registry.is_registered(&alice));
    }

    #[test]
    fn test_age_boundary() {
        let mut registry = UserRegistry::new();

        assert_eq!(
            registry.register(Identity::from("minor"), profile(17, "Julia")).unwrap_err(),
            TinderError::AgeTooLow(17)
        );
        assert!(registry.register(Identity::from("adult"), profile(18, "Ann")).is_ok());
        assert!(!registry.is_registered(&Identity::from("minor")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_keeps_first_profile() {
        let mut registry = UserRegistry::new();
        let alice = Identity::from("alice");

        registry.register(alice.clone(), profile(25, "Alice")).unwrap();
        let err = registry.register(alice.clone(), profile(30, "Mallory")).unwrap_err();

        assert_eq!(err, TinderError::AlreadyRegistered(alice.clone()));
        assert_eq!(registry.get_user(&alice).unwrap().name, "Alice");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_user_not_found() {
        let registry = UserRegistry::new();
        let ghost = Identity::from("ghost");
        assert_eq!(registry.get_user(&ghost).unwrap_err(), TinderError::NotFound(ghost));
    }

    #[test]
    fn test_iter_in_registration_order() {
        let mut registry = UserRegistry::new();
        for name in ["c", "a", "b"] {
            registry.register(Identity::from(name), profile(30, name)).unwrap();
        }

        let names: Vec<&str> = registry.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
