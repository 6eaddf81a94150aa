//! User persistence behind a small trait, with an in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use roster_auth::{CredentialStore, Identity};
use roster_core::{DomainError, UserId};
use roster_directory::User;

/// Persistence port for directory records.
///
/// Email uniqueness is this layer's invariant: `insert` and `update` must
/// reject a colliding email deterministically, including under concurrent
/// writers.
pub trait UserStore: CredentialStore + Send + Sync {
    /// Store a new record. Fails with [`DomainError::Conflict`] when the
    /// email is already taken.
    fn insert(&self, user: User) -> Result<(), DomainError>;

    fn get(&self, id: UserId) -> Option<User>;

    /// All records in insertion order.
    fn list(&self) -> Vec<User>;

    /// Replace an existing record. Fails with [`DomainError::NotFound`] for
    /// an unknown id and [`DomainError::Conflict`] when the new email
    /// belongs to a different record.
    fn update(&self, user: User) -> Result<(), DomainError>;

    fn find_by_email(&self, email: &str) -> Option<User>;
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn insert(&self, user: User) -> Result<(), DomainError> {
        (**self).insert(user)
    }

    fn get(&self, id: UserId) -> Option<User> {
        (**self).get(id)
    }

    fn list(&self) -> Vec<User> {
        (**self).list()
    }

    fn update(&self, user: User) -> Result<(), DomainError> {
        (**self).update(user)
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        (**self).find_by_email(email)
    }
}

/// In-memory store for dev/test.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<UserId, User>,
    // Insertion order, so `list` is stable without timestamps ties.
    order: Vec<UserId>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for InMemoryUserStore {
    fn identity_for_key(&self, api_key: &str) -> Option<Identity> {
        let inner = self.inner.read().ok()?;
        inner
            .users
            .values()
            .find(|u| u.api_key == api_key)
            .map(User::identity)
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&self, user: User) -> Result<(), DomainError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("store poisoned"))?;

        if inner.users.values().any(|u| u.email == user.email) {
            return Err(DomainError::conflict("email already taken"));
        }

        inner.order.push(user.id);
        inner.users.insert(user.id, user);
        Ok(())
    }

    fn get(&self, id: UserId) -> Option<User> {
        let inner = self.inner.read().ok()?;
        inner.users.get(&id).cloned()
    }

    fn list(&self) -> Vec<User> {
        let inner = match self.inner.read() {
            Ok(i) => i,
            Err(_) => return vec![],
        };

        inner
            .order
            .iter()
            .filter_map(|id| inner.users.get(id).cloned())
            .collect()
    }

    fn update(&self, user: User) -> Result<(), DomainError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("store poisoned"))?;

        if !inner.users.contains_key(&user.id) {
            return Err(DomainError::NotFound);
        }

        if inner
            .users
            .values()
            .any(|u| u.email == user.email && u.id != user.id)
        {
            return Err(DomainError::conflict("email already taken"));
        }

        inner.users.insert(user.id, user);
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        let inner = self.inner.read().ok()?;
        inner.users.values().find(|u| u.email == email).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_auth::Role;
    use roster_directory::NewUser;

    fn make_user(email: &str, role: Role, key: &str) -> User {
        User::create(
            NewUser {
                name: "Testing User".to_string(),
                email: email.to_string(),
                password: "Pass123!".to_string(),
                phone_number: None,
                role,
            },
            key.to_string(),
            "hash".to_string(),
        )
    }

    #[test]
    fn insert_then_get_and_list_in_order() {
        let store = InMemoryUserStore::new();
        let a = make_user("a@testmail.com", Role::Admin, "key-a");
        let b = make_user("b@testmail.com", Role::User, "key-b");

        store.insert(a.clone()).unwrap();
        store.insert(b.clone()).unwrap();

        assert_eq!(store.get(a.id).unwrap().email, "a@testmail.com");
        let listed: Vec<_> = store.list().into_iter().map(|u| u.email).collect();
        assert_eq!(listed, ["a@testmail.com", "b@testmail.com"]);
    }

    #[test]
    fn duplicate_email_rejected_on_insert() {
        let store = InMemoryUserStore::new();
        store
            .insert(make_user("dup@testmail.com", Role::User, "key-1"))
            .unwrap();

        let err = store
            .insert(make_user("dup@testmail.com", Role::User, "key-2"))
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn update_rechecks_email_uniqueness_excluding_self() {
        let store = InMemoryUserStore::new();
        let a = make_user("a@testmail.com", Role::User, "key-a");
        let b = make_user("b@testmail.com", Role::User, "key-b");
        store.insert(a.clone()).unwrap();
        store.insert(b.clone()).unwrap();

        // Re-saving a record under its own email is fine.
        let mut same = a.clone();
        same.name = "Renamed".to_string();
        store.update(same).unwrap();
        assert_eq!(store.get(a.id).unwrap().name, "Renamed");

        // Taking another record's email is not.
        let mut clash = b.clone();
        clash.email = "a@testmail.com".to_string();
        assert!(matches!(
            store.update(clash).unwrap_err(),
            DomainError::Conflict(_)
        ));
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = InMemoryUserStore::new();
        let ghost = make_user("ghost@testmail.com", Role::User, "key-g");

        assert_eq!(store.update(ghost).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn api_key_resolves_to_owning_identity() {
        let store = InMemoryUserStore::new();
        let admin = make_user("admin@testmail.com", Role::Admin, "admin-key");
        store.insert(admin.clone()).unwrap();

        let identity = store.identity_for_key("admin-key").unwrap();
        assert_eq!(identity.id, admin.id);
        assert!(identity.role.is_admin());

        assert!(store.identity_for_key("ADMIN-KEY").is_none());
        assert!(store.identity_for_key("other").is_none());
    }
}
