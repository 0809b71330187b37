use super::*;
use crate::net::types::{AuthProvider, UserRole};

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        user_id: "user_1".to_owned(),
        client_id: "SA-000001".to_owned(),
        email: "a@b.com".to_owned(),
        name: "Ayu".to_owned(),
        role: UserRole::Client,
        auth_provider: AuthProvider::Email,
        phone: None,
        avatar: None,
    }
}

fn cached_user(store: &SessionStore) -> Option<User> {
    let raw = store.backend.get(USER_KEY)?;
    Some(serde_json::from_str(&raw).unwrap())
}

/// Backend that accepts the token write and refuses the user write.
#[derive(Default)]
struct RejectUserWrites {
    inner: MemoryStorage,
}

impl KeyValueStorage for RejectUserWrites {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == USER_KEY {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn empty_store_has_no_session() {
    let store = SessionStore::new(MemoryStorage::default());
    assert_eq!(store.token(), None);
    assert_eq!(cached_user(&store), None);
}

#[test]
fn save_writes_token_and_user() {
    let store = SessionStore::new(MemoryStorage::default());
    store.save("t1", &make_user()).unwrap();
    assert_eq!(store.token().as_deref(), Some("t1"));
    assert_eq!(cached_user(&store), Some(make_user()));
}

#[test]
fn clear_removes_both_keys() {
    let store = SessionStore::new(MemoryStorage::default());
    store.save("t1", &make_user()).unwrap();
    store.clear();
    assert_eq!(store.token(), None);
    assert_eq!(cached_user(&store), None);
}

#[test]
fn failed_user_write_leaves_no_partial_session() {
    let store = SessionStore::new(RejectUserWrites::default());
    let err = store.save("t1", &make_user()).unwrap_err();
    assert_eq!(err, StorageError::Write("quota exceeded".to_owned()));
    assert_eq!(store.token(), None);
    assert_eq!(cached_user(&store), None);
}

#[test]
fn save_user_keeps_token() {
    let store = SessionStore::new(MemoryStorage::default());
    store.save("t1", &make_user()).unwrap();
    let mut renamed = make_user();
    renamed.name = "Ayu R.".to_owned();
    store.save_user(&renamed).unwrap();
    assert_eq!(store.token().as_deref(), Some("t1"));
    assert_eq!(cached_user(&store).map(|u| u.name), Some("Ayu R.".to_owned()));
}

#[test]
fn empty_token_counts_as_absent() {
    let backend = MemoryStorage::default();
    backend.set(TOKEN_KEY, "").unwrap();
    let store = SessionStore::new(backend);
    assert_eq!(store.token(), None);
}

#[test]
fn local_storage_off_browser_refuses_writes() {
    #[cfg(not(feature = "hydrate"))]
    {
        let storage = LocalStorage;
        assert_eq!(storage.set(TOKEN_KEY, "t"), Err(StorageError::Unavailable));
        assert_eq!(storage.get(TOKEN_KEY), None);
    }
}
