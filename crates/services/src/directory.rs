use std::collections::HashMap;

use tracing::warn;

use quiz_core::model::{User, ValidationError};
use storage::{StorageError, UserStore};

/// Registered users keyed by email, alive from load to save.
///
/// Owned by whoever drives the session; there is no ambient global state.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: HashMap<String, User>,
}

impl UserDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from already-loaded users.
    ///
    /// Later records for the same email overwrite earlier ones.
    #[must_use]
    pub fn from_users(users: Vec<User>) -> Self {
        let mut directory = Self::new();
        for user in users {
            directory.users.insert(user.email().to_owned(), user);
        }
        directory
    }

    /// Load the directory from a store, degrading to empty on failure.
    ///
    /// A missing or unreadable store is a warning, not a fatal error; the
    /// process continues with whatever was successfully loaded.
    #[must_use]
    pub fn load_from(store: &impl UserStore) -> Self {
        match store.load() {
            Ok(users) => Self::from_users(users),
            Err(err) => {
                warn!(%err, "could not load user store, starting with an empty directory");
                Self::new()
            }
        }
    }

    /// Register a new user.
    ///
    /// Validation short-circuits in order: password containing the name,
    /// email without `@`, malformed phone, and finally duplicate email.
    ///
    /// # Errors
    ///
    /// Returns the first failing `ValidationError`.
    pub fn register(
        &mut self,
        name: &str,
        password: &str,
        email: &str,
        phone_number: &str,
    ) -> Result<&User, ValidationError> {
        let user = User::new(name, password, email, phone_number)?;
        if self.users.contains_key(user.email()) {
            return Err(ValidationError::DuplicateEmail);
        }

        let key = user.email().to_owned();
        Ok(self.users.entry(key).or_insert(user))
    }

    /// Look up a user by exact email/password match.
    ///
    /// Comparison is case-sensitive plain equality on both fields.
    #[must_use]
    pub fn authenticate(&self, email: &str, password: &str) -> Option<&User> {
        self.users
            .get(email)
            .filter(|user| user.password() == password)
    }

    /// Persist every user to the store, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the destination cannot be written.
    pub fn save_to(&self, store: &impl UserStore) -> Result<(), StorageError> {
        let users: Vec<User> = self.users.values().cloned().collect();
        store.save(&users)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use storage::InMemoryUserStore;

    fn registered_directory() -> UserDirectory {
        let mut directory = UserDirectory::new();
        directory
            .register("Ana", "s3cret", "ana@example.com", "0612345678")
            .unwrap();
        directory
    }

    #[test]
    fn register_inserts_and_returns_the_user() {
        let mut directory = UserDirectory::new();

        let user = directory
            .register("Ana", "s3cret", "ana@example.com", "0612345678")
            .unwrap();

        assert_eq!(user.name(), "Ana");
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn register_rejects_duplicate_email() {
        let mut directory = registered_directory();

        let err = directory
            .register("Other", "pw123456", "ana@example.com", "0712345678")
            .unwrap_err();

        assert_eq!(err, ValidationError::DuplicateEmail);
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn field_validation_runs_before_the_duplicate_check() {
        let mut directory = registered_directory();

        // Same email, but the phone is bad; the phone check wins.
        let err = directory
            .register("Other", "pw123456", "ana@example.com", "123")
            .unwrap_err();

        assert_eq!(err, ValidationError::InvalidPhone);
    }

    #[test]
    fn authenticate_requires_exact_match() {
        let directory = registered_directory();

        assert!(directory.authenticate("ana@example.com", "s3cret").is_some());
        assert!(directory.authenticate("ana@example.com", "S3cret").is_none());
        assert!(directory.authenticate("ANA@example.com", "s3cret").is_none());
        assert!(directory.authenticate("nobody@example.com", "s3cret").is_none());
    }

    #[test]
    fn from_users_keeps_the_last_record_per_email() {
        let first = User::from_persisted("Old", "old", "ana@example.com", "0612345678");
        let second = User::from_persisted("New", "new", "ana@example.com", "0612345678");

        let directory = UserDirectory::from_users(vec![first, second]);

        assert_eq!(directory.len(), 1);
        assert_eq!(
            directory.authenticate("ana@example.com", "new").unwrap().name(),
            "New"
        );
    }

    #[test]
    fn save_then_load_round_trips() {
        let directory = registered_directory();
        let store = InMemoryUserStore::default();

        directory.save_to(&store).unwrap();
        let reloaded = UserDirectory::load_from(&store);

        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.authenticate("ana@example.com", "s3cret").is_some());
    }
}
