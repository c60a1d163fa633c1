use std::sync::Mutex;

use quiz_core::model::{QuestionAnswer, QuestionId, User};
use thiserror::Error;

/// Field separator shared by the user store and question bank files.
pub const DELIMITER: char = '|';

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A persisted line that does not decompose into the expected field count.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected {expected} fields, found {found}")]
pub struct MalformedRecord {
    pub expected: usize,
    pub found: usize,
}

//
// ─── RECORDS ───────────────────────────────────────────────────────────────────
//

/// Persisted shape for a user: four `|`-joined fields on one line.
///
/// Mirrors the domain `User` so adapters can serialize/deserialize without
/// leaking the file format into the domain layer. Field values containing
/// the delimiter corrupt the record on save; the format does not escape
/// them and this is a documented limitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub password: String,
    pub email: String,
    pub phone_number: String,
}

impl UserRecord {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name().to_owned(),
            password: user.password().to_owned(),
            email: user.email().to_owned(),
            phone_number: user.phone_number().to_owned(),
        }
    }

    /// Parse one line of the user store.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` when the line does not split into exactly
    /// four fields.
    pub fn parse_line(line: &str) -> Result<Self, MalformedRecord> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        let &[name, password, email, phone_number] = fields.as_slice() else {
            return Err(MalformedRecord {
                expected: 4,
                found: fields.len(),
            });
        };

        Ok(Self {
            name: name.to_owned(),
            password: password.to_owned(),
            email: email.to_owned(),
            phone_number: phone_number.to_owned(),
        })
    }

    #[must_use]
    pub fn serialize_line(&self) -> String {
        format!(
            "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
            self.name, self.password, self.email, self.phone_number
        )
    }

    /// Convert the record back into a domain `User`.
    ///
    /// Persisted records are trusted as-is and skip registration validation.
    #[must_use]
    pub fn into_user(self) -> User {
        User::from_persisted(self.name, self.password, self.email, self.phone_number)
    }
}

/// Persisted shape for a question: `prompt|expected answer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub prompt: String,
    pub expected: String,
}

impl QuestionRecord {
    /// Parse one line of the question bank.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` when the line does not split into exactly
    /// two fields.
    pub fn parse_line(line: &str) -> Result<Self, MalformedRecord> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        let &[prompt, expected] = fields.as_slice() else {
            return Err(MalformedRecord {
                expected: 2,
                found: fields.len(),
            });
        };

        Ok(Self {
            prompt: prompt.to_owned(),
            expected: expected.to_owned(),
        })
    }

    #[must_use]
    pub fn into_question(self, id: QuestionId) -> QuestionAnswer {
        QuestionAnswer::new(id, self.prompt, self.expected)
    }
}

//
// ─── CONTRACTS ─────────────────────────────────────────────────────────────────
//

/// Source of the immutable question set a session draws from.
pub trait QuestionSource {
    /// Load every well-formed question, assigning ids in source order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the source is missing or unreadable.
    fn load(&self) -> Result<Vec<QuestionAnswer>, StorageError>;
}

/// Persistence contract for registered users.
pub trait UserStore {
    /// Load every well-formed user record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the source is missing or unreadable.
    fn load(&self) -> Result<Vec<User>, StorageError>;

    /// Persist the given users, replacing the previous contents.
    ///
    /// The write is not atomic: a crash mid-save can corrupt the store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the destination cannot be written.
    fn save(&self, users: &[User]) -> Result<(), StorageError>;
}

impl<T: QuestionSource + ?Sized> QuestionSource for &T {
    fn load(&self) -> Result<Vec<QuestionAnswer>, StorageError> {
        (**self).load()
    }
}

impl<T: UserStore + ?Sized> UserStore for &T {
    fn load(&self) -> Result<Vec<User>, StorageError> {
        (**self).load()
    }

    fn save(&self, users: &[User]) -> Result<(), StorageError> {
        (**self).save(users)
    }
}

//
// ─── IN-MEMORY IMPLEMENTATIONS ─────────────────────────────────────────────────
//

/// Fixed question set for tests and prototyping.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionSource {
    questions: Vec<QuestionAnswer>,
}

impl InMemoryQuestionSource {
    #[must_use]
    pub fn new(questions: Vec<QuestionAnswer>) -> Self {
        Self { questions }
    }
}

impl QuestionSource for InMemoryQuestionSource {
    fn load(&self) -> Result<Vec<QuestionAnswer>, StorageError> {
        Ok(self.questions.clone())
    }
}

/// User store backed by memory, for tests and prototyping.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    /// Snapshot of the most recently saved users.
    ///
    /// # Panics
    ///
    /// Panics if the inner lock is poisoned; only possible if a previous
    /// caller panicked mid-save, which tests treat as fatal anyway.
    #[must_use]
    pub fn saved(&self) -> Vec<User> {
        self.users.lock().expect("user store lock poisoned").clone()
    }
}

impl UserStore for InMemoryUserStore {
    fn load(&self) -> Result<Vec<User>, StorageError> {
        let guard = self
            .users
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, users: &[User]) -> Result<(), StorageError> {
        let mut guard = self
            .users
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        *guard = users.to_vec();
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
