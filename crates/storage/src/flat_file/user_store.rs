use std::fs;
use std::io::Write;
use std::path::PathBuf;

use quiz_core::model::User;
use tracing::warn;

use crate::repository::{StorageError, UserRecord, UserStore};

/// User store backed by a UTF-8 text file, one 4-field record per line.
///
/// Saving rewrites the whole file in place. The write is not atomic, so a
/// crash mid-save can leave a truncated store behind.
#[derive(Debug, Clone)]
pub struct FlatFileUserStore {
    path: PathBuf,
}

impl FlatFileUserStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UserStore for FlatFileUserStore {
    fn load(&self) -> Result<Vec<User>, StorageError> {
        let contents = fs::read_to_string(&self.path)?;

        let mut users = Vec::new();
        for line in contents.lines() {
            match UserRecord::parse_line(line) {
                Ok(record) => users.push(record.into_user()),
                Err(err) => {
                    warn!(path = %self.path.display(), %err, line, "skipping malformed user record");
                }
            }
        }

        Ok(users)
    }

    fn save(&self, users: &[User]) -> Result<(), StorageError> {
        let mut file = fs::File::create(&self.path)?;
        for user in users {
            writeln!(file, "{}", UserRecord::from_user(user).serialize_line())?;
        }
        Ok(())
    }
}
