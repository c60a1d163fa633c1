use std::fs;
use std::path::PathBuf;

use quiz_core::model::{QuestionAnswer, QuestionId};
use tracing::debug;

use crate::repository::{QuestionRecord, QuestionSource, StorageError};

/// Question bank backed by a UTF-8 text file, one `prompt|answer` per line.
#[derive(Debug, Clone)]
pub struct FlatFileQuestionBank {
    path: PathBuf,
}

impl FlatFileQuestionBank {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuestionSource for FlatFileQuestionBank {
    fn load(&self) -> Result<Vec<QuestionAnswer>, StorageError> {
        let contents = fs::read_to_string(&self.path)?;

        let mut questions = Vec::new();
        for line in contents.lines() {
            match QuestionRecord::parse_line(line) {
                Ok(record) => {
                    // Ids follow file order so duplicate prompts stay distinct.
                    let id = QuestionId::new(questions.len() as u64);
                    questions.push(record.into_question(id));
                }
                Err(err) => {
                    debug!(path = %self.path.display(), %err, "skipping malformed question line");
                }
            }
        }

        Ok(questions)
    }
}
