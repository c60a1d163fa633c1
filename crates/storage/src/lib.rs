#![forbid(unsafe_code)]

pub mod flat_file;
pub mod repository;

pub use flat_file::{FlatFileQuestionBank, FlatFileUserStore};
pub use repository::{
    InMemoryQuestionSource, InMemoryUserStore, MalformedRecord, QuestionRecord, QuestionSource,
    StorageError, UserRecord, UserStore, DELIMITER,
};
