//! Flat-file adapters for the `|`-delimited user store and question bank.

mod question_bank;
mod user_store;

pub use question_bank::FlatFileQuestionBank;
pub use user_store::FlatFileUserStore;
