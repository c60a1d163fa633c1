#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    QuestionAnswer, QuestionId, RoundResult, User, ValidationError, ROUND_SIZE,
};
