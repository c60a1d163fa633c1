pub mod ids;
pub mod question;
pub mod round;
pub mod user;

pub use ids::QuestionId;
pub use question::QuestionAnswer;
pub use round::{score_answers, RoundResult, ROUND_SIZE};
pub use user::{User, ValidationError};
