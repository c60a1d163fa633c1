#![forbid(unsafe_code)]

pub mod controller;
pub mod directory;
pub mod error;
pub mod quiz;
pub mod sink;

pub use controller::{LineInput, SessionController};
pub use directory::UserDirectory;
pub use error::{ControllerError, SessionError};
pub use quiz::{CommitOutcome, QuizSession, RoundQuestions};
pub use sink::{ImageId, PresentationSink};
