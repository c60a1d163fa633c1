use std::io;

use tracing::warn;

use storage::{QuestionSource, UserStore};

use crate::directory::UserDirectory;
use crate::error::{ControllerError, SessionError};
use crate::quiz::QuizSession;
use crate::sink::{ImageId, PresentationSink};

/// Blocking line-oriented input boundary.
///
/// The controller is the only layer that suspends on input; sessions and
/// scoring always receive pre-collected answers.
pub trait LineInput {
    /// Read the next line, without its trailing newline.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the source fails or closes.
    fn read_line(&mut self) -> io::Result<String>;
}

impl<I: LineInput + ?Sized> LineInput for &mut I {
    fn read_line(&mut self) -> io::Result<String> {
        (**self).read_line()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Register,
    LogIn,
    Guest,
    Exit,
}

impl MenuChoice {
    fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Register),
            "2" => Some(Self::LogIn),
            "3" => Some(Self::Guest),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Drives the top-level menu and the quiz loop for one process run.
///
/// Owns the user directory for its lifetime and persists it when the
/// player exits. Each login or guest entry gets a fresh `QuizSession`
/// built from a fresh bank load.
pub struct SessionController<Q, U, I, S> {
    questions: Q,
    user_store: U,
    directory: UserDirectory,
    input: I,
    sink: S,
}

impl<Q, U, I, S> SessionController<Q, U, I, S>
where
    Q: QuestionSource,
    U: UserStore,
    I: LineInput,
    S: PresentationSink,
{
    #[must_use]
    pub fn new(questions: Q, user_store: U, directory: UserDirectory, input: I, sink: S) -> Self {
        Self {
            questions,
            user_store,
            directory,
            input,
            sink,
        }
    }

    #[must_use]
    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Run the menu loop until the player exits.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::Io` when the input source fails; every
    /// other failure is reported through the sink and recovered.
    pub fn run(&mut self) -> Result<(), ControllerError> {
        loop {
            self.sink.show_message("Welcome to the Nutrition Quiz!");
            self.sink.show_message("1. Register");
            self.sink.show_message("2. Log in");
            self.sink.show_message("3. Guest login");
            self.sink.show_message("4. Exit");

            let choice = self.prompt("Select an option: ")?;
            match MenuChoice::from_input(&choice) {
                Some(MenuChoice::Register) => self.register()?,
                Some(MenuChoice::LogIn) => self.login()?,
                Some(MenuChoice::Guest) => {
                    self.sink
                        .show_message("Guest login successful! You can take the quiz as a guest.");
                    self.run_quiz()?;
                }
                Some(MenuChoice::Exit) => {
                    if let Err(err) = self.directory.save_to(&self.user_store) {
                        warn!(%err, "could not save the user directory");
                    }
                    self.sink.show_message("Exiting the program. Goodbye!");
                    return Ok(());
                }
                None => self.sink.show_message("Invalid option. Please try again."),
            }
        }
    }

    fn register(&mut self) -> Result<(), ControllerError> {
        let name = self.prompt("Enter name: ")?;
        let password = self.prompt("Enter password: ")?;
        let email = self.prompt("Enter email: ")?;
        let phone = self.prompt("Enter phone number: ")?;

        match self.directory.register(&name, &password, &email, &phone) {
            Ok(_) => self.sink.show_message("Registration successful!"),
            Err(err) => self.sink.show_message(&err.to_string()),
        }
        Ok(())
    }

    fn login(&mut self) -> Result<(), ControllerError> {
        let email = self.prompt("Enter email: ")?;
        let password = self.prompt("Enter password: ")?;

        let Some(user) = self.directory.authenticate(&email, &password) else {
            self.sink.show_message("Invalid email or password.");
            return Ok(());
        };

        let greeting = format!("Login successful! Welcome {}", user.name());
        self.sink.show_message(&greeting);
        self.run_quiz()
    }

    fn run_quiz(&mut self) -> Result<(), ControllerError> {
        // A failed bank load degrades to an empty pool, which the session
        // reports as exhaustion on the first round.
        let questions = self.questions.load().unwrap_or_else(|err| {
            warn!(%err, "could not load the question bank");
            Vec::new()
        });
        let mut session = QuizSession::new(questions);

        loop {
            let round = match session.start_round() {
                Ok(round) => round,
                Err(SessionError::PoolExhausted { .. }) => {
                    self.sink
                        .show_message("Not enough questions to start a new quiz.");
                    return Ok(());
                }
            };

            let mut answers = Vec::with_capacity(round.questions().len());
            for question in round.questions() {
                let text = format!("Question: {}", question.prompt());
                self.sink.show_message(&text);
                answers.push(self.prompt("Your answer: ")?);
            }

            let result = session.score_round(&round, &answers);
            let won = result.all_correct();
            let outcome = session.commit_round(won);

            if won {
                self.sink.show_image(ImageId::Trophy);
                self.sink
                    .show_message("Congratulations! You answered all questions correctly!");
                if outcome.discount_won {
                    self.sink.show_discount_won();
                }
            } else {
                self.sink.show_image(ImageId::SadFace);
                self.sink
                    .show_message("You did not answer all questions correctly. Try again!");
            }

            let replay = self.prompt("Do you want to play again? (yes/no): ")?;
            if replay.trim().eq_ignore_ascii_case("yes") {
                self.sink.show_message("OK, let's give it another try!");
                if won {
                    session.retire_round(&round);
                }
            } else {
                self.sink.show_message("Thank you for playing!");
                self.sink
                    .show_message("And don't forget.. an apple a day keeps the doctor away!");
                return Ok(());
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<String, ControllerError> {
        self.sink.show_message(text);
        Ok(self.input.read_line()?)
    }
}
