use std::collections::HashSet;

use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::{score_answers, QuestionAnswer, RoundResult, ROUND_SIZE};

use crate::error::SessionError;

//
// ─── ROUND ─────────────────────────────────────────────────────────────────────
//

/// The questions drawn for one round, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundQuestions {
    questions: Vec<QuestionAnswer>,
}

impl RoundQuestions {
    #[must_use]
    pub fn questions(&self) -> &[QuestionAnswer] {
        &self.questions
    }
}

/// Outcome of committing a scored round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitOutcome {
    /// True exactly once per session, on the first winning round.
    pub discount_won: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Mutable quiz state for one login session.
///
/// Holds the pool of questions still eligible for selection and the
/// discount gate. Rounds draw `ROUND_SIZE` questions from a fresh shuffle;
/// winning a round and replaying removes those questions for the rest of
/// the session, while a lost round leaves the pool untouched.
#[derive(Debug)]
pub struct QuizSession {
    pool: Vec<QuestionAnswer>,
    discount_awarded: bool,
}

impl QuizSession {
    /// Create a session over a freshly loaded question bank.
    #[must_use]
    pub fn new(questions: Vec<QuestionAnswer>) -> Self {
        Self {
            pool: questions,
            discount_awarded: false,
        }
    }

    /// Questions still eligible for selection.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn discount_awarded(&self) -> bool {
        self.discount_awarded
    }

    /// Draw the next round of questions.
    ///
    /// Reshuffles the whole pool with a fresh thread RNG and exposes the
    /// first `ROUND_SIZE` questions. The pool itself is not reduced; that
    /// only happens through `retire_round`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::PoolExhausted` when fewer than `ROUND_SIZE`
    /// questions remain.
    pub fn start_round(&mut self) -> Result<RoundQuestions, SessionError> {
        if self.pool.len() < ROUND_SIZE {
            return Err(SessionError::PoolExhausted {
                remaining: self.pool.len(),
            });
        }

        self.pool.shuffle(&mut rng());
        Ok(RoundQuestions {
            questions: self.pool[..ROUND_SIZE].to_vec(),
        })
    }

    /// Score submitted answers against a round, positionally.
    #[must_use]
    pub fn score_round(&self, round: &RoundQuestions, answers: &[String]) -> RoundResult {
        score_answers(round.questions(), answers)
    }

    /// Record a round's outcome, gating the discount award.
    ///
    /// Called once after scoring regardless of outcome. The discount fires
    /// on the first winning round and never again within this session.
    pub fn commit_round(&mut self, won_this_round: bool) -> CommitOutcome {
        let discount_won = won_this_round && !self.discount_awarded;
        if discount_won {
            self.discount_awarded = true;
        }
        CommitOutcome { discount_won }
    }

    /// Permanently remove a round's questions from the pool.
    ///
    /// The controller calls this only when the round was won and the player
    /// chose to replay; lost rounds stay eligible for future draws.
    pub fn retire_round(&mut self, round: &RoundQuestions) {
        let retired: HashSet<_> = round.questions().iter().map(QuestionAnswer::id).collect();
        self.pool.retain(|question| !retired.contains(&question.id()));
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionId;

    fn build_pool(len: u64) -> Vec<QuestionAnswer> {
        (0..len)
            .map(|id| QuestionAnswer::new(QuestionId::new(id), format!("Q{id}"), format!("A{id}")))
            .collect()
    }

    fn correct_answers(round: &RoundQuestions) -> Vec<String> {
        round
            .questions()
            .iter()
            .map(|q| q.expected().to_owned())
            .collect()
    }

    #[test]
    fn round_draws_five_without_reducing_the_pool() {
        let mut session = QuizSession::new(build_pool(8));

        let round = session.start_round().unwrap();

        assert_eq!(round.questions().len(), ROUND_SIZE);
        assert_eq!(session.remaining(), 8);
    }

    #[test]
    fn pool_of_exactly_five_starts_once_then_exhausts_after_win() {
        let mut session = QuizSession::new(build_pool(5));

        let round = session.start_round().unwrap();
        let answers = correct_answers(&round);
        let result = session.score_round(&round, &answers);
        assert!(result.all_correct());

        session.commit_round(true);
        session.retire_round(&round);

        assert_eq!(session.remaining(), 0);
        assert_eq!(
            session.start_round().unwrap_err(),
            SessionError::PoolExhausted { remaining: 0 }
        );
    }

    #[test]
    fn losing_leaves_the_pool_unchanged() {
        let mut session = QuizSession::new(build_pool(7));

        let round = session.start_round().unwrap();
        let result = session.score_round(&round, &[]);
        assert!(!result.all_correct());

        session.commit_round(result.all_correct());

        assert_eq!(session.remaining(), 7);
    }

    #[test]
    fn winning_with_replay_removes_exactly_the_round_questions() {
        let mut session = QuizSession::new(build_pool(12));

        let round = session.start_round().unwrap();
        session.commit_round(true);
        session.retire_round(&round);

        assert_eq!(session.remaining(), 7);
        let drawn: HashSet<_> = round.questions().iter().map(QuestionAnswer::id).collect();
        let next = session.start_round().unwrap();
        assert!(next.questions().iter().all(|q| !drawn.contains(&q.id())));
    }

    #[test]
    fn discount_fires_exactly_once_across_two_wins() {
        let mut session = QuizSession::new(build_pool(12));

        let first = session.start_round().unwrap();
        assert!(session.commit_round(true).discount_won);
        session.retire_round(&first);

        session.start_round().unwrap();
        assert!(!session.commit_round(true).discount_won);
        assert!(session.discount_awarded());
    }

    #[test]
    fn losses_never_award_the_discount() {
        let mut session = QuizSession::new(build_pool(5));

        session.start_round().unwrap();
        assert!(!session.commit_round(false).discount_won);
        assert!(!session.discount_awarded());
    }

    #[test]
    fn pool_of_six_exhausts_after_a_perfect_replay() {
        let mut session = QuizSession::new(build_pool(6));

        let round = session.start_round().unwrap();
        let answers = correct_answers(&round);
        let result = session.score_round(&round, &answers);
        assert!(result.all_correct());

        let outcome = session.commit_round(result.all_correct());
        assert!(outcome.discount_won);

        session.retire_round(&round);
        assert_eq!(session.remaining(), 1);
        assert_eq!(
            session.start_round().unwrap_err(),
            SessionError::PoolExhausted { remaining: 1 }
        );
    }

    #[test]
    fn scoring_is_positional_against_the_drawn_round() {
        let mut session = QuizSession::new(build_pool(5));
        let round = session.start_round().unwrap();

        // Answer only the first drawn question correctly.
        let mut answers = vec![String::new(); ROUND_SIZE];
        answers[0] = round.questions()[0].expected().to_owned();

        let result = session.score_round(&round, &answers);
        assert_eq!(result.correct_count(), 1);
    }
}
