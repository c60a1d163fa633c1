use crate::model::question::QuestionAnswer;

/// Number of questions presented and scored together in one round.
pub const ROUND_SIZE: usize = 5;

/// Outcome of scoring one round of answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    correct_count: usize,
    all_correct: bool,
}

impl RoundResult {
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn all_correct(&self) -> bool {
        self.all_correct
    }
}

/// Scores submitted answers against a round's questions.
///
/// Answers align positionally with the questions, in presentation order.
/// A missing trailing answer counts as wrong; extra answers are ignored.
#[must_use]
pub fn score_answers(questions: &[QuestionAnswer], answers: &[String]) -> RoundResult {
    let correct_count = questions
        .iter()
        .zip(answers.iter())
        .filter(|(question, answer)| question.accepts(answer))
        .count();

    RoundResult {
        correct_count,
        all_correct: correct_count == ROUND_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::QuestionId;

    fn build_round() -> Vec<QuestionAnswer> {
        (1..=5)
            .map(|id| QuestionAnswer::new(QuestionId::new(id), format!("Q{id}"), format!("A{id}")))
            .collect()
    }

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn perfect_round_is_all_correct() {
        let questions = build_round();
        let submitted = answers(&["a1", " A2 ", "a3", "A4", "a5"]);

        let result = score_answers(&questions, &submitted);

        assert_eq!(result.correct_count(), 5);
        assert!(result.all_correct());
    }

    #[test]
    fn partial_round_is_not_all_correct() {
        let questions = build_round();
        let submitted = answers(&["A1", "wrong", "A3", "wrong", "A5"]);

        let result = score_answers(&questions, &submitted);

        assert_eq!(result.correct_count(), 3);
        assert!(!result.all_correct());
    }

    #[test]
    fn missing_trailing_answers_count_as_wrong() {
        let questions = build_round();
        let submitted = answers(&["A1", "A2"]);

        let result = score_answers(&questions, &submitted);

        assert_eq!(result.correct_count(), 2);
        assert!(!result.all_correct());
    }

    #[test]
    fn five_correct_out_of_fewer_questions_is_not_a_win() {
        // all_correct is tied to the round size, not to the question count.
        let questions = build_round()[..3].to_vec();
        let submitted = answers(&["A1", "A2", "A3"]);

        let result = score_answers(&questions, &submitted);

        assert_eq!(result.correct_count(), 3);
        assert!(!result.all_correct());
    }
}
