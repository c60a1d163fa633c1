use crate::model::ids::QuestionId;

/// An immutable prompt/answer pair loaded from a question bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionAnswer {
    id: QuestionId,
    prompt: String,
    expected: String,
}

impl QuestionAnswer {
    #[must_use]
    pub fn new(id: QuestionId, prompt: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            expected: expected.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Whether a submitted answer counts as correct.
    ///
    /// Comparison trims surrounding whitespace and ignores case; otherwise
    /// the match is exact.
    #[must_use]
    pub fn accepts(&self, answer: &str) -> bool {
        answer.trim().eq_ignore_ascii_case(self.expected.trim())
    }
}
