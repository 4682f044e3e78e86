use std::fmt;

/// Normalized form of what the user submitted for a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmittedAnswer {
    Text(String),
    Sequence(Vec<String>),
}

impl SubmittedAnswer {
    /// True when there is nothing to show (empty text or empty sequence).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            SubmittedAnswer::Text(text) => text.trim().is_empty(),
            SubmittedAnswer::Sequence(tokens) => tokens.is_empty(),
        }
    }
}

impl fmt::Display for SubmittedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmittedAnswer::Text(text) => write!(f, "{text}"),
            SubmittedAnswer::Sequence(tokens) => write!(f, "{}", tokens.join(", ")),
        }
    }
}

/// The immutable outcome of one submission. Overwritten on re-attempt,
/// never appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptResult {
    pub answer: SubmittedAnswer,
    pub is_correct: bool,
}

impl AttemptResult {
    #[must_use]
    pub fn new(answer: SubmittedAnswer, is_correct: bool) -> Self {
        Self { answer, is_correct }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_displays_joined() {
        let answer = SubmittedAnswer::Sequence(vec!["I".into(), "run".into()]);
        assert_eq!(answer.to_string(), "I, run");
    }

    #[test]
    fn blank_text_is_empty() {
        assert!(SubmittedAnswer::Text("   ".into()).is_empty());
        assert!(!SubmittedAnswer::Text("cat".into()).is_empty());
        assert!(SubmittedAnswer::Sequence(Vec::new()).is_empty());
    }
}
