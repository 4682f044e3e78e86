//! Per-variant attempt state machines.
//!
//! Each exercise renderer owns one attempt. An attempt starts `Fresh`, moves
//! to `Drafting` as the user edits, and locks on `submit()`, which computes
//! correctness and hands an [`AttemptResult`] up to the session controller.
//! The only way back to `Fresh` is a remount (level restart). Constructing an
//! attempt with a prior result seeds it straight into `Submitted`, so
//! revisiting an answered level shows it answered.

use thiserror::Error;

use crate::model::{
    prompt, AssemblyLevel, AttemptResult, ChoiceLevel, FillLevel, SubmittedAnswer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPhase {
    Fresh,
    Drafting,
    Submitted,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("attempt already submitted")]
    AlreadySubmitted,

    #[error("draft is incomplete")]
    IncompleteDraft,

    #[error("blank index {index} out of range for {blanks} blank(s)")]
    BlankOutOfRange { index: usize, blanks: usize },

    #[error("token {token:?} is not part of this level")]
    UnknownToken { token: String },

    #[error("option {option:?} is not part of this level")]
    UnknownOption { option: String },
}

//
// ─── CHOICE ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceAttempt {
    level: ChoiceLevel,
    selected: Option<String>,
    verdict: Option<bool>,
}

impl ChoiceAttempt {
    #[must_use]
    pub fn new(level: ChoiceLevel, prior: Option<&AttemptResult>) -> Self {
        let (selected, verdict) = match prior {
            Some(result) => (Some(result.answer.to_string()), Some(result.is_correct)),
            None => (None, None),
        };
        Self {
            level,
            selected,
            verdict,
        }
    }

    #[must_use]
    pub fn level(&self) -> &ChoiceLevel {
        &self.level
    }

    #[must_use]
    pub fn phase(&self) -> AttemptPhase {
        match (&self.verdict, &self.selected) {
            (Some(_), _) => AttemptPhase::Submitted,
            (None, Some(_)) => AttemptPhase::Drafting,
            (None, None) => AttemptPhase::Fresh,
        }
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.verdict.is_some()
    }

    #[must_use]
    pub fn verdict(&self) -> Option<bool> {
        self.verdict
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Sentence to display: the blank is filled in once answered correctly.
    #[must_use]
    pub fn display_sentence(&self) -> String {
        if self.verdict == Some(true) {
            prompt::fill_blank(&self.level.sentence, &self.level.correct_answer)
        } else {
            self.level.sentence.clone()
        }
    }

    /// # Errors
    ///
    /// Returns `AlreadySubmitted` after submission and `UnknownOption` for an
    /// option that is not part of the level.
    pub fn select(&mut self, option: &str) -> Result<(), AttemptError> {
        if self.is_submitted() {
            return Err(AttemptError::AlreadySubmitted);
        }
        if !self.level.options.iter().any(|o| o == option) {
            return Err(AttemptError::UnknownOption {
                option: option.to_string(),
            });
        }
        self.selected = Some(option.to_string());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `IncompleteDraft` without a selection, `AlreadySubmitted` on a
    /// second call.
    pub fn submit(&mut self) -> Result<AttemptResult, AttemptError> {
        if self.is_submitted() {
            return Err(AttemptError::AlreadySubmitted);
        }
        let selected = self
            .selected
            .clone()
            .ok_or(AttemptError::IncompleteDraft)?;
        let is_correct = selected == self.level.correct_answer;
        self.verdict = Some(is_correct);
        Ok(AttemptResult::new(SubmittedAnswer::Text(selected), is_correct))
    }
}

//
// ─── ASSEMBLY ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyAttempt {
    level: AssemblyLevel,
    placed: Vec<Option<String>>,
    verdict: Option<bool>,
}

impl AssemblyAttempt {
    #[must_use]
    pub fn new(level: AssemblyLevel, prior: Option<&AttemptResult>) -> Self {
        let blanks = prompt::blank_count(&level.sentence_template);
        let (placed, verdict) = match prior {
            Some(result) => {
                let placed = match &result.answer {
                    SubmittedAnswer::Sequence(tokens) if tokens.len() == blanks => {
                        tokens.iter().cloned().map(Some).collect()
                    }
                    // A stored answer that no longer fits the template shape
                    // falls back to showing the correct order.
                    _ => level.correct_order.iter().cloned().map(Some).collect(),
                };
                (placed, Some(result.is_correct))
            }
            None => (vec![None; blanks], None),
        };
        Self {
            level,
            placed,
            verdict,
        }
    }

    #[must_use]
    pub fn level(&self) -> &AssemblyLevel {
        &self.level
    }

    #[must_use]
    pub fn phase(&self) -> AttemptPhase {
        if self.verdict.is_some() {
            AttemptPhase::Submitted
        } else if self.placed.iter().any(Option::is_some) {
            AttemptPhase::Drafting
        } else {
            AttemptPhase::Fresh
        }
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.verdict.is_some()
    }

    #[must_use]
    pub fn verdict(&self) -> Option<bool> {
        self.verdict
    }

    #[must_use]
    pub fn placed(&self) -> &[Option<String>] {
        &self.placed
    }

    /// True once every blank holds a token.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.placed.iter().all(Option::is_some)
    }

    /// True when the token currently occupies a blank.
    #[must_use]
    pub fn token_used(&self, token: &str) -> bool {
        self.placed
            .iter()
            .any(|slot| slot.as_deref() == Some(token))
    }

    /// Places a token into a blank. A token already sitting in another blank
    /// moves: it is removed from its previous slot first, so each token
    /// occupies at most one blank.
    ///
    /// # Errors
    ///
    /// Returns `AlreadySubmitted` after submission, `BlankOutOfRange` for a
    /// bad index, `UnknownToken` for a token the level does not define.
    pub fn place(&mut self, index: usize, token: &str) -> Result<(), AttemptError> {
        if self.is_submitted() {
            return Err(AttemptError::AlreadySubmitted);
        }
        if index >= self.placed.len() {
            return Err(AttemptError::BlankOutOfRange {
                index,
                blanks: self.placed.len(),
            });
        }
        if !self.level.draggable_tokens.iter().any(|t| t == token) {
            return Err(AttemptError::UnknownToken {
                token: token.to_string(),
            });
        }
        for slot in &mut self.placed {
            if slot.as_deref() == Some(token) {
                *slot = None;
            }
        }
        self.placed[index] = Some(token.to_string());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `IncompleteDraft` while any blank is empty, `AlreadySubmitted`
    /// on a second call.
    pub fn submit(&mut self) -> Result<AttemptResult, AttemptError> {
        if self.is_submitted() {
            return Err(AttemptError::AlreadySubmitted);
        }
        let tokens: Vec<String> = self
            .placed
            .iter()
            .cloned()
            .collect::<Option<Vec<_>>>()
            .ok_or(AttemptError::IncompleteDraft)?;
        let is_correct = tokens == self.level.correct_order;
        self.verdict = Some(is_correct);
        Ok(AttemptResult::new(
            SubmittedAnswer::Sequence(tokens),
            is_correct,
        ))
    }
}

//
// ─── FILL ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillAttempt {
    level: FillLevel,
    input: String,
    verdict: Option<bool>,
}

impl FillAttempt {
    #[must_use]
    pub fn new(level: FillLevel, prior: Option<&AttemptResult>) -> Self {
        let (input, verdict) = match prior {
            Some(result) => (result.answer.to_string(), Some(result.is_correct)),
            None => (String::new(), None),
        };
        Self {
            level,
            input,
            verdict,
        }
    }

    #[must_use]
    pub fn level(&self) -> &FillLevel {
        &self.level
    }

    #[must_use]
    pub fn phase(&self) -> AttemptPhase {
        if self.verdict.is_some() {
            AttemptPhase::Submitted
        } else if self.input.is_empty() {
            AttemptPhase::Fresh
        } else {
            AttemptPhase::Drafting
        }
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.verdict.is_some()
    }

    #[must_use]
    pub fn verdict(&self) -> Option<bool> {
        self.verdict
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// True once the trimmed draft is non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.input.trim().is_empty()
    }

    #[must_use]
    pub fn display_sentence(&self) -> String {
        if self.verdict == Some(true) {
            prompt::fill_blank(&self.level.sentence, &self.level.correct_answer)
        } else {
            self.level.sentence.clone()
        }
    }

    /// # Errors
    ///
    /// Returns `AlreadySubmitted` after submission.
    pub fn set_input(&mut self, text: impl Into<String>) -> Result<(), AttemptError> {
        if self.is_submitted() {
            return Err(AttemptError::AlreadySubmitted);
        }
        self.input = text.into();
        Ok(())
    }

    /// Compares case-insensitively with surrounding whitespace trimmed; the
    /// stored answer keeps the raw input untouched.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteDraft` for blank input, `AlreadySubmitted` on a
    /// second call.
    pub fn submit(&mut self) -> Result<AttemptResult, AttemptError> {
        if self.is_submitted() {
            return Err(AttemptError::AlreadySubmitted);
        }
        if !self.is_complete() {
            return Err(AttemptError::IncompleteDraft);
        }
        let is_correct = self.input.trim().to_lowercase()
            == self.level.correct_answer.trim().to_lowercase();
        self.verdict = Some(is_correct);
        Ok(AttemptResult::new(
            SubmittedAnswer::Text(self.input.clone()),
            is_correct,
        ))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
