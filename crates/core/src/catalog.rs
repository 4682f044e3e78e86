use thiserror::Error;

use crate::model::{prompt, AssemblyLevel, ChoiceLevel, FillLevel, LevelDefinition, LevelKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevelValidationError {
    #[error("no options defined")]
    NoOptions,

    #[error("correct answer {answer:?} is not one of the options")]
    AnswerNotAnOption { answer: String },

    #[error("correct order is empty")]
    EmptyCorrectOrder,

    #[error("template has {blanks} blank(s) but correct order has {tokens} token(s)")]
    BlankCountMismatch { blanks: usize, tokens: usize },

    #[error("token {token:?} in correct order is not draggable")]
    TokenNotDraggable { token: String },

    #[error("duplicate draggable token {token:?}")]
    DuplicateToken { token: String },

    #[error("correct answer is blank")]
    BlankCorrectAnswer,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no levels")]
    Empty,

    #[error("invalid level at index {index}: {source}")]
    Entry {
        index: usize,
        source: LevelValidationError,
    },
}

/// The static, ordered collection of all level definitions for a session.
/// Validated on construction, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    levels: Vec<LevelDefinition>,
}

impl Catalog {
    /// Validates every entry and rejects an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Entry` naming the first offending index, or
    /// `CatalogError::Empty` for a catalog with no levels.
    pub fn new(levels: Vec<LevelDefinition>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, level) in levels.iter().enumerate() {
            validate_level(level).map_err(|source| CatalogError::Entry { index, source })?;
        }
        Ok(Self { levels })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    #[must_use]
    pub fn level(&self, index: usize) -> Option<&LevelDefinition> {
        self.levels.get(index)
    }

    #[must_use]
    pub fn levels(&self) -> &[LevelDefinition] {
        &self.levels
    }
}

fn validate_level(level: &LevelDefinition) -> Result<(), LevelValidationError> {
    match &level.kind {
        LevelKind::Choice(choice) => validate_choice(choice),
        LevelKind::Assembly(assembly) => validate_assembly(assembly),
        LevelKind::Fill(fill) => validate_fill(fill),
        // Unknown kinds degrade at render time instead of failing the load.
        LevelKind::Unknown => Ok(()),
    }
}

fn validate_choice(level: &ChoiceLevel) -> Result<(), LevelValidationError> {
    if level.options.is_empty() {
        return Err(LevelValidationError::NoOptions);
    }
    if !level.options.contains(&level.correct_answer) {
        return Err(LevelValidationError::AnswerNotAnOption {
            answer: level.correct_answer.clone(),
        });
    }
    Ok(())
}

fn validate_assembly(level: &AssemblyLevel) -> Result<(), LevelValidationError> {
    if level.correct_order.is_empty() {
        return Err(LevelValidationError::EmptyCorrectOrder);
    }
    let blanks = prompt::blank_count(&level.sentence_template);
    if blanks != level.correct_order.len() {
        return Err(LevelValidationError::BlankCountMismatch {
            blanks,
            tokens: level.correct_order.len(),
        });
    }
    for (i, token) in level.correct_order.iter().enumerate() {
        if !level.draggable_tokens.contains(token) {
            return Err(LevelValidationError::TokenNotDraggable {
                token: token.clone(),
            });
        }
        // A token occupies at most one blank, so a repeated token is unwinnable.
        if level.correct_order[..i].contains(token) {
            return Err(LevelValidationError::DuplicateToken {
                token: token.clone(),
            });
        }
    }
    for (i, token) in level.draggable_tokens.iter().enumerate() {
        if level.draggable_tokens[..i].contains(token) {
            return Err(LevelValidationError::DuplicateToken {
                token: token.clone(),
            });
        }
    }
    Ok(())
}

fn validate_fill(level: &FillLevel) -> Result<(), LevelValidationError> {
    if level.correct_answer.trim().is_empty() {
        return Err(LevelValidationError::BlankCorrectAnswer);
    }
    Ok(())
}
