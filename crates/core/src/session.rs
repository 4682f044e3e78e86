use std::sync::Arc;

use crate::catalog::Catalog;
use crate::model::{AttemptResult, LevelDefinition};

/// One row of the summary's "questions you got wrong" list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissedLevel<'a> {
    pub index: usize,
    pub level: &'a LevelDefinition,
    pub result: &'a AttemptResult,
}

/// The session controller: current position in the catalog plus one result
/// slot per level.
///
/// `active_index` ranges over `[0, len]` inclusive; `len` is the summary
/// sentinel. The score is always derived from the result slots, never stored.
/// Navigation is never blocked here — the UI gates "Next" on the active level
/// having a result.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    catalog: Arc<Catalog>,
    active_index: usize,
    results: Vec<Option<AttemptResult>>,
    remount_nonce: u64,
}

impl Session {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let slots = catalog.len();
        Self {
            catalog,
            active_index: 0,
            results: vec![None; slots],
            remount_nonce: 0,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of levels (also the summary sentinel index).
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn is_summary(&self) -> bool {
        self.active_index == self.len()
    }

    #[must_use]
    pub fn active_level(&self) -> Option<&LevelDefinition> {
        self.catalog.level(self.active_index)
    }

    #[must_use]
    pub fn result(&self, index: usize) -> Option<&AttemptResult> {
        self.results.get(index).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn has_answered_active(&self) -> bool {
        self.result(self.active_index).is_some()
    }

    /// Changes whenever the active level must remount with fresh draft state.
    #[must_use]
    pub fn remount_nonce(&self) -> u64 {
        self.remount_nonce
    }

    /// Derived score: count of correct results.
    #[must_use]
    pub fn score(&self) -> usize {
        self.results
            .iter()
            .flatten()
            .filter(|result| result.is_correct)
            .count()
    }

    /// Moves forward one level, capped at the summary sentinel. No-op past
    /// the cap.
    pub fn advance(&mut self) {
        self.active_index = (self.active_index + 1).min(self.len());
    }

    /// Moves back one level, floored at 0.
    pub fn retreat(&mut self) {
        self.active_index = self.active_index.saturating_sub(1);
    }

    /// Clears the active level's result and forces its renderer to remount,
    /// discarding any partial draft. Idempotent; no-op at the summary.
    pub fn restart_current(&mut self) {
        if self.active_index < self.len() {
            self.results[self.active_index] = None;
            self.remount_nonce = self.remount_nonce.wrapping_add(1);
        }
    }

    /// Stores the active level's result, overwriting any previous one.
    /// Ignored at the summary sentinel.
    pub fn record_answer(&mut self, result: AttemptResult) {
        if self.active_index < self.len() {
            self.results[self.active_index] = Some(result);
        }
    }

    /// Back to the start with all results cleared (the "return home"
    /// primitive).
    pub fn reset(&mut self) {
        self.active_index = 0;
        self.results.fill(None);
        self.remount_nonce = self.remount_nonce.wrapping_add(1);
    }

    /// Levels answered incorrectly, in catalog order. Unattempted levels are
    /// neither correct nor wrong and are excluded.
    #[must_use]
    pub fn missed(&self) -> Vec<MissedLevel<'_>> {
        self.results
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                let result = slot.as_ref()?;
                if result.is_correct {
                    return None;
                }
                Some(MissedLevel {
                    index,
                    level: self.catalog.level(index)?,
                    result,
                })
            })
            .collect()
    }
}
