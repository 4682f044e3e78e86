//! Presentation helpers: turn session state into display-ready strings so
//! views stay thin and the mapping stays testable without a DOM.

mod summary_vm;

pub use summary_vm::{map_missed_levels, MissedLevelVm};

/// Running score line shown in the game header.
#[must_use]
pub fn score_label(score: usize, total: usize) -> String {
    format!("Score: {score} / {total}")
}
