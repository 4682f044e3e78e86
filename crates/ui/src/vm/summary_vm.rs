use quiz_core::session::Session;

/// Display-ready row for the summary's "questions you got wrong" list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissedLevelVm {
    /// 1-based, matching the "Level N of M" header.
    pub level_number: usize,
    pub prompt: String,
    pub your_answer: String,
    pub correct_answer: String,
}

/// Maps the session's missed levels to summary rows, in catalog order.
#[must_use]
pub fn map_missed_levels(session: &Session) -> Vec<MissedLevelVm> {
    session
        .missed()
        .into_iter()
        .map(|missed| {
            let your_answer = if missed.result.answer.is_empty() {
                "(none)".to_string()
            } else {
                missed.result.answer.to_string()
            };
            MissedLevelVm {
                level_number: missed.index + 1,
                prompt: missed.level.kind.prompt_text().to_string(),
                your_answer,
                correct_answer: missed.level.kind.correct_answer_text(),
            }
        })
        .collect()
}
