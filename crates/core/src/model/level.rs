use serde::Deserialize;

//
// ─── LEVEL DEFINITIONS ─────────────────────────────────────────────────────────
//

/// A single-choice question: pick the option that completes the sentence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceLevel {
    /// Sentence with an underscore-run blank (`___`).
    pub sentence: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// A word-ordering question: drag tokens into the bracketed blanks of the
/// template (`"[I] [like] apples."` has two blanks).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyLevel {
    pub sentence_template: String,
    pub draggable_tokens: Vec<String>,
    pub correct_order: Vec<String>,
}

/// A free-text question: type the missing word(s).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillLevel {
    pub sentence: String,
    pub correct_answer: String,
}

/// Discriminated exercise payload, tagged by the `type` field in catalog JSON.
///
/// An unrecognized discriminator parses into `Unknown` instead of failing the
/// whole catalog; the renderer degrades it to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum LevelKind {
    #[serde(rename = "choice")]
    Choice(ChoiceLevel),
    #[serde(rename = "assembly")]
    Assembly(AssemblyLevel),
    #[serde(rename = "fill")]
    Fill(FillLevel),
    #[serde(other)]
    Unknown,
}

impl LevelKind {
    /// Human-readable prompt text, used by the summary view.
    #[must_use]
    pub fn prompt_text(&self) -> &str {
        match self {
            LevelKind::Choice(level) => &level.sentence,
            LevelKind::Assembly(level) => &level.sentence_template,
            LevelKind::Fill(level) => &level.sentence,
            LevelKind::Unknown => "",
        }
    }

    /// Display form of the expected answer (sequences joined with `", "`).
    #[must_use]
    pub fn correct_answer_text(&self) -> String {
        match self {
            LevelKind::Choice(level) => level.correct_answer.clone(),
            LevelKind::Assembly(level) => level.correct_order.join(", "),
            LevelKind::Fill(level) => level.correct_answer.clone(),
            LevelKind::Unknown => String::new(),
        }
    }
}

/// One catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDefinition {
    #[serde(flatten)]
    pub kind: LevelKind,
    /// Optional image shown above the exercise, relative to the asset base.
    #[serde(default)]
    pub image: Option<String>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> LevelDefinition {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_choice_level() {
        let level = parse(
            r#"{"type":"choice","sentence":"The cat is ___.","options":["here","there"],"correctAnswer":"here"}"#,
        );
        match level.kind {
            LevelKind::Choice(choice) => {
                assert_eq!(choice.options.len(), 2);
                assert_eq!(choice.correct_answer, "here");
            }
            other => panic!("expected choice, got {other:?}"),
        }
        assert!(level.image.is_none());
    }

    #[test]
    fn parses_assembly_level_with_image() {
        let level = parse(
            r#"{"type":"assembly","sentenceTemplate":"[I] [run].","draggableTokens":["run","I"],"correctOrder":["I","run"],"image":"images/run.png"}"#,
        );
        assert!(matches!(level.kind, LevelKind::Assembly(_)));
        assert_eq!(level.image.as_deref(), Some("images/run.png"));
    }

    #[test]
    fn parses_fill_level() {
        let level = parse(r#"{"type":"fill","sentence":"A ___ says meow.","correctAnswer":"cat"}"#);
        match level.kind {
            LevelKind::Fill(fill) => assert_eq!(fill.correct_answer, "cat"),
            other => panic!("expected fill, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_type_parses_as_unknown() {
        let level = parse(r#"{"type":"karaoke","sentence":"La la la."}"#);
        assert_eq!(level.kind, LevelKind::Unknown);
    }

    #[test]
    fn assembly_correct_answer_text_joins_tokens() {
        let level = parse(
            r#"{"type":"assembly","sentenceTemplate":"[I] [run].","draggableTokens":["run","I"],"correctOrder":["I","run"]}"#,
        );
        assert_eq!(level.kind.correct_answer_text(), "I, run");
    }
}
