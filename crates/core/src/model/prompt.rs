//! Prompt-template parsing.
//!
//! Two blank styles exist in catalog data: choice/fill sentences carry a
//! single underscore-run blank (`"The cat is ___."`), assembly templates
//! carry one bracket marker per blank (`"[I] [like] apples."`). The bracket
//! contents are authoring hints and are never shown.

/// One piece of an assembly template, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Blank,
}

/// Splits an assembly template into text and blank segments.
#[must_use]
pub fn assembly_segments(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut rest = template;

    while let Some(open) = rest.find('[') {
        let (before, tail) = rest.split_at(open);
        text.push_str(before);
        match tail.find(']') {
            Some(close) => {
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                segments.push(Segment::Blank);
                rest = &tail[close + 1..];
            }
            None => {
                // Unterminated marker reads as plain text.
                text.push_str(tail);
                rest = "";
            }
        }
    }
    text.push_str(rest);
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
    segments
}

/// Number of blanks in an assembly template.
#[must_use]
pub fn blank_count(template: &str) -> usize {
    assembly_segments(template)
        .iter()
        .filter(|segment| matches!(segment, Segment::Blank))
        .count()
}

/// Replaces the first underscore run in `sentence` with `answer`.
///
/// Used to show the completed sentence once a choice/fill level is answered
/// correctly. A sentence without a blank is returned unchanged.
#[must_use]
pub fn fill_blank(sentence: &str, answer: &str) -> String {
    let Some(start) = sentence.find('_') else {
        return sentence.to_string();
    };
    let run_len = sentence[start..]
        .chars()
        .take_while(|&c| c == '_')
        .count();
    let mut filled = String::with_capacity(sentence.len() + answer.len());
    filled.push_str(&sentence[..start]);
    filled.push_str(answer);
    filled.push_str(&sentence[start + run_len..]);
    filled
}

/// Replaces each blank of an assembly template with the matching token.
///
/// Blanks beyond the provided tokens render as `____`.
#[must_use]
pub fn resolve_template(template: &str, tokens: &[String]) -> String {
    let mut resolved = String::new();
    let mut blank = 0;
    for segment in assembly_segments(template) {
        match segment {
            Segment::Text(text) => resolved.push_str(&text),
            Segment::Blank => {
                match tokens.get(blank) {
                    Some(token) => resolved.push_str(token),
                    None => resolved.push_str("____"),
                }
                blank += 1;
            }
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_template_into_segments() {
        let segments = assembly_segments("[I] [like] apples.");
        assert_eq!(
            segments,
            vec![
                Segment::Blank,
                Segment::Text(" ".into()),
                Segment::Blank,
                Segment::Text(" apples.".into()),
            ]
        );
    }

    #[test]
    fn counts_blanks() {
        assert_eq!(blank_count("[a] [b] [c]"), 3);
        assert_eq!(blank_count("no blanks here"), 0);
    }

    #[test]
    fn unterminated_marker_is_text() {
        let segments = assembly_segments("oops [broken");
        assert_eq!(segments, vec![Segment::Text("oops [broken".into())]);
    }

    #[test]
    fn fills_underscore_run() {
        assert_eq!(fill_blank("The cat is ___.", "here"), "The cat is here.");
        assert_eq!(fill_blank("No blank.", "x"), "No blank.");
    }

    #[test]
    fn resolves_template_with_tokens() {
        let tokens = vec!["I".to_string(), "like".to_string()];
        assert_eq!(resolve_template("[I] [like] apples.", &tokens), "I like apples.");
    }

    #[test]
    fn resolve_keeps_placeholder_for_missing_tokens() {
        let tokens = vec!["I".to_string()];
        assert_eq!(resolve_template("[I] [like] apples.", &tokens), "I ____ apples.");
    }
}
