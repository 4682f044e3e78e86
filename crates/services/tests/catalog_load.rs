use std::path::Path;

use quiz_core::catalog::CatalogError;
use quiz_core::model::LevelKind;
use services::{parse_catalog, load_catalog, CatalogLoadError};

const SAMPLE: &str = r#"[
    {
        "type": "fill",
        "sentence": "A ___ says meow.",
        "correctAnswer": "cat"
    },
    {
        "type": "choice",
        "sentence": "A ___ barks.",
        "options": ["dog", "cat"],
        "correctAnswer": "dog",
        "image": "images/dog.png"
    },
    {
        "type": "assembly",
        "sentenceTemplate": "[I] [run].",
        "draggableTokens": ["run", "I"],
        "correctOrder": ["I", "run"]
    }
]"#;

#[test]
fn parses_sample_catalog() {
    let catalog = parse_catalog(SAMPLE).unwrap();
    assert_eq!(catalog.len(), 3);
    assert!(matches!(catalog.level(0).unwrap().kind, LevelKind::Fill(_)));
    assert_eq!(
        catalog.level(1).unwrap().image.as_deref(),
        Some("images/dog.png")
    );
}

#[test]
fn unknown_type_parses_and_degrades_later() {
    let catalog = parse_catalog(
        r#"[{"type": "karaoke", "sentence": "La la la."},
            {"type": "fill", "sentence": "___", "correctAnswer": "x"}]"#,
    )
    .unwrap();
    assert_eq!(catalog.level(0).unwrap().kind, LevelKind::Unknown);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = parse_catalog("[{").unwrap_err();
    assert!(matches!(err, CatalogLoadError::Parse(_)));
}

#[test]
fn invalid_entry_names_its_index() {
    let err = parse_catalog(
        r#"[
            {"type": "fill", "sentence": "___", "correctAnswer": "x"},
            {"type": "choice", "sentence": "___", "options": ["a"], "correctAnswer": "b"}
        ]"#,
    )
    .unwrap_err();
    match err {
        CatalogLoadError::Invalid(CatalogError::Entry { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected entry error, got {other}"),
    }
}

#[test]
fn empty_catalog_is_rejected() {
    let err = parse_catalog("[]").unwrap_err();
    assert!(matches!(
        err,
        CatalogLoadError::Invalid(CatalogError::Empty)
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_catalog(Path::new("definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, CatalogLoadError::Io { .. }));
}
