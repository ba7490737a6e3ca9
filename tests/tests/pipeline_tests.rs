use std::fs;

use calx::config::{InvalidCharPolicy, OutputMode, PipelineConfig};
use calx::report::{evaluation_lines, AnalysisReport};
use calx::source::read_source;
use calx::{Pipeline, PipelineError};
use calx_eval::{ErrorTag, Number};
use calx_lexer::{tokenize, LexError, TokenKind};
use calx_syntax::StructuralError;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tests::{rendered_records, stage_output};

#[test]
fn test_batch_of_three() {
    assert_eq!(
        rendered_records("1;2+2;3*3").unwrap(),
        vec!["1 = 1", "2+2 = 4", "3*3 = 9"]
    );
}

#[test]
fn test_precedence_and_grouping() {
    assert_eq!(
        rendered_records("2+3*4; (2+3)*4").unwrap(),
        vec!["2+3*4 = 14", "(2+3)*4 = 20"]
    );
}

#[test]
fn test_error_categories_are_data() {
    assert_eq!(
        rendered_records("10/0; 2+; 7/2").unwrap(),
        vec!["10/0 = division by zero", "2+ = syntax error", "7/2 = 3.5"]
    );
}

#[test]
fn test_negative_literal_is_not_a_number() {
    let batch = tokenize("-5+3").unwrap();
    assert_eq!(
        batch.expressions()[0].kinds(),
        vec![
            TokenKind::Minus,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number
        ]
    );
    assert_eq!(
        rendered_records("-5+3; 3-5").unwrap(),
        vec!["-5+3 = syntax error", "3-5 = -2"]
    );
}

#[test]
fn test_adjacent_numbers_report_joined_text() {
    // Record text is the concatenated lexemes, so `2 3` reads back as `23`
    assert_eq!(
        rendered_records("2 3; 4").unwrap(),
        vec!["23 = syntax error", "4 = 4"]
    );
}

#[test]
fn test_empty_input_yields_nothing() {
    for source in ["", "   ", ";;", " ; \n ;"] {
        assert!(rendered_records(source).unwrap().is_empty(), "{source:?}");
    }
}

#[test]
fn test_unbalanced_parentheses_fail_the_batch() {
    for source in ["(1+2", "1+2)", "1; 2; (3"] {
        let err = rendered_records(source).unwrap_err();
        assert!(
            matches!(err, PipelineError::Structural(StructuralError::UnbalancedParentheses { .. })),
            "{source:?}: {err:?}"
        );
    }
}

#[test]
fn test_invalid_character_identifies_the_character() {
    let err = rendered_records("2&3").unwrap_err();
    match err {
        PipelineError::Lex(LexError::InvalidCharacter {
            character,
            expression,
            ..
        }) => {
            assert_eq!(character, '&');
            assert_eq!(expression, "2&3");
        }
        other => panic!("expected an invalid character, got {other:?}"),
    }
}

#[test]
fn test_skip_invalid_keeps_the_rest() {
    let config = PipelineConfig::default()
        .with_show_stages(false)
        .with_invalid_chars(InvalidCharPolicy::SkipExpression);
    let analysis = Pipeline::new(config).run("1+1; 2&3; 4*4").unwrap();

    let values: Vec<_> = analysis.records.iter().map(|r| r.value()).collect();
    assert_eq!(
        values,
        vec![Some(Number::Integer(2)), Some(Number::Integer(16))]
    );
    assert_eq!(analysis.skipped.len(), 1);
    assert_eq!(analysis.skipped[0].expression(), "2&3");
}

#[test]
fn test_full_text_report() {
    let (out, result) = stage_output("2+3; (4)*2; 1/0");
    assert_eq!(result.unwrap(), 3);
    assert_eq!(
        out,
        "Lexical analysis results:\n\
         Valid tokens: NUMBER, PLUS, NUMBER\n\
         Valid tokens: LPAREN, NUMBER, RPAREN, TIMES, NUMBER\n\
         Valid tokens: NUMBER, DIVIDE, NUMBER\n\
         Syntactic analysis results:\n\
         Valid expression: 2+3\n\
         Valid expression: (4)*2\n\
         Valid expression: 1/0\n"
    );

    let analysis = Pipeline::default().run("2+3; (4)*2; 1/0").unwrap();
    assert_eq!(
        evaluation_lines(&analysis.records),
        vec![
            "Semantic analysis results:",
            "Valid expression: 2+3 = 5",
            "Valid expression: (4)*2 = 8",
            "Invalid expression: 1/0 = division by zero",
        ]
    );
}

#[test]
fn test_structural_failure_still_reports() {
    let (out, result) = stage_output("1+1; (2; 3");
    assert!(result.is_err());
    assert!(out.contains("Valid expression: 1+1\nInvalid expression: (2\n"));
    assert!(!out.contains("Valid expression: 3"));
}

#[test]
fn test_json_report_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expressions.txt");
    fs::write(&path, "2*(3+4);\n8/0;\n").unwrap();

    let source = read_source(&path).unwrap();
    let config = PipelineConfig::default().with_output(OutputMode::Json);
    let analysis = Pipeline::new(config).run(&source).unwrap();
    let report = AnalysisReport::new(&analysis.batch, &analysis.records, &analysis.skipped);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["expressions"][0]["value"], "14");
    assert_eq!(json["expressions"][1]["error"], "division by zero");
    assert!(json.get("skipped").is_none());
}

#[test]
fn test_overflow_is_unexpected_error() {
    let analysis = Pipeline::default()
        .run("9223372036854775807+1; 1")
        .unwrap();
    assert!(matches!(
        analysis.records[0].error(),
        Some(ErrorTag::UnexpectedError(_))
    ));
    assert_eq!(analysis.records[1].value(), Some(Number::Integer(1)));
}

/// A `(a+b)*c` expression with its expected value
fn term() -> impl Strategy<Value = (String, i64)> {
    (0i64..1000, 0i64..1000, 0i64..100)
        .prop_map(|(a, b, c)| (format!("({a}+{b})*{c}"), (a + b) * c))
}

/// Whitespace and empty segments that the lexer drops
fn filler() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(" ".to_string()),
        Just(" ;".to_string()),
        Just("\n;\t".to_string()),
    ]
}

proptest! {
    #[test]
    fn one_record_per_segment_in_order(
        parts in prop::collection::vec((filler(), term()), 0..12)
    ) {
        let source = parts
            .iter()
            .map(|(pad, (text, _))| format!("{pad}{text}"))
            .collect::<Vec<_>>()
            .join(";");
        let expected: Vec<String> = parts
            .iter()
            .map(|(_, (text, value))| format!("{text} = {value}"))
            .collect();

        prop_assert_eq!(rendered_records(&source).unwrap(), expected);
    }
}
