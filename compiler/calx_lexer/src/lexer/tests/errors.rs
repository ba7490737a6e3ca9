use super::super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_invalid_character_is_reported() {
    let err = tokenize("2&3").unwrap_err();
    let LexError::InvalidCharacter {
        character,
        expression,
        index,
        location,
    } = err.clone();
    assert_eq!(character, '&');
    assert_eq!(expression, "2&3");
    assert_eq!(index, 0);
    assert_eq!(location, Location { line: 1, column: 2, offset: 1 });
    assert_eq!(
        err.to_string(),
        "invalid character '&' at line 1, column 2 in expression `2&3`"
    );
}

#[test]
fn test_invalid_character_aborts_the_batch() {
    let err = tokenize("1+1;\n 4 % 2;3").unwrap_err();
    assert_eq!(err.expression(), "4 % 2");
    assert_eq!(err.location(), Location { line: 2, column: 4, offset: 8 });
}

#[test]
fn test_decimal_point_is_invalid() {
    let err = tokenize("1.5+2").unwrap_err();
    assert!(matches!(err, LexError::InvalidCharacter { character: '.', .. }));
}

#[test]
fn test_lenient_tokenize_skips_bad_expressions() {
    let (batch, errors) = tokenize_lenient("1+1; x; 2*2; 3 ^ 4");
    let texts: Vec<String> = batch.iter().map(Expression::text).collect();
    assert_eq!(texts, vec!["1+1", "2*2"]);

    let expressions: Vec<&str> = errors.iter().map(LexError::expression).collect();
    assert_eq!(expressions, vec!["x", "3 ^ 4"]);
    assert!(matches!(errors[0], LexError::InvalidCharacter { index: 1, .. }));
    assert!(matches!(errors[1], LexError::InvalidCharacter { index: 3, .. }));
}

#[test]
fn test_lenient_tokenize_without_errors_matches_strict() {
    let input = "1; (2+3)*4 ; 10/0";
    let (lenient, errors) = tokenize_lenient(input);
    assert!(errors.is_empty());
    assert_eq!(lenient, tokenize(input).unwrap());
}

#[test]
fn test_tokenize_expression_rejects_semicolon() {
    let err = tokenize_expression("1;2").unwrap_err();
    assert!(matches!(err, LexError::InvalidCharacter { character: ';', .. }));
}
