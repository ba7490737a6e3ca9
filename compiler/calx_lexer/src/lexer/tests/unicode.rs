use super::super::*;
use crate::token::TokenKind;
use pretty_assertions::assert_eq;

#[test]
fn test_unicode_whitespace_is_skipped() {
    // No-break space and ideographic space separate tokens like ASCII spaces
    let batch = tokenize("1\u{00A0}+\u{3000}2").unwrap();
    assert_eq!(
        batch.expressions()[0].kinds(),
        vec![TokenKind::Number, TokenKind::Plus, TokenKind::Number]
    );
    assert_eq!(batch.expressions()[0].text(), "1+2");
}

#[test]
fn test_non_ascii_digits_are_invalid() {
    let err = tokenize("1+٣").unwrap_err();
    assert!(matches!(err, LexError::InvalidCharacter { character: '٣', .. }));
}

#[test]
fn test_invalid_character_column_counts_characters() {
    let err = tokenize("(1 + 2) × 3").unwrap_err();
    let location = err.location();
    assert_eq!(location.column, 9);
    assert_eq!(location.offset, 8);
}
