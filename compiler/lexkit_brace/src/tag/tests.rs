use super::*;
use pretty_assertions::assert_eq;

#[test]
fn bit_values_are_stable() {
    assert_eq!(BraceToken::INTEGER.bits(), 1);
    assert_eq!(BraceToken::DECIMAL.bits(), 2);
    assert_eq!(BraceToken::STRING.bits(), 4);
    assert_eq!(BraceToken::O_BRACE.bits(), 8);
    assert_eq!(BraceToken::C_BRACE.bits(), 16);
    assert_eq!(BraceToken::EQUALS.bits(), 32);
    assert_eq!(BraceToken::SEMICOLON.bits(), 64);
    assert_eq!(BraceToken::EOF.bits(), 128);
    assert_eq!(BraceToken::QUOTED.bits(), 256);
}

#[test]
fn value_mask_covers_literals_only() {
    assert!(BraceToken::VALUE.contains(BraceToken::INTEGER | BraceToken::QUOTED));
    assert!(!BraceToken::VALUE.intersects(BraceToken::EQUALS | BraceToken::EOF));
}

#[test]
fn describe_single_and_combined() {
    assert_eq!(BraceToken::EQUALS.describe(), "'='");
    assert_eq!(
        (BraceToken::SEMICOLON | BraceToken::C_BRACE).describe(),
        "'}' or ';'"
    );
    assert_eq!(
        BraceToken::VALUE.describe(),
        "integer, decimal, string or quoted string"
    );
    assert_eq!(BraceToken::empty().describe(), "nothing");
}

#[test]
fn names_match_constants() {
    assert_eq!(BraceToken::O_BRACE.name(), "O_BRACE");
    assert_eq!(BraceToken::SEMICOLON.name(), "SEMICOLON");
    assert_eq!(BraceToken::EOF.name(), "EOF");
    assert_eq!(BraceToken::empty().name(), "EMPTY");
}
