use glox::scanner::token::{Literal, Token, TokenKind};
use glox::scanner::{self, ScanOutput};
use pretty_assertions::assert_eq;

fn scan_fixture(source: &str) -> ScanOutput {
    scanner::scan(source)
}

fn scan_clean(source: &str) -> Vec<Token> {
    scanner::scan(source)
        .into_result()
        .unwrap_or_else(|errors| panic!("unexpected lexical errors: {errors:?}"))
}

/// Shared shape of the `class Glox { function main() { ... } }` fixtures.
fn assert_class_skeleton(tokens: &[Token]) {
    assert_eq!(tokens[0].kind, TokenKind::Class);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "Glox");
    assert_eq!(tokens[2].kind, TokenKind::LeftBrace);
    assert_eq!(tokens[3].kind, TokenKind::Function);
    assert_eq!(tokens[5].kind, TokenKind::LeftParen);
    assert_eq!(tokens[6].kind, TokenKind::RightParen);
    assert_eq!(tokens[7].kind, TokenKind::LeftBrace);
}

#[test]
fn sample_program_scans_without_errors() {
    let source = include_str!("../fixtures/code.glox");
    let tokens = scan_clean(source);

    assert_eq!(tokens[0].kind, TokenKind::Class);
    assert_eq!(tokens[0].line, 4, "comments must still advance the line");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    for expected in [
        TokenKind::Foreach,
        TokenKind::Null,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Bang,
        TokenKind::BangEqual,
        TokenKind::GreaterEqual,
        TokenKind::LessEqual,
        TokenKind::Number,
        TokenKind::IntegerNumber,
        TokenKind::String,
        TokenKind::Slash,
    ] {
        assert!(kinds.contains(&expected), "missing {expected}");
    }

    let eof = tokens.last().expect("EOF token");
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.line, source.lines().count() + 1);
}

#[test]
fn string_fixture() {
    let tokens = scan_clean(include_str!("../fixtures/valid_string.glox"));
    assert_class_skeleton(&tokens);
    assert_eq!(tokens[11].kind, TokenKind::String);
    assert_eq!(
        tokens[11].literal,
        Some(Literal::Text("esse é um texto".to_string()))
    );
    assert_eq!(tokens[11].line, 3);
    assert_eq!(tokens[13].kind, TokenKind::RightBrace);
    assert_eq!(tokens[14].kind, TokenKind::RightBrace);
    assert_eq!(tokens[15].kind, TokenKind::Eof);
}

#[test]
fn unterminated_double_quoted_string_fixture() {
    let output = scan_fixture(include_str!("../fixtures/invalid_string.glox"));
    assert_eq!(output.errors().len(), 1);
    assert!(output.messages()[0].contains("Unterminated"));
    assert_eq!(output.errors()[0].line, 3);
    assert!(output.tokens().iter().all(|t| t.kind != TokenKind::String));
    assert_eq!(output.tokens().len(), 12);
}

#[test]
fn unterminated_single_quoted_string_fixture() {
    let output = scan_fixture(include_str!("../fixtures/invalid_simple_string.glox"));
    assert_eq!(output.errors().len(), 1);
    assert!(output.messages()[0].contains("Unterminated"));
}

#[test]
fn integers_with_spaces_before_semicolon() {
    let tokens = scan_clean(include_str!("../fixtures/valid_int.glox"));
    assert_class_skeleton(&tokens);
    for index in [11, 16, 21] {
        assert_eq!(tokens[index].kind, TokenKind::IntegerNumber);
        assert_eq!(tokens[index].literal, Some(Literal::Integer(123)));
        assert_eq!(tokens[index + 1].kind, TokenKind::Semicolon);
    }
}

#[test]
fn doubles_with_spaces_before_semicolon() {
    let tokens = scan_clean(include_str!("../fixtures/valid_double.glox"));
    assert_class_skeleton(&tokens);
    let values: Vec<Option<Literal>> = [11, 16, 21]
        .iter()
        .map(|&i| tokens[i].literal.clone())
        .collect();
    assert_eq!(
        values,
        vec![
            Some(Literal::Float(123.45)),
            Some(Literal::Float(123.56)),
            Some(Literal::Float(123.78)),
        ]
    );
}

#[test]
fn number_and_following_letters_are_separate_tokens() {
    let tokens = scan_clean(include_str!("../fixtures/int_then_identifier.glox"));
    assert_eq!(tokens[11].literal, Some(Literal::Integer(123)));
    assert_eq!(tokens[12].kind, TokenKind::Identifier);
    assert_eq!(tokens[12].lexeme, "a");
}

#[test]
fn lexemes_are_source_slices() {
    let source = include_str!("../fixtures/code.glox");
    for token in scan_clean(source) {
        assert_eq!(
            &source[token.span.offset..token.span.end()],
            token.lexeme,
            "{token}"
        );
    }
}
