use std::num::IntErrorKind;

use crate::error::{NumberKind, ScanError, ScanErrorKind};
use crate::scanner::ScanOutput;
use crate::scanner::cursor::Cursor;
use crate::scanner::token::{
    Literal, Token, TokenKind, keyword_kind, operator_kinds, single_char_kind,
};

/// One scan pass over a source buffer.
///
/// Lexical problems never stop the pass: each one is recorded as a
/// [`ScanError`] and scanning resumes with the next character, so the token
/// stream holds everything that could be recovered.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Scan the whole buffer. The token list always ends with [`TokenKind::Eof`].
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn scan(mut self) -> ScanOutput {
        while !self.cursor.is_at_end() {
            self.cursor.begin_lexeme();
            if let Some(c) = self.cursor.advance() {
                self.scan_token(c);
            }
        }

        self.tokens
            .push(Token::eof(self.cursor.line(), self.cursor.offset()));
        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            lines = self.cursor.line(),
            "scan complete"
        );
        ScanOutput::new(self.tokens, self.errors)
    }

    fn scan_token(&mut self, c: char) {
        if let Some(kind) = single_char_kind(c) {
            self.add_token(kind);
            return;
        }

        if let Some((with_equal, alone)) = operator_kinds(c) {
            let kind = if self.cursor.eat('=') { with_equal } else { alone };
            self.add_token(kind);
            return;
        }

        match c {
            '/' => self.slash(),
            ' ' | '\t' | '\r' => {}
            '\n' => self.cursor.new_line(),
            '"' | '\'' => self.string(c),
            c if c.is_ascii_digit() => self.number(),
            c if is_identifier_start(c) => self.identifier(),
            other => self.error(ScanErrorKind::InvalidCharacter(other)),
        }
    }

    fn slash(&mut self) {
        if self.cursor.eat('/') {
            // The newline is left for the main loop to count.
            self.cursor.eat_till('\n');
        } else if self.cursor.eat('*') {
            if self.cursor.eat_through("*/").is_none() {
                self.error(ScanErrorKind::UnterminatedComment);
            }
        } else {
            self.add_token(TokenKind::Slash);
        }
    }

    fn string(&mut self, quote: char) {
        let body = self.cursor.eat_till(quote);
        if !self.cursor.eat(quote) {
            self.error(ScanErrorKind::UnterminatedString);
            return;
        }
        self.add_literal(TokenKind::String, Literal::Text(body.to_string()));
    }

    fn number(&mut self) {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        // `123.` stays an integer followed by a separate `.` token.
        if self.cursor.eat_fraction() {
            match self.cursor.lexeme().parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    self.add_literal(TokenKind::Number, Literal::Float(value))
                }
                Ok(_) => self.error(ScanErrorKind::NumberOverflow(NumberKind::Float)),
                // unreachable for digit-only lexemes
                Err(_) => self.error(ScanErrorKind::InvalidNumber),
            }
        } else {
            match self.cursor.lexeme().parse::<i64>() {
                Ok(value) => self.add_literal(TokenKind::IntegerNumber, Literal::Integer(value)),
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                    self.error(ScanErrorKind::NumberOverflow(NumberKind::Integer))
                }
                // unreachable for digit-only lexemes
                Err(_) => self.error(ScanErrorKind::InvalidNumber),
            }
        }
    }

    fn identifier(&mut self) {
        self.cursor.eat_while(is_identifier_continue);
        let kind = keyword_kind(self.cursor.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        let token = Token::new(
            kind,
            self.cursor.lexeme(),
            self.cursor.start_line(),
            self.cursor.span(),
        );
        self.push(token);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Literal) {
        let token = Token::with_literal(
            kind,
            self.cursor.lexeme(),
            literal,
            self.cursor.start_line(),
            self.cursor.span(),
        );
        self.push(token);
    }

    fn push(&mut self, token: Token) {
        tracing::trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.line, "token");
        self.tokens.push(token);
    }

    fn error(&mut self, kind: ScanErrorKind) {
        let error = ScanError::new(kind, self.cursor.start_line(), self.cursor.span());
        tracing::debug!(%error, "lexical error");
        self.errors.push(error);
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
