use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,
    IntegerNumber,

    // Keywords
    And,
    Class,
    Else,
    False,
    Function,
    For,
    Foreach,
    If,
    Null,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Kinds that always carry a [`Literal`].
    pub fn is_literal(self) -> bool {
        matches!(self, Self::String | Self::Number | Self::IntegerNumber)
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::And
                | Self::Class
                | Self::Else
                | Self::False
                | Self::Function
                | Self::For
                | Self::Foreach
                | Self::If
                | Self::Null
                | Self::Or
                | Self::Print
                | Self::Return
                | Self::Super
                | Self::This
                | Self::True
                | Self::Var
                | Self::While
        )
    }
}

/// Typed value recovered from a literal token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.offset.into(), span.len)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: usize,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, span: Span) -> Self {
        debug_assert!(!kind.is_literal(), "{kind} requires a literal");
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
            span,
        }
    }

    pub fn with_literal(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Literal,
        line: usize,
        span: Span,
    ) -> Self {
        debug_assert!(kind.is_literal(), "{kind} cannot carry a literal");
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: Some(literal),
            line,
            span,
        }
    }

    /// The synthetic terminal token, placed at `offset` (the source length).
    pub fn eof(line: usize, offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", line, Span::new(offset, 0))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, " {literal}")?;
        }
        write!(f, " line {}", self.line)
    }
}

/// Punctuation that is always exactly one character.
pub fn single_char_kind(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::LeftParen),
        ')' => Some(TokenKind::RightParen),
        '{' => Some(TokenKind::LeftBrace),
        '}' => Some(TokenKind::RightBrace),
        ',' => Some(TokenKind::Comma),
        '.' => Some(TokenKind::Dot),
        '-' => Some(TokenKind::Minus),
        '+' => Some(TokenKind::Plus),
        ';' => Some(TokenKind::Semicolon),
        '*' => Some(TokenKind::Star),
        _ => None,
    }
}

/// Operators with an `=`-suffixed form.
///
/// Returns `(with_equal, alone)`: the kind to emit when the next character
/// is `=` and the kind to emit otherwise.
pub fn operator_kinds(c: char) -> Option<(TokenKind, TokenKind)> {
    match c {
        '!' => Some((TokenKind::BangEqual, TokenKind::Bang)),
        '=' => Some((TokenKind::EqualEqual, TokenKind::Equal)),
        '<' => Some((TokenKind::LessEqual, TokenKind::Less)),
        '>' => Some((TokenKind::GreaterEqual, TokenKind::Greater)),
        _ => None,
    }
}

/// Reserved words.
///
/// `&&` and `||` are listed as aliases for `and`/`or`, but identifier
/// scanning never produces text containing `&` or `|`, so the lexer cannot
/// reach them.
pub fn keyword_kind(ident: &str) -> Option<TokenKind> {
    match ident {
        "&&" | "and" => Some(TokenKind::And),
        "||" | "or" => Some(TokenKind::Or),
        "class" => Some(TokenKind::Class),
        "else" => Some(TokenKind::Else),
        "false" => Some(TokenKind::False),
        "for" => Some(TokenKind::For),
        "foreach" => Some(TokenKind::Foreach),
        "function" => Some(TokenKind::Function),
        "if" => Some(TokenKind::If),
        "null" => Some(TokenKind::Null),
        "print" => Some(TokenKind::Print),
        "return" => Some(TokenKind::Return),
        "super" => Some(TokenKind::Super),
        "this" => Some(TokenKind::This),
        "true" => Some(TokenKind::True),
        "var" => Some(TokenKind::Var),
        "while" => Some(TokenKind::While),
        _ => None,
    }
}
