use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::exit::ExitStatus;
use crate::scanner::token::Span;

// ============= Lexical errors (soft, with miette diagnostics) =============

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum NumberKind {
    Integer,
    Float,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    #[error("Unterminated string")]
    UnterminatedString,

    #[error("Unterminated comment")]
    UnterminatedComment,

    #[error("Invalid character '{0}'")]
    InvalidCharacter(char),

    #[error("{0} overflow")]
    NumberOverflow(NumberKind),

    #[error("Invalid number")]
    InvalidNumber,
}

/// A lexical problem found while scanning. Scanning continues past it.
#[derive(Error, Debug, Diagnostic)]
#[error("{kind} at line {line}")]
#[diagnostic(code(glox::scan))]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub line: usize,
    #[label("here")]
    pub span: SourceSpan,
    #[source_code]
    src: NamedSource<String>,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, line: usize, span: Span) -> Self {
        Self {
            kind,
            line,
            span: span.into(),
            src: NamedSource::new("input", String::new()),
        }
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(self, name: impl AsRef<str>, source: impl Into<String>) -> Self {
        Self {
            src: NamedSource::new(name, source.into()),
            ..self
        }
    }
}

// ============= Run-level errors (hard) =============

#[derive(Error, Debug)]
pub enum GloxError {
    #[error("The requested file '{}' was not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{count} lexical error(s) in '{name}'")]
    Lexical { name: String, count: usize },
}

impl GloxError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Self::FileNotFound { .. } => ExitStatus::NoInput,
            Self::Io { .. } => ExitStatus::IoError,
            Self::Lexical { .. } => ExitStatus::DataError,
        }
    }
}

// ============= Tests =============
