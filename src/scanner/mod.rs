mod cursor;
pub mod lexer;
pub mod token;

use crate::error::ScanError;
pub use lexer::Scanner;
use token::Token;

/// Everything one scan pass produced.
///
/// The tokens are usable even when there are errors; callers that need a
/// clean stream use [`ScanOutput::into_result`].
#[derive(Debug)]
pub struct ScanOutput {
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
}

impl ScanOutput {
    pub(crate) fn new(tokens: Vec<Token>, errors: Vec<ScanError>) -> Self {
        Self { tokens, errors }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The diagnostics as display strings, in scan order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn into_result(self) -> Result<Vec<Token>, Vec<ScanError>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    /// Attach the scanned source to every diagnostic for labelled rendering.
    pub fn with_source_code(self, name: &str, source: &str) -> Self {
        Self {
            tokens: self.tokens,
            errors: self
                .errors
                .into_iter()
                .map(|e| e.with_source_code(name, source))
                .collect(),
        }
    }
}

/// Scan source code into tokens and lexical diagnostics.
pub fn scan(source: &str) -> ScanOutput {
    Scanner::new(source).scan()
}
