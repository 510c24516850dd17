use std::fmt::Write;

use crate::scanner::token::Token;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DumpFormat {
    /// One token per line
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Render a token listing.
pub fn render(tokens: &[Token], format: DumpFormat) -> serde_json::Result<String> {
    match format {
        DumpFormat::Text => {
            let mut out = String::new();
            for token in tokens {
                let _ = writeln!(out, "{token}");
            }
            Ok(out)
        }
        DumpFormat::Json => {
            let mut out = serde_json::to_string_pretty(tokens)?;
            out.push('\n');
            Ok(out)
        }
    }
}
