use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::dump::{self, DumpFormat};
use crate::report::Reporter;
use crate::scanner;

/// Run the interactive prompt. Each line is scanned on its own.
pub fn run_repl(format: DumpFormat, reporter: &mut impl Reporter) -> Result<()> {
    let mut editor = DefaultEditor::new().context("initialize line editor")?;

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                print!("{}", scan_line(&line, format, reporter)?);
            }
            Err(ReadlineError::Interrupted) => continue, // Ctrl-C
            Err(ReadlineError::Eof) => break,            // Ctrl-D
            Err(e) => return Err(e).context("read line"),
        }
    }
    Ok(())
}

/// Scan one prompt line, report its diagnostics and return the token listing.
fn scan_line(line: &str, format: DumpFormat, reporter: &mut impl Reporter) -> Result<String> {
    let output = scanner::scan(line);
    reporter.report_scan_errors(output.errors());
    dump::render(output.tokens(), format).context("render tokens")
}
