use std::io::{self, Write};

use crate::error::ScanError;

/// Sink for human-readable error lines.
pub trait Reporter {
    /// Report `message`, with an optional secondary `detail` such as an error
    /// chain or backtrace.
    fn report(&mut self, message: &str, detail: Option<&str>);

    fn report_scan_errors(&mut self, errors: &[ScanError]) {
        for error in errors {
            self.report(&error.to_string(), None);
        }
    }
}

/// Writes one line per report to any [`Write`] sink.
pub struct ConsoleReporter<W: Write> {
    sink: W,
}

impl ConsoleReporter<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, message: &str, detail: Option<&str>) {
        let written = match detail {
            Some(detail) => writeln!(self.sink, "Error '{message}' on {detail}"),
            None => writeln!(self.sink, "Error '{message}'"),
        };
        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to write error report");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanErrorKind;
    use crate::scanner::token::Span;

    fn captured(reporter: ConsoleReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).expect("reports are UTF-8")
    }

    #[test]
    fn reports_message() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.report("test", None);
        assert_eq!(captured(reporter), "Error 'test'\n");
    }

    #[test]
    fn reports_message_with_detail() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.report("test", Some("stacktrace"));
        let output = captured(reporter);
        assert!(output.contains("test"));
        assert!(output.contains("stacktrace"));
    }

    #[test]
    fn reports_each_scan_error_in_order() {
        let errors = vec![
            ScanError::new(ScanErrorKind::InvalidCharacter('@'), 1, Span::new(0, 1)),
            ScanError::new(ScanErrorKind::UnterminatedString, 3, Span::new(5, 4)),
        ];
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.report_scan_errors(&errors);
        assert_eq!(
            captured(reporter),
            "Error 'Invalid character '@' at line 1'\nError 'Unterminated string at line 3'\n"
        );
    }
}
