use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use glox::dump::{self, DumpFormat};
use glox::report::{ConsoleReporter, Reporter};
use glox::{ExitStatus, GloxError, scanner, source};

#[derive(Parser, Debug)]
#[command(name = "glox", version, about = "A lexical scanner for the glox scripting language")]
struct Cli {
    /// Script to scan (omit for the interactive prompt)
    script: Option<PathBuf>,

    /// Print the token listing for the script
    #[arg(long)]
    dump_tokens: bool,

    /// Token listing format
    #[arg(long, value_enum, default_value_t = DumpFormat::Text)]
    format: DumpFormat,

    /// Render diagnostics with source labels
    #[arg(long)]
    fancy: bool,
}

fn run_file(cli: &Cli, path: &Path, reporter: &mut impl Reporter) -> Result<ExitStatus> {
    let source = source::read_source(path)?;
    let output = scanner::scan(&source);

    if cli.dump_tokens {
        print!("{}", dump::render(output.tokens(), cli.format)?);
    }

    if !output.has_errors() {
        return Ok(ExitStatus::Success);
    }

    let name = path.display().to_string();
    let count = output.errors().len();
    if cli.fancy {
        if let Err(errors) = output.with_source_code(&name, &source).into_result() {
            for error in errors {
                eprintln!("{:?}", miette::Report::new(error));
            }
        }
    } else {
        reporter.report_scan_errors(output.errors());
    }

    let summary = GloxError::Lexical { name, count };
    reporter.report(&summary.to_string(), None);
    Ok(summary.exit_status())
}

fn run(cli: &Cli, reporter: &mut impl Reporter) -> Result<ExitStatus> {
    match &cli.script {
        Some(path) => run_file(cli, path, reporter),
        None => {
            glox::repl::run_repl(cli.format, reporter)?;
            Ok(ExitStatus::Success)
        }
    }
}

fn main() -> ExitCode {
    glox::init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too
            let status = if e.use_stderr() {
                ExitStatus::Usage
            } else {
                ExitStatus::Success
            };
            let _ = e.print();
            return status.into();
        }
    };
    tracing::debug!(?cli, "parsed arguments");

    let mut reporter = ConsoleReporter::stderr();
    match run(&cli, &mut reporter) {
        Ok(status) => status.into(),
        Err(e) => match e.downcast_ref::<GloxError>() {
            Some(known) => {
                let cause = std::error::Error::source(known).map(ToString::to_string);
                reporter.report(&known.to_string(), cause.as_deref());
                known.exit_status().into()
            }
            None => {
                reporter.report(&e.to_string(), Some(&format!("{e:?}")));
                ExitStatus::Software.into()
            }
        },
    }
}
