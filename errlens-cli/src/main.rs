//! `errlens <FILE>`: print whether one Java file shows basic and/or advanced
//! error handling.
//!
//! stdout carries exactly one line on success and nothing on failure;
//! diagnostics and logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use errlens_analysis::reporter::write_report;
use errlens_analysis::{analyze_file, JavaTreeProvider};
use errlens_core::config::{CliOverrides, ErrlensConfig, ReportFormat};
use errlens_core::errors::{AnalyzeError, ErrorCode, UsageError};
use errlens_core::tracing::init_tracing;

#[derive(Debug, Parser)]
#[command(
    name = "errlens",
    version,
    about = "Report basic and advanced error-handling patterns in a Java source file"
)]
struct Cli {
    /// Source file to analyze
    file: PathBuf,

    /// Output format: json (default), category or recommendation
    #[arg(long, value_name = "FORMAT")]
    format: Option<ReportFormat>,

    /// Config file to use instead of ./errlens.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Reject files larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_file_size: Option<u64>,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_file: self.config.clone(),
            max_file_size: self.max_file_size,
            format: self.format,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return exit_code(&UsageError::new(e.to_string()).into());
        }
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(code = err.error_code(), "analysis failed");
            eprintln!("{}", err.diagnostic());
            exit_code(&err)
        }
    }
}

fn run(cli: &Cli) -> Result<(), AnalyzeError> {
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = ErrlensConfig::load(&root, Some(&cli.overrides()))?;

    let verdict = analyze_file(&cli.file, &JavaTreeProvider::new(), &config.input)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &verdict, config.report.effective_format())
}

fn exit_code(err: &AnalyzeError) -> ExitCode {
    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
}
