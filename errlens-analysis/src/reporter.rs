//! Result reporter: one line per verdict.

use std::io::Write;

use errlens_core::config::ReportFormat;
use errlens_core::errors::AnalyzeError;

use crate::classifier::Verdict;

/// Render the report line, without the trailing newline.
pub fn render(verdict: &Verdict, format: ReportFormat) -> Result<String, AnalyzeError> {
    match format {
        ReportFormat::Json => serde_json::to_string(verdict).map_err(|e| AnalyzeError::Output {
            message: e.to_string(),
        }),
        ReportFormat::Category => Ok(verdict.category().to_string()),
        ReportFormat::Recommendation => Ok(verdict.category().recommendation().to_string()),
    }
}

/// Write the report line to `out`. The line is rendered in full before any
/// byte is written.
pub fn write_report<W: Write>(
    out: &mut W,
    verdict: &Verdict,
    format: ReportFormat,
) -> Result<(), AnalyzeError> {
    let mut line = render(verdict, format)?;
    line.push('\n');
    out.write_all(line.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| AnalyzeError::Output {
            message: e.to_string(),
        })
}
