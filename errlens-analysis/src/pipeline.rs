//! Single-file pipeline: read → parse → classify.

use std::path::Path;

use errlens_core::config::InputConfig;
use errlens_core::errors::AnalyzeError;

use crate::classifier::{classify, Verdict};
use crate::parsers::SyntaxTreeProvider;
use crate::source::read_source;

/// Analyze one file. Any failure stops the run before classification;
/// there is no partial verdict.
pub fn analyze_file(
    path: &Path,
    provider: &dyn SyntaxTreeProvider,
    input: &InputConfig,
) -> Result<Verdict, AnalyzeError> {
    let span = tracing::info_span!("analyze", path = %path.display(), language = provider.language());
    let _guard = span.enter();

    let known_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| provider.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)));
    if !known_extension {
        tracing::warn!("unexpected file extension, parsing as {} anyway", provider.language());
    }

    let source = read_source(path, input)?;
    tracing::debug!(bytes = source.len(), "source read");

    let tree = provider.parse(&source, path)?;
    Ok(classify(&tree))
}
