//! Reading the file under analysis.

use std::path::Path;

use errlens_core::config::InputConfig;
use errlens_core::errors::InputError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read `path` fully, enforcing the configured size limit.
///
/// Anything that keeps the file from being opened or read (missing, a
/// directory, no permission) is `NotFound`.
pub fn read_source(path: &Path, config: &InputConfig) -> Result<Vec<u8>, InputError> {
    let not_found = || InputError::NotFound {
        path: path.to_path_buf(),
    };

    let metadata = std::fs::metadata(path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "cannot stat source");
        not_found()
    })?;
    if !metadata.is_file() {
        return Err(not_found());
    }

    let max = config.effective_max_file_size();
    if metadata.len() > max {
        return Err(InputError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max,
        });
    }

    let mut bytes = std::fs::read(path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "cannot read source");
        not_found()
    })?;

    if config.effective_strip_bom() && bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }
    Ok(bytes)
}
