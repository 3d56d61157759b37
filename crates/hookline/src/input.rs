//! Reading selected files from disk.

use hookline_core::{InputFile, MediaKind};
use hookline_error::{AnalysisError, EngineResult};
use std::path::Path;
use tracing::{debug, instrument};

/// Read a file and classify it by extension.
///
/// Only images and videos are accepted; anything else is a validation failure.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub async fn load_input_file(path: impl AsRef<Path>) -> EngineResult<InputFile> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mime = mime_guess::from_path(path).first().ok_or_else(|| {
        AnalysisError::validation(format!("unsupported file type: {}", name))
    })?;
    let kind = MediaKind::from_mime(mime.essence_str()).ok_or_else(|| {
        AnalysisError::validation(format!("{} is not an image or video", name))
    })?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| AnalysisError::encoding(format!("could not read {}: {}", name, e)))?;
    debug!(size = bytes.len(), mime = %mime, "Loaded input file");

    Ok(InputFile::new(name, mime.essence_str(), kind, bytes))
}

/// Sum the on-disk sizes of `paths` and reject the selection above `max_total_bytes`.
///
/// Only metadata is read, so an oversized selection is refused before any file
/// content is loaded.
#[instrument(skip(paths), fields(count = paths.len()))]
pub async fn check_total_size<P: AsRef<Path>>(
    paths: &[P],
    max_total_bytes: u64,
) -> EngineResult<u64> {
    let mut total = 0u64;
    for path in paths {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await.map_err(|e| {
            AnalysisError::encoding(format!("could not read {}: {}", path.display(), e))
        })?;
        total = total.saturating_add(metadata.len());
    }

    if total > max_total_bytes {
        return Err(AnalysisError::validation(format!(
            "selected files total {} bytes, above the {} byte limit",
            total, max_total_bytes
        )));
    }
    debug!(total, "Selection within size limit");
    Ok(total)
}

/// Read several files, stopping at the first failure.
pub async fn load_input_files<P: AsRef<Path>>(paths: &[P]) -> EngineResult<Vec<InputFile>> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(load_input_file(path).await?);
    }
    Ok(files)
}
