//! Saving rendered runes as SVG files

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// MIME type of a downloaded rune
pub const MIME_TYPE: &str = "image/svg+xml;charset=utf-8";

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File name for a number's rune, e.g. `runa-1991-lines.svg`
pub fn file_name(number: u32) -> String {
    format!("runa-{}-lines.svg", number)
}

/// Inline the document as a base64 `data:` URI
pub fn data_uri(svg: &str) -> String {
    format!("data:{};base64,{}", MIME_TYPE, STANDARD.encode(svg))
}

/// Write the document into `dir`, creating it if needed.
///
/// Returns the path of the written file.
pub fn save(dir: &Path, number: u32, svg: &str) -> Result<PathBuf, DownloadError> {
    let path = dir.join(file_name(number));

    fs::create_dir_all(dir).map_err(|source| DownloadError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    fs::write(&path, svg).map_err(|source| DownloadError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = svg.len(), "saved rune");
    Ok(path)
}
