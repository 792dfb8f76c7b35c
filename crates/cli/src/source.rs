// ABOUTME: URL source loader reading a newline-delimited URL list from a file.
// ABOUTME: Trims whitespace, drops blank lines, and preserves input order and duplicates.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors loading the URL list. Either variant aborts the whole run;
/// there is no meaningful partial run without URLs.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("url file not found: {path}")]
    NotFound { path: String },

    #[error("failed to read url file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Reads one URL per line from `path`, trimmed, blank lines skipped.
pub fn load_urls(path: &Path) -> Result<Vec<String>, SourceError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        let path = path.display().to_string();
        if source.kind() == io::ErrorKind::NotFound {
            SourceError::NotFound { path }
        } else {
            SourceError::Read { path, source }
        }
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
