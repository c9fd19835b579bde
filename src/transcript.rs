/// Transcript loading: read event records from a JSON array or JSONL file.
use crate::record::EventRecord;
use std::path::{Path, PathBuf};

/// Load all records from `path`, preserving file order.
///
/// A file whose first non-whitespace byte is `[` is parsed as a single JSON
/// array and must be valid as a whole. Anything else is read as JSONL, where
/// blank lines are skipped and malformed lines are logged and skipped.
pub fn load_transcript(path: &Path) -> Result<Vec<EventRecord>, TranscriptError> {
    let contents = std::fs::read_to_string(path).map_err(|source| TranscriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if contents.trim_start().starts_with('[') {
        return serde_json::from_str(&contents).map_err(|source| TranscriptError::Parse {
            path: path.to_path_buf(),
            source,
        });
    }

    let mut records = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<EventRecord>(line) {
            Ok(r) => records.push(r),
            Err(e) => {
                tracing::warn!(line = idx + 1, error = %e, "skipping malformed transcript line");
            }
        }
    }

    tracing::debug!(path = %path.display(), records = records.len(), "loaded transcript");
    Ok(records)
}

#[derive(Debug)]
pub enum TranscriptError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscriptError::Io { path, source } => {
                write!(f, "failed to read transcript {}: {source}", path.display())
            }
            TranscriptError::Parse { path, source } => {
                write!(f, "failed to parse transcript {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for TranscriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranscriptError::Io { source, .. } => Some(source),
            TranscriptError::Parse { source, .. } => Some(source),
        }
    }
}
