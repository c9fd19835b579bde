use crate::report::OutputFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level configuration loaded from transcript-metrics.toml.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// tracing-subscriber filter directive, used when RUST_LOG is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl MetricsConfig {
    /// Load config from `path`. A missing file yields the defaults; a file
    /// that exists but cannot be read or parsed is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };
        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_uses_defaults() {
        let cfg = MetricsConfig::load(Path::new("/nonexistent/transcript-metrics.toml")).unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Text);
        assert_eq!(cfg.logging.filter, "warn");
    }

    #[test]
    fn partial_file_merges_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transcript-metrics.toml");
        std::fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();
        let cfg = MetricsConfig::load(&path).unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert_eq!(cfg.logging.filter, "warn");
    }

    #[test]
    fn full_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transcript-metrics.toml");
        std::fs::write(
            &path,
            "[output]\nformat = \"text\"\n\n[logging]\nfilter = \"transcript_metrics=debug\"\n",
        )
        .unwrap();
        let cfg = MetricsConfig::load(&path).unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Text);
        assert_eq!(cfg.logging.filter, "transcript_metrics=debug");
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transcript-metrics.toml");
        std::fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();
        let err = MetricsConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
