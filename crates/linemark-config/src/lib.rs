use linemark_engine::ConvertOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid include pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to expand include pattern {pattern:?}: {source}")]
    PatternExpansion {
        pattern: String,
        source: shellexpand::LookupError<std::env::VarError>,
    },

    #[error("Failed to expand include pattern: {0}")]
    GlobError(#[from] glob::GlobError),
}

fn default_extension() -> String {
    "html".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where rendered files are written. Output goes to stdout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// File extension for rendered files.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Drop blank lines instead of rendering them as rules.
    #[serde(default)]
    pub skip_blank_lines: bool,

    /// Glob patterns converted when no paths are given on the command line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            extension: default_extension(),
            skip_blank_lines: false,
            include: Vec::new(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded output path
        config.output_dir = config
            .output_dir
            .map(|dir| Self::expand_path(&dir).unwrap_or(dir));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/linemark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            skip_blank_lines: self.skip_blank_lines,
        }
    }

    /// Expands the `include` globs into a sorted, de-duplicated file list.
    pub fn resolve_includes(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut files = Vec::new();
        for pattern in &self.include {
            let expanded =
                shellexpand::full(pattern).map_err(|source| ConfigError::PatternExpansion {
                    pattern: pattern.clone(),
                    source,
                })?;
            let paths = glob::glob(&expanded).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            for path in paths {
                files.push(path?);
            }
        }
        files.sort();
        files.dedup();
        Ok(files)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
