use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Path used by the driver when no document is named on the command line.
pub const DEFAULT_INPUT_PATH: &str = "documents/sample_document.docx";

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub default_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print the decoded document text before the leads.
    pub show_text: Option<bool>,
    pub color: Option<bool>,
}

/// Keywords appended to the built-in scoring lists. Matching is against the
/// lowercased line, so entries should be lowercase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub extra_hot_keywords: Option<Vec<String>>,
    pub extra_cold_keywords: Option<Vec<String>>,
}

impl ConfigFile {
    pub fn default_path(&self) -> PathBuf {
        self.input
            .as_ref()
            .and_then(|i| i.default_path.as_deref())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH))
    }

    pub fn show_text(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.show_text)
            .unwrap_or(true)
    }

    pub fn color(&self) -> bool {
        self.output.as_ref().and_then(|o| o.color).unwrap_or(true)
    }

    pub fn extra_hot_keywords(&self) -> Vec<String> {
        self.scoring
            .as_ref()
            .and_then(|s| s.extra_hot_keywords.clone())
            .unwrap_or_default()
    }

    pub fn extra_cold_keywords(&self) -> Vec<String> {
        self.scoring
            .as_ref()
            .and_then(|s| s.extra_cold_keywords.clone())
            .unwrap_or_default()
    }
}

/// Platform config directory path: `<config_dir>/leadsift/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("leadsift").join("config.toml"))
}

/// Load config by cascading CWD `.leadsift.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".leadsift.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparseable config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        input: Some(InputConfig {
            default_path: overlay
                .input
                .as_ref()
                .and_then(|i| i.default_path.clone())
                .or_else(|| base.input.as_ref().and_then(|i| i.default_path.clone())),
        }),
        output: Some(OutputConfig {
            show_text: overlay
                .output
                .as_ref()
                .and_then(|o| o.show_text)
                .or_else(|| base.output.as_ref().and_then(|o| o.show_text)),
            color: overlay
                .output
                .as_ref()
                .and_then(|o| o.color)
                .or_else(|| base.output.as_ref().and_then(|o| o.color)),
        }),
        scoring: Some(ScoringConfig {
            extra_hot_keywords: overlay
                .scoring
                .as_ref()
                .and_then(|s| s.extra_hot_keywords.clone())
                .or_else(|| {
                    base.scoring
                        .as_ref()
                        .and_then(|s| s.extra_hot_keywords.clone())
                }),
            extra_cold_keywords: overlay
                .scoring
                .as_ref()
                .and_then(|s| s.extra_cold_keywords.clone())
                .or_else(|| {
                    base.scoring
                        .as_ref()
                        .and_then(|s| s.extra_cold_keywords.clone())
                }),
        }),
    }
}
