use thiserror::Error;

/// Keywords that mark a line as coming from a senior decision maker.
pub const DEFAULT_HOT_KEYWORDS: &[&str] = &["ceo", "head of", "founder", "cto", "president"];

/// Keywords that mark a line as a generic shared inbox.
pub const DEFAULT_COLD_KEYWORDS: &[&str] = &["general inquiries", "contact@", "info@"];

/// Controls how a list of values is overridden from its defaults.
#[derive(Debug, Clone, Default)]
pub enum ListOverride<T> {
    /// Use the built-in defaults.
    #[default]
    Default,
    /// Completely replace the defaults with these values.
    Replace(Vec<T>),
    /// Append these values to the defaults.
    Extend(Vec<T>),
}

impl<T: Clone> ListOverride<T> {
    /// Resolve this override against the given defaults.
    pub fn resolve(&self, defaults: &[T]) -> Vec<T> {
        match self {
            ListOverride::Default => defaults.to_vec(),
            ListOverride::Replace(v) => v.clone(),
            ListOverride::Extend(v) => {
                let mut result = defaults.to_vec();
                result.extend(v.iter().cloned());
                result
            }
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{list} keyword list contains an empty keyword")]
    EmptyKeyword { list: &'static str },
    #[error("{list} keyword list is empty")]
    EmptyList { list: &'static str },
}

/// Configuration for the lead extractor.
///
/// Only the scoring keyword lists are configurable. The email pattern and the
/// name/title/company pattern are fixed; changing them changes which leads are
/// produced.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Lowercase keywords checked first; any hit scores the line Hot.
    pub(crate) hot_keywords: Vec<String>,
    /// Lowercase keywords checked only when no hot keyword hit; any hit scores Cold.
    pub(crate) cold_keywords: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            hot_keywords: owned(DEFAULT_HOT_KEYWORDS),
            cold_keywords: owned(DEFAULT_COLD_KEYWORDS),
        }
    }
}

impl ExtractorConfig {
    pub fn hot_keywords(&self) -> &[String] {
        &self.hot_keywords
    }

    pub fn cold_keywords(&self) -> &[String] {
        &self.cold_keywords
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

/// Builder for [`ExtractorConfig`].
///
/// Keywords are lowercased in [`build()`](Self::build). Fails if a list
/// resolves to nothing or contains an empty keyword, since an empty keyword
/// would match every line.
#[derive(Debug, Clone, Default)]
pub struct ExtractorConfigBuilder {
    hot_keywords: ListOverride<String>,
    cold_keywords: ListOverride<String>,
}

impl ExtractorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hot_keywords(mut self, keywords: ListOverride<String>) -> Self {
        self.hot_keywords = keywords;
        self
    }

    pub fn cold_keywords(mut self, keywords: ListOverride<String>) -> Self {
        self.cold_keywords = keywords;
        self
    }

    /// Append keywords to the built-in hot list. A no-op for an empty vec.
    pub fn extend_hot_keywords(self, keywords: Vec<String>) -> Self {
        if keywords.is_empty() {
            return self;
        }
        self.hot_keywords(ListOverride::Extend(keywords))
    }

    /// Append keywords to the built-in cold list. A no-op for an empty vec.
    pub fn extend_cold_keywords(self, keywords: Vec<String>) -> Self {
        if keywords.is_empty() {
            return self;
        }
        self.cold_keywords(ListOverride::Extend(keywords))
    }

    pub fn build(self) -> Result<ExtractorConfig, ConfigError> {
        Ok(ExtractorConfig {
            hot_keywords: resolve_keywords("hot", &self.hot_keywords, DEFAULT_HOT_KEYWORDS)?,
            cold_keywords: resolve_keywords("cold", &self.cold_keywords, DEFAULT_COLD_KEYWORDS)?,
        })
    }
}

fn resolve_keywords(
    list: &'static str,
    overrides: &ListOverride<String>,
    defaults: &[&str],
) -> Result<Vec<String>, ConfigError> {
    let resolved: Vec<String> = overrides
        .resolve(&owned(defaults))
        .into_iter()
        .map(|k| k.to_lowercase())
        .collect();
    if resolved.is_empty() {
        return Err(ConfigError::EmptyList { list });
    }
    if resolved.iter().any(|k| k.trim().is_empty()) {
        return Err(ConfigError::EmptyKeyword { list });
    }
    Ok(resolved)
}
