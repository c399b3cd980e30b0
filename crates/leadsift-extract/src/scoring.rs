use leadsift_core::Category;

use crate::config::ExtractorConfig;

/// Categorize a line by keyword presence, using the built-in keyword lists.
///
/// See [`score_line_with_config`].
pub fn score_line(line: &str) -> Category {
    score_line_with_config(line, &ExtractorConfig::default())
}

/// Categorize a line by keyword presence.
///
/// Works on the raw line, not on the parsed title. Hot keywords are checked
/// first and win outright; cold keywords are only consulted when no hot
/// keyword is present; anything else is Warm.
pub fn score_line_with_config(line: &str, config: &ExtractorConfig) -> Category {
    let lower = line.to_lowercase();

    if contains_any(&lower, &config.hot_keywords) {
        Category::Hot
    } else if contains_any(&lower, &config.cold_keywords) {
        Category::Cold
    } else {
        Category::Warm
    }
}

fn contains_any(haystack: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| haystack.contains(k.as_str()))
}
