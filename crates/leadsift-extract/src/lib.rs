pub mod config;
pub mod email;
pub mod extractor;
pub mod fields;
pub mod scoring;

pub use config::{ConfigError, ExtractorConfig, ExtractorConfigBuilder, ListOverride};
pub use email::{find_all_emails, find_first_email, is_email};
pub use extractor::{LeadExtraction, LeadExtractor, ScanStats};
pub use fields::{FieldSource, LeadFields, parse_fields};
pub use scoring::{score_line, score_line_with_config};
// Re-export domain types from core (canonical definitions live there)
pub use leadsift_core::{Category, Lead};

/// Extract leads from a block of text with the default configuration.
///
/// Pipeline, per `'\n'`-separated line:
/// 1. Find the first email address; lines without one are skipped
/// 2. Parse name/title/company with the primary pattern, else the fallback
/// 3. Apply the general-inquiries override
/// 4. Score the line as Hot, Cold or Warm from keywords
pub fn extract_leads(text: &str) -> Vec<Lead> {
    LeadExtractor::new().extract_leads(text)
}
