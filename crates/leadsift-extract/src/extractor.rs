use leadsift_core::Lead;

use crate::config::ExtractorConfig;
use crate::email::find_all_emails;
use crate::fields::{FieldSource, parse_fields};
use crate::scoring::score_line_with_config;

/// Counters collected while scanning a text. They describe the scan and never
/// influence which leads are produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Lines in the text. A final `'\n'` terminates the last line rather
    /// than starting an empty one.
    pub lines_scanned: usize,
    pub lines_with_email: usize,
    pub primary_matches: usize,
    pub fallback_matches: usize,
    pub general_inquiries: usize,
    /// Emails after the first on a line; only the first becomes a lead.
    pub dropped_extra_emails: usize,
}

/// Leads found in a text together with scan statistics.
#[derive(Debug, Clone, Default)]
pub struct LeadExtraction {
    pub leads: Vec<Lead>,
    pub stats: ScanStats,
}

/// A configurable line-oriented lead extractor.
///
/// Each line of input containing an email address yields exactly one
/// [`Lead`], in input order. Extraction is a pure function of the text and
/// the [`ExtractorConfig`].
#[derive(Debug, Clone)]
pub struct LeadExtractor {
    config: ExtractorConfig,
}

impl Default for LeadExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadExtractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self {
            config: ExtractorConfig::default(),
        }
    }

    /// Create an extractor with a custom configuration.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the current config.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract leads from a block of text.
    pub fn extract_leads(&self, text: &str) -> Vec<Lead> {
        self.extract_leads_with_stats(text).leads
    }

    /// Extract leads from a block of text, also returning scan statistics.
    pub fn extract_leads_with_stats(&self, text: &str) -> LeadExtraction {
        let mut stats = ScanStats::default();
        let mut leads = Vec::new();

        if !text.is_empty() {
            let body = text.strip_suffix('\n').unwrap_or(text);
            stats.lines_scanned = body.split('\n').count();
        }

        // Split on '\n' only; a trailing '\r' stays part of the line.
        for (index, line) in text.split('\n').enumerate() {
            let emails = find_all_emails(line);
            let Some((&email, rest)) = emails.split_first() else {
                tracing::trace!(line = index + 1, "no email, skipping line");
                continue;
            };
            stats.lines_with_email += 1;

            if !rest.is_empty() {
                stats.dropped_extra_emails += rest.len();
                tracing::warn!(
                    line = index + 1,
                    kept = email,
                    dropped = rest.len(),
                    "multiple emails on one line, keeping the first"
                );
            }

            let (lead, source) = self.build_lead(line, email);
            match source {
                FieldSource::Primary => stats.primary_matches += 1,
                FieldSource::Fallback => stats.fallback_matches += 1,
                FieldSource::GeneralInquiry => stats.general_inquiries += 1,
            }
            tracing::debug!(
                line = index + 1,
                email = %lead.email(),
                source = ?source,
                category = %lead.category(),
                "lead extracted"
            );
            leads.push(lead);
        }

        LeadExtraction { leads, stats }
    }

    /// Build the lead for a single line whose first email is `email`.
    fn build_lead(&self, line: &str, email: &str) -> (Lead, FieldSource) {
        let fields = parse_fields(line);
        let category = score_line_with_config(line, &self.config);
        let lead = Lead::new(fields.name, email, fields.company, fields.title, category);
        (lead, fields.source)
    }
}
