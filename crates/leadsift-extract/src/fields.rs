use once_cell::sync::Lazy;
use regex::Regex;

use leadsift_core::NOT_AVAILABLE;

/// Line marker for shared inboxes; forces the placeholder identity below.
const GENERAL_INQUIRY_MARKER: &str = "general inquiries";
const GENERAL_INQUIRY_NAME: &str = "General Inquiry";

/// `<name>, <title> at|of <company>` terminated by `.`, ` Contact` or end of line.
///
/// Both lazy groups stop at the first place the rest can match, so
/// "Head of Sales at Acme" splits at "of", not "at".
static PRIMARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([\w\s]+),\s(.*?)\s(?:at|of)\s(.*?)(?:\.|\sContact|$)").unwrap()
});

/// Which extraction path produced a [`LeadFields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSource {
    /// The `name, title at company` pattern matched.
    Primary,
    /// No pattern match; only a name was taken from before the first comma.
    Fallback,
    /// The line mentions general inquiries; identity fields are placeholders.
    GeneralInquiry,
}

/// Name, title and company parsed from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadFields {
    pub name: String,
    pub title: String,
    pub company: String,
    pub source: FieldSource,
}

/// Parse the identity fields of a lead from its source line.
///
/// Never fails: a line the primary pattern cannot read degrades to the
/// fallback, and the general-inquiries override is applied last regardless of
/// which path ran. An empty name always becomes `"N/A"`.
pub fn parse_fields(line: &str) -> LeadFields {
    let mut fields = match parse_primary(line) {
        Some(fields) => fields,
        None => parse_fallback(line),
    };

    if line.to_lowercase().contains(GENERAL_INQUIRY_MARKER) {
        fields = LeadFields {
            name: GENERAL_INQUIRY_NAME.to_string(),
            title: NOT_AVAILABLE.to_string(),
            company: NOT_AVAILABLE.to_string(),
            source: FieldSource::GeneralInquiry,
        };
    }

    if fields.name.is_empty() {
        fields.name = NOT_AVAILABLE.to_string();
    }
    fields
}

fn parse_primary(line: &str) -> Option<LeadFields> {
    let caps = PRIMARY_RE.captures(line)?;
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

    Some(LeadFields {
        name: clean_name(group(1)),
        title: group(2).trim().to_string(),
        company: group(3).trim().to_string(),
        source: FieldSource::Primary,
    })
}

fn parse_fallback(line: &str) -> LeadFields {
    let before_comma = line.split(',').next().unwrap_or("");
    LeadFields {
        name: clean_name(before_comma),
        title: NOT_AVAILABLE.to_string(),
        company: NOT_AVAILABLE.to_string(),
        source: FieldSource::Fallback,
    }
}

fn clean_name(raw: &str) -> String {
    raw.replace('-', "").trim().to_string()
}
