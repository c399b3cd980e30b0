use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

/// Return the first email address on a line, if any.
///
/// The match is the leftmost one, so `"a@b.co, c@d.io"` yields `"a@b.co"`.
pub fn find_first_email(line: &str) -> Option<&str> {
    EMAIL_RE.find(line).map(|m| m.as_str())
}

/// Return every non-overlapping email address on a line, in order.
pub fn find_all_emails(line: &str) -> Vec<&str> {
    EMAIL_RE.find_iter(line).map(|m| m.as_str()).collect()
}

/// True if `candidate` is, in its entirety, one email address.
pub fn is_email(candidate: &str) -> bool {
    EMAIL_RE
        .find(candidate)
        .is_some_and(|m| m.start() == 0 && m.end() == candidate.len())
}
