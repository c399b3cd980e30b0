use std::io::Write;

use leadsift_core::{Category, Lead};
use leadsift_extract::ScanStats;
use leadsift_ingest::IngestError;
use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

const TEXT_BANNER: &str = "--- Extracted Text ---";
const TEXT_FOOTER: &str = "----------------------";
const LEADS_BANNER: &str = "--- Extracted Leads ---";
const LEADS_FOOTER: &str = "-----------------------";

fn banner(w: &mut dyn Write, label: &str, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", label.bold())
    } else {
        writeln!(w, "{}", label)
    }
}

/// Print the decoded document text between banners.
pub fn print_text(w: &mut dyn Write, text: &str, color: ColorMode) -> std::io::Result<()> {
    writeln!(w)?;
    banner(w, TEXT_BANNER, color)?;
    writeln!(w, "{}", text)?;
    banner(w, TEXT_FOOTER, color)?;
    writeln!(w)?;
    Ok(())
}

/// Print the leads as pretty JSON between banners. JSON is never colored.
pub fn print_leads(w: &mut dyn Write, leads: &[Lead], color: ColorMode) -> anyhow::Result<()> {
    banner(w, LEADS_BANNER, color)?;
    writeln!(w, "{}", serde_json::to_string_pretty(leads)?)?;
    banner(w, LEADS_FOOTER, color)?;
    Ok(())
}

/// Print a one-line count of leads per category plus scan statistics.
pub fn print_summary(
    w: &mut dyn Write,
    leads: &[Lead],
    stats: &ScanStats,
    color: ColorMode,
) -> std::io::Result<()> {
    let count = |c: Category| leads.iter().filter(|l| l.category() == c).count();
    let (hot, warm, cold) = (
        count(Category::Hot),
        count(Category::Warm),
        count(Category::Cold),
    );

    writeln!(w)?;
    if color.enabled() {
        writeln!(
            w,
            "Found {} leads in {} lines ({} {}, {} {}, {} {})",
            leads.len(),
            stats.lines_scanned,
            hot,
            "hot".red(),
            warm,
            "warm".yellow(),
            cold,
            "cold".blue()
        )?;
    } else {
        writeln!(
            w,
            "Found {} leads in {} lines ({} hot, {} warm, {} cold)",
            leads.len(),
            stats.lines_scanned,
            hot,
            warm,
            cold
        )?;
    }

    if stats.dropped_extra_emails > 0 {
        let note = format!(
            "({} additional emails ignored; one lead per line)",
            stats.dropped_extra_emails
        );
        if color.enabled() {
            writeln!(w, "{}", note.dimmed())?;
        } else {
            writeln!(w, "{}", note)?;
        }
    }
    Ok(())
}

/// Print a warning for a document that could not be decoded.
pub fn print_decode_warning(
    w: &mut dyn Write,
    error: &IngestError,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{} {}", "WARNING:".yellow(), error)
    } else {
        writeln!(w, "WARNING: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: ColorMode = ColorMode(false);

    fn render(f: impl FnOnce(&mut dyn Write) -> anyhow::Result<()>) -> String {
        let mut buf: Vec<u8> = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_between_banners() {
        let out = render(|w| Ok(print_text(w, "line one\n", PLAIN)?));
        assert_eq!(
            out,
            "\n--- Extracted Text ---\nline one\n\n----------------------\n\n"
        );
    }

    #[test]
    fn empty_leads_print_empty_array() {
        let out = render(|w| print_leads(w, &[], PLAIN));
        assert_eq!(
            out,
            "--- Extracted Leads ---\n[]\n-----------------------\n"
        );
    }

    #[test]
    fn summary_counts_categories() {
        let leads = vec![
            Lead::new("A", "a@x.io", "N/A", "N/A", Category::Hot),
            Lead::new("B", "b@x.io", "N/A", "N/A", Category::Cold),
            Lead::new("C", "c@x.io", "N/A", "N/A", Category::Hot),
        ];
        let stats = ScanStats {
            lines_scanned: 7,
            dropped_extra_emails: 2,
            ..Default::default()
        };
        let out = render(|w| Ok(print_summary(w, &leads, &stats, PLAIN)?));
        assert_eq!(
            out,
            "\nFound 3 leads in 7 lines (2 hot, 0 warm, 1 cold)\n\
             (2 additional emails ignored; one lead per line)\n"
        );
    }
}
