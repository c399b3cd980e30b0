use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use leadsift_core::ConfigFile;
use leadsift_core::config_file;
use leadsift_extract::{ExtractorConfigBuilder, LeadExtractor};

mod output;

use output::ColorMode;

/// Lead extractor - find contact leads in PDF, DOCX and CSV documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the PDF, .docx, or .csv file to scan (default: configured sample document)
    file_path: Option<PathBuf>,

    /// Path to output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Do not print the extracted document text
    #[arg(long)]
    no_text: bool,

    /// Path to a TOML config file (overrides .leadsift.toml and the platform config)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Resolve configuration: CLI flags > env vars > config files > defaults
    let config_path = cli
        .config
        .or_else(|| std::env::var("LEADSIFT_CONFIG").ok().map(PathBuf::from));
    let config = load_config(config_path)?;

    let file_path = cli.file_path.unwrap_or_else(|| config.default_path());
    let show_text = !cli.no_text && config.show_text();
    let use_color = !cli.no_color && cli.output.is_none() && config.color();

    run(
        &file_path,
        &config,
        show_text,
        ColorMode(use_color),
        cli.output,
    )
}

fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<ConfigFile> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            config_file::load_from_path(&path).ok_or_else(|| {
                anyhow::anyhow!("Config file at {} could not be parsed", path.display())
            })
        }
        None => Ok(config_file::load_config()),
    }
}

fn run(
    file_path: &Path,
    config: &ConfigFile,
    show_text: bool,
    color: ColorMode,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    if !file_path.exists() {
        anyhow::bail!("Sample file not found at {}", file_path.display());
    }

    let extractor_config = ExtractorConfigBuilder::new()
        .extend_hot_keywords(config.extra_hot_keywords())
        .extend_cold_keywords(config.extra_cold_keywords())
        .build()?;
    let extractor = LeadExtractor::with_config(extractor_config);

    let mut writer: Box<dyn Write> = if let Some(ref output_path) = output {
        Box::new(std::fs::File::create(output_path)?)
    } else {
        Box::new(std::io::stdout())
    };

    writeln!(writer, "Processing file: {}", file_path.display())?;

    // Decode failures are reported but not fatal: the sentinel text is
    // scanned like any other text and yields no leads.
    let text = match leadsift_ingest::extract_text(file_path) {
        Ok(text) => text,
        Err(e) => {
            output::print_decode_warning(&mut writer, &e, color)?;
            e.to_sentinel()
        }
    };

    if show_text {
        output::print_text(&mut writer, &text, color)?;
    } else {
        writeln!(writer)?;
    }

    let extraction = extractor.extract_leads_with_stats(&text);
    output::print_leads(&mut writer, &extraction.leads, color)?;
    output::print_summary(&mut writer, &extraction.leads, &extraction.stats, color)?;

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: ColorMode = ColorMode(false);

    fn run_to_string(input: &Path, out: &Path) -> anyhow::Result<String> {
        run(
            input,
            &ConfigFile::default(),
            true,
            PLAIN,
            Some(out.to_path_buf()),
        )?;
        Ok(std::fs::read_to_string(out)?)
    }

    #[test]
    fn missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.docx");
        let out = dir.path().join("out.txt");

        let err = run_to_string(&input, &out).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Sample file not found at {}", input.display())
        );
        assert!(!out.exists());
    }

    #[test]
    fn decode_failure_warns_and_reports_no_leads() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.docx");
        std::fs::write(&input, "not a zip archive").unwrap();
        let out = dir.path().join("out.txt");

        let written = run_to_string(&input, &out).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], format!("Processing file: {}", input.display()));
        assert!(
            lines[1].starts_with(&format!("WARNING: failed to decode DOCX {}", input.display())),
            "{}",
            lines[1]
        );
        assert_eq!(lines[3], "--- Extracted Text ---");
        assert!(lines[4].starts_with("Error processing DOCX "), "{}", lines[4]);
        assert!(
            written.contains("--- Extracted Leads ---\n[]\n-----------------------\n"),
            "{written}"
        );
        assert!(
            written.ends_with("\nFound 0 leads in 1 lines (0 hot, 0 warm, 0 cold)\n"),
            "{written}"
        );
    }

    #[test]
    fn csv_run_prints_text_leads_and_summary_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("leads.csv");
        std::fs::write(&input, "name,title,email\nJane Doe,CEO,jane@acme.com\n").unwrap();
        let out = dir.path().join("out.txt");

        let written = run_to_string(&input, &out).unwrap();
        let expected = format!(
            "Processing file: {}\n\
             \n\
             --- Extracted Text ---\n       \
             name  title          email\n\
             0  Jane Doe    CEO  jane@acme.com\n\
             ----------------------\n\
             \n\
             --- Extracted Leads ---\n\
             [\n  \
               {{\n    \
                 \"name\": \"0  Jane Doe    CEO  jane@acme.com\",\n    \
                 \"email\": \"jane@acme.com\",\n    \
                 \"company\": \"N/A\",\n    \
                 \"title\": \"N/A\",\n    \
                 \"phone\": \"N/A\",\n    \
                 \"location\": \"N/A\",\n    \
                 \"score\": 90,\n    \
                 \"category\": \"Hot\"\n  \
               }}\n\
             ]\n\
             -----------------------\n\
             \n\
             Found 1 leads in 2 lines (1 hot, 0 warm, 0 cold)\n",
            input.display()
        );
        assert_eq!(written, expected);
    }

    #[test]
    fn no_text_skips_document_banner() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("leads.csv");
        std::fs::write(&input, "email\nbo@li.dev\n").unwrap();
        let out = dir.path().join("out.txt");

        run(&input, &ConfigFile::default(), false, PLAIN, Some(out.clone())).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert!(!written.contains("--- Extracted Text ---"));
        assert!(written.contains("\"category\": \"Warm\""), "{written}");
    }
}
