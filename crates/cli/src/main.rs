// ABOUTME: CLI binary for readscore: batch readability scoring of web pages.
// ABOUTME: Loads urls.txt, scores each page in order, prints a report, and writes the CSV.

use std::path::Path;
use std::process::ExitCode;

use readscore_extract::Extractor;
use readscore_metrics::{Analyzer, Lang};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod pipeline;
mod report;
mod source;

/// Fixed input path, one URL per line.
const URL_FILE: &str = "urls.txt";

/// Fixed output path, overwritten on every run that scores at least one URL.
const CSV_FILE: &str = "readability_results.csv";

/// Initialize diagnostics to stderr so they never mix into the report on stdout.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let urls = match source::load_urls(Path::new(URL_FILE)) {
        Ok(urls) => urls,
        Err(err) => {
            // Fatal for the run, but the process still exits cleanly.
            error!(path = URL_FILE, error = %err, "could not load url list");
            return ExitCode::SUCCESS;
        }
    };

    let extractor = Extractor::new();
    let analyzer = Analyzer::new(Lang::EnUs);
    let records = pipeline::run(&extractor, &analyzer, &urls);

    print!("{}", report::render_report(&records));

    if !records.is_empty() {
        if let Err(err) = report::write_csv(Path::new(CSV_FILE), &records) {
            error!(path = CSV_FILE, error = %err, "could not write csv");
            return ExitCode::from(1);
        }
        println!("Results saved to {}", CSV_FILE);
    }

    ExitCode::SUCCESS
}
