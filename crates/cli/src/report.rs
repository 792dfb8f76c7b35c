// ABOUTME: Console report rendering and CSV output for scored records.
// ABOUTME: Field order in both outputs follows the canonical FIELD_NAMES order.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use readscore_metrics::{ReadabilityRecord, FIELD_NAMES};

/// Width of the separator line between report blocks.
const SEPARATOR_WIDTH: usize = 20;

/// Renders the human-readable report: a header line, then one block per
/// record with a URL line, indented metric lines, and a separator.
pub fn render_report(records: &[ReadabilityRecord]) -> String {
    let mut out = String::from("Readability Scores:\n");
    for record in records {
        out.push_str(&format!("URL: {}\n", record.url));
        for (name, value) in record.metric_fields() {
            out.push_str(&format!("  {}: {}\n", name, value));
        }
        out.push_str(&"-".repeat(SEPARATOR_WIDTH));
        out.push('\n');
    }
    out
}

/// Writes the records as CSV: header row in canonical order, one data row
/// per record, in order. Overwrites any existing file at `path`.
pub fn write_csv(path: &Path, records: &[ReadabilityRecord]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "{}", FIELD_NAMES.join(","))?;
    for record in records {
        let row: Vec<String> = record
            .field_values()
            .iter()
            .map(|v| csv_field(v).into_owned())
            .collect();
        writeln!(writer, "{}", row.join(","))?;
    }

    writer.flush()
}

/// Quotes a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
